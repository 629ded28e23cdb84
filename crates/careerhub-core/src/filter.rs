//! Job board and mentor directory filters.
//!
//! Filters are plain values evaluated against the full collection on every
//! call. There is no index.

use std::fmt;
use std::str::FromStr;

use crate::model::{Job, Mentor};

/// Sentinel accepted by [`SkillFilter::from_str`] meaning "any skill".
pub const ALL_SKILLS: &str = "all";

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

fn normalize(term: Option<&str>) -> Option<String> {
    term.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}

/// Filter for the job board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    /// Department that must appear in the job's departments.
    pub department: Option<String>,
    /// Lowercased text that must appear in the title or company.
    text: Option<String>,
}

impl JobFilter {
    pub fn new(department: Option<&str>, text: Option<&str>) -> Self {
        Self {
            department: department
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(String::from),
            text: normalize(text),
        }
    }

    pub fn matches(&self, job: &Job) -> bool {
        let dept_ok = self
            .department
            .as_ref()
            .map_or(true, |d| job.departments.iter().any(|jd| jd == d));
        let text_ok = self
            .text
            .as_ref()
            .map_or(true, |t| contains_ci(&job.title, t) || contains_ci(&job.company, t));
        dept_ok && text_ok
    }

    /// Jobs matching the filter, in their stored order.
    pub fn apply<'a>(&self, jobs: &'a [Job]) -> Vec<&'a Job> {
        jobs.iter().filter(|j| self.matches(j)).collect()
    }
}

/// Exact-skill restriction for the mentor directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SkillFilter {
    #[default]
    All,
    Skill(String),
}

impl fmt::Display for SkillFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillFilter::All => write!(f, "{ALL_SKILLS}"),
            SkillFilter::Skill(s) => write!(f, "{s}"),
        }
    }
}

impl FromStr for SkillFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == ALL_SKILLS {
            Ok(SkillFilter::All)
        } else {
            Ok(SkillFilter::Skill(s.to_string()))
        }
    }
}

/// Filter for the mentor directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MentorFilter {
    /// Lowercased text that must appear in the name, company, or a skill.
    term: Option<String>,
    pub skill: SkillFilter,
}

impl MentorFilter {
    pub fn new(term: Option<&str>, skill: SkillFilter) -> Self {
        Self {
            term: normalize(term),
            skill,
        }
    }

    /// Search by term only, as used for mentor suggestions.
    pub fn search(term: &str) -> Self {
        Self::new(Some(term), SkillFilter::All)
    }

    pub fn matches(&self, mentor: &Mentor) -> bool {
        let term_ok = self.term.as_ref().map_or(true, |t| {
            contains_ci(&mentor.name, t)
                || contains_ci(&mentor.company, t)
                || mentor.skills.iter().any(|s| contains_ci(s, t))
        });
        let skill_ok = match &self.skill {
            SkillFilter::All => true,
            SkillFilter::Skill(skill) => mentor.skills.iter().any(|s| s == skill),
        };
        term_ok && skill_ok
    }

    pub fn apply<'a>(&self, mentors: &'a [Mentor]) -> Vec<&'a Mentor> {
        mentors.iter().filter(|m| self.matches(m)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_data;

    #[test]
    fn empty_job_filter_returns_all() {
        let data = seed_data();
        assert_eq!(JobFilter::default().apply(&data.jobs).len(), 3);
        assert_eq!(JobFilter::new(Some(""), Some("  ")).apply(&data.jobs).len(), 3);
    }

    #[test]
    fn job_filter_by_department() {
        let data = seed_data();
        let jobs = JobFilter::new(Some("Computer Science"), None).apply(&data.jobs);
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].id, "j2");
    }

    #[test]
    fn job_filter_text_is_case_insensitive_over_title_and_company() {
        let data = seed_data();
        let by_title = JobFilter::new(None, Some("ux")).apply(&data.jobs);
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, "j3");

        let by_company = JobFilter::new(None, Some("FINPULSE")).apply(&data.jobs);
        assert_eq!(by_company[0].id, "j2");
    }

    #[test]
    fn job_filter_is_a_conjunction() {
        let data = seed_data();
        assert!(JobFilter::new(Some("Marketing"), Some("data"))
            .apply(&data.jobs)
            .is_empty());
    }

    #[test]
    fn mentor_empty_term_and_all_returns_everyone() {
        let data = seed_data();
        let all = MentorFilter::new(Some(""), SkillFilter::All).apply(&data.mentors);
        assert_eq!(all.len(), data.mentors.len());
    }

    #[test]
    fn mentor_term_matches_name_company_or_skill() {
        let data = seed_data();
        assert_eq!(MentorFilter::search("priya").apply(&data.mentors).len(), 1);
        assert_eq!(MentorFilter::search("designhub").apply(&data.mentors)[0].id, "m3");
        // "seo" is a skill of m1 only
        assert_eq!(MentorFilter::search("seo").apply(&data.mentors)[0].id, "m1");
    }

    #[test]
    fn mentor_skill_filter_is_exact() {
        let data = seed_data();
        let sql = MentorFilter::new(None, "SQL".parse().unwrap()).apply(&data.mentors);
        assert_eq!(sql.len(), 1);
        assert_eq!(sql[0].id, "m2");

        let lower = MentorFilter::new(None, "sql".parse().unwrap()).apply(&data.mentors);
        assert!(lower.is_empty());
    }

    #[test]
    fn skill_filter_parses_sentinel() {
        assert_eq!("all".parse::<SkillFilter>().unwrap(), SkillFilter::All);
        assert_eq!("".parse::<SkillFilter>().unwrap(), SkillFilter::All);
        assert_eq!(SkillFilter::Skill("UX".into()).to_string(), "UX");
    }
}
