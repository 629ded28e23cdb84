//! Admin dashboard statistics and the marketplace summary report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Dataset, Student};

/// How many skills the report lists.
pub const TOP_SKILLS: usize = 5;

/// Collection sizes shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub students: usize,
    pub employers: usize,
    pub mentors: usize,
    pub jobs: usize,
}

impl Stats {
    pub fn of(data: &Dataset) -> Self {
        Self {
            students: data.students.len(),
            employers: data.employers.len(),
            mentors: data.mentors.len(),
            jobs: data.jobs.len(),
        }
    }

    /// Students, mentors, and employers combined.
    pub fn total_users(&self) -> usize {
        self.students + self.mentors + self.employers
    }
}

/// A skill and how many students list it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCount {
    pub skill: String,
    pub count: usize,
}

/// Number of postings per employer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerJobs {
    pub employer_id: String,
    pub name: String,
    pub jobs: usize,
}

/// The marketplace summary report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketReport {
    pub generated_at: DateTime<Utc>,
    pub stats: Stats,
    pub top_skills: Vec<SkillCount>,
    /// Verified skills summed over all students.
    pub verified_skills: usize,
    pub employer_jobs: Vec<EmployerJobs>,
}

impl MarketReport {
    pub fn generate(data: &Dataset) -> Self {
        Self::generate_at(data, Utc::now())
    }

    pub fn generate_at(data: &Dataset, generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at,
            stats: Stats::of(data),
            top_skills: top_skills(&data.students, TOP_SKILLS),
            verified_skills: data.students.iter().map(|s| s.verified.len()).sum(),
            employer_jobs: employer_jobs(data),
        }
    }

    /// Plain-text rendering of the report.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("=== Career & Skills Marketplace Report ===\n\n");
        out.push_str(&format!("Total Users: {}\n", self.stats.total_users()));
        out.push_str(&format!("- Students: {}\n", self.stats.students));
        out.push_str(&format!("- Mentors: {}\n", self.stats.mentors));
        out.push_str(&format!("- Employers: {}\n", self.stats.employers));
        out.push_str(&format!("\nActive Job Postings: {}\n", self.stats.jobs));

        out.push_str("\nTop Skills (Students):\n");
        for s in &self.top_skills {
            out.push_str(&format!("- {}: {}\n", s.skill, s.count));
        }

        out.push_str(&format!(
            "\nVerified Skills Count: {}\n",
            self.verified_skills
        ));
        out.push_str(&format!(
            "\nGenerated: {}\n",
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        out
    }
}

/// The `limit` most listed student skills, most frequent first. Ties keep
/// the order in which the skills were first seen.
pub fn top_skills(students: &[Student], limit: usize) -> Vec<SkillCount> {
    let mut counts: Vec<SkillCount> = Vec::new();
    for skill in students.iter().flat_map(|s| &s.skills) {
        match counts.iter().position(|c| &c.skill == skill) {
            Some(idx) => counts[idx].count += 1,
            None => counts.push(SkillCount {
                skill: skill.clone(),
                count: 1,
            }),
        }
    }
    // stable sort
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}

/// Job counts for every employer, in employer order.
pub fn employer_jobs(data: &Dataset) -> Vec<EmployerJobs> {
    data.employers
        .iter()
        .map(|e| EmployerJobs {
            employer_id: e.id.clone(),
            name: e.name.clone(),
            jobs: data.jobs_for_employer(e).count(),
        })
        .collect()
}
