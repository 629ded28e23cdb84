//! Job/student match scoring.
//!
//! The score is a weighted sum of two components:
//!
//! - department fit (weight 0.35): 1 if the job lists no departments or the
//!   student's department is among them, else 0
//! - verified skill coverage (weight 0.65): fraction of the job's required
//!   skills the student has *verified*, or 1 if the job requires none
//!
//! The result is rounded to the nearest whole percent with halves rounding up.

use serde::{Deserialize, Serialize};

use crate::model::{Job, Student};

/// Weight of the department component, in percent.
pub const DEPARTMENT_WEIGHT: u32 = 35;
/// Weight of the verified-skill component, in percent.
pub const SKILL_WEIGHT: u32 = 65;

/// The components behind a match score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    /// 1.0 if the department requirement is met, else 0.0.
    pub department: f64,
    /// Fraction of required skills the student has verified.
    pub skills: f64,
    /// Required skills the student has verified.
    pub matched_skills: Vec<String>,
    /// Required skills the student has not verified.
    pub missing_skills: Vec<String>,
    /// Final percentage in `[0, 100]`.
    pub percent: u32,
}

/// Compute the match percentage of `student` for `job`. An absent student
/// scores 0.
pub fn score(job: &Job, student: Option<&Student>) -> u32 {
    student.map_or(0, |s| breakdown(job, s).percent)
}

/// Compute the full match breakdown of `student` for `job`.
pub fn breakdown(job: &Job, student: &Student) -> MatchBreakdown {
    let department_met =
        job.departments.is_empty() || job.departments.iter().any(|d| *d == student.department);

    let (matched_skills, missing_skills): (Vec<String>, Vec<String>) = job
        .skills
        .iter()
        .cloned()
        .partition(|skill| student.is_verified(skill));

    // Work in integer hundredths so 67.5 rounds to 68 without float drift.
    let required = job.skills.len().max(1) as u64;
    let matched = if job.skills.is_empty() {
        1
    } else {
        matched_skills.len() as u64
    };
    let dept = u64::from(department_met);
    let numerator =
        u64::from(DEPARTMENT_WEIGHT) * dept * required + u64::from(SKILL_WEIGHT) * matched;
    let percent = ((2 * numerator + required) / (2 * required)) as u32;

    MatchBreakdown {
        department: dept as f64,
        skills: matched as f64 / required as f64,
        matched_skills,
        missing_skills,
        percent: percent.min(100),
    }
}

/// Pair each job with the student's match score, keeping the input order.
pub fn rank_jobs<'a, I>(jobs: I, student: Option<&Student>) -> Vec<(&'a Job, u32)>
where
    I: IntoIterator<Item = &'a Job>,
{
    jobs.into_iter().map(|job| (job, score(job, student))).collect()
}
