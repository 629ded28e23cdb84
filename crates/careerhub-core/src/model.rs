//! Core data model types for careerhub.
//!
//! These are the records held in the persisted document: students, mentors,
//! employers, job postings, and the optional signed-in session.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Decode `null` as the type's default, like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A student profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Sequential identifier (e.g. "s1").
    pub id: String,
    /// Display name.
    pub name: String,
    /// Academic department.
    #[serde(rename = "dept", default, deserialize_with = "null_as_default")]
    pub department: String,
    /// Skills the student claims to have.
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    /// Skills the student has passed an assessment for.
    #[serde(default, deserialize_with = "null_as_default")]
    pub verified: Vec<String>,
    /// Portfolio links.
    #[serde(default, deserialize_with = "null_as_default")]
    pub portfolio: Vec<String>,
    /// Contact email, used to match the signed-in session.
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
}

impl Student {
    /// Returns `true` if the student has passed an assessment for `skill`.
    pub fn is_verified(&self, skill: &str) -> bool {
        self.verified.iter().any(|s| s == skill)
    }

    /// Add `skill` to the verified list unless it is already present.
    ///
    /// Returns `true` if the list changed.
    pub fn verify(&mut self, skill: &str) -> bool {
        if self.is_verified(skill) {
            return false;
        }
        self.verified.push(skill.to_string());
        true
    }
}

/// A mentor offering help with a set of skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mentor {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
}

/// An employer. Usually derived from the company name on a job posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employer {
    pub id: String,
    pub name: String,
}

/// An internship or job posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    /// Free-text company name; not checked against the employer list.
    #[serde(default, deserialize_with = "null_as_default")]
    pub company: String,
    /// Departments the posting is aimed at. Empty means any department.
    #[serde(default, deserialize_with = "null_as_default")]
    pub departments: Vec<String>,
    /// Required skills. Empty means no requirement.
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
}

/// Role of the signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Student,
    Mentor,
    Employer,
    University,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Student => write!(f, "Student"),
            Role::Mentor => write!(f, "Mentor"),
            Role::Employer => write!(f, "Employer"),
            Role::University => write!(f, "University"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "mentor" => Ok(Role::Mentor),
            "employer" | "company" => Ok(Role::Employer),
            "university" | "admin" => Ok(Role::University),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// The simulated signed-in identity stored alongside the data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub email: String,
    pub role: Role,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remember_me: Option<bool>,
}

impl Session {
    /// A session with no optional fields set.
    pub fn new(email: impl Into<String>, role: Role, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            role,
            name: name.into(),
            university: None,
            student_id: None,
            remember_me: None,
        }
    }

    /// Short label shown for the signed-in user, e.g. "Student • jane".
    pub fn label(&self) -> String {
        let handle = self.email.split('@').next().unwrap_or_default();
        format!("{} • {}", self.role, handle)
    }
}

/// The whole persisted document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// The signed-in session, if any.
    #[serde(default)]
    pub auth: Option<Session>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub students: Vec<Student>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mentors: Vec<Mentor>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub employers: Vec<Employer>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub jobs: Vec<Job>,
}

impl Dataset {
    pub fn student(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    pub fn job(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    pub fn employer(&self, id: &str) -> Option<&Employer> {
        self.employers.iter().find(|e| e.id == id)
    }

    pub fn mentor(&self, id: &str) -> Option<&Mentor> {
        self.mentors.iter().find(|m| m.id == id)
    }

    /// Index of the student the current session refers to.
    ///
    /// A Student session selects the student with the same email; anything
    /// else (or no match) falls back to the first student.
    pub fn current_student_index(&self) -> Option<usize> {
        if let Some(auth) = &self.auth {
            if auth.role == Role::Student && !auth.email.is_empty() {
                if let Some(idx) = self.students.iter().position(|s| s.email == auth.email) {
                    return Some(idx);
                }
            }
        }
        if self.students.is_empty() {
            None
        } else {
            Some(0)
        }
    }

    /// The student the current session refers to.
    pub fn current_student(&self) -> Option<&Student> {
        self.current_student_index().map(|idx| &self.students[idx])
    }

    /// Jobs posted under the employer's name.
    pub fn jobs_for_employer<'a>(&'a self, employer: &'a Employer) -> impl Iterator<Item = &'a Job> {
        self.jobs.iter().filter(move |j| j.company == employer.name)
    }
}

/// Which collection a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Student,
    Mentor,
    Employer,
    Job,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Student => write!(f, "student"),
            RecordKind::Mentor => write!(f, "mentor"),
            RecordKind::Employer => write!(f, "employer"),
            RecordKind::Job => write!(f, "job"),
        }
    }
}

impl FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" | "students" => Ok(RecordKind::Student),
            "mentor" | "mentors" => Ok(RecordKind::Mentor),
            "employer" | "employers" => Ok(RecordKind::Employer),
            "job" | "jobs" => Ok(RecordKind::Job),
            other => Err(format!("unknown record kind: {other}")),
        }
    }
}

/// Split a comma-separated input into trimmed, non-empty entries.
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
