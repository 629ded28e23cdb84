//! The record store: one in-memory document persisted wholesale on every
//! mutation.
//!
//! Loading never fails on bad data. An absent document is replaced by seed
//! data (which is persisted), a malformed one by seed data that is not
//! persisted until the next mutation.

use std::path::Path;

use crate::assessment::{AssessmentOutcome, Quiz};
use crate::error::{StoreError, StoreResult};
use crate::filter::MentorFilter;
use crate::model::{Dataset, Employer, Job, RecordKind, Session, Student};
use crate::seed::seed_data;
use crate::storage::StorageBackend;

/// Storage key of the persisted document.
pub const DEFAULT_STORAGE_KEY: &str = "career-skills-marketplace-v1";

/// Where a loaded document came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Parsed from storage.
    Stored,
    /// Nothing was stored; seed data was written.
    Seeded,
    /// The stored document was unreadable; seed data is in use.
    Recovered,
}

/// Whether a profile save created a new student.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileChange {
    Created,
    Updated,
}

/// Fields of a student profile form.
#[derive(Debug, Clone, Default)]
pub struct ProfileInput {
    pub name: String,
    pub department: String,
    pub skills: Vec<String>,
    pub portfolio: Vec<String>,
}

/// Fields of a job posting form.
#[derive(Debug, Clone, Default)]
pub struct JobInput {
    pub title: String,
    pub company: String,
    pub departments: Vec<String>,
    pub skills: Vec<String>,
}

/// The record store over a storage backend.
pub struct RecordStore<B: StorageBackend> {
    backend: B,
    key: String,
    data: Dataset,
    source: LoadSource,
}

impl<B: StorageBackend> RecordStore<B> {
    /// Load the document under the default key.
    pub fn open(backend: B) -> StoreResult<Self> {
        Self::open_with_key(backend, DEFAULT_STORAGE_KEY)
    }

    /// Load the document under `key`, seeding it if absent.
    pub fn open_with_key(backend: B, key: &str) -> StoreResult<Self> {
        let (data, source) = match backend.get(key)? {
            None => {
                tracing::info!("no document under '{key}', seeding demo data");
                let seed = seed_data();
                backend.set(key, &serde_json::to_string(&seed)?)?;
                (seed, LoadSource::Seeded)
            }
            Some(raw) => match serde_json::from_str::<Dataset>(&raw) {
                Ok(data) => {
                    tracing::debug!(
                        "loaded '{key}': {} students, {} mentors, {} employers, {} jobs",
                        data.students.len(),
                        data.mentors.len(),
                        data.employers.len(),
                        data.jobs.len()
                    );
                    (data, LoadSource::Stored)
                }
                Err(e) => {
                    tracing::warn!("document under '{key}' is malformed ({e}), using seed data");
                    (seed_data(), LoadSource::Recovered)
                }
            },
        };

        Ok(Self {
            backend,
            key: key.to_string(),
            data,
            source,
        })
    }

    pub fn data(&self) -> &Dataset {
        &self.data
    }

    pub fn source(&self) -> LoadSource {
        self.source
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Persist the whole document.
    pub fn save(&self) -> StoreResult<()> {
        let json = serde_json::to_string(&self.data)?;
        self.backend.set(&self.key, &json)?;
        tracing::debug!("saved '{}'", self.key);
        Ok(())
    }

    /// Drop the stored document and reload, which reseeds.
    pub fn reset(&mut self) -> StoreResult<()> {
        self.backend.remove(&self.key)?;
        let fresh = seed_data();
        self.backend.set(&self.key, &serde_json::to_string(&fresh)?)?;
        self.data = fresh;
        self.source = LoadSource::Seeded;
        tracing::info!("reset '{}' to seed data", self.key);
        Ok(())
    }

    /// Pretty-printed snapshot of the whole document.
    pub fn export_json(&self) -> StoreResult<String> {
        Ok(serde_json::to_string_pretty(&self.data)?)
    }

    /// Write the pretty-printed snapshot to `path`.
    pub fn export_to(&self, path: &Path) -> StoreResult<()> {
        let json = self.export_json()?;
        let export_err = |source| StoreError::Export {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(export_err)?;
        }
        std::fs::write(path, json).map_err(export_err)?;
        tracing::info!("exported '{}' to {}", self.key, path.display());
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Session
    // -----------------------------------------------------------------------

    /// Replace the session wholesale.
    pub fn sign_in(&mut self, session: Session) -> StoreResult<()> {
        tracing::info!("signed in {} as {}", session.email, session.role);
        self.data.auth = Some(session);
        self.save()
    }

    pub fn sign_out(&mut self) -> StoreResult<()> {
        self.data.auth = None;
        self.save()
    }

    // -----------------------------------------------------------------------
    // Students
    // -----------------------------------------------------------------------

    /// Create or update the profile of the signed-in student.
    ///
    /// The email comes from the session, or is derived from the name when
    /// nobody is signed in. An existing student keeps their verified skills.
    pub fn upsert_profile(&mut self, input: ProfileInput) -> StoreResult<(ProfileChange, String)> {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(StoreError::InvalidInput("name is required".into()));
        }

        let email = match &self.data.auth {
            Some(auth) => auth.email.clone(),
            None => format!(
                "{}@uni.edu",
                name.split_whitespace().collect::<String>().to_lowercase()
            ),
        };

        let department = input.department.trim().to_string();
        let existing = self.data.students.iter().position(|s| s.email == email);
        let (change, id) = match existing {
            Some(idx) => {
                let student = &mut self.data.students[idx];
                student.name = name;
                student.department = department;
                student.skills = input.skills;
                student.portfolio = input.portfolio;
                (ProfileChange::Updated, student.id.clone())
            }
            None => {
                let id = format!("s{}", self.data.students.len() + 1);
                self.data.students.push(Student {
                    id: id.clone(),
                    name,
                    department,
                    skills: input.skills,
                    verified: Vec::new(),
                    portfolio: input.portfolio,
                    email,
                });
                (ProfileChange::Created, id)
            }
        };

        tracing::info!("profile {id} {change:?}");
        self.save()?;
        Ok((change, id))
    }

    // -----------------------------------------------------------------------
    // Jobs
    // -----------------------------------------------------------------------

    /// Publish a job at the front of the board, registering the company as
    /// an employer if it is new.
    pub fn post_job(&mut self, input: JobInput) -> StoreResult<Job> {
        let title = input.title.trim().to_string();
        let company = input.company.trim().to_string();
        if title.is_empty() {
            return Err(StoreError::InvalidInput("job title is required".into()));
        }
        if company.is_empty() {
            return Err(StoreError::InvalidInput("company is required".into()));
        }

        let job = Job {
            id: format!("j{}", self.data.jobs.len() + 1),
            title,
            company,
            departments: input.departments,
            skills: input.skills,
        };
        self.data.jobs.insert(0, job.clone());

        if !self.data.employers.iter().any(|e| e.name == job.company) {
            let employer = Employer {
                id: format!("e{}", self.data.employers.len() + 1),
                name: job.company.clone(),
            };
            tracing::info!("registered employer {} ({})", employer.name, employer.id);
            self.data.employers.push(employer);
        }

        tracing::info!("published job {} '{}'", job.id, job.title);
        self.save()?;
        Ok(job)
    }

    // -----------------------------------------------------------------------
    // Deletion
    // -----------------------------------------------------------------------

    /// Remove a record by id.
    pub fn delete(&mut self, kind: RecordKind, id: &str) -> StoreResult<()> {
        fn remove_by<T>(items: &mut Vec<T>, id: &str, get_id: impl Fn(&T) -> &str) -> bool {
            let before = items.len();
            items.retain(|item| get_id(item) != id);
            items.len() != before
        }

        let removed = match kind {
            RecordKind::Student => remove_by(&mut self.data.students, id, |s| s.id.as_str()),
            RecordKind::Mentor => remove_by(&mut self.data.mentors, id, |m| m.id.as_str()),
            RecordKind::Employer => remove_by(&mut self.data.employers, id, |e| e.id.as_str()),
            RecordKind::Job => remove_by(&mut self.data.jobs, id, |j| j.id.as_str()),
        };
        if !removed {
            return Err(StoreError::NotFound {
                kind,
                id: id.to_string(),
            });
        }

        tracing::info!("deleted {kind} {id}");
        self.save()
    }

    // -----------------------------------------------------------------------
    // Assessment
    // -----------------------------------------------------------------------

    /// Grade an assessment for the current student.
    ///
    /// A pass adds the skill to the student's verified list (once) and
    /// persists. A failure mutates nothing and suggests mentors for the skill.
    pub fn submit_assessment(
        &mut self,
        skill: &str,
        answers: &[Option<usize>],
    ) -> StoreResult<AssessmentOutcome> {
        let skill = skill.trim();
        if skill.is_empty() {
            return Err(StoreError::InvalidInput("skill is required".into()));
        }
        let idx = self
            .data
            .current_student_index()
            .ok_or(StoreError::NoCurrentStudent)?;

        let grade = Quiz::for_skill(skill).grade(answers);
        let student_id = self.data.students[idx].id.clone();

        if !grade.passed() {
            tracing::info!(
                "{student_id} scored {}% on {skill}, not passed",
                grade.percent
            );
            let suggested_mentors = MentorFilter::search(skill)
                .apply(&self.data.mentors)
                .into_iter()
                .cloned()
                .collect();
            return Ok(AssessmentOutcome {
                skill: skill.to_string(),
                student_id,
                grade,
                newly_verified: false,
                suggested_mentors,
            });
        }

        let newly_verified = self.data.students[idx].verify(skill);
        tracing::info!("{student_id} passed {skill} with {}%", grade.percent);
        if newly_verified {
            self.save()?;
        }

        Ok(AssessmentOutcome {
            skill: skill.to_string(),
            student_id,
            grade,
            newly_verified,
            suggested_mentors: Vec::new(),
        })
    }
}
