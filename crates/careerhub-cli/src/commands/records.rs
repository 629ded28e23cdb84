//! The `careerhub list` and `careerhub show` admin commands.

use anyhow::Result;
use comfy_table::{Cell, Table};

use careerhub_core::error::StoreError;
use careerhub_core::model::{Dataset, RecordKind};

use super::mentors::print_mentors;
use super::Context;

/// Tag columns in the student table show at most this many entries.
const TAG_PREVIEW: usize = 3;

fn preview(items: &[String]) -> String {
    items
        .iter()
        .take(TAG_PREVIEW)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn not_found(kind: RecordKind, id: &str) -> StoreError {
    StoreError::NotFound {
        kind,
        id: id.to_string(),
    }
}

pub fn list(ctx: &Context, kind: String) -> Result<()> {
    let kind: RecordKind = kind.parse().map_err(|e: String| anyhow::anyhow!("{}", e))?;
    let store = ctx.open_store()?;
    let data = store.data();

    let count = match kind {
        RecordKind::Student => data.students.len(),
        RecordKind::Mentor => data.mentors.len(),
        RecordKind::Employer => data.employers.len(),
        RecordKind::Job => data.jobs.len(),
    };
    if count == 0 {
        println!("No {kind} records.");
        return Ok(());
    }

    match kind {
        RecordKind::Student => print_students(data),
        RecordKind::Mentor => {
            let mentors: Vec<_> = data.mentors.iter().collect();
            print_mentors(&mentors);
        }
        RecordKind::Employer => print_employers(data),
        RecordKind::Job => print_jobs(data),
    }
    Ok(())
}

fn print_students(data: &Dataset) {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Email", "Department", "Skills", "Verified"]);
    for s in &data.students {
        let department = if s.department.is_empty() {
            "N/A"
        } else {
            s.department.as_str()
        };
        table.add_row(vec![
            Cell::new(&s.id),
            Cell::new(&s.name),
            Cell::new(&s.email),
            Cell::new(department),
            Cell::new(preview(&s.skills)),
            Cell::new(preview(&s.verified)),
        ]);
    }
    println!("{table}");
}

fn print_employers(data: &Dataset) {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Jobs Posted"]);
    for e in &data.employers {
        table.add_row(vec![
            Cell::new(&e.id),
            Cell::new(&e.name),
            Cell::new(data.jobs_for_employer(e).count()),
        ]);
    }
    println!("{table}");
}

fn print_jobs(data: &Dataset) {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Title", "Company", "Departments", "Skills"]);
    for j in &data.jobs {
        table.add_row(vec![
            Cell::new(&j.id),
            Cell::new(&j.title),
            Cell::new(&j.company),
            Cell::new(j.departments.join(", ")),
            Cell::new(j.skills.join(", ")),
        ]);
    }
    println!("{table}");
}

pub fn show(ctx: &Context, kind: String, id: String) -> Result<()> {
    let kind: RecordKind = kind.parse().map_err(|e: String| anyhow::anyhow!("{}", e))?;
    let store = ctx.open_store()?;
    let data = store.data();

    match kind {
        RecordKind::Student => {
            let s = data.student(&id).ok_or_else(|| not_found(kind, &id))?;
            println!("Student: {}", s.name);
            println!("Email: {}", s.email);
            println!("Department: {}", s.department);
            println!("Skills: {}", s.skills.join(", "));
            println!("Verified: {}", s.verified.join(", "));
            if !s.portfolio.is_empty() {
                println!("Portfolio: {}", s.portfolio.join(", "));
            }
        }
        RecordKind::Mentor => {
            let m = data.mentor(&id).ok_or_else(|| not_found(kind, &id))?;
            println!("Mentor: {}", m.name);
            println!("Email: {}", m.email);
            println!("Company: {}", m.company);
            println!("Skills: {}", m.skills.join(", "));
        }
        RecordKind::Employer => {
            let e = data.employer(&id).ok_or_else(|| not_found(kind, &id))?;
            let titles: Vec<&str> = data.jobs_for_employer(e).map(|j| j.title.as_str()).collect();
            println!("Employer: {}", e.name);
            println!("Jobs Posted: {}", titles.len());
            println!("Job Titles: {}", titles.join(", "));
        }
        RecordKind::Job => {
            let j = data.job(&id).ok_or_else(|| not_found(kind, &id))?;
            println!("Job: {}", j.title);
            println!("Company: {}", j.company);
            println!("Departments: {}", j.departments.join(", "));
            println!("Required Skills: {}", j.skills.join(", "));
        }
    }
    Ok(())
}
