//! The `careerhub jobs`, `careerhub score`, and `careerhub post-job` commands.

use anyhow::{Context as _, Result};
use comfy_table::{Cell, Table};

use careerhub_core::filter::JobFilter;
use careerhub_core::matching::{breakdown, rank_jobs};
use careerhub_core::model::split_list;
use careerhub_core::store::JobInput;

use super::Context;

pub fn list(ctx: &Context, dept: Option<String>, search: Option<String>) -> Result<()> {
    let store = ctx.open_store()?;
    let data = store.data();
    let student = data.current_student();

    let filter = JobFilter::new(dept.as_deref(), search.as_deref());
    let jobs = filter.apply(&data.jobs);

    println!("{} job(s) found", jobs.len());
    if jobs.is_empty() {
        println!("No jobs found matching your criteria. Try adjusting your filters.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Title", "Company", "Departments", "Skills", "Match"]);
    for (job, score) in rank_jobs(jobs, student) {
        table.add_row(vec![
            Cell::new(&job.id),
            Cell::new(&job.title),
            Cell::new(&job.company),
            Cell::new(job.departments.join(", ")),
            Cell::new(job.skills.join(", ")),
            Cell::new(format!("{score}%")),
        ]);
    }
    println!("{table}");

    if let Some(s) = student {
        println!("Scores for {} ({})", s.name, s.id);
    }

    Ok(())
}

pub fn score(ctx: &Context, job_id: String, student_id: Option<String>) -> Result<()> {
    let store = ctx.open_store()?;
    let data = store.data();

    let job = data
        .job(&job_id)
        .with_context(|| format!("job not found: {job_id}"))?;
    let student = match &student_id {
        Some(id) => data
            .student(id)
            .with_context(|| format!("student not found: {id}"))?,
        None => data
            .current_student()
            .context("no students in the marketplace")?,
    };

    let b = breakdown(job, student);
    println!("{} ({}) for {} ({})", job.title, job.id, student.name, student.id);
    println!("  Department: {}", if b.department > 0.0 { "match" } else { "no match" });
    println!(
        "  Verified skills: {}/{}",
        b.matched_skills.len(),
        job.skills.len()
    );
    if !b.missing_skills.is_empty() {
        println!("  Missing: {}", b.missing_skills.join(", "));
    }
    println!("Match: {}%", b.percent);

    Ok(())
}

pub fn post(
    ctx: &Context,
    title: String,
    company: String,
    departments: String,
    skills: String,
) -> Result<()> {
    let mut store = ctx.open_store()?;
    let job = store.post_job(JobInput {
        title,
        company,
        departments: split_list(&departments),
        skills: split_list(&skills),
    })?;
    println!("Internship published: {} ({}) at {}", job.title, job.id, job.company);
    Ok(())
}
