//! The `careerhub profile` command.

use anyhow::Result;

use careerhub_core::model::split_list;
use careerhub_core::store::{ProfileChange, ProfileInput};

use super::Context;

pub fn execute(
    ctx: &Context,
    name: String,
    dept: String,
    skills: String,
    portfolio: Option<String>,
) -> Result<()> {
    let mut store = ctx.open_store()?;
    let skills = split_list(&skills);
    let portfolio: Vec<String> = portfolio
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .into_iter()
        .collect();

    let (change, id) = store.upsert_profile(ProfileInput {
        name,
        department: dept,
        skills,
        portfolio,
    })?;

    let student = store
        .data()
        .student(&id)
        .ok_or_else(|| anyhow::anyhow!("profile {id} missing after save"))?;
    match change {
        ProfileChange::Created => println!("Profile created successfully! ({id})"),
        ProfileChange::Updated => println!("Profile updated successfully! ({id})"),
    }
    println!("Name: {}", student.name);
    println!("Email: {}", student.email);
    println!("Department: {}", student.department);
    println!("Skills: {}", student.skills.join(", "));
    if !student.verified.is_empty() {
        println!("Verified: {}", student.verified.join(", "));
    }
    Ok(())
}
