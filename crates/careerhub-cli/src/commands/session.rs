//! The `careerhub login`, `careerhub logout`, and `careerhub whoami` commands.

use anyhow::Result;

use careerhub_core::model::{Role, Session};

use super::Context;

pub fn login(
    ctx: &Context,
    email: String,
    role: String,
    name: String,
    university: Option<String>,
    student_id: Option<String>,
) -> Result<()> {
    let role: Role = role.parse().map_err(|e: String| anyhow::anyhow!("{}", e))?;
    let email = email.trim().to_string();
    anyhow::ensure!(email.contains('@'), "email must contain '@'");

    let mut session = Session::new(email, role, name.trim());
    if role == Role::Student {
        session.university = university.filter(|u| !u.trim().is_empty());
        session.student_id = student_id.filter(|s| !s.trim().is_empty());
    }

    let mut store = ctx.open_store()?;
    store.sign_in(session.clone())?;

    println!("Signed in: {}", session.label());
    println!("Name: {}", session.name);
    println!("Role: {}", session.role);
    if let Some(u) = &session.university {
        println!("University: {u}");
    }
    if let Some(id) = &session.student_id {
        println!("Student ID: {id}");
    }
    Ok(())
}

pub fn logout(ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;
    if store.data().auth.is_none() {
        println!("Not signed in.");
        return Ok(());
    }
    store.sign_out()?;
    println!("Signed out.");
    Ok(())
}

pub fn whoami(ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    let data = store.data();
    match &data.auth {
        Some(session) => println!("Signed in: {} ({})", session.label(), session.name),
        None => println!("Not signed in."),
    }
    match data.current_student() {
        Some(s) => println!("Current student: {} ({}, {})", s.name, s.id, s.email),
        None => println!("Current student: none"),
    }
    Ok(())
}
