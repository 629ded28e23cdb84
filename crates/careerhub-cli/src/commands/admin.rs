//! Admin dashboard commands: `stats`, `report`, `delete`, `export`, `reset`.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use careerhub_core::model::RecordKind;
use careerhub_core::report::{MarketReport, Stats};

use super::Context;

pub fn stats(ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    let stats = Stats::of(store.data());

    let mut table = Table::new();
    table.set_header(vec!["Students", "Employers", "Mentors", "Jobs"]);
    table.add_row(vec![
        Cell::new(stats.students),
        Cell::new(stats.employers),
        Cell::new(stats.mentors),
        Cell::new(stats.jobs),
    ]);
    println!("{table}");
    Ok(())
}

pub fn report(ctx: &Context, format: String) -> Result<()> {
    let store = ctx.open_store()?;
    let report = MarketReport::generate(store.data());

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        _ => {
            print!("{}", report.to_text());

            let mut table = Table::new();
            table.set_header(vec!["Employer", "Jobs Posted"]);
            for e in &report.employer_jobs {
                table.add_row(vec![Cell::new(&e.name), Cell::new(e.jobs)]);
            }
            println!("\n{table}");
        }
    }
    Ok(())
}

pub fn delete(ctx: &Context, kind: String, id: String) -> Result<()> {
    let kind: RecordKind = kind.parse().map_err(|e: String| anyhow::anyhow!("{}", e))?;
    let mut store = ctx.open_store()?;
    store.delete(kind, &id)?;
    println!("Deleted {kind} {id}");
    Ok(())
}

pub fn export(ctx: &Context, output: Option<PathBuf>) -> Result<()> {
    let config = ctx.config()?;
    let store = ctx.open_store()?;
    let output = output.unwrap_or(config.export_file);

    if output.as_os_str() == "-" {
        println!("{}", store.export_json()?);
    } else {
        store.export_to(&output)?;
        println!("Data exported to {}", output.display());
    }
    Ok(())
}

pub fn reset(ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;
    store.reset()?;
    println!("All data reset to demo seed data.");
    Ok(())
}
