//! The `careerhub init` command.

use anyhow::Result;

use careerhub_core::config::{CONFIG_FILE, SAMPLE_CONFIG};
use careerhub_core::store::LoadSource;

use super::Context;

pub fn execute(ctx: &Context) -> Result<()> {
    if std::path::Path::new(CONFIG_FILE).exists() {
        println!("{CONFIG_FILE} already exists, skipping.");
    } else {
        std::fs::write(CONFIG_FILE, SAMPLE_CONFIG)?;
        println!("Created {CONFIG_FILE}");
    }

    let store = ctx.open_store()?;
    let path = store.backend().path_for(store.key());
    match store.source() {
        LoadSource::Seeded => println!("Seeded demo data in {}", path.display()),
        LoadSource::Stored => println!("{} already exists, skipping.", path.display()),
        LoadSource::Recovered => {
            // Persist the seed over the unreadable document.
            store.save()?;
            println!("Replaced unreadable data in {}", path.display());
        }
    }

    println!("\nNext steps:");
    println!("  1. Run: careerhub jobs");
    println!("  2. Run: careerhub login --email jane@uni.edu --role student --name Jane");
    println!("  3. Run: careerhub quiz --skill SQL");

    Ok(())
}
