//! The `careerhub mentors` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use careerhub_core::filter::{MentorFilter, SkillFilter};
use careerhub_core::model::Mentor;

use super::Context;

pub fn execute(ctx: &Context, search: Option<String>, skill: String) -> Result<()> {
    let store = ctx.open_store()?;
    let skill: SkillFilter = skill.parse()?;
    let filter = MentorFilter::new(search.as_deref(), skill);

    let mentors = filter.apply(&store.data().mentors);
    if mentors.is_empty() {
        println!("No mentors found. Try adjusting your search.");
        return Ok(());
    }

    print_mentors(&mentors);
    Ok(())
}

pub(crate) fn print_mentors(mentors: &[&Mentor]) {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Company", "Skills", "Email"]);
    for m in mentors {
        table.add_row(vec![
            Cell::new(&m.id),
            Cell::new(&m.name),
            Cell::new(&m.company),
            Cell::new(m.skills.join(", ")),
            Cell::new(&m.email),
        ]);
    }
    println!("{table}");
}
