//! The `careerhub quiz` and `careerhub assess` commands.

use anyhow::Result;

use careerhub_core::assessment::{parse_answers, Quiz};

use super::mentors::print_mentors;
use super::Context;

pub fn quiz(skill: String) -> Result<()> {
    let skill = skill.trim();
    anyhow::ensure!(!skill.is_empty(), "skill must not be empty");

    let quiz = Quiz::for_skill(skill);
    println!("Assessment: {}", quiz.skill);
    for (i, q) in quiz.questions.iter().enumerate() {
        println!("\nQ{}. {}", i + 1, q.prompt);
        for (j, choice) in q.choices.iter().enumerate() {
            println!("  [{j}] {choice}");
        }
    }
    println!(
        "\nSubmit with: careerhub assess --skill \"{}\" --answers <i>,<i>,<i>",
        quiz.skill
    );
    Ok(())
}

pub fn execute(ctx: &Context, skill: String, answers: String) -> Result<()> {
    let answers = parse_answers(&answers)?;
    let mut store = ctx.open_store()?;
    let outcome = store.submit_assessment(&skill, &answers)?;

    if outcome.passed() {
        println!(
            "Passed! {}% ({}/{}): {} verified for {}.",
            outcome.grade.percent,
            outcome.grade.correct,
            outcome.grade.total,
            outcome.skill,
            outcome.student_id
        );
        if !outcome.newly_verified {
            println!("{} was already verified.", outcome.skill);
        }
    } else {
        println!(
            "Score {}% ({}/{}). Not passed. Find a mentor to bridge the gap.",
            outcome.grade.percent, outcome.grade.correct, outcome.grade.total
        );
        if outcome.suggested_mentors.is_empty() {
            println!("No mentors found for {}.", outcome.skill);
        } else {
            let mentors: Vec<_> = outcome.suggested_mentors.iter().collect();
            print_mentors(&mentors);
        }
    }
    Ok(())
}
