//! Command-line interface for the careerhub skills marketplace.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "careerhub",
    version,
    about = "Skills marketplace for students, mentors, and employers"
)]
struct Cli {
    /// Directory holding the marketplace document (overrides config)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter config and seed the store
    Init,

    /// Show collection counts
    Stats,

    /// Print the marketplace summary report
    Report {
        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// List job postings with match scores for the current student
    Jobs {
        /// Only jobs aimed at this department
        #[arg(long)]
        dept: Option<String>,

        /// Case-insensitive text to find in the title or company
        #[arg(long)]
        search: Option<String>,
    },

    /// Show the match breakdown of one job for a student
    Score {
        /// Job id (e.g. "j2")
        #[arg(long)]
        job: String,

        /// Student id; defaults to the current student
        #[arg(long)]
        student: Option<String>,
    },

    /// Search the mentor directory
    Mentors {
        /// Case-insensitive text to find in name, company, or skills
        #[arg(long)]
        search: Option<String>,

        /// Exact skill the mentor must have, or "all"
        #[arg(long, default_value = "all")]
        skill: String,
    },

    /// Sign in as a user
    Login {
        #[arg(long)]
        email: String,

        /// Student, Mentor, Employer, or University
        #[arg(long)]
        role: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        university: Option<String>,

        #[arg(long)]
        student_id: Option<String>,
    },

    /// Sign out
    Logout,

    /// Show the signed-in user and current student
    Whoami,

    /// Create or update the current student's profile
    Profile {
        #[arg(long)]
        name: String,

        #[arg(long)]
        dept: String,

        /// Comma-separated skills
        #[arg(long, default_value = "")]
        skills: String,

        /// Portfolio link
        #[arg(long)]
        portfolio: Option<String>,
    },

    /// Publish a job posting
    PostJob {
        #[arg(long)]
        title: String,

        #[arg(long)]
        company: String,

        /// Comma-separated departments
        #[arg(long, default_value = "")]
        departments: String,

        /// Comma-separated required skills
        #[arg(long, default_value = "")]
        skills: String,
    },

    /// Print the assessment questions for a skill
    Quiz {
        #[arg(long)]
        skill: String,
    },

    /// Submit assessment answers for the current student
    Assess {
        #[arg(long)]
        skill: String,

        /// Comma-separated answer indices, "-" for unanswered (e.g. "0,1,-")
        #[arg(long)]
        answers: String,
    },

    /// List every record of one kind
    List {
        /// students, mentors, employers, or jobs
        kind: String,
    },

    /// Show one record
    Show {
        /// student, mentor, employer, or job
        kind: String,

        /// Record id
        id: String,
    },

    /// Delete a record
    Delete {
        /// student, mentor, employer, or job
        kind: String,

        /// Record id
        id: String,
    },

    /// Write a pretty-printed JSON snapshot of all data
    Export {
        /// Output file; "-" for stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Discard all data and restore the demo seed data
    Reset,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("careerhub=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let ctx = commands::Context::new(cli.store, cli.config);

    let result = match cli.command {
        Commands::Init => commands::init::execute(&ctx),
        Commands::Stats => commands::admin::stats(&ctx),
        Commands::Report { format } => commands::admin::report(&ctx, format),
        Commands::Jobs { dept, search } => commands::jobs::list(&ctx, dept, search),
        Commands::Score { job, student } => commands::jobs::score(&ctx, job, student),
        Commands::Mentors { search, skill } => commands::mentors::execute(&ctx, search, skill),
        Commands::Login {
            email,
            role,
            name,
            university,
            student_id,
        } => commands::session::login(&ctx, email, role, name, university, student_id),
        Commands::Logout => commands::session::logout(&ctx),
        Commands::Whoami => commands::session::whoami(&ctx),
        Commands::Profile {
            name,
            dept,
            skills,
            portfolio,
        } => commands::profile::execute(&ctx, name, dept, skills, portfolio),
        Commands::PostJob {
            title,
            company,
            departments,
            skills,
        } => commands::jobs::post(&ctx, title, company, departments, skills),
        Commands::Quiz { skill } => commands::assess::quiz(skill),
        Commands::Assess { skill, answers } => commands::assess::execute(&ctx, skill, answers),
        Commands::List { kind } => commands::records::list(&ctx, kind),
        Commands::Show { kind, id } => commands::records::show(&ctx, kind, id),
        Commands::Delete { kind, id } => commands::admin::delete(&ctx, kind, id),
        Commands::Export { output } => commands::admin::export(&ctx, output),
        Commands::Reset => commands::admin::reset(&ctx),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
