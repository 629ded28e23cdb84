//! CLI integration tests using assert_cmd.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command isolated from the caller's config and environment: it runs in
/// `dir`, with `HOME` pointing there and the store under `dir/data`.
fn careerhub(dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("careerhub").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env_remove("CAREERHUB_STORE_DIR")
        .env("RUST_LOG", "off")
        .arg("--store")
        .arg(dir.join("data"));
    cmd
}

fn stored_document(dir: &Path) -> serde_json::Value {
    let raw =
        std::fs::read_to_string(dir.join("data").join("career-skills-marketplace-v1.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn help_output() {
    let dir = TempDir::new().unwrap();
    careerhub(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Skills marketplace"));
}

#[test]
fn version_output() {
    let dir = TempDir::new().unwrap();
    careerhub(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("careerhub"));
}

#[test]
fn init_creates_config_and_seed() {
    let dir = TempDir::new().unwrap();

    careerhub(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created careerhub.toml"))
        .stdout(predicate::str::contains("Seeded demo data"));

    assert!(dir.path().join("careerhub.toml").exists());
    let doc = stored_document(dir.path());
    assert_eq!(doc["students"].as_array().unwrap().len(), 2);
    assert!(doc["auth"].is_null());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    careerhub(dir.path()).arg("init").assert().success();

    careerhub(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn stats_on_fresh_store() {
    let dir = TempDir::new().unwrap();
    careerhub(dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Students"))
        .stdout(predicate::str::contains("3"));
}

#[test]
fn jobs_show_scores_for_first_student() {
    let dir = TempDir::new().unwrap();
    // Jane (Marketing, verified SEO) vs Social Media Intern: 35 + 65/2 = 67.5
    careerhub(dir.path())
        .arg("jobs")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 job(s) found"))
        .stdout(predicate::str::contains("68%"))
        .stdout(predicate::str::contains("Jane Doe (s1)"));
}

#[test]
fn jobs_filters() {
    let dir = TempDir::new().unwrap();
    careerhub(dir.path())
        .args(["jobs", "--dept", "Design"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 job(s) found"))
        .stdout(predicate::str::contains("UX Intern"));

    careerhub(dir.path())
        .args(["jobs", "--search", "nothing-like-this"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No jobs found"));
}

#[test]
fn score_breakdown_for_named_student() {
    let dir = TempDir::new().unwrap();
    careerhub(dir.path())
        .args(["score", "--job", "j2", "--student", "s2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Missing: Python"))
        .stdout(predicate::str::contains("Match: 68%"));
}

#[test]
fn score_unknown_job_fails() {
    let dir = TempDir::new().unwrap();
    careerhub(dir.path())
        .args(["score", "--job", "j99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: job not found: j99"));
}

#[test]
fn mentors_search_and_skill_filter() {
    let dir = TempDir::new().unwrap();
    careerhub(dir.path())
        .arg("mentors")
        .assert()
        .success()
        .stdout(predicate::str::contains("David Li"))
        .stdout(predicate::str::contains("Priya K"))
        .stdout(predicate::str::contains("Amira S"));

    careerhub(dir.path())
        .args(["mentors", "--skill", "Figma"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Amira S"))
        .stdout(predicate::str::contains("Priya K").not());

    careerhub(dir.path())
        .args(["mentors", "--search", "zzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No mentors found"));
}

#[test]
fn login_whoami_logout() {
    let dir = TempDir::new().unwrap();
    careerhub(dir.path())
        .args([
            "login",
            "--email",
            "alan@uni.edu",
            "--role",
            "student",
            "--name",
            "Alan",
            "--university",
            "Uni of Somewhere",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed in: Student • alan"));

    let doc = stored_document(dir.path());
    assert_eq!(doc["auth"]["role"], "Student");
    assert_eq!(doc["auth"]["university"], "Uni of Somewhere");

    careerhub(dir.path())
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current student: Alan T. (s2"));

    careerhub(dir.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed out."));
    assert!(stored_document(dir.path())["auth"].is_null());
}

#[test]
fn login_rejects_unknown_role() {
    let dir = TempDir::new().unwrap();
    careerhub(dir.path())
        .args(["login", "--email", "a@b.c", "--role", "wizard", "--name", "A"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown role"));
}

#[test]
fn assess_pass_verifies_once() {
    let dir = TempDir::new().unwrap();
    careerhub(dir.path())
        .args(["assess", "--skill", "Canva", "--answers", "0,1,2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Passed! 67%"));

    careerhub(dir.path())
        .args(["assess", "--skill", "Canva", "--answers", "0,1,1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already verified"));

    let doc = stored_document(dir.path());
    assert_eq!(doc["students"][0]["verified"], serde_json::json!(["SEO", "Canva"]));
}

#[test]
fn assess_fail_suggests_mentors() {
    let dir = TempDir::new().unwrap();
    careerhub(dir.path())
        .args(["assess", "--skill", "Python", "--answers", "2,-,0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not passed"))
        .stdout(predicate::str::contains("Priya K"));

    let doc = stored_document(dir.path());
    assert_eq!(doc["students"][0]["verified"], serde_json::json!(["SEO"]));
}

#[test]
fn quiz_prints_questions() {
    let dir = TempDir::new().unwrap();
    careerhub(dir.path())
        .args(["quiz", "--skill", "SQL"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Q1. What is a core concept of SQL?"))
        .stdout(predicate::str::contains("[1] Hello world / simple edit"));
}

#[test]
fn post_job_and_profile() {
    let dir = TempDir::new().unwrap();
    careerhub(dir.path())
        .args([
            "post-job",
            "--title",
            "Backend Intern",
            "--company",
            "Rustacea",
            "--departments",
            "Computer Science",
            "--skills",
            "Rust, SQL",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Internship published: Backend Intern (j4)"));

    careerhub(dir.path())
        .args([
            "profile",
            "--name",
            "Mia Wong",
            "--dept",
            "Computer Science",
            "--skills",
            "Rust",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile created successfully! (s3)"))
        .stdout(predicate::str::contains("miawong@uni.edu"));

    let doc = stored_document(dir.path());
    assert_eq!(doc["jobs"][0]["id"], "j4");
    assert_eq!(doc["jobs"][0]["skills"], serde_json::json!(["Rust", "SQL"]));
    assert_eq!(doc["employers"][2]["name"], "Rustacea");
    assert_eq!(doc["students"][2]["dept"], "Computer Science");
}

#[test]
fn delete_and_reset() {
    let dir = TempDir::new().unwrap();
    careerhub(dir.path())
        .args(["delete", "mentor", "m1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted mentor m1"));
    assert_eq!(stored_document(dir.path())["mentors"].as_array().unwrap().len(), 2);

    careerhub(dir.path())
        .args(["delete", "mentor", "m1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("mentor not found: m1"));

    careerhub(dir.path()).arg("reset").assert().success();
    assert_eq!(stored_document(dir.path())["mentors"].as_array().unwrap().len(), 3);
}

#[test]
fn export_writes_pretty_json() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("snapshot.json");
    careerhub(dir.path())
        .arg("export")
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Data exported"));

    let content = std::fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("{\n  \"auth\": null,"));
}

#[test]
fn report_text_and_json() {
    let dir = TempDir::new().unwrap();
    careerhub(dir.path())
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Users: 7"))
        .stdout(predicate::str::contains("Verified Skills Count: 2"))
        .stdout(predicate::str::contains("Acme Corp"));

    let output = careerhub(dir.path())
        .args(["report", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["stats"]["jobs"], 3);
}

#[test]
fn malformed_store_recovers_with_seed() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(data.join("career-skills-marketplace-v1.json"), "{ broken").unwrap();

    careerhub(dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Students"));
}

#[test]
fn missing_config_file_fails() {
    let dir = TempDir::new().unwrap();
    careerhub(dir.path())
        .args(["--config", "nope.toml", "stats"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn list_records_by_kind() {
    let dir = TempDir::new().unwrap();
    careerhub(dir.path())
        .args(["list", "students"])
        .assert()
        .success()
        .stdout(predicate::str::contains("jane@uni.edu"))
        .stdout(predicate::str::contains("Computer Science"));

    careerhub(dir.path())
        .args(["list", "employers"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jobs Posted"))
        .stdout(predicate::str::contains("FinPulse"));

    careerhub(dir.path())
        .args(["list", "jobs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Data Analyst Intern"));

    careerhub(dir.path())
        .args(["list", "mentors"])
        .assert()
        .success()
        .stdout(predicate::str::contains("priya@dataco.io"));

    careerhub(dir.path())
        .args(["list", "courses"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown record kind"));
}

#[test]
fn show_employer_lists_job_titles() {
    let dir = TempDir::new().unwrap();
    careerhub(dir.path())
        .args([
            "post-job",
            "--title",
            "Brand Intern",
            "--company",
            "Acme Corp",
        ])
        .assert()
        .success();

    careerhub(dir.path())
        .args(["show", "employer", "e1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Employer: Acme Corp"))
        .stdout(predicate::str::contains("Jobs Posted: 2"))
        .stdout(predicate::str::contains(
            "Job Titles: Brand Intern, Social Media Intern",
        ));
}

#[test]
fn show_student_and_job() {
    let dir = TempDir::new().unwrap();
    careerhub(dir.path())
        .args(["show", "student", "s2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Student: Alan T."))
        .stdout(predicate::str::contains("Verified: SQL"));

    careerhub(dir.path())
        .args(["show", "job", "j3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Required Skills: Figma"));

    careerhub(dir.path())
        .args(["show", "mentor", "m9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("mentor not found: m9"));
}

#[test]
fn export_failure_reports_path() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("taken");
    std::fs::create_dir_all(&target).unwrap();
    careerhub(dir.path())
        .arg("export")
        .arg("--output")
        .arg(&target)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to export to"))
        .stderr(predicate::str::contains("taken"));
}
