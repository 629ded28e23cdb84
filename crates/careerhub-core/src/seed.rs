//! Demo seed data used when no document is stored, or the stored one is
//! unreadable.

use crate::model::{Dataset, Employer, Job, Mentor, Student};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// A fresh document with two students, three mentors, two employers, and
/// three job postings. No one is signed in.
pub fn seed_data() -> Dataset {
    Dataset {
        auth: None,
        students: vec![
            Student {
                id: "s1".into(),
                name: "Jane Doe".into(),
                department: "Marketing".into(),
                skills: strings(&["SEO", "Canva"]),
                verified: strings(&["SEO"]),
                portfolio: strings(&["https://behance.net/janed"]),
                email: "jane@uni.edu".into(),
            },
            Student {
                id: "s2".into(),
                name: "Alan T.".into(),
                department: "Computer Science".into(),
                skills: strings(&["Python", "SQL"]),
                verified: strings(&["SQL"]),
                portfolio: strings(&["https://github.com/alant"]),
                email: "alan@uni.edu".into(),
            },
        ],
        mentors: vec![
            Mentor {
                id: "m1".into(),
                name: "David Li".into(),
                skills: strings(&["Video Editing", "SEO"]),
                company: "MediaWorks".into(),
                email: "david@alumni.co".into(),
            },
            Mentor {
                id: "m2".into(),
                name: "Priya K".into(),
                skills: strings(&["SQL", "Python"]),
                company: "DataCo".into(),
                email: "priya@dataco.io".into(),
            },
            Mentor {
                id: "m3".into(),
                name: "Amira S".into(),
                skills: strings(&["Figma", "UX"]),
                company: "DesignHub".into(),
                email: "amira@designhub.com".into(),
            },
        ],
        employers: vec![
            Employer {
                id: "e1".into(),
                name: "Acme Corp".into(),
            },
            Employer {
                id: "e2".into(),
                name: "FinPulse".into(),
            },
        ],
        jobs: vec![
            Job {
                id: "j1".into(),
                title: "Social Media Intern".into(),
                company: "Acme Corp".into(),
                departments: strings(&["Marketing"]),
                skills: strings(&["SEO", "Video Editing"]),
            },
            Job {
                id: "j2".into(),
                title: "Data Analyst Intern".into(),
                company: "FinPulse".into(),
                departments: strings(&["Finance", "Computer Science"]),
                skills: strings(&["SQL", "Python"]),
            },
            Job {
                id: "j3".into(),
                title: "UX Intern".into(),
                company: "DesignHub".into(),
                departments: strings(&["Design"]),
                skills: strings(&["Figma"]),
            },
        ],
    }
}
