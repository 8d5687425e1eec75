use std::sync::Arc;

use chrono::NaiveDate;
use sqlx::postgres::PgPoolOptions;

use crate::{
    conf::settings,
    pkg::internal::adaptors::{
        projects::mutators::{CreateProjectEntry, ProjectMutator},
        resume::mutators::{CreateResumeEntry, ResumeMutator},
    },
    pkg::server::state::GetTxn,
    prelude::Result,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn sample_resume_entries() -> Vec<CreateResumeEntry> {
    vec![
        CreateResumeEntry {
            job_title: "Full-Stack Developer".into(),
            company: "Tech Innovators Inc.".into(),
            start_date: date(2020, 1, 1),
            end_date: Some(date(2022, 12, 31)),
            bullets: vec![
                "Developed scalable web applications using React and Node.js".into(),
                "Implemented RESTful APIs with Express and MongoDB".into(),
                "Led a team of 5 developers in agile sprints".into(),
            ],
        },
        CreateResumeEntry {
            job_title: "Software Engineer Intern".into(),
            company: "AI Solutions Ltd.".into(),
            start_date: date(2019, 6, 1),
            end_date: Some(date(2019, 12, 31)),
            bullets: vec![
                "Assisted in building AI models for natural language processing".into(),
                "Contributed to open-source projects using Python and TensorFlow".into(),
            ],
        },
    ]
}

pub fn sample_project_entries() -> Vec<CreateProjectEntry> {
    vec![
        CreateProjectEntry {
            title: "AI Chatbot Platform".into(),
            description:
                "A scalable chatbot platform using OpenAI API for natural language understanding."
                    .into(),
            technologies: vec![
                "Next.js".into(),
                "OpenAI API".into(),
                "Prisma".into(),
                "Postgres".into(),
            ],
            github_link: Some("https://github.com/yourusername/chatbot-platform".into()),
            live_link: Some("https://chatbot-platform.vercel.app".into()),
        },
        CreateProjectEntry {
            title: "E-Commerce Dashboard".into(),
            description: "A full-stack e-commerce admin dashboard with real-time analytics.".into(),
            technologies: vec![
                "React".into(),
                "Node.js".into(),
                "Express".into(),
                "MongoDB".into(),
            ],
            github_link: Some("https://github.com/yourusername/ecommerce-dashboard".into()),
            live_link: Some("https://ecommerce-dashboard.vercel.app".into()),
        },
    ]
}

// Re-running duplicates rows; nothing enforces uniqueness on the seed tables.
pub async fn apply() -> Result<()> {
    let pool = Arc::new(
        PgPoolOptions::new()
            .connect(&settings.database_url)
            .await?,
    );

    let mut tx = pool.begin_txn().await?;
    for entry in sample_resume_entries() {
        ResumeMutator::new(&mut tx).create(entry).await?;
    }
    for entry in sample_project_entries() {
        ProjectMutator::new(&mut tx).create(entry).await?;
    }
    tx.commit().await?;

    println!("Database has been seeded");
    Ok(())
}
