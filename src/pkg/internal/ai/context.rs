use std::fmt::Write;

use chrono::NaiveDate;

use crate::pkg::internal::adaptors::{projects::spec::ProjectEntry, resume::spec::ResumeEntry};

fn fmt_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// Flattens the stored résumé and project rows into the system prompt handed
/// to the completion api.
pub fn build_context(resume: &[ResumeEntry], projects: &[ProjectEntry]) -> String {
    let mut ctx = String::from(
        "You are an AI assistant representing a full-stack developer. \
         You have access to the following information:\n\nRESUME DATA:\n",
    );
    for job in resume {
        let duration = match job.end_date {
            Some(end) => format!("{} - {}", fmt_date(job.start_date), fmt_date(end)),
            None => format!("{} - Present", fmt_date(job.start_date)),
        };
        let _ = writeln!(ctx, "Job Title: {}", job.job_title);
        let _ = writeln!(ctx, "Company: {}", job.company);
        let _ = writeln!(ctx, "Duration: {}", duration);
        let _ = writeln!(ctx, "Responsibilities: {}\n", job.bullets.join(", "));
    }
    ctx.push_str("PROJECT DATA:\n");
    for project in projects {
        let _ = writeln!(ctx, "Project: {}", project.title);
        let _ = writeln!(ctx, "Description: {}", project.description);
        let _ = writeln!(ctx, "Technologies: {}", project.technologies.join(", "));
        let _ = writeln!(
            ctx,
            "GitHub: {}",
            project.github_link.as_deref().unwrap_or("N/A")
        );
        let _ = writeln!(
            ctx,
            "Live Demo: {}\n",
            project.live_link.as_deref().unwrap_or("N/A")
        );
    }
    ctx.push_str(
        "Please answer questions about this person's experience, skills, and projects \
         in a conversational and engaging manner. Be helpful and provide specific \
         details when asked.",
    );
    ctx
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn job(title: &str, end_date: Option<NaiveDate>) -> ResumeEntry {
        ResumeEntry {
            id: 1,
            job_title: title.into(),
            company: "Tech Innovators Inc.".into(),
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            end_date,
            bullets: vec!["Shipped things".into(), "Reviewed code".into()],
            created_at: Utc::now(),
        }
    }

    fn project(github_link: Option<String>) -> ProjectEntry {
        ProjectEntry {
            id: 1,
            title: "AI Chatbot Platform".into(),
            description: "A chatbot platform.".into(),
            technologies: vec!["Rust".into(), "axum".into()],
            github_link,
            live_link: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn context_lists_every_job_and_project() {
        let resume = vec![job("Full-Stack Developer", None), job("Intern", None)];
        let projects = vec![project(Some("https://github.com/x/y".into()))];
        let ctx = build_context(&resume, &projects);
        assert!(ctx.contains("Job Title: Full-Stack Developer"));
        assert!(ctx.contains("Job Title: Intern"));
        assert!(ctx.contains("Project: AI Chatbot Platform"));
        assert!(ctx.contains("Technologies: Rust, axum"));
        assert!(ctx.contains("GitHub: https://github.com/x/y"));
    }

    #[test]
    fn open_ended_roles_read_as_present() {
        let resume = vec![job("Full-Stack Developer", None)];
        let ctx = build_context(&resume, &[]);
        assert!(ctx.contains("Duration: Jan 01, 2020 - Present"));
    }

    #[test]
    fn closed_roles_carry_both_dates() {
        let end = NaiveDate::from_ymd_opt(2022, 12, 31).unwrap();
        let resume = vec![job("Full-Stack Developer", Some(end))];
        let ctx = build_context(&resume, &[]);
        assert!(ctx.contains("Duration: Jan 01, 2020 - Dec 31, 2022"));
    }

    #[test]
    fn missing_links_fall_back_to_na() {
        let ctx = build_context(&[], &[project(None)]);
        assert!(ctx.contains("GitHub: N/A"));
        assert!(ctx.contains("Live Demo: N/A"));
    }

    #[test]
    fn responsibilities_join_with_commas() {
        let ctx = build_context(&[job("Dev", None)], &[]);
        assert!(ctx.contains("Responsibilities: Shipped things, Reviewed code"));
    }
}
