use askama::Template;

use crate::pkg::internal::adaptors::projects::spec::ProjectEntry;

pub struct Skill {
    pub name: &'static str,
    pub level: u8,
    pub category: &'static str,
}

/// Hardcoded skill chart shown on the marketing page; not stored in the db.
pub fn skill_chart() -> Vec<Skill> {
    vec![
        Skill { name: "React", level: 95, category: "Frontend" },
        Skill { name: "Next.js", level: 90, category: "Frontend" },
        Skill { name: "TypeScript", level: 88, category: "Language" },
        Skill { name: "Node.js", level: 85, category: "Backend" },
        Skill { name: "PostgreSQL", level: 80, category: "Database" },
        Skill { name: "Prisma", level: 85, category: "ORM" },
        Skill { name: "OpenAI API", level: 75, category: "AI/ML" },
        Skill { name: "Tailwind CSS", level: 92, category: "Styling" },
        Skill { name: "Python", level: 78, category: "Language" },
        Skill { name: "Docker", level: 70, category: "DevOps" },
    ]
}

pub fn skill_categories(skills: &[Skill]) -> Vec<&'static str> {
    let mut categories = vec!["All"];
    for skill in skills {
        if !categories.contains(&skill.category) {
            categories.push(skill.category);
        }
    }
    categories
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct Home {
    pub skills: Vec<Skill>,
    pub categories: Vec<&'static str>,
    pub projects: Vec<ProjectEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_are_unique_and_start_with_all() {
        let categories = skill_categories(&skill_chart());
        assert_eq!(categories[0], "All");
        let mut deduped = categories.clone();
        deduped.dedup();
        assert_eq!(categories, deduped);
        assert!(categories.contains(&"AI/ML"));
    }

    #[test]
    fn home_renders_without_projects() {
        let skills = skill_chart();
        let template = Home {
            categories: skill_categories(&skills),
            skills,
            projects: vec![],
        };
        let html = template.render().unwrap();
        assert!(html.contains("Full-Stack Developer"));
        assert!(html.contains("OpenAI API"));
    }
}
