//! Skill taxonomy — groups technical skills under display categories.
//!
//! Static lookup table with a lazily built inverse index (lower-cased skill → category).
//! Exact hits go through the index; anything else falls back to a containment scan in
//! taxonomy order, the same loose relation the keyword matcher uses.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::analysis::matcher::tokens_related;

pub const OTHER_CATEGORY: &str = "Other";

const TAXONOMY: &[(&str, &[&str])] = &[
    (
        "Programming Languages",
        &[
            "JavaScript", "Python", "Java", "C++", "TypeScript", "Go", "Rust", "Swift", "C#", "PHP",
        ],
    ),
    (
        "Web Technologies",
        &[
            "React", "Node.js", "HTML/CSS", "Vue.js", "Angular", "Express.js", "Next.js", "Django",
            "Flask",
        ],
    ),
    (
        "Databases",
        &[
            "MySQL", "PostgreSQL", "MongoDB", "Redis", "SQLite", "Firebase", "Oracle", "SQL Server",
        ],
    ),
    (
        "Cloud & DevOps",
        &[
            "AWS", "Docker", "Kubernetes", "Azure", "GCP", "Jenkins", "Git", "CI/CD", "Terraform",
        ],
    ),
    (
        "Tools & Frameworks",
        &[
            "Git", "Linux", "Figma", "Photoshop", "Jira", "Slack", "VS Code", "IntelliJ", "Postman",
        ],
    ),
    (
        "Data Science & AI",
        &[
            "Machine Learning", "TensorFlow", "PyTorch", "Pandas", "NumPy", "Scikit-learn",
            "Data Analysis", "Deep Learning",
        ],
    ),
];

/// First category wins for skills listed twice ("Git").
static SKILL_INDEX: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    let mut index = HashMap::new();
    for (category, skills) in TAXONOMY {
        for skill in *skills {
            index.entry(skill.to_lowercase()).or_insert(*category);
        }
    }
    index
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<String>,
}

pub fn category_for(skill: &str) -> Option<&'static str> {
    let needle = skill.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    if let Some(category) = SKILL_INDEX.get(&needle) {
        return Some(*category);
    }
    TAXONOMY
        .iter()
        .find(|(_, known)| {
            known
                .iter()
                .any(|k| tokens_related(&needle, &k.to_lowercase()))
        })
        .map(|(category, _)| *category)
}

/// Groups in first-appearance order; "Other" last, only when something landed there.
pub fn categorize_skills(technical: &[String]) -> Vec<SkillGroup> {
    let mut groups: Vec<SkillGroup> = Vec::new();
    let mut other = Vec::new();

    for skill in technical {
        let Some(category) = category_for(skill) else {
            other.push(skill.clone());
            continue;
        };
        match groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.skills.push(skill.clone()),
            None => groups.push(SkillGroup {
                category: category.to_string(),
                skills: vec![skill.clone()],
            }),
        }
    }

    if !other.is_empty() {
        groups.push(SkillGroup {
            category: OTHER_CATEGORY.to_string(),
            skills: other,
        });
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_lookup_is_case_insensitive() {
        assert_eq!(category_for("rust"), Some("Programming Languages"));
        assert_eq!(category_for("POSTGRESQL"), Some("Databases"));
        assert_eq!(category_for("  Docker "), Some("Cloud & DevOps"));
    }

    #[test]
    fn test_duplicate_taxonomy_entry_resolves_to_first_category() {
        assert_eq!(category_for("Git"), Some("Cloud & DevOps"));
    }

    #[test]
    fn test_containment_fallback() {
        assert_eq!(category_for("React Native"), Some("Web Technologies"));
        assert_eq!(category_for("Kubernetes (EKS)"), Some("Cloud & DevOps"));
    }

    #[test]
    fn test_unknown_and_blank_skills() {
        assert_eq!(category_for("Underwater Basket Weaving"), None);
        assert_eq!(category_for("   "), None);
    }

    #[test]
    fn test_groups_keep_first_appearance_order() {
        let groups = categorize_skills(&skills(&[
            "Docker", "Rust", "Woodworking", "AWS", "Python", "MongoDB",
        ]));

        let categories: Vec<&str> = groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(
            categories,
            vec!["Cloud & DevOps", "Programming Languages", "Databases", OTHER_CATEGORY]
        );
        assert_eq!(groups[0].skills, vec!["Docker", "AWS"]);
        assert_eq!(groups[1].skills, vec!["Rust", "Python"]);
        assert_eq!(groups[3].skills, vec!["Woodworking"]);
    }

    #[test]
    fn test_no_other_group_when_everything_categorized() {
        let groups = categorize_skills(&skills(&["Figma", "Jira"]));
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].category, "Tools & Frameworks");
    }

    #[test]
    fn test_empty_input() {
        assert!(categorize_skills(&[]).is_empty());
    }
}
