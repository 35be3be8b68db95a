use rand::seq::SliceRandom;
use rand::Rng;

use crate::wheel::Slot;

pub const COMMUNITIES: [&str; 8] = [
    "Python",
    "API",
    "FinOps",
    "Frontend",
    "Data Science",
    "DevOps",
    "UX/UI",
    "Security",
];

pub const MIN_COMMUNITIES: usize = 2;
const MAX_LABEL_LEN: usize = 30;
const LABEL_PREFIXES: [&str; 4] = ["AI-Powered ", "Secure ", "Automated ", "API-First "];

struct Template {
    title: &'static str,
    description: &'static str,
}

const TEMPLATES: [Template; 6] = [
    Template {
        title: "AI-Powered {comm1} Analytics Dashboard",
        description: "Build a dashboard that uses {comm1} for data processing and {comm2} for the frontend interface.",
    },
    Template {
        title: "{comm1} and {comm2} Collaboration Platform",
        description: "Create a platform that facilitates collaboration between {comm1} and {comm2} teams.",
    },
    Template {
        title: "Secure {comm1} Application with {comm2} Integration",
        description: "Develop a secure application using {comm1} principles with {comm2} integration.",
    },
    Template {
        title: "Automated {comm1} Pipeline with {comm2} Monitoring",
        description: "Implement an automated pipeline for {comm1} with monitoring using {comm2} tools.",
    },
    Template {
        title: "{comm1} Data Visualization with {comm2} UX",
        description: "Create interactive data visualizations using {comm1} with {comm2} user experience design.",
    },
    Template {
        title: "API-First {comm1} Solution with {comm2} Security",
        description: "Build an API-first solution for {comm1} with {comm2} security best practices.",
    },
];

#[derive(Debug, thiserror::Error)]
pub enum CommunityError {
    #[error("you must select at least {required} communities (available: {available})")]
    TooFew { required: usize, available: String },
}

/// Full candidate record carried as the payload of a wheel slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub title: String,
    pub label: String,
    pub description: String,
    pub communities: Vec<String>,
    pub team_size: String,
}

/// Match command-line tokens against the known communities, ignoring case.
/// The literal `all` selects every community. Unknown tokens are skipped
/// with a warning.
pub fn parse_communities<S: AsRef<str>>(args: &[S]) -> Result<Vec<String>, CommunityError> {
    let mut selected: Vec<String> = Vec::new();

    for arg in args {
        let arg = arg.as_ref();
        if arg.eq_ignore_ascii_case("all") {
            return Ok(COMMUNITIES.iter().map(|c| c.to_string()).collect());
        }
        match COMMUNITIES.iter().find(|c| c.eq_ignore_ascii_case(arg)) {
            Some(community) => selected.push(community.to_string()),
            None => {
                eprintln!("Warning: '{}' is not a valid community. Skipping.", arg);
                tracing::warn!(token = arg, "unknown community skipped");
            }
        }
    }

    if selected.len() < MIN_COMMUNITIES {
        return Err(CommunityError::TooFew {
            required: MIN_COMMUNITIES,
            available: COMMUNITIES.join(", "),
        });
    }
    Ok(selected)
}

/// One project per template, each pairing two distinct communities.
pub fn generate<R: Rng + ?Sized>(communities: &[String], rng: &mut R) -> Vec<Project> {
    TEMPLATES
        .iter()
        .map(|template| {
            let picked: Vec<&String> = communities.choose_multiple(&mut *rng, 2).collect();
            let first = picked.first().map(|s| s.as_str()).unwrap_or("");
            let second = picked.get(1).map(|s| s.as_str()).unwrap_or(first);

            let fill = |text: &str| text.replace("{comm1}", first).replace("{comm2}", second);
            let title = fill(template.title);

            let team_size = if picked.len() > 1 {
                format!("1 {}, 1 {}", first, second)
            } else {
                format!("2 {}", first)
            };

            Project {
                label: shorten_label(&title),
                description: fill(template.description),
                communities: picked.iter().map(|s| s.to_string()).collect(),
                team_size,
                title,
            }
        })
        .collect()
}

/// Wheel-friendly version of a title: drops a leading marketing prefix and
/// cuts at a word boundary if it is still too long.
pub fn shorten_label(title: &str) -> String {
    let mut label = title;
    if let Some(rest) = LABEL_PREFIXES.iter().find_map(|p| label.strip_prefix(p)) {
        label = rest;
    }

    if label.chars().count() <= MAX_LABEL_LEN {
        return label.trim().to_string();
    }

    let mut short = String::new();
    for word in label.split_whitespace() {
        let extra = if short.is_empty() { 0 } else { 1 };
        if short.chars().count() + extra + word.chars().count() <= MAX_LABEL_LEN {
            if !short.is_empty() {
                short.push(' ');
            }
            short.push_str(word);
        } else {
            short.push_str("...");
            break;
        }
    }
    short
}

pub fn into_slots(projects: Vec<Project>) -> Vec<Slot<Project>> {
    projects
        .into_iter()
        .map(|project| Slot::new(project.label.clone(), project))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let parsed = parse_communities(&["python", "DEVOPS", "ux/ui"]).unwrap();
        assert_eq!(parsed, strings(&["Python", "DevOps", "UX/UI"]));
    }

    #[test]
    fn test_parse_all_returns_everything() {
        let parsed = parse_communities(&["Python", "ALL"]).unwrap();
        assert_eq!(parsed.len(), COMMUNITIES.len());
    }

    #[test]
    fn test_parse_skips_unknown_tokens() {
        let parsed = parse_communities(&["Python", "Cobol", "API"]).unwrap();
        assert_eq!(parsed, strings(&["Python", "API"]));
    }

    #[test]
    fn test_parse_requires_two() {
        assert!(parse_communities(&["Python"]).is_err());
        assert!(parse_communities(&["Python", "Cobol"]).is_err());
        assert!(parse_communities::<&str>(&[]).is_err());
    }

    #[test]
    fn test_generate_one_project_per_template() {
        let communities = strings(&["Python", "Frontend", "Security"]);
        let mut rng = StdRng::seed_from_u64(5);
        let projects = generate(&communities, &mut rng);

        assert_eq!(projects.len(), TEMPLATES.len());
        for project in &projects {
            assert_eq!(project.communities.len(), 2);
            assert_ne!(project.communities[0], project.communities[1]);
            assert!(!project.title.contains('{'));
            assert!(!project.description.contains('{'));
            assert_eq!(
                project.team_size,
                format!("1 {}, 1 {}", project.communities[0], project.communities[1])
            );
            assert!(project.label.chars().count() <= MAX_LABEL_LEN + 3);
        }
    }

    #[test]
    fn test_generate_is_reproducible_with_seed() {
        let communities: Vec<String> = COMMUNITIES.iter().map(|c| c.to_string()).collect();
        let a = generate(&communities, &mut StdRng::seed_from_u64(9));
        let b = generate(&communities, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_shorten_strips_prefix() {
        assert_eq!(shorten_label("AI-Powered Python Analytics Dashboard"), "Python Analytics Dashboard");
        assert_eq!(shorten_label("Secure API Application"), "API Application");
    }

    #[test]
    fn test_shorten_cuts_at_word_boundary() {
        assert_eq!(
            shorten_label("Data Science and Frontend Collaboration Platform"),
            "Data Science and Frontend..."
        );
        assert_eq!(
            shorten_label("Automated Data Science Pipeline with Security Monitoring"),
            "Data Science Pipeline with..."
        );
    }

    #[test]
    fn test_into_slots_keeps_order_and_labels() {
        let communities = strings(&["Python", "API"]);
        let projects = generate(&communities, &mut StdRng::seed_from_u64(1));
        let slots = into_slots(projects.clone());

        assert_eq!(slots.len(), projects.len());
        for (slot, project) in slots.iter().zip(&projects) {
            assert_eq!(slot.label, project.label);
            assert_eq!(&slot.payload, project);
        }
    }
}
