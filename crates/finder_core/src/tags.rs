use std::sync::OnceLock;

use regex::Regex;

use crate::vocabulary;

/// Ephemeral, display-only annotation derived from the free-text term.
/// Never persisted and never sent to the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickTag {
    pub label: String,
}

fn year_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)after\s+(\d{4})").expect("valid year pattern"))
}

/// Derives quick tags from a free-text term. Pure and total.
///
/// Emits at most one year tag (from an "after <yyyy>" phrase) followed by at
/// most one category tag (first vocabulary entry whose name appears,
/// case-insensitively, inside the term).
pub fn extract(term: &str) -> Vec<QuickTag> {
    let mut tags = Vec::new();

    if let Some(caps) = year_pattern().captures(term) {
        tags.push(QuickTag {
            label: format!("Year: > {}", &caps[1]),
        });
    }

    let lowered = term.to_lowercase();
    let matched = vocabulary::CATEGORIES
        .iter()
        .find(|name| lowered.contains(&name.to_lowercase()));
    if let Some(name) = matched {
        tags.push(QuickTag {
            label: (*name).to_string(),
        });
    }

    tags
}
