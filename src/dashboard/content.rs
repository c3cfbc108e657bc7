//! Display content bound onto the dashboard view
//!
//! All of this is presentation copy, not catalog data; every field falls
//! back to a built-in string when left empty so a bare view still renders.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewContent {
    pub heading: String,
    pub tagline: String,
    /// Bullet lines in the hero banner
    pub hero_highlights: Vec<String>,
    /// Guide paragraphs in the side column
    pub paragraphs: Vec<String>,
    /// Accent color as a hex string (e.g. `"#9C79FF"`)
    pub accent_color: String,
    /// Two-stop hero gradient, hex strings
    pub hero_gradient: [String; 2],
    pub primary_action_label: String,
}

impl ViewContent {
    pub fn heading(&self) -> &str {
        fallback(&self.heading, "Heaven & Earth Codex")
    }

    pub fn tagline(&self) -> &str {
        fallback(
            &self.tagline,
            "Bring the cultivation RPG to life with cinematic oversight.",
        )
    }

    pub fn primary_action_label(&self) -> &str {
        fallback(&self.primary_action_label, "Launch codex")
    }

    /// Bound highlight lines with empties dropped
    pub fn highlights(&self) -> impl Iterator<Item = &str> {
        self.hero_highlights
            .iter()
            .map(String::as_str)
            .filter(|line| !line.is_empty())
    }

    /// Bound paragraphs with empties dropped; a fixed guide line when none
    /// are bound
    pub fn guide_paragraphs(&self) -> Vec<&str> {
        let bound: Vec<&str> = self
            .paragraphs
            .iter()
            .map(String::as_str)
            .filter(|p| !p.is_empty())
            .collect();
        if bound.is_empty() {
            vec!["Orchestrate cultivation events, duels, and expeditions directly from this console."]
        } else {
            bound
        }
    }
}

fn fallback<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() { default } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content_uses_fallbacks() {
        let content = ViewContent::default();
        assert_eq!(content.heading(), "Heaven & Earth Codex");
        assert_eq!(content.primary_action_label(), "Launch codex");
        assert_eq!(content.highlights().count(), 0);
        assert_eq!(content.guide_paragraphs().len(), 1);
    }

    #[test]
    fn test_bound_content_wins() {
        let content = ViewContent {
            heading: "Custom".to_owned(),
            hero_highlights: vec!["one".to_owned(), String::new(), "two".to_owned()],
            paragraphs: vec!["lead".to_owned()],
            ..Default::default()
        };
        assert_eq!(content.heading(), "Custom");
        assert_eq!(content.highlights().count(), 2);
        assert_eq!(content.guide_paragraphs(), vec!["lead"]);
    }
}
