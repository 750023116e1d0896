use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

static SPACED_AT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*@\s*").expect("valid at-sign pattern"));

/// Which line-repair pass an extractor needs.
///
/// Conversion from PDF splits tokens across lines in different ways, and the
/// repairs that help one field would damage another, so each extractor asks
/// for its own variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    /// Rejoin addresses broken around `@` and `.`.
    Email,
    /// Flatten to a single line with single spaces.
    Phone,
    /// Lowercase and flatten to a single line.
    Skills,
}

pub struct TextNormalizer;

impl TextNormalizer {
    pub fn apply(variant: Normalization, text: &str) -> String {
        match variant {
            Normalization::Email => Self::email(text),
            Normalization::Phone => Self::phone(text),
            Normalization::Skills => Self::skills(text),
        }
    }

    pub fn email(text: &str) -> String {
        let joined = text
            .replace("\n@", "@")
            .replace(".\n", "")
            .replace(" @ ", "@")
            .replace(" . ", ".");

        SPACED_AT.replace_all(&joined, "@").into_owned()
    }

    pub fn phone(text: &str) -> String {
        collapse_whitespace(&text.replace('\n', " "))
    }

    pub fn skills(text: &str) -> String {
        collapse_whitespace(&text.to_lowercase().replace('\n', " "))
    }
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_rejoins_broken_address() {
        assert_eq!(TextNormalizer::email("jane.doe\n@gmail.com"), "jane.doe@gmail.com");
        assert_eq!(TextNormalizer::email("jane @ gmail . com"), "jane@gmail.com");
        assert_eq!(TextNormalizer::email("jane  @\tgmail.com"), "jane@gmail.com");
    }

    #[test]
    fn test_email_drops_dot_newline() {
        assert_eq!(TextNormalizer::email("end of line.\nnext"), "end of linenext");
    }

    #[test]
    fn test_phone_flattens_lines() {
        assert_eq!(
            TextNormalizer::phone("Phone: +1-234-\n567-8900\t\t now"),
            "Phone: +1-234- 567-8900 now"
        );
    }

    #[test]
    fn test_skills_lowercases() {
        assert_eq!(
            TextNormalizer::skills("Python\n\n  Machine   Learning"),
            "python machine learning"
        );
    }

    #[test]
    fn test_apply_dispatches() {
        let text = "A\nB";
        assert_eq!(TextNormalizer::apply(Normalization::Phone, text), "A B");
        assert_eq!(TextNormalizer::apply(Normalization::Skills, text), "a b");
        assert_eq!(TextNormalizer::apply(Normalization::Email, text), "A\nB");
    }
}
