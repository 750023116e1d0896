use tracing::debug;

use super::extractor::{FieldExtractor, FieldResult};
use super::normalizer::TextNormalizer;
use crate::catalog::SkillCatalog;
use crate::record::Field;

/// Reports every catalog skill mentioned anywhere in the text, once, sorted.
#[derive(Debug, Clone)]
pub struct SkillsExtractor {
    catalog: SkillCatalog,
}

impl SkillsExtractor {
    #[must_use]
    pub fn new(catalog: SkillCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }
}

impl Default for SkillsExtractor {
    fn default() -> Self {
        Self::new(SkillCatalog::builtin().clone())
    }
}

impl FieldExtractor for SkillsExtractor {
    type Output = Vec<String>;

    fn field(&self) -> Field {
        Field::Skills
    }

    fn extract(&self, raw: &str) -> FieldResult<Vec<String>> {
        let lowered = TextNormalizer::skills(raw);
        let skills: Vec<String> = self.catalog.matches(&lowered).map(String::from).collect();

        debug!(count = skills.len(), ?skills, "Found skills");
        Ok(skills)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Vec<String> {
        SkillsExtractor::default().extract(text).unwrap()
    }

    #[test]
    fn test_variant_spellings_map_to_canonical_names() {
        let skills = extract("Experienced in ReactJS and Node.js development");
        assert!(skills.contains(&"React".to_string()));
        assert!(skills.contains(&"Node.js".to_string()));
    }

    #[test]
    fn test_sorted_and_deduplicated() {
        let skills = extract("Python, python, PYTHON and Docker.\nDocker again. AWS");
        assert_eq!(skills, vec!["AWS", "Docker", "Python"]);
    }

    #[test]
    fn test_overlapping_entries_are_independent() {
        let skills = extract("Built apps with React Native");
        assert!(skills.contains(&"React".to_string()));
        assert!(skills.contains(&"React Native".to_string()));
    }

    #[test]
    fn test_multi_word_skill_across_line_break() {
        let skills = extract("Machine\nLearning   pipelines");
        assert_eq!(skills, vec!["Machine Learning"]);
    }

    #[test]
    fn test_word_boundaries() {
        assert!(extract("Gopher and Javanese").is_empty());
    }

    #[test]
    fn test_punctuation_variants() {
        let skills = extract("nodejs, vuejs, C++ and CI/CD");
        assert!(skills.contains(&"Node.js".to_string()));
        assert!(skills.contains(&"Vue.js".to_string()));
        assert!(skills.contains(&"C++".to_string()));
        assert!(skills.contains(&"CI/CD".to_string()));
    }

    #[test]
    fn test_custom_catalog() {
        let extractor = SkillsExtractor::new(SkillCatalog::new(["Rust", "Tokio"]).unwrap());
        assert_eq!(
            extractor.extract("Rust services on tokio").unwrap(),
            vec!["Rust", "Tokio"]
        );
    }

    #[test]
    fn test_no_skills() {
        assert!(extract("").is_empty());
    }
}
