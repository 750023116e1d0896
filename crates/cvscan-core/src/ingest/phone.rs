use regex::Regex;
use tracing::debug;

use super::extractor::{FieldExtractor, FieldResult};
use super::normalizer::TextNormalizer;
use crate::config::DEFAULT_PHONE_PATTERNS;
use crate::error::{Error, Result};
use crate::record::Field;

/// Ordered phone shapes. Only the first pattern with a hit is consulted, and
/// only its first hit is used.
#[derive(Debug, Clone)]
pub struct PhonePatternTable {
    patterns: Vec<Regex>,
}

impl PhonePatternTable {
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| {
                let p = p.as_ref();
                Regex::new(p).map_err(|e| Error::pattern(Field::Phone, p, e))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// First match of the highest-priority pattern that matches at all.
    pub fn first_match<'t>(&self, text: &'t str) -> Option<(usize, &'t str)> {
        self.patterns
            .iter()
            .enumerate()
            .find_map(|(idx, regex)| regex.find(text).map(|m| (idx, m.as_str())))
    }
}

impl Default for PhonePatternTable {
    fn default() -> Self {
        Self::new(DEFAULT_PHONE_PATTERNS).expect("built-in phone patterns compile")
    }
}

/// Keeps digits, plus a `+` only when it leads the number.
pub fn clean_phone(matched: &str) -> String {
    let mut cleaned = String::with_capacity(matched.len());
    for ch in matched.chars() {
        if ch.is_numeric() || (ch == '+' && cleaned.is_empty()) {
            cleaned.push(ch);
        }
    }
    cleaned
}

#[derive(Debug, Clone, Default)]
pub struct PhoneExtractor {
    table: PhonePatternTable,
}

impl PhoneExtractor {
    #[must_use]
    pub fn new(table: PhonePatternTable) -> Self {
        Self { table }
    }
}

impl FieldExtractor for PhoneExtractor {
    type Output = String;

    fn field(&self) -> Field {
        Field::Phone
    }

    fn extract(&self, raw: &str) -> FieldResult<String> {
        let normalized = TextNormalizer::phone(raw);

        match self.table.first_match(&normalized) {
            Some((pattern, number)) => {
                let cleaned = clean_phone(number);
                debug!(pattern, number, cleaned = cleaned.as_str(), "Found phone number");
                Ok(cleaned)
            }
            None => {
                debug!("No phone number found");
                Ok(String::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> String {
        PhoneExtractor::default().extract(text).unwrap()
    }

    #[test]
    fn test_international_wins_over_later_local() {
        assert_eq!(extract("Call +1-234-567-8900 or 555-123-4567"), "+12345678900");
    }

    #[test]
    fn test_priority_beats_position() {
        assert_eq!(extract("555-123-4567 or +44 207 946 0958"), "+442079460958");
    }

    #[test]
    fn test_parenthesized_country_code() {
        assert_eq!(extract("Tel: (+91) 987-654-3210"), "+919876543210");
    }

    #[test]
    fn test_local_with_separators() {
        assert_eq!(extract("Phone 234.567.8900"), "2345678900");
    }

    #[test]
    fn test_parenthesized_area_code() {
        assert_eq!(extract("(234) 567-8900"), "2345678900");
    }

    #[test]
    fn test_alternate_grouping() {
        assert_eq!(extract("Mobile 234-4567-890"), "2344567890");
    }

    #[test]
    fn test_number_split_across_lines() {
        assert_eq!(extract("Phone: 234-567\n8900"), "2345678900");
    }

    #[test]
    fn test_no_phone() {
        assert_eq!(extract("Call me maybe"), "");
        assert_eq!(extract("Zip 55414"), "");
    }

    #[test]
    fn test_clean_phone_keeps_only_leading_plus() {
        assert_eq!(clean_phone("(+1) 234-567-8900"), "+12345678900");
        assert_eq!(clean_phone("234+567"), "234567");
    }

    #[test]
    fn test_invalid_pattern_fails_fast() {
        let result = PhonePatternTable::new([r"\d{3", r"\d{10}"]);
        assert!(matches!(
            result,
            Err(Error::InvalidPattern { field: Field::Phone, .. })
        ));
    }

    #[test]
    fn test_first_match_reports_pattern_index() {
        let table = PhonePatternTable::default();
        assert_eq!(table.len(), 6);
        assert_eq!(table.first_match("2345678900"), Some((2, "2345678900")));
    }
}
