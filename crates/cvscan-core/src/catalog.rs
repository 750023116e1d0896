//! Canonical skill names and their compiled matchers.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::record::Field;

/// Built-in catalog of recognised technical skills, in display form.
pub const DEFAULT_SKILLS: &[&str] = &[
    // Programming languages
    "Python", "Java", "JavaScript", "TypeScript", "C++", "C#", "Ruby", "PHP", "Swift", "Kotlin",
    "Go",
    // Web
    "HTML", "CSS", "React", "Angular", "Vue.js", "Node.js", "Express.js", "Django", "Flask",
    "jQuery", "Bootstrap", "Sass", "REST API", "GraphQL", "WebSocket",
    // Databases
    "SQL", "MySQL", "PostgreSQL", "MongoDB", "Redis", "Oracle", "SQLite", "NoSQL",
    // Cloud and DevOps
    "AWS", "Azure", "GCP", "Docker", "Kubernetes", "Jenkins", "Git", "CI/CD", "Linux",
    "Terraform", "Ansible", "Nginx", "Apache",
    // Data science and AI
    "Machine Learning", "Deep Learning", "TensorFlow", "PyTorch", "Scikit-learn", "NLP",
    "Computer Vision", "Data Analysis", "Neural Networks", "AI",
    // Mobile
    "Android", "iOS", "React Native", "Flutter", "Mobile Development",
    // Practices
    "Agile", "Scrum", "RESTful", "Microservices", "System Design", "OOP", "Design Patterns",
];

static BUILTIN: LazyLock<SkillCatalog> = LazyLock::new(|| {
    SkillCatalog::new(DEFAULT_SKILLS.iter().copied())
        .expect("built-in skill names produce valid patterns")
});

/// Builds the matcher source for one canonical skill name.
///
/// The pattern runs against lowercased text. `.`, `+` and `#` become optional
/// so `node.js` also matches `nodejs` and `c++` also matches `c`. A trailing
/// `js` is allowed so `react` matches `reactjs`. Everything else is escaped.
pub fn skill_pattern(skill: &str) -> String {
    let mut pattern = String::from(r"\b");
    let mut buf = [0u8; 4];

    for ch in skill.to_lowercase().chars() {
        match ch {
            '.' => pattern.push_str(r"\.?"),
            '+' => pattern.push_str(r"\+?"),
            '#' => pattern.push_str("#?"),
            _ => pattern.push_str(&regex::escape(ch.encode_utf8(&mut buf))),
        }
    }

    pattern.push_str(r"(?:js)?\b");
    pattern
}

/// Canonical skill name to compiled matcher, ordered by name.
#[derive(Debug, Clone)]
pub struct SkillCatalog {
    matchers: BTreeMap<String, Regex>,
}

impl SkillCatalog {
    pub fn new<I, S>(skills: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut matchers = BTreeMap::new();

        for skill in skills {
            let name = skill.as_ref().trim();
            if name.is_empty() || matchers.contains_key(name) {
                continue;
            }

            let pattern = skill_pattern(name);
            let regex = Regex::new(&pattern)
                .map_err(|e| Error::pattern(Field::Skills, &pattern, e))?;
            matchers.insert(name.to_string(), regex);
        }

        Ok(Self { matchers })
    }

    /// The shared built-in catalog, compiled on first use.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.matchers.keys().map(String::as_str)
    }

    /// Canonical names whose matcher hits anywhere in `lowered`, sorted.
    pub fn matches<'a>(&'a self, lowered: &'a str) -> impl Iterator<Item = &'a str> {
        self.matchers
            .iter()
            .filter(move |(_, regex)| regex.is_match(lowered))
            .map(|(name, _)| name.as_str())
    }
}
