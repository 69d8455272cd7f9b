pub mod model;

use std::fmt;

use model::PageConfig;

#[derive(Debug)]
pub enum ContentError {
    Parse {
        slug: PageSlug,
        source: serde_json::Error,
    },
    InvalidAccent(String),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::Parse { slug, source } => {
                write!(f, "page content for {} is malformed: {}", slug.route(), source)
            }
            ContentError::InvalidAccent(raw) => {
                write!(f, "accent color {:?} is not a #rgb or #rrggbb value", raw)
            }
        }
    }
}

impl std::error::Error for ContentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ContentError::Parse { source, .. } => Some(source),
            ContentError::InvalidAccent(_) => None,
        }
    }
}

/// Pages rendered through the shared use-case template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageSlug {
    DictationApp,
    ForLawyers,
    ForStudents,
    ForDoctors,
    ForWriters,
    ForDevelopers,
    ForAccessibility,
    VsDragon,
    VsBuiltIn,
}

impl PageSlug {
    pub const ALL: [PageSlug; 9] = [
        PageSlug::DictationApp,
        PageSlug::ForLawyers,
        PageSlug::ForStudents,
        PageSlug::ForDoctors,
        PageSlug::ForWriters,
        PageSlug::ForDevelopers,
        PageSlug::ForAccessibility,
        PageSlug::VsDragon,
        PageSlug::VsBuiltIn,
    ];

    pub fn route(self) -> &'static str {
        match self {
            PageSlug::DictationApp => "/dictation-app",
            PageSlug::ForLawyers => "/for-lawyers",
            PageSlug::ForStudents => "/for-students",
            PageSlug::ForDoctors => "/for-doctors",
            PageSlug::ForWriters => "/for-writers",
            PageSlug::ForDevelopers => "/for-developers",
            PageSlug::ForAccessibility => "/for-accessibility",
            PageSlug::VsDragon => "/vs-dragon",
            PageSlug::VsBuiltIn => "/vs-built-in-dictation",
        }
    }

    fn source(self) -> &'static str {
        match self {
            PageSlug::DictationApp => include_str!("../../content/dictation_app.json"),
            PageSlug::ForLawyers => include_str!("../../content/for_lawyers.json"),
            PageSlug::ForStudents => include_str!("../../content/for_students.json"),
            PageSlug::ForDoctors => include_str!("../../content/for_doctors.json"),
            PageSlug::ForWriters => include_str!("../../content/for_writers.json"),
            PageSlug::ForDevelopers => include_str!("../../content/for_developers.json"),
            PageSlug::ForAccessibility => include_str!("../../content/for_accessibility.json"),
            PageSlug::VsDragon => include_str!("../../content/vs_dragon.json"),
            PageSlug::VsBuiltIn => include_str!("../../content/vs_built_in.json"),
        }
    }
}

pub fn load(slug: PageSlug) -> Result<PageConfig, ContentError> {
    serde_json::from_str(slug.source()).map_err(|source| ContentError::Parse { slug, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_page_parses_and_matches_its_route() {
        for slug in PageSlug::ALL {
            let config = load(slug).unwrap_or_else(|e| panic!("{e}"));
            assert_eq!(config.route, slug.route());
            assert!(!config.features.items.is_empty(), "{:?} has no features", slug);
            assert!(!config.seo.title.is_empty());
        }
    }

    #[test]
    fn faq_questions_are_unique_per_page() {
        for slug in PageSlug::ALL {
            let config = load(slug).unwrap();
            let mut seen = HashSet::new();
            for entry in &config.faq.items {
                assert!(
                    seen.insert(entry.question.as_str()),
                    "duplicate question on {}: {}",
                    slug.route(),
                    entry.question
                );
            }
        }
    }

    #[test]
    fn routes_are_unique() {
        let routes: HashSet<_> = PageSlug::ALL.iter().map(|s| s.route()).collect();
        assert_eq!(routes.len(), PageSlug::ALL.len());
    }

    #[test]
    fn bad_accent_surfaces_as_parse_error() {
        let raw = PageSlug::ForLawyers
            .source()
            .replacen("\"accent\": \"#", "\"accent\": \"", 1);
        assert_ne!(raw, PageSlug::ForLawyers.source());
        let err = serde_json::from_str::<PageConfig>(&raw).unwrap_err();
        assert!(err.to_string().contains("accent color"));
    }
}
