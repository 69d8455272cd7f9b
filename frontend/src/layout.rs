//! Turns a [`PageConfig`] into the fixed section sequence every use-case
//! page shares. Nothing here touches the DOM, so the ordering and numbering
//! rules are tested directly.

use crate::content::model::{
    AccentColor, BrandMark, CtaBanner, CtaLink, FaqEntry, Feature, IconData, PageConfig, UseCase,
};

#[derive(Clone, Debug, PartialEq)]
pub struct PageLayout {
    pub accent: AccentColor,
    pub sections: Vec<Section>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Section {
    Header,
    Hero(HeroView),
    Features(SectionView<Feature>),
    HowItWorks(SectionView<NumberedStep>),
    UseCases(SectionView<UseCase>),
    Faq(SectionView<FaqEntry>),
    Cta(CtaBanner),
    Footer,
}

impl Section {
    pub fn kind(&self) -> &'static str {
        match self {
            Section::Header => "header",
            Section::Hero(_) => "hero",
            Section::Features(_) => "features",
            Section::HowItWorks(_) => "how-it-works",
            Section::UseCases(_) => "use-cases",
            Section::Faq(_) => "faq",
            Section::Cta(_) => "cta",
            Section::Footer => "footer",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeroView {
    pub badge: String,
    pub brand: BrandGlyph,
    pub title: String,
    pub description: String,
    pub primary_cta: CtaLink,
    pub secondary_cta: Option<CtaLink>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionView<T> {
    pub title: String,
    pub description: Option<String>,
    pub items: Vec<T>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NumberedStep {
    pub number: usize,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum BrandGlyph {
    Custom(IconData),
    Fallback,
}

impl From<&BrandMark> for BrandGlyph {
    fn from(mark: &BrandMark) -> Self {
        match mark {
            BrandMark::Provided(icon) => BrandGlyph::Custom(icon.clone()),
            BrandMark::Default => BrandGlyph::Fallback,
        }
    }
}

pub fn build(config: &PageConfig) -> PageLayout {
    let steps = config
        .steps
        .items
        .iter()
        .enumerate()
        .map(|(index, step)| NumberedStep {
            number: index + 1,
            title: step.title.clone(),
            description: step.description.clone(),
        })
        .collect();

    let sections = vec![
        Section::Header,
        Section::Hero(HeroView {
            badge: config.hero.badge.clone(),
            brand: BrandGlyph::from(&config.brand_icon),
            title: config.hero.title.clone(),
            description: config.hero.description.clone(),
            primary_cta: config.hero.primary_cta.clone(),
            secondary_cta: config.hero.secondary_cta.clone(),
        }),
        Section::Features(SectionView {
            title: config.features.title.clone(),
            description: config.features.description.clone(),
            items: config.features.items.clone(),
        }),
        Section::HowItWorks(SectionView {
            title: config.steps.title.clone(),
            description: config.steps.description.clone(),
            items: steps,
        }),
        Section::UseCases(SectionView {
            title: config.use_cases.title.clone(),
            description: config.use_cases.description.clone(),
            items: config.use_cases.items.clone(),
        }),
        Section::Faq(SectionView {
            title: config.faq.title.clone(),
            description: config.faq.description.clone(),
            items: config.faq.items.clone(),
        }),
        Section::Cta(config.cta.clone()),
        Section::Footer,
    ];

    PageLayout {
        accent: config.accent,
        sections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::model::{Block, Hero, SeoMeta, Step};

    fn link(label: &str) -> CtaLink {
        CtaLink {
            label: label.to_string(),
            href: "/download".to_string(),
        }
    }

    fn block<T>(title: &str, items: Vec<T>) -> Block<T> {
        Block {
            title: title.to_string(),
            description: Some(format!("{title} description")),
            items,
        }
    }

    fn config() -> PageConfig {
        PageConfig {
            route: "/for-testers".to_string(),
            name: "Testers".to_string(),
            accent: AccentColor::parse("#0ea5e9").unwrap(),
            brand_icon: BrandMark::Default,
            seo: SeoMeta {
                title: "Voxly for testers".to_string(),
                description: "Dictate bug reports".to_string(),
                keywords: vec!["dictation".to_string()],
                og_image: None,
            },
            hero: Hero {
                badge: "For testers".to_string(),
                title: "Say the bug".to_string(),
                description: "Reports at the speed of speech".to_string(),
                primary_cta: link("Download"),
                secondary_cta: None,
            },
            features: block(
                "Features",
                ["Fast", "Private", "Offline"]
                    .iter()
                    .map(|t| Feature {
                        icon: "⚡".to_string(),
                        title: t.to_string(),
                        description: format!("{t} dictation"),
                    })
                    .collect(),
            ),
            steps: block(
                "How it works",
                ["Install", "Hold the hotkey", "Speak"]
                    .iter()
                    .map(|t| Step {
                        title: t.to_string(),
                        description: String::new(),
                    })
                    .collect(),
            ),
            use_cases: block("Use cases", Vec::new()),
            faq: block("FAQ", Vec::new()),
            cta: CtaBanner {
                title: "Try it".to_string(),
                description: "Free for a week".to_string(),
                primary: link("Download"),
                secondary: Some(link("Pricing")),
            },
        }
    }

    #[test]
    fn sections_follow_fixed_order() {
        let kinds: Vec<_> = build(&config()).sections.iter().map(Section::kind).collect();
        assert_eq!(
            kinds,
            ["header", "hero", "features", "how-it-works", "use-cases", "faq", "cta", "footer"]
        );
    }

    #[test]
    fn features_keep_count_and_order() {
        let layout = build(&config());
        let Some(Section::Features(features)) = layout.sections.get(2) else {
            panic!("features section missing");
        };
        let titles: Vec<_> = features.items.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, ["Fast", "Private", "Offline"]);
    }

    #[test]
    fn empty_faq_keeps_heading() {
        let layout = build(&config());
        let faq = layout
            .sections
            .iter()
            .find_map(|s| match s {
                Section::Faq(view) => Some(view),
                _ => None,
            })
            .unwrap();
        assert_eq!(faq.title, "FAQ");
        assert_eq!(faq.description.as_deref(), Some("FAQ description"));
        assert!(faq.items.is_empty());
    }

    #[test]
    fn step_numbers_come_from_position() {
        let mut config = config();
        // Titles that look like numbers must not leak into numbering.
        config.steps.items[0].title = "3".to_string();
        config.steps.items.swap(1, 2);

        let layout = build(&config);
        let Some(Section::HowItWorks(steps)) = layout.sections.get(3) else {
            panic!("how-it-works section missing");
        };
        let numbered: Vec<_> = steps
            .items
            .iter()
            .map(|s| (s.number, s.title.as_str()))
            .collect();
        assert_eq!(numbered, [(1, "3"), (2, "Speak"), (3, "Hold the hotkey")]);
    }

    #[test]
    fn brand_mark_resolves_to_glyph() {
        let hero_brand = |config: &PageConfig| match &build(config).sections[1] {
            Section::Hero(hero) => hero.brand.clone(),
            other => panic!("expected hero, got {}", other.kind()),
        };

        let mut config = config();
        assert_eq!(hero_brand(&config), BrandGlyph::Fallback);

        let icon = IconData {
            title: "Slack".to_string(),
            path: "M5 15a2 2 0 1 1-2-2h2z".to_string(),
            hex: Some("4A154B".to_string()),
        };
        config.brand_icon = BrandMark::Provided(icon.clone());
        assert_eq!(hero_brand(&config), BrandGlyph::Custom(icon));
    }

    #[test]
    fn accent_carries_through() {
        let layout = build(&config());
        assert_eq!(layout.accent.to_string(), "#0ea5e9");
    }
}
