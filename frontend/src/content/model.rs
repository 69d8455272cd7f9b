use std::fmt;

use serde::{Deserialize, Deserializer};

use super::ContentError;

/// Everything one landing page says, plus the accent it is painted with.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub route: String,
    pub name: String,
    pub accent: AccentColor,
    #[serde(default)]
    pub brand_icon: BrandMark,
    pub seo: SeoMeta,
    pub hero: Hero,
    pub features: Block<Feature>,
    pub steps: Block<Step>,
    pub use_cases: Block<UseCase>,
    pub faq: Block<FaqEntry>,
    pub cta: CtaBanner,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SeoMeta {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub og_image: Option<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct CtaLink {
    pub label: String,
    pub href: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Hero {
    pub badge: String,
    pub title: String,
    pub description: String,
    pub primary_cta: CtaLink,
    #[serde(default)]
    pub secondary_cta: Option<CtaLink>,
}

/// A titled section. Items keep the order they were written in.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Block<T> {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Step {
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct UseCase {
    pub title: String,
    #[serde(default)]
    pub scenario: Option<String>,
    pub with_product: String,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub time_saved: Option<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct CtaBanner {
    pub title: String,
    pub description: String,
    pub primary: CtaLink,
    #[serde(default)]
    pub secondary: Option<CtaLink>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct IconData {
    pub title: String,
    /// SVG path data in a 24x24 viewBox.
    pub path: String,
    #[serde(default)]
    pub hex: Option<String>,
}

/// Brand glyph shown next to the hero badge. Content that omits
/// `brand_icon` gets the Voxly mark.
#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(from = "Option<IconData>")]
pub enum BrandMark {
    Provided(IconData),
    #[default]
    Default,
}

impl From<Option<IconData>> for BrandMark {
    fn from(icon: Option<IconData>) -> Self {
        match icon {
            Some(icon) => BrandMark::Provided(icon),
            None => BrandMark::Default,
        }
    }
}

/// Page accent as parsed RGB, rendered back out as CSS.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccentColor {
    r: u8,
    g: u8,
    b: u8,
}

impl AccentColor {
    pub fn parse(raw: &str) -> Result<Self, ContentError> {
        let invalid = || ContentError::InvalidAccent(raw.to_string());
        let hex = raw.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Self {
                r: channel(&hex[0..2])?,
                g: channel(&hex[2..4])?,
                b: channel(&hex[4..6])?,
            }),
            3 => {
                // #abc is shorthand for #aabbcc
                let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
                Ok(Self {
                    r: short(0)?,
                    g: short(1)?,
                    b: short(2)?,
                })
            }
            _ => Err(invalid()),
        }
    }

    pub fn tint(&self, alpha: f32) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            alpha.clamp(0.0, 1.0)
        )
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl<'de> Deserialize<'de> for AccentColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        AccentColor::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        let long = AccentColor::parse("#2563EB").unwrap();
        assert_eq!(long.to_string(), "#2563eb");

        let short = AccentColor::parse("#0fa").unwrap();
        assert_eq!(short.to_string(), "#00ffaa");
    }

    #[test]
    fn rejects_malformed_accent() {
        for raw in ["2563eb", "#25", "#zzzzzz", "#2563eb00", "#éé"] {
            assert!(
                matches!(AccentColor::parse(raw), Err(ContentError::InvalidAccent(_))),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_sign_prefixed_channels() {
        // from_str_radix alone would read "+f" as 0x0f
        for raw in ["#+f+f+f", "#+1+2+3+4", "#+ff"] {
            assert!(AccentColor::parse(raw).is_err(), "{raw} should be rejected");
        }
    }

    #[test]
    fn tint_uses_accent_channels() {
        let accent = AccentColor::parse("#7c3aed").unwrap();
        assert_eq!(accent.tint(0.1), "rgba(124, 58, 237, 0.1)");
        assert_eq!(accent.tint(4.0), "rgba(124, 58, 237, 1)");
    }

    #[test]
    fn missing_brand_icon_is_default_mark() {
        let mark: BrandMark = serde_json::from_str("null").unwrap();
        assert_eq!(mark, BrandMark::Default);

        let mark: BrandMark =
            serde_json::from_str(r#"{"title": "Notion", "path": "M0 0h24v24H0z"}"#).unwrap();
        assert!(matches!(mark, BrandMark::Provided(ref icon) if icon.title == "Notion"));
    }

    #[test]
    fn block_items_default_to_empty() {
        let block: Block<FaqEntry> =
            serde_json::from_str(r#"{"title": "Questions"}"#).unwrap();
        assert!(block.items.is_empty());
        assert_eq!(block.description, None);
    }
}
