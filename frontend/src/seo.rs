use yew::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::window;
use log::warn;

use crate::config;
use crate::content::model::SeoMeta;

#[derive(Clone, Debug, PartialEq)]
pub struct MetaTag {
    /// `name` or `property`
    pub attr: &'static str,
    pub key: &'static str,
    pub content: String,
}

fn tag(attr: &'static str, key: &'static str, content: impl Into<String>) -> MetaTag {
    MetaTag { attr, key, content: content.into() }
}

pub fn meta_tags(meta: &SeoMeta, route: &str) -> Vec<MetaTag> {
    // Every page writes the same tag set so a client-side route change
    // never leaves the previous page's values behind.
    vec![
        tag("name", "description", meta.description.as_str()),
        tag("name", "keywords", meta.keywords.join(", ")),
        tag("property", "og:title", meta.title.as_str()),
        tag("property", "og:description", meta.description.as_str()),
        tag("property", "og:url", format!("{}{}", config::get_site_url(), route)),
        tag("property", "og:image", meta.og_image.clone().unwrap_or_default()),
        tag("name", "twitter:card", "summary_large_image"),
    ]
}

fn apply(meta: &SeoMeta, route: &str) -> Result<(), JsValue> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    document.set_title(&meta.title);

    for MetaTag { attr, key, content } in meta_tags(meta, route) {
        let selector = format!("meta[{}=\"{}\"]", attr, key);
        let element = match document.query_selector(&selector)? {
            Some(element) => element,
            None => {
                let element = document.create_element("meta")?;
                element.set_attribute(attr, key)?;
                if let Some(head) = document.head() {
                    head.append_child(&element)?;
                }
                element
            }
        };
        element.set_attribute("content", &content)?;
    }
    Ok(())
}

/// Writes the page title and social preview tags on mount.
#[hook]
pub fn use_page_meta(meta: SeoMeta, route: AttrValue) {
    use_effect_with_deps(
        |(meta, route)| {
            if let Err(e) = apply(meta, route) {
                warn!("could not update page metadata for {}: {:?}", route, e);
            }
            || ()
        },
        (meta, route),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta() -> SeoMeta {
        SeoMeta {
            title: "Voxly for Lawyers".to_string(),
            description: "Dictate briefs".to_string(),
            keywords: vec!["legal dictation".to_string(), "voice to text".to_string()],
            og_image: None,
        }
    }

    #[test]
    fn tags_cover_description_and_social_preview() {
        let tags = meta_tags(&meta(), "/for-lawyers");
        let find = |key: &str| tags.iter().find(|t| t.key == key).map(|t| t.content.clone());

        assert_eq!(find("description").as_deref(), Some("Dictate briefs"));
        assert_eq!(find("og:title").as_deref(), Some("Voxly for Lawyers"));
        assert_eq!(find("keywords").as_deref(), Some("legal dictation, voice to text"));
        assert_eq!(
            find("og:url"),
            Some(format!("{}/for-lawyers", config::get_site_url()))
        );
        assert_eq!(find("og:image").as_deref(), Some(""));
    }

    #[test]
    fn missing_values_are_written_empty() {
        let mut meta = meta();
        meta.keywords.clear();

        let tags = meta_tags(&meta, "/for-lawyers");
        let find = |key: &str| tags.iter().find(|t| t.key == key).map(|t| t.content.clone());
        assert_eq!(find("keywords").as_deref(), Some(""));
        assert_eq!(find("og:image").as_deref(), Some(""));
    }

    #[test]
    fn every_page_writes_the_same_tags() {
        let keys = |meta: &SeoMeta, route: &str| -> Vec<(&'static str, &'static str)> {
            meta_tags(meta, route).iter().map(|t| (t.attr, t.key)).collect()
        };

        let mut home = meta();
        home.og_image = Some("https://voxly.app/og-image.png".to_string());
        let mut bare = meta();
        bare.keywords.clear();
        bare.og_image = None;

        let expected = keys(&home, "/");
        assert_eq!(keys(&bare, "/for-lawyers"), expected);
        for slug in crate::content::PageSlug::ALL {
            let config = crate::content::load(slug).unwrap();
            assert_eq!(keys(&config.seo, slug.route()), expected);
        }
    }
}
