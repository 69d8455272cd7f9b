use yew::prelude::*;

use crate::layout::BrandGlyph;

// Microphone capsule inside a speech bubble, 24x24.
const VOXLY_MARK: &str = "M12 2a3 3 0 0 0-3 3v6a3 3 0 0 0 6 0V5a3 3 0 0 0-3-3zm-7 9a1 1 0 0 1 2 0 5 5 0 0 0 10 0 1 1 0 1 1 2 0 7 7 0 0 1-6 6.93V20h3a1 1 0 1 1 0 2H8a1 1 0 1 1 0-2h3v-2.07A7 7 0 0 1 5 11z";

#[derive(Properties, PartialEq)]
pub struct BrandIconProps {
    pub glyph: BrandGlyph,
    #[prop_or(24)]
    pub size: u32,
}

#[function_component(BrandIcon)]
pub fn brand_icon(props: &BrandIconProps) -> Html {
    let size = props.size.to_string();
    let (title, path, fill) = match &props.glyph {
        BrandGlyph::Custom(icon) => (
            icon.title.clone(),
            icon.path.clone(),
            icon.hex
                .as_ref()
                .map(|hex| format!("#{}", hex.trim_start_matches('#')))
                .unwrap_or_else(|| "currentColor".to_string()),
        ),
        BrandGlyph::Fallback => (
            crate::config::PRODUCT_NAME.to_string(),
            VOXLY_MARK.to_string(),
            "var(--accent)".to_string(),
        ),
    };

    html! {
        <svg class="vx-brand-icon" role="img" viewBox="0 0 24 24" width={size.clone()} height={size}>
            <title>{title}</title>
            <path d={path} fill={fill} />
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::model::IconData;
    use tokio::task::LocalSet;
    use yew::LocalServerRenderer;

    async fn render(glyph: BrandGlyph) -> String {
        let props = BrandIconProps { glyph, size: 24 };
        LocalSet::new()
            .run_until(
                LocalServerRenderer::<BrandIcon>::with_props(props)
                    .hydratable(false)
                    .render(),
            )
            .await
    }

    fn icon(hex: Option<&str>) -> IconData {
        IconData {
            title: "Slack".to_string(),
            path: "M5 15a2 2 0 1 1-2-2h2z".to_string(),
            hex: hex.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn fallback_draws_the_voxly_mark_in_accent() {
        let svg = render(BrandGlyph::Fallback).await;
        assert!(svg.contains("<title>Voxly</title>"), "{svg}");
        assert!(svg.contains(&format!("d=\"{}\"", VOXLY_MARK)), "{svg}");
        assert!(svg.contains("fill=\"var(--accent)\""), "{svg}");
    }

    #[tokio::test]
    async fn custom_icon_draws_its_own_path_and_title() {
        let svg = render(BrandGlyph::Custom(icon(Some("4A154B")))).await;
        assert!(svg.contains("<title>Slack</title>"), "{svg}");
        assert!(svg.contains("d=\"M5 15a2 2 0 1 1-2-2h2z\""), "{svg}");
        assert!(svg.contains("fill=\"#4A154B\""), "{svg}");
        assert!(!svg.contains(VOXLY_MARK));
    }

    #[tokio::test]
    async fn icon_color_is_normalised() {
        let prefixed = render(BrandGlyph::Custom(icon(Some("#4A154B")))).await;
        assert!(prefixed.contains("fill=\"#4A154B\""), "{prefixed}");
        assert!(!prefixed.contains("##"));

        let uncolored = render(BrandGlyph::Custom(icon(None))).await;
        assert!(uncolored.contains("fill=\"currentColor\""), "{uncolored}");
    }
}
