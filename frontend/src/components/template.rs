use std::rc::Rc;

use yew::prelude::*;
use stylist::Style;
use log::{debug, error};

use crate::components::badge::Badge;
use crate::components::brand_icon::BrandIcon;
use crate::components::cards::{FeatureCard, StepCard, UseCaseCard};
use crate::components::cta_banner::CtaBanner;
use crate::components::faq_item::FaqItem;
use crate::components::nav::{SiteFooter, SiteHeader};
use crate::content::model::{AccentColor, PageConfig};
use crate::layout::{self, HeroView, Section, SectionView};
use crate::seo::use_page_meta;

#[derive(Properties, PartialEq)]
pub struct UseCasePageProps {
    pub config: Rc<PageConfig>,
}

/// Scoped class carrying the accent custom properties every child reads.
fn accent_class(accent: &AccentColor) -> Classes {
    let css = format!(
        "--accent: {}; --accent-soft: {}; --accent-glow: {};",
        accent,
        accent.tint(0.12),
        accent.tint(0.35),
    );
    match Style::new(css.as_str()) {
        Ok(style) => classes!(style.get_class_name().to_owned()),
        Err(e) => {
            error!("accent style for {} rejected: {}", accent, e);
            classes!()
        }
    }
}

fn section_heading<T>(view: &SectionView<T>) -> Html {
    html! {
        <div class="vx-section-heading">
            <h2>{&view.title}</h2>
            {
                if let Some(description) = &view.description {
                    html! { <p>{description}</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn hero(view: &HeroView) -> Html {
    html! {
        <section class="vx-hero">
            <Badge label={view.badge.clone()}>
                <BrandIcon glyph={view.brand.clone()} size={18} />
            </Badge>
            <h1>{&view.title}</h1>
            <p class="vx-hero-description">{&view.description}</p>
            <div class="vx-hero-actions">
                <a class="vx-button vx-button-accent" href={view.primary_cta.href.clone()}>
                    {&view.primary_cta.label}
                </a>
                {
                    if let Some(secondary) = &view.secondary_cta {
                        html! {
                            <a class="vx-button vx-button-ghost" href={secondary.href.clone()}>
                                {&secondary.label}
                            </a>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </section>
    }
}

fn render_section(section: &Section) -> Html {
    match section {
        Section::Header => html! { <SiteHeader /> },
        Section::Hero(view) => hero(view),
        Section::Features(view) => html! {
            <section class="vx-section vx-features">
                { section_heading(view) }
                <div class="vx-features-grid">
                    { for view.items.iter().map(|feature| html! {
                        <FeatureCard feature={feature.clone()} />
                    }) }
                </div>
            </section>
        },
        Section::HowItWorks(view) => html! {
            <section class="vx-section vx-how-it-works">
                { section_heading(view) }
                <div class="vx-steps">
                    { for view.items.iter().map(|step| html! {
                        <StepCard key={step.number} step={step.clone()} />
                    }) }
                </div>
            </section>
        },
        Section::UseCases(view) => html! {
            <section class="vx-section vx-use-cases">
                { section_heading(view) }
                <div class="vx-use-case-grid">
                    { for view.items.iter().map(|case| html! {
                        <UseCaseCard use_case={case.clone()} />
                    }) }
                </div>
            </section>
        },
        Section::Faq(view) => html! {
            <section class="vx-section vx-faq">
                { section_heading(view) }
                <div class="vx-faq-list">
                    { for view.items.iter().map(|entry| html! {
                        <FaqItem
                            key={entry.question.clone()}
                            question={entry.question.clone()}
                            answer={entry.answer.clone()}
                        />
                    }) }
                </div>
            </section>
        },
        Section::Cta(cta) => html! { <CtaBanner cta={cta.clone()} /> },
        Section::Footer => html! { <SiteFooter /> },
    }
}

#[function_component(UseCasePage)]
pub fn use_case_page(props: &UseCasePageProps) -> Html {
    let config = props.config.clone();
    use_page_meta(config.seo.clone(), AttrValue::from(config.route.clone()));

    let layout = use_memo(
        |config| {
            let layout = layout::build(config);
            debug!(
                "{} page ({}): {}",
                config.name,
                config.route,
                layout.sections.iter().map(Section::kind).collect::<Vec<_>>().join(" > ")
            );
            layout
        },
        config.clone(),
    );
    let accent = accent_class(&layout.accent);

    html! {
        <div class={classes!("vx-page", accent)}>
            <style>{TEMPLATE_CSS}</style>
            { for layout.sections.iter().map(render_section) }
        </div>
    }
}

const TEMPLATE_CSS: &str = r#"
    .vx-page {
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        color: #0f172a;
        background: #ffffff;
    }
    .vx-hero {
        max-width: 880px;
        margin: 0 auto;
        padding: 96px 24px 64px;
        text-align: center;
    }
    .vx-hero h1 {
        font-size: 52px;
        line-height: 1.1;
        margin: 24px 0 16px;
    }
    .vx-hero-description {
        font-size: 20px;
        color: #475569;
    }
    .vx-badge {
        display: inline-flex;
        align-items: center;
        gap: 8px;
        padding: 6px 14px;
        border-radius: 999px;
        background: var(--accent-soft);
        color: var(--accent);
        font-weight: 600;
        font-size: 14px;
    }
    .vx-hero-actions, .vx-cta-actions {
        display: flex;
        justify-content: center;
        gap: 12px;
        margin-top: 32px;
        flex-wrap: wrap;
    }
    .vx-button {
        padding: 14px 28px;
        border-radius: 12px;
        font-weight: 600;
        text-decoration: none;
    }
    .vx-button-accent {
        background: var(--accent);
        color: #fff;
        box-shadow: 0 8px 24px var(--accent-glow);
    }
    .vx-button-ghost {
        border: 1px solid #cbd5e1;
        color: #0f172a;
    }
    .vx-button-light {
        background: #fff;
        color: var(--accent);
    }
    .vx-button-outline-light {
        border: 1px solid rgba(255, 255, 255, 0.7);
        color: #fff;
    }
    .vx-section {
        max-width: 1200px;
        margin: 0 auto;
        padding: 64px 24px;
    }
    .vx-section-heading {
        text-align: center;
        margin-bottom: 40px;
    }
    .vx-section-heading h2 {
        font-size: 36px;
        margin-bottom: 12px;
    }
    .vx-section-heading p {
        color: #64748b;
    }
    .vx-features-grid, .vx-use-case-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
        gap: 24px;
    }
    .vx-feature-card, .vx-use-case {
        padding: 28px;
        border: 1px solid #e2e8f0;
        border-radius: 16px;
    }
    .vx-feature-icon {
        width: 48px;
        height: 48px;
        display: flex;
        align-items: center;
        justify-content: center;
        border-radius: 12px;
        background: var(--accent-soft);
        color: var(--accent);
        font-size: 24px;
        margin-bottom: 16px;
    }
    .vx-steps {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
        gap: 32px;
        text-align: center;
    }
    .vx-step-number {
        width: 48px;
        height: 48px;
        margin: 0 auto 16px;
        border-radius: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
        background: var(--accent);
        color: #fff;
        font-weight: 700;
    }
    .vx-use-case-head {
        display: flex;
        justify-content: space-between;
        align-items: baseline;
        gap: 12px;
    }
    .vx-time-saved {
        color: var(--accent);
        font-weight: 600;
        white-space: nowrap;
    }
    .vx-use-case-before {
        color: #64748b;
    }
    .vx-use-case-result {
        color: var(--accent);
        font-weight: 600;
    }
    .vx-faq-list {
        max-width: 760px;
        margin: 0 auto;
    }
    .vx-faq-item {
        border-bottom: 1px solid #e2e8f0;
    }
    .vx-faq-question {
        width: 100%;
        display: flex;
        justify-content: space-between;
        padding: 20px 0;
        background: none;
        border: none;
        font-size: 18px;
        text-align: left;
        cursor: pointer;
    }
    .vx-faq-item .toggle-icon {
        color: var(--accent);
    }
    .vx-faq-answer {
        display: none;
        color: #475569;
        padding-bottom: 20px;
    }
    .vx-faq-item.open .vx-faq-answer {
        display: block;
    }
    .vx-cta {
        margin: 64px 24px;
        padding: 64px 24px;
        border-radius: 24px;
        text-align: center;
        background: var(--accent);
        color: #fff;
    }
    .vx-cta h2 {
        font-size: 36px;
    }
    @media (max-width: 768px) {
        .vx-hero h1 {
            font-size: 36px;
        }
    }
"#;
