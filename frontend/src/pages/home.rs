use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::comparison::ComparisonSection;
use crate::components::nav::{SiteFooter, SiteHeader};
use crate::config;
use crate::content::model::SeoMeta;
use crate::seo::use_page_meta;
use crate::Route;

struct Audience {
    route: Route,
    title: &'static str,
    blurb: &'static str,
}

const AUDIENCES: [Audience; 6] = [
    Audience {
        route: Route::ForLawyers,
        title: "Lawyers",
        blurb: "Draft memos and client letters hands-free.",
    },
    Audience {
        route: Route::ForStudents,
        title: "Students",
        blurb: "Turn lecture thoughts into notes and essays.",
    },
    Audience {
        route: Route::ForDoctors,
        title: "Doctors",
        blurb: "Finish charting before the next patient.",
    },
    Audience {
        route: Route::ForWriters,
        title: "Writers",
        blurb: "Get the first draft out at the speed of thought.",
    },
    Audience {
        route: Route::ForDevelopers,
        title: "Developers",
        blurb: "Dictate commit messages, docs and prompts.",
    },
    Audience {
        route: Route::ForAccessibility,
        title: "Accessibility",
        blurb: "Type without a keyboard when typing hurts.",
    },
];

fn home_meta() -> SeoMeta {
    SeoMeta {
        title: format!("{} - Voice Dictation for Every App", config::PRODUCT_NAME),
        description: "Hold a hotkey, speak, and watch polished text appear in any app. Voxly is private, fast, desktop voice dictation.".to_string(),
        keywords: ["voice dictation", "speech to text", "dictation app", "voice typing"]
            .iter()
            .map(|k| k.to_string())
            .collect(),
        og_image: Some(format!("{}/og-image.png", config::get_site_url())),
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    use_page_meta(home_meta(), AttrValue::from("/"));

    html! {
        <div class="home-page">
            <style>
                {r#"
                    .home-page {
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        color: #0f172a;
                    }
                    .home-hero {
                        max-width: 900px;
                        margin: 0 auto;
                        padding: 96px 24px 32px;
                        text-align: center;
                    }
                    .home-hero h1 {
                        font-size: 56px;
                        line-height: 1.05;
                        margin-bottom: 20px;
                    }
                    .home-hero p {
                        font-size: 20px;
                        color: #475569;
                    }
                    .home-hero-actions {
                        display: flex;
                        gap: 12px;
                        justify-content: center;
                        margin-top: 32px;
                    }
                    .home-button {
                        padding: 14px 28px;
                        border-radius: 12px;
                        font-weight: 600;
                        text-decoration: none;
                        background: #6366f1;
                        color: #fff;
                    }
                    .home-button.secondary {
                        background: none;
                        color: #0f172a;
                        border: 1px solid #cbd5e1;
                    }
                    .audience-section {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 64px 24px;
                    }
                    .audience-section h2 {
                        text-align: center;
                        font-size: 36px;
                    }
                    .audience-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 20px;
                        margin-top: 32px;
                    }
                    .audience-card {
                        display: block;
                        padding: 24px;
                        border: 1px solid #e2e8f0;
                        border-radius: 16px;
                        color: inherit;
                        text-decoration: none;
                        transition: border-color 0.2s ease;
                    }
                    .audience-card:hover {
                        border-color: #6366f1;
                    }
                    @media (max-width: 768px) {
                        .home-hero h1 {
                            font-size: 38px;
                        }
                    }
                "#}
            </style>
            <SiteHeader />
            <section class="home-hero">
                <h1>{"Stop typing. Start talking."}</h1>
                <p>
                    {"Hold a hotkey, say what you mean, and Voxly writes it into whatever app you're using. Three times faster than typing, with punctuation and formatting handled for you."}
                </p>
                <div class="home-hero-actions">
                    <a class="home-button" href={config::DOWNLOAD_URL}>{"Download for free"}</a>
                    <Link<Route> to={Route::DictationApp} classes="home-button secondary">
                        {"How it works"}
                    </Link<Route>>
                </div>
            </section>

            <ComparisonSection />

            <section class="audience-section">
                <h2>{"Built for the way you work"}</h2>
                <div class="audience-grid">
                    {
                        AUDIENCES.iter().map(|audience| html! {
                            <Link<Route> to={audience.route.clone()} classes="audience-card">
                                <h3>{audience.title}</h3>
                                <p>{audience.blurb}</p>
                            </Link<Route>>
                        }).collect::<Html>()
                    }
                </div>
            </section>
            <SiteFooter />
        </div>
    }
}
