use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod layout;
mod seo;
mod content;
mod components {
    pub mod badge;
    pub mod brand_icon;
    pub mod cards;
    pub mod comparison;
    pub mod cta_banner;
    pub mod faq_item;
    pub mod nav;
    pub mod template;
}
mod pages {
    pub mod home;
    pub mod not_found;
    pub mod payment_success;
    pub mod use_case;
}

use content::PageSlug;
use pages::{
    home::Home,
    not_found::NotFound,
    payment_success::PaymentSuccess,
    use_case::TemplatedPage,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dictation-app")]
    DictationApp,
    #[at("/for-lawyers")]
    ForLawyers,
    #[at("/for-students")]
    ForStudents,
    #[at("/for-doctors")]
    ForDoctors,
    #[at("/for-writers")]
    ForWriters,
    #[at("/for-developers")]
    ForDevelopers,
    #[at("/for-accessibility")]
    ForAccessibility,
    #[at("/vs-dragon")]
    VsDragon,
    #[at("/vs-built-in-dictation")]
    VsBuiltIn,
    #[at("/payment-success")]
    PaymentSuccess,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Routes rendered through the use-case template.
    pub fn slug(&self) -> Option<PageSlug> {
        match self {
            Route::DictationApp => Some(PageSlug::DictationApp),
            Route::ForLawyers => Some(PageSlug::ForLawyers),
            Route::ForStudents => Some(PageSlug::ForStudents),
            Route::ForDoctors => Some(PageSlug::ForDoctors),
            Route::ForWriters => Some(PageSlug::ForWriters),
            Route::ForDevelopers => Some(PageSlug::ForDevelopers),
            Route::ForAccessibility => Some(PageSlug::ForAccessibility),
            Route::VsDragon => Some(PageSlug::VsDragon),
            Route::VsBuiltIn => Some(PageSlug::VsBuiltIn),
            Route::Home | Route::PaymentSuccess | Route::NotFound => None,
        }
    }
}

fn switch(routes: Route) -> Html {
    if let Some(slug) = routes.slug() {
        info!("Rendering {} page", slug.route());
        return html! { <TemplatedPage slug={slug} /> };
    }

    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::PaymentSuccess => {
            info!("Rendering Payment success page");
            html! { <PaymentSuccess /> }
        }
        _ => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(Level::Info) {
        gloo_console::error!("error initializing log:", e.to_string());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templated_routes_match_content_routes() {
        for slug in PageSlug::ALL {
            let route = Route::recognize(slug.route()).expect("route for page slug");
            assert_eq!(route.slug(), Some(slug));
            assert_eq!(route.to_path(), slug.route());
        }
    }

    #[test]
    fn non_templated_routes_have_no_slug() {
        assert_eq!(Route::recognize("/payment-success"), Some(Route::PaymentSuccess));
        assert_eq!(Route::PaymentSuccess.slug(), None);
        assert_eq!(Route::Home.slug(), None);
    }
}
