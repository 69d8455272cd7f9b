use yew::prelude::*;
use yew_router::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use chrono::Datelike;

use crate::config;
use crate::Route;

const AUDIENCE_LINKS: [(Route, &str); 6] = [
    (Route::ForLawyers, "Lawyers"),
    (Route::ForStudents, "Students"),
    (Route::ForDoctors, "Doctors"),
    (Route::ForWriters, "Writers"),
    (Route::ForDevelopers, "Developers"),
    (Route::ForAccessibility, "Accessibility"),
];

#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let listener = window.as_ref().map(|window| {
                let scroll_window = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let offset = scroll_window.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(offset > 40.0);
                }) as Box<dyn FnMut()>);
                let _ = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                );
                (window.clone(), scroll_callback)
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: sticky;
                        top: 0;
                        z-index: 100;
                        background: rgba(255, 255, 255, 0.85);
                        backdrop-filter: blur(8px);
                        transition: box-shadow 0.2s ease;
                    }
                    .top-nav.scrolled {
                        box-shadow: 0 1px 12px rgba(15, 23, 42, 0.08);
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 16px 24px;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-weight: 800;
                        font-size: 22px;
                        color: #0f172a;
                        text-decoration: none;
                    }
                    .nav-right {
                        display: flex;
                        gap: 20px;
                        align-items: center;
                    }
                    .nav-link {
                        color: #475569;
                        text-decoration: none;
                    }
                    .nav-download {
                        background: #0f172a;
                        color: #fff;
                        padding: 8px 16px;
                        border-radius: 999px;
                        text-decoration: none;
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                    }
                    .burger-menu span {
                        display: block;
                        width: 22px;
                        height: 2px;
                        margin: 4px 0;
                        background: #0f172a;
                    }
                    @media (max-width: 860px) {
                        .burger-menu { display: block; }
                        .nav-right { display: none; }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 60px;
                            left: 0;
                            right: 0;
                            padding: 16px;
                            background: #fff;
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {config::PRODUCT_NAME}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        AUDIENCE_LINKS.iter().map(|(route, label)| html! {
                            <div onclick={close_menu.clone()}>
                                <Link<Route> to={route.clone()} classes="nav-link">
                                    {*label}
                                </Link<Route>>
                            </div>
                        }).collect::<Html>()
                    }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::VsDragon} classes="nav-link">
                            {"Compare"}
                        </Link<Route>>
                    </div>
                    <a href={config::DOWNLOAD_URL} class="nav-download">{"Download"}</a>
                </div>
            </div>
        </nav>
    }
}

#[function_component(SiteFooter)]
pub fn site_footer() -> Html {
    let year = chrono::Utc::now().year();

    html! {
        <footer class="vx-footer">
            <style>
                {r#"
                    .vx-footer {
                        padding: 48px 24px;
                        text-align: center;
                        color: #64748b;
                        border-top: 1px solid #e2e8f0;
                    }
                    .vx-footer-links {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 16px;
                        margin-bottom: 16px;
                    }
                    .vx-footer a {
                        color: #475569;
                        text-decoration: none;
                    }
                "#}
            </style>
            <div class="vx-footer-links">
                <Link<Route> to={Route::DictationApp}>{"Dictation app"}</Link<Route>>
                <Link<Route> to={Route::VsDragon}>{"Voxly vs Dragon"}</Link<Route>>
                <Link<Route> to={Route::VsBuiltIn}>{"Voxly vs built-in dictation"}</Link<Route>>
                <a href={config::DOWNLOAD_URL}>{"Download"}</a>
            </div>
            <p>{format!("© {} {}. All rights reserved.", year, config::PRODUCT_NAME)}</p>
        </footer>
    }
}
