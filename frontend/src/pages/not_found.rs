use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::nav::{SiteFooter, SiteHeader};
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <>
            <SiteHeader />
            <div class="not-found-page">
                <style>
                    {r#"
                        .not-found-page {
                            min-height: 60vh;
                            display: flex;
                            flex-direction: column;
                            align-items: center;
                            justify-content: center;
                            text-align: center;
                            padding: 48px 24px;
                        }
                        .not-found-page h1 {
                            font-size: 64px;
                            margin-bottom: 8px;
                        }
                    "#}
                </style>
                <h1>{"404"}</h1>
                <p>{"We couldn't find that page."}</p>
                <Link<Route> to={Route::Home}>{"Back to the home page"}</Link<Route>>
            </div>
            <SiteFooter />
        </>
    }
}
