use std::rc::Rc;

use yew::prelude::*;
use log::error;

use crate::components::template::UseCasePage;
use crate::content::{self, PageSlug};
use crate::pages::not_found::NotFound;

#[derive(Properties, PartialEq)]
pub struct TemplatedPageProps {
    pub slug: PageSlug,
}

/// Loads the embedded content for `slug` and hands it to the shared template.
#[function_component(TemplatedPage)]
pub fn templated_page(props: &TemplatedPageProps) -> Html {
    let config = use_memo(
        |slug| match content::load(*slug) {
            Ok(config) => Some(Rc::new(config)),
            Err(e) => {
                error!("{}", e);
                None
            }
        },
        props.slug,
    );

    match &*config {
        Some(config) => html! { <UseCasePage config={config.clone()} /> },
        None => html! { <NotFound /> },
    }
}
