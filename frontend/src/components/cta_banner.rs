use yew::prelude::*;

use crate::content::model::CtaBanner as CtaBannerContent;

#[derive(Properties, PartialEq)]
pub struct CtaBannerProps {
    pub cta: CtaBannerContent,
}

/// Full-width closing banner, filled with the page accent.
#[function_component(CtaBanner)]
pub fn cta_banner(props: &CtaBannerProps) -> Html {
    let cta = &props.cta;
    html! {
        <section class="vx-cta">
            <h2>{&cta.title}</h2>
            <p>{&cta.description}</p>
            <div class="vx-cta-actions">
                <a class="vx-button vx-button-light" href={cta.primary.href.clone()}>
                    {&cta.primary.label}
                </a>
                {
                    if let Some(secondary) = &cta.secondary {
                        html! {
                            <a class="vx-button vx-button-outline-light" href={secondary.href.clone()}>
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
