use yew::prelude::*;

use crate::content::model::{Feature, UseCase};
use crate::layout::NumberedStep;

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub feature: Feature,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let Feature { icon, title, description } = &props.feature;
    html! {
        <div class="vx-feature-card">
            <div class="vx-feature-icon">{icon}</div>
            <h3>{title}</h3>
            <p>{description}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StepCardProps {
    pub step: NumberedStep,
}

#[function_component(StepCard)]
pub fn step_card(props: &StepCardProps) -> Html {
    let NumberedStep { number, title, description } = &props.step;
    html! {
        <div class="vx-step">
            <div class="vx-step-number">{number}</div>
            <h3>{title}</h3>
            <p>{description}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct UseCaseCardProps {
    pub use_case: UseCase,
}

#[function_component(UseCaseCard)]
pub fn use_case_card(props: &UseCaseCardProps) -> Html {
    let case = &props.use_case;
    html! {
        <div class="vx-use-case">
            <div class="vx-use-case-head">
                <h3>{&case.title}</h3>
                {
                    if let Some(saved) = &case.time_saved {
                        html! { <span class="vx-time-saved">{saved}</span> }
                    } else {
                        html! {}
                    }
                }
            </div>
            {
                if let Some(scenario) = &case.scenario {
                    html! {
                        <p class="vx-use-case-before">
                            <strong>{"Before: "}</strong>{scenario}
                        </p>
                    }
                } else {
                    html! {}
                }
            }
            <p class="vx-use-case-with">
                <strong>{format!("With {}: ", crate::config::PRODUCT_NAME)}</strong>{&case.with_product}
            </p>
            {
                if let Some(result) = &case.result {
                    html! { <p class="vx-use-case-result">{result}</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
