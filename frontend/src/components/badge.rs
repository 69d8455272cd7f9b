use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    html! {
        <span class="vx-badge">
            { for props.children.iter() }
            <span class="vx-badge-label">{&props.label}</span>
        </span>
    }
}
