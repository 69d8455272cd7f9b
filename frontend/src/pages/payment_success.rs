use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::use_interval;
use web_sys::{window, UrlSearchParams};
use log::info;

use crate::config;

/// Where the desktop app's local listener expects the browser to land.
pub fn redirect_target(session_id: Option<&str>, custom_session: Option<&str>) -> String {
    fn present(value: Option<&str>) -> Option<&str> {
        value.filter(|v| !v.is_empty())
    }

    let session = present(custom_session)
        .or_else(|| present(session_id))
        .unwrap_or_default();

    format!(
        "{}/payment-success?session_id={}&status=success",
        config::DESKTOP_CALLBACK_BASE,
        urlencoding::encode(session)
    )
}

pub enum CountdownAction {
    Tick,
    RedirectNow,
    NavigationFailed,
}

/// Countdown plus the flags guarding the hand-off. `attempts` only grows,
/// and the navigation effect is keyed on it.
#[derive(Clone, Debug, PartialEq)]
pub struct Countdown {
    pub remaining: u32,
    pub has_redirected: bool,
    pub navigating: bool,
    pub attempts: u32,
}

impl Countdown {
    pub fn new(seconds: u32) -> Self {
        Self {
            remaining: seconds,
            has_redirected: false,
            navigating: false,
            attempts: 0,
        }
    }
}

impl Reducible for Countdown {
    type Action = CountdownAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CountdownAction::Tick => {
                if next.remaining == 0 {
                    return self;
                }
                next.remaining -= 1;
                if next.remaining == 0 && !next.has_redirected {
                    next.has_redirected = true;
                    next.navigating = true;
                    next.attempts += 1;
                }
            }
            CountdownAction::RedirectNow => {
                if next.navigating {
                    return self;
                }
                next.remaining = 0;
                next.has_redirected = true;
                next.navigating = true;
                next.attempts += 1;
            }
            CountdownAction::NavigationFailed => {
                if !next.navigating {
                    return self;
                }
                next.navigating = false;
            }
        }
        Rc::new(next)
    }
}

fn navigate(url: &str) -> Result<(), String> {
    let window = window().ok_or_else(|| "no window".to_string())?;
    window
        .location()
        .set_href(url)
        .map_err(|e| format!("{:?}", e))
}

#[function_component(PaymentSuccess)]
pub fn payment_success() -> Html {
    let location = use_location();
    let countdown = use_reducer(|| Countdown::new(config::REDIRECT_COUNTDOWN_SECS));

    let target = use_memo(
        |query: &String| {
            let params = UrlSearchParams::new_with_str(query).ok();
            let get = |key: &str| params.as_ref().and_then(|p| p.get(key));
            redirect_target(get("session_id").as_deref(), get("custom_session").as_deref())
        },
        location
            .map(|l| l.query_str().to_string())
            .unwrap_or_default(),
    );

    {
        let countdown = countdown.clone();
        let interval_ms = if countdown.remaining > 0 { 1000 } else { 0 };
        use_interval(move || countdown.dispatch(CountdownAction::Tick), interval_ms);
    }

    {
        let dispatcher = countdown.dispatcher();
        let target = target.clone();
        use_effect_with_deps(
            move |attempts| {
                if *attempts > 0 {
                    info!("Handing session back to the desktop app (attempt {})", attempts);
                    if let Err(e) = navigate(&target) {
                        gloo_console::error!("Redirect to desktop app failed:", e);
                        dispatcher.dispatch(CountdownAction::NavigationFailed);
                    }
                }
                || ()
            },
            countdown.attempts,
        );
    }

    let on_redirect = {
        let dispatcher = countdown.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dispatcher.dispatch(CountdownAction::RedirectNow);
        })
    };

    html! {
        <div class="payment-success-page">
            <style>
                {r#"
                    .payment-success-page {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: #f8fafc;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                    }
                    .payment-panel {
                        max-width: 480px;
                        padding: 48px 40px;
                        border-radius: 24px;
                        background: #fff;
                        box-shadow: 0 16px 48px rgba(15, 23, 42, 0.08);
                        text-align: center;
                    }
                    .payment-check {
                        width: 64px;
                        height: 64px;
                        margin: 0 auto 24px;
                        border-radius: 50%;
                        background: #dcfce7;
                        color: #16a34a;
                        font-size: 32px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .payment-countdown {
                        font-size: 48px;
                        font-weight: 800;
                        color: #0f172a;
                        margin: 16px 0;
                    }
                    .payment-open-app {
                        padding: 14px 28px;
                        border: none;
                        border-radius: 12px;
                        background: #0f172a;
                        color: #fff;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .payment-open-app:disabled {
                        opacity: 0.6;
                        cursor: default;
                    }
                    .payment-hint {
                        margin-top: 24px;
                        color: #64748b;
                        font-size: 14px;
                    }
                "#}
            </style>
            <div class="payment-panel">
                <div class="payment-check">{"✓"}</div>
                <h1>{"Payment successful"}</h1>
                <p>{format!("Thanks for upgrading {}! Returning you to the app.", config::PRODUCT_NAME)}</p>
                {
                    if countdown.remaining > 0 {
                        html! { <div class="payment-countdown">{countdown.remaining}</div> }
                    } else {
                        html! {}
                    }
                }
                <button
                    class="payment-open-app"
                    onclick={on_redirect}
                    disabled={countdown.navigating}
                >
                    {if countdown.navigating { "Opening Voxly..." } else { "Open Voxly now" }}
                </button>
                <p class="payment-hint">
                    {"Nothing happening? Make sure the Voxly desktop app is running, then press the button again."}
                </p>
            </div>
        </div>
    }
}
