use yew::prelude::*;
use gloo_timers::callback::Timeout;

const SAMPLE: &str = "Please move the client call to Thursday at three and send everyone the updated agenda before lunch.";
const TYPING_WPM: u32 = 40;
const SPEAKING_WPM: u32 = 150;
// Pause on the finished result before restarting the loop.
const HOLD_MS: u32 = 2500;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComparisonTiming {
    pub words: usize,
    pub typing_ms: u32,
    pub speaking_ms: u32,
    pub speedup: f64,
}

pub fn timing(text: &str, typing_wpm: u32, speaking_wpm: u32) -> ComparisonTiming {
    let words = text.split_whitespace().count();
    let duration = |wpm: u32| -> u32 {
        if wpm == 0 {
            0
        } else {
            (words as f64 / wpm as f64 * 60_000.0).round() as u32
        }
    };
    let typing_ms = duration(typing_wpm);
    let speaking_ms = duration(speaking_wpm);
    let speedup = if speaking_ms == 0 {
        1.0
    } else {
        typing_ms as f64 / speaking_ms as f64
    };

    ComparisonTiming { words, typing_ms, speaking_ms, speedup }
}

#[derive(Clone, Copy, PartialEq)]
enum Stage {
    Idle,
    Racing,
    Done,
}

/// Side-by-side race: the keyboard column types the sample at typing speed
/// while the Voxly column finishes at speaking speed.
#[function_component(ComparisonSection)]
pub fn comparison_section() -> Html {
    let stage = use_state(|| Stage::Idle);
    let timing = timing(SAMPLE, TYPING_WPM, SPEAKING_WPM);

    // Every animation runs in real time, so this loop takes about as long
    // as typing the sample.
    {
        let stage_setter = stage.setter();
        use_effect_with_deps(
            move |stage| {
                let (delay, next) = match *stage {
                    Stage::Idle => (300, Stage::Racing),
                    Stage::Racing => (timing.typing_ms, Stage::Done),
                    Stage::Done => (HOLD_MS, Stage::Idle),
                };
                let timeout = Timeout::new(delay, move || stage_setter.set(next));
                move || drop(timeout)
            },
            *stage,
        );
    }

    let running = *stage != Stage::Idle;
    let bar_style = |ms: u32| {
        if running {
            format!("width: 100%; transition: width {}ms linear;", ms)
        } else {
            "width: 0%; transition: none;".to_string()
        }
    };
    let typed_chars = |ms: u32| {
        format!(
            "animation: {} {}ms steps({}, end) forwards;",
            if running { "vx-type" } else { "none" },
            ms,
            SAMPLE.chars().count()
        )
    };

    html! {
        <section class="vx-comparison">
            <style>
                {r#"
                    .vx-comparison {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 48px 24px;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 24px;
                    }
                    .vx-lane {
                        padding: 24px;
                        border-radius: 16px;
                        border: 1px solid #e2e8f0;
                        background: #fff;
                    }
                    .vx-lane.voice {
                        border-color: #6366f1;
                    }
                    .vx-lane-label {
                        display: flex;
                        justify-content: space-between;
                        font-weight: 600;
                        margin-bottom: 12px;
                    }
                    .vx-lane-text {
                        overflow: hidden;
                        white-space: nowrap;
                        font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
                        width: 0;
                    }
                    .vx-lane-track {
                        height: 6px;
                        border-radius: 3px;
                        margin-top: 16px;
                        background: #e2e8f0;
                    }
                    .vx-lane-bar {
                        height: 100%;
                        border-radius: 3px;
                        background: #94a3b8;
                    }
                    .vx-lane.voice .vx-lane-bar {
                        background: #6366f1;
                    }
                    .vx-speedup {
                        grid-column: 1 / -1;
                        text-align: center;
                        font-size: 20px;
                        font-weight: 700;
                    }
                    @keyframes vx-type {
                        from { width: 0; }
                        to { width: 100%; white-space: normal; }
                    }
                    @media (max-width: 768px) {
                        .vx-comparison {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="vx-lane typing">
                <div class="vx-lane-label">
                    <span>{"Typing"}</span>
                    <span>{format!("{} wpm", TYPING_WPM)}</span>
                </div>
                <div class="vx-lane-text" style={typed_chars(timing.typing_ms)}>{SAMPLE}</div>
                <div class="vx-lane-track">
                    <div class="vx-lane-bar" style={bar_style(timing.typing_ms)}></div>
                </div>
            </div>
            <div class="vx-lane voice">
                <div class="vx-lane-label">
                    <span>{"Speaking with Voxly"}</span>
                    <span>{format!("{} wpm", SPEAKING_WPM)}</span>
                </div>
                <div class="vx-lane-text" style={typed_chars(timing.speaking_ms)}>{SAMPLE}</div>
                <div class="vx-lane-track">
                    <div class="vx-lane-bar" style={bar_style(timing.speaking_ms)}></div>
                </div>
            </div>
            {
                if *stage == Stage::Done {
                    html! {
                        <div class="vx-speedup">
                            {format!("{:.1}x faster, {} words", timing.speedup, timing.words)}
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_follow_words_per_minute() {
        let t = timing("one two three four five six seven eight nine ten", 40, 150);
        assert_eq!(t.words, 10);
        assert_eq!(t.typing_ms, 15_000);
        assert_eq!(t.speaking_ms, 4_000);
        assert!((t.speedup - 3.75).abs() < f64::EPSILON);
    }

    #[test]
    fn whitespace_runs_count_once() {
        let t = timing("  hello \n\t world  ", 60, 120);
        assert_eq!(t.words, 2);
        assert_eq!(t.typing_ms, 2_000);
        assert_eq!(t.speaking_ms, 1_000);
    }

    #[test]
    fn zero_rates_do_not_divide_by_zero() {
        let t = timing("a b c", 40, 0);
        assert_eq!(t.speaking_ms, 0);
        assert_eq!(t.speedup, 1.0);

        let empty = timing("", 40, 150);
        assert_eq!(empty.words, 0);
        assert_eq!(empty.speedup, 1.0);
    }

    #[test]
    fn sample_is_several_times_faster_spoken() {
        let t = timing(SAMPLE, TYPING_WPM, SPEAKING_WPM);
        assert!(t.speedup > 3.0 && t.speedup < 4.0);
    }
}
