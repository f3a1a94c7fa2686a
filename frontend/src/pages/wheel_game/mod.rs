mod spin_loop;
mod wheel_canvas;

use chrono::Utc;
use log::{debug, info};
use yew::prelude::*;
use yew_router::prelude::*;
use shared::shared_wheel_game::Tier;
use shared::wheel_spin::SpinOutcome;
use crate::components::{celebrate, Confetti, ResultModal};
use crate::hooks::use_prize_list;
use crate::services::WheelServices;
use crate::{Route, styles};

use spin_loop::SpinLoop;
use wheel_canvas::prepare_canvas;

#[derive(Properties, PartialEq)]
pub struct WheelGameProps {
    pub tier: Tier,
}

#[function_component(WheelGame)]
pub fn wheel_game(props: &WheelGameProps) -> Html {
    let tier = props.tier;
    let prizes = use_prize_list(tier);
    let canvas_ref = use_node_ref();
    let is_spinning = use_state(|| false);
    let winner = use_state(|| None::<AttrValue>);
    let services = use_context::<WheelServices>();
    let navigator = use_navigator();

    let spin_loop = {
        let canvas_ref = canvas_ref.clone();
        let is_spinning = is_spinning.clone();
        let winner = winner.clone();
        let memo = use_memo((), move |_| {
            let on_finish = Callback::from(move |outcome: SpinOutcome| {
                info!("Tier {} landed on #{} {}", tier, outcome.winning_index, outcome.prize);
                if let Some(services) = &services {
                    services.results.record(tier, &outcome.prize, Utc::now());
                }
                celebrate();
                winner.set(Some(AttrValue::from(outcome.prize)));
                is_spinning.set(false);
            });
            SpinLoop::new(canvas_ref, on_finish)
        });
        (*memo).clone()
    };

    // Size the canvas once; leaving the page drops any running spin without a result
    {
        let canvas_ref = canvas_ref.clone();
        let spin_loop = spin_loop.clone();
        use_effect_with((), move |_| {
            prepare_canvas(&canvas_ref);
            move || spin_loop.cancel()
        });
    }

    {
        let spin_loop = spin_loop.clone();
        use_effect_with(prizes.clone(), move |prizes| {
            if let Some(prizes) = prizes {
                spin_loop.draw_idle(prizes);
            }
            || ()
        });
    }

    let on_spin = {
        let spin_loop = spin_loop.clone();
        let prizes = prizes.clone();
        let is_spinning = is_spinning.clone();
        let winner = winner.clone();
        Callback::from(move |_: MouseEvent| match spin_loop.start(prizes.as_ref()) {
            Ok(()) => {
                winner.set(None);
                is_spinning.set(true);
            }
            Err(e) => debug!("Spin ignored: {}", e),
        })
    };

    let on_back = {
        let spin_loop = spin_loop.clone();
        Callback::from(move |_: MouseEvent| {
            if spin_loop.is_spinning() {
                return;
            }
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
        })
    };

    let on_close = {
        let winner = winner.clone();
        Callback::from(move |_: MouseEvent| winner.set(None))
    };

    html! {
        <>
            <Confetti />

            <div class={styles::BACK_BUTTON_WRAPPER}>
                <button class={styles::BUTTON_BACK} onclick={on_back} disabled={*is_spinning}>
                    {"返回首頁"}
                </button>
            </div>

            <div class={styles::CONTAINER}>
                <div class={styles::HEADER_GROUP}>
                    <h1 class={styles::TEXT_TITLE}>{"新春大轉盤"}</h1>
                    <div class={styles::LEVEL_BADGE}>
                        {"當前等級："}
                        <span class="font-['SN_Pro'] font-black text-[28px]">
                            {tier.as_str()}<span class="text-base font-bold ml-0.5">{"元"}</span>
                        </span>
                    </div>
                </div>

                <div class={styles::WHEEL_WRAPPER}>
                    <div class={styles::WHEEL_POINTER}>
                        <svg width="80" height="90" viewBox="0 0 80 90" fill="none" xmlns="http://www.w3.org/2000/svg">
                            <path
                                d="M40 85L20 52C5 30 15 5 40 5C65 5 75 30 60 52L40 85Z"
                                fill="url(#pointerGradient)"
                                stroke="#D9230F"
                                stroke-width="3"
                            />
                            <circle cx="40" cy="35" r="14" fill="#FFFFFF" fill-opacity="0.2" />
                            <defs>
                                <linearGradient id="pointerGradient" x1="40" y1="5" x2="40" y2="85" gradientUnits="userSpaceOnUse">
                                    <stop offset="0%" stop-color="#FFD700" />
                                    <stop offset="100%" stop-color="#FFA500" />
                                </linearGradient>
                            </defs>
                        </svg>
                    </div>

                    <canvas
                        ref={canvas_ref}
                        class={styles::WHEEL_CANVAS}
                        style="width: 500px; height: 500px; max-width: 90vw; max-height: 90vw;"
                    />

                    if prizes.is_none() {
                        <div class={styles::LOADING_TEXT}>{"載入獎項中..."}</div>
                    }

                    <div class={styles::START_WRAPPER}>
                        <button class={styles::BUTTON_START} onclick={on_spin} disabled={*is_spinning}>
                            {"START"}
                        </button>
                    </div>
                </div>
            </div>

            if let (Some(prize), false) = ((*winner).clone(), *is_spinning) {
                <ResultModal {prize} {on_close} />
            }
        </>
    }
}
