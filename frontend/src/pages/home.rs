use yew::prelude::*;
use yew_router::prelude::Link;
use shared::shared_wheel_game::Tier;
use crate::{Route, styles};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class={styles::LANDING}>
            <div class={styles::LANDING_CONTENT}>
                <div class={styles::HEADER_GROUP}>
                    <h1 class={styles::TEXT_TITLE}>{"新春大轉盤"}</h1>
                    <p class={styles::TEXT_SUBTITLE}>{"請選擇抽獎面額"}</p>
                </div>

                <div class={styles::TIER_LIST}>
                    { for Tier::ALL.into_iter().map(|tier| html! {
                        <Link<Route> to={Route::Wheel { tier: tier.to_string() }} classes={classes!(styles::TIER_BUTTON)}>
                            <span class="font-['SN_Pro']">{tier.as_str()}</span>
                            <span class="text-sm ml-1">{"元"}</span>
                        </Link<Route>>
                    }) }
                </div>
            </div>

            <footer class={styles::FOOTER}>
                {"© "}<span class="font-['SN_Pro']">{"2026"}</span>{" Lunar New Year Lucky Draw"}
            </footer>
        </div>
    }
}
