use yew::prelude::*;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ResultModalProps {
    pub prize: AttrValue,
    pub on_close: Callback<MouseEvent>,
}

/// Winner announcement. Only the close button dismisses it.
#[function_component(ResultModal)]
pub fn result_modal(props: &ResultModalProps) -> Html {
    html! {
        <div class={styles::MODAL_BACKDROP}>
            <div class={styles::MODAL_CARD}>
                <div class="text-6xl">{"🎁"}</div>
                <div class={styles::MODAL_DIVIDER}></div>
                <h3 class={styles::MODAL_HEADING}>{"恭喜獲得"}</h3>
                <div class={styles::MODAL_PRIZE}>{props.prize.clone()}</div>
                <button class={styles::BUTTON_CLOSE} onclick={props.on_close.clone()}>
                    {"關 閉"}
                </button>
            </div>
        </div>
    }
}
