use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use shared::shared_wheel_game::{resolve_prizes, PrizeList, Tier};
use crate::services::WheelServices;

/// Loads the prize list for `tier` once per mount. `None` while loading; afterwards always
/// a non-empty list, falling back to generated prizes when the sheet fails.
#[hook]
pub fn use_prize_list(tier: Tier) -> Option<PrizeList> {
    let prizes = use_state(|| None::<PrizeList>);
    let services = use_context::<WheelServices>();

    {
        let prizes = prizes.clone();

        use_effect_with(tier, move |tier| {
            let tier = *tier;
            prizes.set(None);

            match services {
                Some(services) => {
                    let fetch = services.prizes.fetch_prizes(tier);
                    spawn_local(async move {
                        prizes.set(Some(resolve_prizes(tier, fetch.await)));
                    });
                }
                None => prizes.set(Some(resolve_prizes(tier, Err("no prize source configured")))),
            }

            || ()
        });
    }

    (*prizes).clone()
}
