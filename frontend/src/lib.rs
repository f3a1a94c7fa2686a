pub mod styles;
pub mod hooks;
pub mod components;
pub mod pages;
pub mod services;
pub mod config;

use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;
use shared::shared_wheel_game::Tier;
use crate::pages::{home::Home, wheel_game::WheelGame};
use crate::services::{SheetClient, WheelServices};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
   #[at("/")] Home,
   #[at("/wheel/:tier")] Wheel { tier: String },
   #[not_found]
   #[at("/404")] NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    let services = use_memo((), |_| {
        let client = Rc::new(SheetClient::new(config::get_sheet_url()));
        WheelServices::new(client.clone(), client)
    });

    html! {
        <ContextProvider<WheelServices> context={(*services).clone()}>
            <BrowserRouter>
                <div class={styles::PAGE}>
                    <Switch<Route> render={switch} />
                </div>
            </BrowserRouter>
        </ContextProvider<WheelServices>>
    }
}

pub fn switch(route: Route) -> Html {
   match route {
       Route::Home => html! { <Home /> },
       Route::Wheel { tier } => match tier.parse::<Tier>() {
           // Keyed so switching tiers remounts the page and drops any running spin
           Ok(tier) => html! { <WheelGame key={tier.as_str()} {tier} /> },
           Err(e) => {
               log::warn!("{}, returning to tier selection", e);
               html! { <Redirect<Route> to={Route::Home} /> }
           }
       },
       Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
   }
}
