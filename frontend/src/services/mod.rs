pub mod sheet_client;

use std::rc::Rc;
use chrono::{DateTime, Utc};
use futures::future::LocalBoxFuture;
use shared::shared_wheel_game::{PrizeList, Tier};

pub use sheet_client::{FetchError, SheetClient};

/// Where a wheel page gets its prize list from.
pub trait PrizeSource {
    fn fetch_prizes(&self, tier: Tier) -> LocalBoxFuture<'static, Result<PrizeList, FetchError>>;
}

/// Receives every finished spin. Fire and forget: failures are logged, never surfaced.
pub trait ResultSink {
    fn record(&self, tier: Tier, prize: &str, timestamp: DateTime<Utc>);
}

/// Injected through a Yew context so pages never construct network clients themselves.
#[derive(Clone)]
pub struct WheelServices {
    pub prizes: Rc<dyn PrizeSource>,
    pub results: Rc<dyn ResultSink>,
}

impl WheelServices {
    pub fn new(prizes: Rc<dyn PrizeSource>, results: Rc<dyn ResultSink>) -> Self {
        Self { prizes, results }
    }
}

impl PartialEq for WheelServices {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.prizes, &other.prizes) && Rc::ptr_eq(&self.results, &other.results)
    }
}
