use std::collections::HashMap;
use std::path::Path;
use shared::shared_wheel_game::{fallback_prizes, Tier};
use tracing::{info, warn};
use crate::error::Error;

/// Tier key to ordered prize labels, as served to the wheel page.
#[derive(Debug, Clone, PartialEq)]
pub struct PrizeSheet {
    tiers: HashMap<String, Vec<String>>,
}

impl PrizeSheet {
    pub fn new(tiers: HashMap<String, Vec<String>>) -> Self {
        Self { tiers }
    }

    /// Sheet built from the generated fallback lists for every tier.
    pub fn generated() -> Self {
        let tiers = Tier::ALL
            .into_iter()
            .map(|tier| (tier.as_str().to_string(), fallback_prizes(tier).labels().to_vec()))
            .collect();
        Self { tiers }
    }

    pub fn from_json(raw: &str) -> Result<Self, Error> {
        let tiers: HashMap<String, Vec<String>> = serde_json::from_str(raw)?;
        for (key, labels) in &tiers {
            if key.parse::<Tier>().is_err() {
                warn!("Prize sheet has unknown tier {:?}; it will never be requested", key);
            } else if labels.is_empty() {
                warn!("Prize sheet tier {} is empty; clients will use their fallback", key);
            }
        }
        Ok(Self { tiers })
    }

    /// Reads the sheet file, or generates one when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, Error> {
        match std::fs::read_to_string(path) {
            Ok(raw) => {
                let sheet = Self::from_json(&raw)?;
                info!("Loaded prize sheet from {} ({} tiers)", path.display(), sheet.tiers.len());
                Ok(sheet)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No prize sheet at {}, serving generated prizes", path.display());
                Ok(Self::generated())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn tiers(&self) -> &HashMap<String, Vec<String>> {
        &self.tiers
    }
}
