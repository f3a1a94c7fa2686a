use serde::{Serialize, Deserialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Prize pool bucket the player draws from. Serialized as its denomination string.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    #[serde(rename = "3000")]
    Tier3000,
    #[serde(rename = "5000")]
    Tier5000,
    #[serde(rename = "10000")]
    Tier10000,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Tier3000, Tier::Tier5000, Tier::Tier10000];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tier3000 => "3000",
            Self::Tier5000 => "5000",
            Self::Tier10000 => "10000",
        }
    }

    /// Number of synthetic prizes generated when the sheet has nothing for this tier.
    pub fn fallback_count(&self) -> usize {
        match self {
            Self::Tier3000 => 15,
            Self::Tier5000 => 30,
            Self::Tier10000 => 50,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTier(pub String);

impl fmt::Display for UnknownTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown tier: {}", self.0)
    }
}

impl std::error::Error for UnknownTier {}

impl FromStr for Tier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::ALL
            .into_iter()
            .find(|tier| tier.as_str() == s)
            .ok_or_else(|| UnknownTier(s.to_string()))
    }
}

/// Ordered prize labels for one tier. Index order defines which wedge each label
/// occupies, so the list is frozen once built and clones share the same storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrizeList {
    labels: Arc<[String]>,
}

impl PrizeList {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels: labels.into() }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

impl Default for PrizeList {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<Vec<String>> for PrizeList {
    fn from(labels: Vec<String>) -> Self {
        Self::new(labels)
    }
}

/// Synthetic prize list used whenever the remote sheet cannot supply one.
pub fn fallback_prizes(tier: Tier) -> PrizeList {
    (1..=tier.fallback_count())
        .map(|i| format!("獎項 {}-{}", tier, i))
        .collect::<Vec<_>>()
        .into()
}

/// Picks the remote list when it is usable, otherwise the local fallback.
pub fn resolve_prizes<E: fmt::Display>(tier: Tier, fetched: Result<PrizeList, E>) -> PrizeList {
    match fetched {
        Ok(prizes) if !prizes.is_empty() => {
            log::info!("Loaded {} prizes for tier {} from sheet", prizes.len(), tier);
            prizes
        }
        Ok(_) => {
            log::warn!("Sheet returned no prizes for tier {}, using fallback", tier);
            fallback_prizes(tier)
        }
        Err(e) => {
            log::warn!("Failed to fetch prizes for tier {}, using fallback: {}", tier, e);
            fallback_prizes(tier)
        }
    }
}

// === Sheet API Types ===

pub const SHEET_STATUS_SUCCESS: &str = "success";
pub const RECORD_ACTION: &str = "record";

/// Body returned by `GET` on the prize sheet endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PrizeSheetResponse {
    pub status: String,
    #[serde(default)]
    pub data: Option<HashMap<String, Vec<String>>>,
}

impl PrizeSheetResponse {
    pub fn success(data: HashMap<String, Vec<String>>) -> Self {
        Self {
            status: SHEET_STATUS_SUCCESS.to_string(),
            data: Some(data),
        }
    }

    /// Prizes for `tier`, or `None` when the sheet did not succeed or lacks the tier.
    pub fn prizes_for(&self, tier: Tier) -> Option<PrizeList> {
        if self.status != SHEET_STATUS_SUCCESS {
            return None;
        }
        self.data
            .as_ref()?
            .get(tier.as_str())
            .map(|labels| PrizeList::new(labels.clone()))
    }
}

/// Body posted to the prize sheet endpoint when a spin finishes.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RecordRequest {
    pub action: String,
    pub tier: String,
    pub prize: String,
    pub timestamp: String,
}

impl RecordRequest {
    pub fn new(tier: Tier, prize: &str, timestamp: String) -> Self {
        Self {
            action: RECORD_ACTION.to_string(),
            tier: tier.as_str().to_string(),
            prize: prize.to_string(),
            timestamp,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RecordResponse {
    pub status: String,
}
