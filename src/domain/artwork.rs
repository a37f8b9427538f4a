use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};

/// Lifecycle of a sellable artwork. Within this service the only transition
/// is `Available` -> `Reserved`, performed by the order placement
/// transaction; everything else is administered outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtworkStatus {
    Available,
    Reserved,
    Sold,
}

impl ArtworkStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtworkStatus::Available => "available",
            ArtworkStatus::Reserved => "reserved",
            ArtworkStatus::Sold => "sold",
        }
    }
}

impl fmt::Display for ArtworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtworkStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(ArtworkStatus::Available),
            "reserved" => Ok(ArtworkStatus::Reserved),
            "sold" => Ok(ArtworkStatus::Sold),
            other => Err(format!("unknown artwork status '{other}'")),
        }
    }
}

/// One row of the denormalized artwork read model (artist fields joined in).
#[derive(Debug, Clone)]
pub struct ArtworkView {
    pub id: i32,
    pub title: String,
    pub artist_id: i32,
    pub description: String,
    pub price: BigDecimal,
    pub status: ArtworkStatus,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub artist_name: String,
    pub artist_birth_year: Option<i32>,
    pub artist_origin: Option<String>,
    pub artist_specialty: Option<String>,
}
