use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::utils::error::WardrobeError;

/// An RGB triple with 0-255 channels.
pub type Rgb = (u8, u8, u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GarmentCategory {
    Tops,
    Bottoms,
    Outerwear,
    Shoes,
    Accessories,
}

impl GarmentCategory {
    pub const ALL: [GarmentCategory; 5] = [
        GarmentCategory::Tops,
        GarmentCategory::Bottoms,
        GarmentCategory::Outerwear,
        GarmentCategory::Shoes,
        GarmentCategory::Accessories,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GarmentCategory::Tops => "tops",
            GarmentCategory::Bottoms => "bottoms",
            GarmentCategory::Outerwear => "outerwear",
            GarmentCategory::Shoes => "shoes",
            GarmentCategory::Accessories => "accessories",
        }
    }

    /// Label shown to users, e.g. in an outfit's missing list.
    pub fn label(&self) -> &'static str {
        match self {
            GarmentCategory::Tops => "Tops",
            GarmentCategory::Bottoms => "Bottoms",
            GarmentCategory::Outerwear => "Outerwear",
            GarmentCategory::Shoes => "Shoes",
            GarmentCategory::Accessories => "Accessories",
        }
    }
}

impl fmt::Display for GarmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GarmentCategory {
    type Err = WardrobeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GarmentCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| WardrobeError::invalid_input(format!("unknown garment category '{}'", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorCategory {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    Black,
    White,
    Gray,
    Brown,
    Beige,
    Navy,
}

impl ColorCategory {
    pub const ALL: [ColorCategory; 13] = [
        ColorCategory::Red,
        ColorCategory::Orange,
        ColorCategory::Yellow,
        ColorCategory::Green,
        ColorCategory::Blue,
        ColorCategory::Purple,
        ColorCategory::Pink,
        ColorCategory::Black,
        ColorCategory::White,
        ColorCategory::Gray,
        ColorCategory::Brown,
        ColorCategory::Beige,
        ColorCategory::Navy,
    ];

    pub const NEUTRALS: [ColorCategory; 4] = [
        ColorCategory::Black,
        ColorCategory::White,
        ColorCategory::Gray,
        ColorCategory::Beige,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorCategory::Red => "red",
            ColorCategory::Orange => "orange",
            ColorCategory::Yellow => "yellow",
            ColorCategory::Green => "green",
            ColorCategory::Blue => "blue",
            ColorCategory::Purple => "purple",
            ColorCategory::Pink => "pink",
            ColorCategory::Black => "black",
            ColorCategory::White => "white",
            ColorCategory::Gray => "gray",
            ColorCategory::Brown => "brown",
            ColorCategory::Beige => "beige",
            ColorCategory::Navy => "navy",
        }
    }

    pub fn is_neutral(&self) -> bool {
        Self::NEUTRALS.contains(self)
    }
}

impl fmt::Display for ColorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorCategory {
    type Err = WardrobeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| WardrobeError::invalid_input(format!("unknown color '{}'", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureBand {
    VeryCold,
    Cold,
    Cool,
    Mild,
    Warm,
    Hot,
}

impl TemperatureBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureBand::VeryCold => "very_cold",
            TemperatureBand::Cold => "cold",
            TemperatureBand::Cool => "cool",
            TemperatureBand::Mild => "mild",
            TemperatureBand::Warm => "warm",
            TemperatureBand::Hot => "hot",
        }
    }
}

impl fmt::Display for TemperatureBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive comfortable temperature range in °C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemperatureRange {
    pub min: i32,
    pub max: i32,
}

impl TemperatureRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, temperature: f64) -> bool {
        f64::from(self.min) <= temperature && temperature <= f64::from(self.max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GarmentItem {
    pub id: u64,
    pub name: String,
    pub category: GarmentCategory,
    pub color: Option<ColorCategory>,
    pub style: Option<String>,
    pub temp_min: i32,
    pub temp_max: i32,
    pub image_path: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GarmentItem {
    pub fn temperature_range(&self) -> TemperatureRange {
        TemperatureRange::new(self.temp_min, self.temp_max)
    }

    pub fn suits_temperature(&self, temperature: f64) -> bool {
        self.temperature_range().contains(temperature)
    }

    /// Untagged garments go with every style.
    pub fn matches_style(&self, style: &str) -> bool {
        match self.style.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(tag) => tag == style,
        }
    }
}

/// Fields supplied when adding a garment; the store assigns id and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewGarment {
    pub name: String,
    pub category: GarmentCategory,
    pub color: Option<ColorCategory>,
    pub style: Option<String>,
    pub temp_min: i32,
    pub temp_max: i32,
    pub image_path: Option<String>,
    pub description: Option<String>,
}

impl NewGarment {
    pub fn new(name: impl Into<String>, category: GarmentCategory, temp_min: i32, temp_max: i32) -> Self {
        Self {
            name: name.into(),
            category,
            color: None,
            style: None,
            temp_min,
            temp_max,
            image_path: None,
            description: None,
        }
    }

    pub fn with_color(mut self, color: ColorCategory) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }
}

/// Partial update; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GarmentPatch {
    pub name: Option<String>,
    pub category: Option<GarmentCategory>,
    pub color: Option<ColorCategory>,
    pub style: Option<String>,
    pub temp_min: Option<i32>,
    pub temp_max: Option<i32>,
    pub image_path: Option<String>,
    pub description: Option<String>,
}

impl GarmentPatch {
    pub fn is_empty(&self) -> bool {
        *self == GarmentPatch::default()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OutfitCandidate {
    pub id: usize,
    pub items: BTreeMap<GarmentCategory, GarmentItem>,
    pub missing: Vec<String>,
    pub score: u8,
    pub band: TemperatureBand,
    pub tips: String,
}

impl OutfitCandidate {
    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageInferenceResult {
    pub suggested_category: GarmentCategory,
    pub suggested_color: ColorCategory,
    pub dominant_colors: Vec<String>,
    pub suggested_temperature: TemperatureRange,
    pub confidence: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ImageInferenceResult {
    /// Confidence 0 means the analyzer had nothing usable to offer.
    pub fn is_usable(&self) -> bool {
        self.confidence > 0
    }

    /// Pre-fills a garment from the inferred fields for the user to confirm.
    pub fn into_new_garment(self, name: impl Into<String>) -> NewGarment {
        NewGarment {
            name: name.into(),
            category: self.suggested_category,
            color: Some(self.suggested_color),
            style: None,
            temp_min: self.suggested_temperature.min,
            temp_max: self.suggested_temperature.max,
            image_path: None,
            description: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WardrobeStatistics {
    pub total: usize,
    pub by_category: BTreeMap<GarmentCategory, usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BandCoverage {
    pub band: TemperatureBand,
    pub label: String,
    pub count: usize,
    pub has_complete_outfit: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct WardrobeSummary {
    pub statistics: WardrobeStatistics,
    pub coverage: Vec<BandCoverage>,
    pub recent_items: Vec<GarmentItem>,
}
