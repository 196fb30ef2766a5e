//! Temperature bands and the per-band outfit rules.
//!
//! Both tables are ordered coldest first. Band membership is half-open
//! `[min, max)`, and inputs outside the table clamp to the nearest end.

use crate::domain::model::{GarmentCategory, TemperatureBand};

use GarmentCategory::{Accessories, Bottoms, Outerwear, Shoes, Tops};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandSpec {
    pub band: TemperatureBand,
    pub min: f64,
    pub max: f64,
    pub label: &'static str,
}

impl BandSpec {
    pub fn contains(&self, temperature: f64) -> bool {
        self.min <= temperature && temperature < self.max
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

pub const BAND_TABLE: [BandSpec; 6] = [
    BandSpec {
        band: TemperatureBand::VeryCold,
        min: -20.0,
        max: 0.0,
        label: "Very cold (-20°C ~ 0°C)",
    },
    BandSpec {
        band: TemperatureBand::Cold,
        min: 0.0,
        max: 10.0,
        label: "Cold (0°C ~ 10°C)",
    },
    BandSpec {
        band: TemperatureBand::Cool,
        min: 10.0,
        max: 18.0,
        label: "Cool (10°C ~ 18°C)",
    },
    BandSpec {
        band: TemperatureBand::Mild,
        min: 18.0,
        max: 25.0,
        label: "Mild (18°C ~ 25°C)",
    },
    BandSpec {
        band: TemperatureBand::Warm,
        min: 25.0,
        max: 32.0,
        label: "Warm (25°C ~ 32°C)",
    },
    BandSpec {
        band: TemperatureBand::Hot,
        min: 32.0,
        max: 45.0,
        label: "Hot (32°C ~ 45°C)",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutfitRule {
    pub band: TemperatureBand,
    pub required: &'static [GarmentCategory],
    pub optional: &'static [GarmentCategory],
    pub layers: u8,
    pub tips: &'static str,
}

pub const OUTFIT_RULES: [OutfitRule; 6] = [
    OutfitRule {
        band: TemperatureBand::VeryCold,
        required: &[Tops, Bottoms, Outerwear, Shoes],
        optional: &[Accessories],
        layers: 3,
        tips: "Freezing out there: wear several layers and keep warm",
    },
    OutfitRule {
        band: TemperatureBand::Cold,
        required: &[Tops, Bottoms, Outerwear, Shoes],
        optional: &[Accessories],
        layers: 2,
        tips: "Cold weather: a thick coat is recommended",
    },
    OutfitRule {
        band: TemperatureBand::Cool,
        required: &[Tops, Bottoms, Shoes],
        optional: &[Outerwear, Accessories],
        layers: 2,
        tips: "Cool weather: pair with a light jacket",
    },
    OutfitRule {
        band: TemperatureBand::Mild,
        required: &[Tops, Bottoms, Shoes],
        optional: &[Accessories],
        layers: 1,
        tips: "Mild weather: anything comfortable will do",
    },
    OutfitRule {
        band: TemperatureBand::Warm,
        required: &[Tops, Bottoms, Shoes],
        optional: &[Accessories],
        layers: 1,
        tips: "Warm weather: choose light, breathable clothes",
    },
    OutfitRule {
        band: TemperatureBand::Hot,
        required: &[Tops, Bottoms, Shoes],
        optional: &[Accessories],
        layers: 1,
        tips: "Hot weather: short sleeves and shorts, and mind the sun",
    },
];

/// Maps any temperature to a band. Never fails.
pub fn band_of(temperature: f64) -> TemperatureBand {
    if let Some(spec) = BAND_TABLE.iter().find(|spec| spec.contains(temperature)) {
        return spec.band;
    }

    let coldest = &BAND_TABLE[0];
    let hottest = &BAND_TABLE[BAND_TABLE.len() - 1];
    if temperature < coldest.min {
        coldest.band
    } else {
        hottest.band
    }
}

pub fn band_spec(band: TemperatureBand) -> &'static BandSpec {
    BAND_TABLE
        .iter()
        .find(|spec| spec.band == band)
        .unwrap_or(&BAND_TABLE[3])
}

pub fn rules_for(band: TemperatureBand) -> &'static OutfitRule {
    OUTFIT_RULES
        .iter()
        .find(|rule| rule.band == band)
        .unwrap_or(&OUTFIT_RULES[3])
}
