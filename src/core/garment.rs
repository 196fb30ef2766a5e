//! Garment category guess from image geometry and the leading color.

use crate::core::color::Hsv;
use crate::core::dominant::brightness;
use crate::domain::model::{GarmentCategory, Rgb, TemperatureRange};

const WIDE_ASPECT: f64 = 1.5;
const TALL_ASPECT: f64 = 0.6;
const DARK_BRIGHTNESS: f64 = 80.0;
const DULL_SATURATION: f64 = 40.0;
const NEUTRAL_BRIGHTNESS: f64 = 128.0;
const NEUTRAL_SATURATION: f64 = 50.0;

/// Default comfortable range per category, used to pre-fill inferred garments.
pub const CATEGORY_TEMPERATURES: [(GarmentCategory, TemperatureRange); 5] = [
    (GarmentCategory::Tops, TemperatureRange::new(15, 35)),
    (GarmentCategory::Bottoms, TemperatureRange::new(5, 35)),
    (GarmentCategory::Outerwear, TemperatureRange::new(-10, 20)),
    (GarmentCategory::Shoes, TemperatureRange::new(-10, 40)),
    (GarmentCategory::Accessories, TemperatureRange::new(-20, 40)),
];

pub fn default_temperature_range(category: GarmentCategory) -> TemperatureRange {
    CATEGORY_TEMPERATURES
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, range)| *range)
        .unwrap_or(TemperatureRange::new(10, 30))
}

pub fn guess_type((width, height): (u32, u32), dominant_colors: &[Rgb]) -> GarmentCategory {
    let aspect_ratio = if height == 0 {
        1.0
    } else {
        f64::from(width) / f64::from(height)
    };

    if aspect_ratio > WIDE_ASPECT {
        return GarmentCategory::Shoes;
    }
    if aspect_ratio < TALL_ASPECT {
        return GarmentCategory::Bottoms;
    }

    let (brightness, saturation) = match dominant_colors.first() {
        Some(&main) => (brightness(main), Hsv::from_rgb(main).s),
        None => (NEUTRAL_BRIGHTNESS, NEUTRAL_SATURATION),
    };

    if brightness < DARK_BRIGHTNESS && saturation < DULL_SATURATION {
        GarmentCategory::Outerwear
    } else {
        GarmentCategory::Tops
    }
}
