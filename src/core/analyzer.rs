//! Photo-to-metadata inference. The public entry points never fail: any
//! decoding problem turns into a zero-confidence fallback suggestion.

use std::path::Path;

use image::{DynamicImage, GenericImageView};

use crate::core::color::{self, Hsv};
use crate::core::dominant::DominantColorExtractor;
use crate::core::garment;
use crate::domain::model::{
    ColorCategory, GarmentCategory, ImageInferenceResult, Rgb, TemperatureRange,
};
use crate::utils::error::Result;

const REPORTED_COLORS: usize = 3;
const BASE_CONFIDENCE: u32 = 50;
const FALLBACK_SAMPLE: Rgb = (128, 128, 128);

#[derive(Debug, Clone, Default)]
pub struct ImageAnalyzer {
    extractor: DominantColorExtractor,
}

impl ImageAnalyzer {
    pub fn new(extractor: DominantColorExtractor) -> Self {
        Self { extractor }
    }

    /// Analyzes encoded image bytes (png, jpeg, gif, webp, ...).
    pub fn analyze(&self, bytes: &[u8]) -> ImageInferenceResult {
        self.try_analyze(bytes).unwrap_or_else(|e| {
            tracing::warn!("image analysis failed, returning fallback: {}", e);
            Self::fallback(e.to_string())
        })
    }

    pub fn analyze_file<P: AsRef<Path>>(&self, path: P) -> ImageInferenceResult {
        match std::fs::read(path.as_ref()) {
            Ok(bytes) => self.analyze(&bytes),
            Err(e) => {
                tracing::warn!("could not read {:?}: {}", path.as_ref(), e);
                Self::fallback(e.to_string())
            }
        }
    }

    pub fn analyze_image(&self, image: &DynamicImage) -> ImageInferenceResult {
        let dominant = self.extractor.extract(image);
        let dimensions = image.dimensions();

        let suggested_color = color::classify(dominant.first().copied().unwrap_or(FALLBACK_SAMPLE));
        let suggested_category = garment::guess_type(dimensions, &dominant);
        let confidence = confidence(dimensions, &dominant);

        tracing::debug!(
            "inferred {} / {} from {}x{} image, confidence {}",
            suggested_category,
            suggested_color,
            dimensions.0,
            dimensions.1,
            confidence
        );

        ImageInferenceResult {
            suggested_category,
            suggested_color,
            dominant_colors: dominant
                .iter()
                .take(REPORTED_COLORS)
                .map(|&c| color::to_hex(c))
                .collect(),
            suggested_temperature: garment::default_temperature_range(suggested_category),
            confidence,
            error: None,
        }
    }

    fn try_analyze(&self, bytes: &[u8]) -> Result<ImageInferenceResult> {
        let image = image::load_from_memory(bytes)?;
        Ok(self.analyze_image(&image))
    }

    pub fn fallback(reason: impl Into<String>) -> ImageInferenceResult {
        ImageInferenceResult {
            suggested_category: GarmentCategory::Tops,
            suggested_color: ColorCategory::Black,
            dominant_colors: vec!["#000000".to_string()],
            suggested_temperature: TemperatureRange::new(15, 30),
            confidence: 0,
            error: Some(reason.into()),
        }
    }
}

/// 50 base, plus image size and color clarity bonuses, capped at 100.
pub fn confidence((width, height): (u32, u32), dominant: &[Rgb]) -> u8 {
    let mut score = BASE_CONFIDENCE;

    let short_side = width.min(height);
    if short_side >= 200 {
        score += 15;
    }
    if short_side >= 400 {
        score += 10;
    }

    if let Some(&main) = dominant.first() {
        let hsv = Hsv::from_rgb(main);
        if hsv.saturation_ratio() > 0.3 {
            score += 15;
        }
        let value = hsv.value_ratio();
        if value > 0.3 && value < 0.9 {
            score += 10;
        }
    }

    score.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb as Pixel, RgbImage};
    use std::io::Cursor;

    fn png_bytes(img: RgbImage) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(img).write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_malformed_bytes_fall_back() {
        let result = ImageAnalyzer::default().analyze(b"definitely not an image");
        assert_eq!(result.confidence, 0);
        assert_eq!(result.suggested_category, GarmentCategory::Tops);
        assert_eq!(result.suggested_color, ColorCategory::Black);
        assert_eq!(result.dominant_colors, vec!["#000000"]);
        assert_eq!(result.suggested_temperature, TemperatureRange::new(15, 30));
        assert!(result.error.is_some());
        assert!(!result.is_usable());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let result = ImageAnalyzer::default().analyze_file("/nonexistent/shirt.png");
        assert_eq!(result.confidence, 0);
        assert!(result.error.is_some());
    }

    #[test]
    fn test_saturated_square_top() {
        let bytes = png_bytes(RgbImage::from_pixel(400, 400, Pixel([200, 40, 40])));
        let result = ImageAnalyzer::default().analyze(&bytes);

        assert_eq!(result.suggested_category, GarmentCategory::Tops);
        assert_eq!(result.suggested_color, ColorCategory::Red);
        assert_eq!(result.dominant_colors, vec!["#c02020"]);
        assert_eq!(result.suggested_temperature, TemperatureRange::new(15, 35));
        // 50 + 15 + 10 for size, +15 saturation, +10 value.
        assert_eq!(result.confidence, 100);
        assert!(result.error.is_none());
    }

    #[test]
    fn test_wide_photo_is_shoes() {
        let bytes = png_bytes(RgbImage::from_pixel(320, 160, Pixel([128, 128, 128])));
        let result = ImageAnalyzer::default().analyze(&bytes);

        assert_eq!(result.suggested_category, GarmentCategory::Shoes);
        assert_eq!(result.suggested_color, ColorCategory::Gray);
        assert_eq!(result.suggested_temperature, TemperatureRange::new(-10, 40));
    }

    #[test]
    fn test_confidence_bonuses() {
        assert_eq!(confidence((100, 100), &[]), 50);
        assert_eq!(confidence((250, 1000), &[]), 65);
        assert_eq!(confidence((500, 500), &[]), 75);
        // Gray: no saturation bonus, value 0.5 earns the clarity bonus.
        assert_eq!(confidence((100, 100), &[(128, 128, 128)]), 60);
        // Near-white: neither bonus.
        assert_eq!(confidence((100, 100), &[(240, 240, 240)]), 50);
    }
}
