//! Dominant color extraction by coarse quantization and frequency ranking.
//!
//! Colors are reported as the floor of their 32-level bucket rather than
//! the mean of the pixels that fell into it. That approximation is kept on
//! purpose so the classifier sees stable bucket values.

use std::collections::HashMap;

use image::imageops::FilterType;
use image::DynamicImage;

use crate::domain::model::Rgb;

pub const DEFAULT_NUM_COLORS: usize = 5;
pub const SAMPLE_SIZE: u32 = 100;
pub const QUANT_STEP: u8 = 32;
const MIN_BRIGHTNESS: f64 = 20.0;
const MAX_BRIGHTNESS: f64 = 240.0;
const FALLBACK_PIXELS: usize = 100;

#[derive(Debug, Clone)]
pub struct DominantColorExtractor {
    num_colors: usize,
}

impl Default for DominantColorExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DominantColorExtractor {
    pub fn new() -> Self {
        Self {
            num_colors: DEFAULT_NUM_COLORS,
        }
    }

    pub fn with_num_colors(num_colors: usize) -> Self {
        Self { num_colors }
    }

    /// Up to `num_colors` bucket colors, most frequent first.
    pub fn extract(&self, image: &DynamicImage) -> Vec<Rgb> {
        let small = image.resize_exact(SAMPLE_SIZE, SAMPLE_SIZE, FilterType::Lanczos3);

        let mut pixels: Vec<Rgb> = small
            .to_rgb8()
            .pixels()
            .map(|p| (p[0], p[1], p[2]))
            .filter(|&rgb| {
                let brightness = brightness(rgb);
                MIN_BRIGHTNESS < brightness && brightness < MAX_BRIGHTNESS
            })
            .collect();

        if pixels.is_empty() {
            tracing::debug!("all pixels filtered as background, sampling raw pixels instead");
            pixels = raw_pixels(&small, FALLBACK_PIXELS);
        }

        rank_buckets(&pixels, self.num_colors)
    }
}

pub fn brightness((r, g, b): Rgb) -> f64 {
    (f64::from(r) + f64::from(g) + f64::from(b)) / 3.0
}

pub fn quantize((r, g, b): Rgb) -> Rgb {
    let q = |c: u8| (c / QUANT_STEP) * QUANT_STEP;
    (q(r), q(g), q(b))
}

/// First `limit` pixels in the image's own channel layout. Single-channel
/// images have their luma replicated across r, g and b.
fn raw_pixels(image: &DynamicImage, limit: usize) -> Vec<Rgb> {
    match image {
        DynamicImage::ImageLuma8(gray) => gray.pixels().take(limit).map(|p| (p[0], p[0], p[0])).collect(),
        DynamicImage::ImageLumaA8(gray) => gray.pixels().take(limit).map(|p| (p[0], p[0], p[0])).collect(),
        other => other
            .to_rgb8()
            .pixels()
            .take(limit)
            .map(|p| (p[0], p[1], p[2]))
            .collect(),
    }
}

/// Counts quantized colors; ties keep first-seen order.
fn rank_buckets(pixels: &[Rgb], limit: usize) -> Vec<Rgb> {
    let mut counts: HashMap<Rgb, (usize, usize)> = HashMap::new();
    for (index, &pixel) in pixels.iter().enumerate() {
        counts.entry(quantize(pixel)).or_insert((0, index)).0 += 1;
    }

    let mut ranked: Vec<(Rgb, usize, usize)> = counts
        .into_iter()
        .map(|(color, (count, first_seen))| (color, count, first_seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked.into_iter().take(limit).map(|(color, _, _)| color).collect()
}
