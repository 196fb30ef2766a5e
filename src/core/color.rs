//! Rule-based mapping from an RGB sample to a named color.

use crate::domain::model::{ColorCategory, Rgb};

/// HSV with hue in degrees (0-360) and saturation/value in percent (0-100).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub fn from_rgb((r, g, b): Rgb) -> Self {
        let r = f64::from(r) / 255.0;
        let g = f64::from(g) / 255.0;
        let b = f64::from(b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        if delta == 0.0 {
            return Self {
                h: 0.0,
                s: 0.0,
                v: max * 100.0,
            };
        }

        let rc = (max - r) / delta;
        let gc = (max - g) / delta;
        let bc = (max - b) / delta;
        let sector = if r == max {
            bc - gc
        } else if g == max {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };

        Self {
            h: (sector / 6.0).rem_euclid(1.0) * 360.0,
            s: delta / max * 100.0,
            v: max * 100.0,
        }
    }

    /// Saturation on a 0-1 scale.
    pub fn saturation_ratio(&self) -> f64 {
        self.s / 100.0
    }

    /// Value on a 0-1 scale.
    pub fn value_ratio(&self) -> f64 {
        self.v / 100.0
    }
}

type ColorRule = (ColorCategory, fn(&Hsv) -> bool);

fn between(x: f64, low: f64, high: f64) -> bool {
    low < x && x < high
}

// Evaluated in order; neutrals shadow the hue bands.
const NEUTRAL_RULES: [ColorRule; 6] = [
    (ColorCategory::Black, |c| c.v < 20.0),
    (ColorCategory::White, |c| c.v > 85.0 && c.s < 15.0),
    (ColorCategory::Gray, |c| c.s < 15.0),
    (ColorCategory::Brown, |c| {
        between(c.h, 15.0, 40.0) && between(c.s, 20.0, 60.0) && between(c.v, 20.0, 70.0)
    }),
    (ColorCategory::Beige, |c| {
        between(c.h, 30.0, 50.0) && between(c.s, 10.0, 40.0) && between(c.v, 70.0, 95.0)
    }),
    (ColorCategory::Navy, |c| {
        between(c.h, 200.0, 240.0) && c.s > 30.0 && between(c.v, 20.0, 50.0)
    }),
];

const HUE_BANDS: [(ColorCategory, &[(f64, f64)]); 7] = [
    (ColorCategory::Red, &[(0.0, 20.0), (340.0, 360.0)]),
    (ColorCategory::Orange, &[(20.0, 40.0)]),
    (ColorCategory::Yellow, &[(40.0, 70.0)]),
    (ColorCategory::Green, &[(70.0, 160.0)]),
    (ColorCategory::Blue, &[(160.0, 250.0)]),
    (ColorCategory::Purple, &[(250.0, 290.0)]),
    (ColorCategory::Pink, &[(290.0, 340.0)]),
];

pub fn classify(rgb: Rgb) -> ColorCategory {
    classify_hsv(&Hsv::from_rgb(rgb))
}

pub fn classify_hsv(hsv: &Hsv) -> ColorCategory {
    if let Some((color, _)) = NEUTRAL_RULES.iter().find(|(_, rule)| rule(hsv)) {
        return *color;
    }

    HUE_BANDS
        .iter()
        .find(|(_, ranges)| ranges.iter().any(|&(low, high)| low <= hsv.h && hsv.h < high))
        .map(|(color, _)| *color)
        .unwrap_or(ColorCategory::Gray)
}

pub fn to_hex((r, g, b): Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsv_conversion() {
        let red = Hsv::from_rgb((255, 0, 0));
        assert_eq!((red.h, red.s, red.v), (0.0, 100.0, 100.0));

        let blue = Hsv::from_rgb((0, 0, 255));
        assert!((blue.h - 240.0).abs() < 1e-9);

        let magenta_ish = Hsv::from_rgb((255, 0, 128));
        assert!(magenta_ish.h > 329.0 && magenta_ish.h < 331.0);

        let gray = Hsv::from_rgb((128, 128, 128));
        assert_eq!(gray.s, 0.0);
        assert!((gray.v - 50.196).abs() < 0.01);
    }

    #[test]
    fn test_neutrals() {
        assert_eq!(classify((0, 0, 0)), ColorCategory::Black);
        assert_eq!(classify((40, 10, 10)), ColorCategory::Black);
        assert_eq!(classify((250, 250, 250)), ColorCategory::White);
        assert_eq!(classify((128, 128, 128)), ColorCategory::Gray);
        assert_eq!(classify((120, 80, 50)), ColorCategory::Brown);
        assert_eq!(classify((220, 200, 160)), ColorCategory::Beige);
        assert_eq!(classify((30, 50, 100)), ColorCategory::Navy);
    }

    #[test]
    fn test_hue_bands() {
        assert_eq!(classify((220, 30, 30)), ColorCategory::Red);
        assert_eq!(classify((240, 140, 20)), ColorCategory::Orange);
        assert_eq!(classify((230, 220, 30)), ColorCategory::Yellow);
        assert_eq!(classify((30, 200, 60)), ColorCategory::Green);
        assert_eq!(classify((30, 90, 220)), ColorCategory::Blue);
        assert_eq!(classify((130, 40, 220)), ColorCategory::Purple);
        assert_eq!(classify((230, 40, 180)), ColorCategory::Pink);
        assert_eq!(classify((230, 30, 60)), ColorCategory::Red);
    }

    #[test]
    fn test_dark_desaturated_blue_is_navy_before_blue() {
        // Same hue as a plain blue, but dark enough to hit the navy rule first.
        assert_eq!(classify((20, 40, 110)), ColorCategory::Navy);
        assert_eq!(classify((40, 80, 220)), ColorCategory::Blue);
    }

    #[test]
    fn test_classification_is_pure() {
        let samples = [(12, 200, 99), (128, 128, 128), (200, 10, 10), (77, 66, 55)];
        let first: Vec<_> = samples.iter().map(|&c| classify(c)).collect();
        let second: Vec<_> = samples.iter().rev().map(|&c| classify(c)).collect();
        assert_eq!(first, second.into_iter().rev().collect::<Vec<_>>());
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex((0, 0, 0)), "#000000");
        assert_eq!(to_hex((255, 128, 10)), "#ff800a");
    }
}
