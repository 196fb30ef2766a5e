use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::core::bands::{band_of, rules_for, BAND_TABLE};
use crate::domain::model::{
    BandCoverage, ColorCategory, GarmentCategory, GarmentItem, OutfitCandidate, WardrobeSummary,
};
use crate::domain::ports::{ItemStore, RandomSource};
use crate::utils::error::{Result, WardrobeError};

/// Optional categories are skipped when the draw falls at or below this.
const OPTIONAL_SKIP_THRESHOLD: f64 = 0.3;
const POINTS_PER_ITEM: u32 = 20;
const COMPLETE_BONUS: u32 = 30;
const PALETTE_BONUS: u32 = 20;
const NEUTRAL_BONUS: u32 = 10;
const RECENT_ITEMS: usize = 5;
const CORE_CATEGORIES: [GarmentCategory; 3] = [
    GarmentCategory::Tops,
    GarmentCategory::Bottoms,
    GarmentCategory::Shoes,
];

pub struct OutfitRecommender<S: ItemStore> {
    store: S,
}

impl<S: ItemStore> OutfitRecommender<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Generates `count` independent candidates for `temperature`, best first.
    ///
    /// Missing garments never fail the call; they show up in
    /// [`OutfitCandidate::missing`] and lower the score instead.
    pub fn recommend(
        &self,
        temperature: f64,
        style: Option<&str>,
        count: usize,
        rng: &mut dyn RandomSource,
    ) -> Result<Vec<OutfitCandidate>> {
        if !temperature.is_finite() {
            return Err(WardrobeError::invalid_input(format!(
                "temperature must be a finite number, got {}",
                temperature
            )));
        }
        if count == 0 {
            return Ok(Vec::new());
        }

        let band = band_of(temperature);
        let rules = rules_for(band);
        let style = style.map(str::trim).filter(|s| !s.is_empty());

        let mut suitable: HashMap<GarmentCategory, Vec<GarmentItem>> = HashMap::new();
        for category in GarmentCategory::ALL {
            let mut items = self.store.list_for_temperature(temperature, Some(category))?;
            if let Some(style) = style {
                items.retain(|item| item.matches_style(style));
            }
            suitable.insert(category, items);
        }

        tracing::info!(
            "recommending {} outfit(s) for {:.1}°C ({}, style {:?})",
            count,
            temperature,
            band,
            style
        );

        let mut candidates = Vec::with_capacity(count);
        for index in 0..count {
            let mut items = BTreeMap::new();
            let mut missing = Vec::new();

            for &category in rules.required {
                match suitable.get(&category).filter(|items| !items.is_empty()) {
                    Some(options) => {
                        let chosen = options[rng.pick(options.len())].clone();
                        items.insert(category, chosen);
                    }
                    None => missing.push(category.label().to_string()),
                }
            }

            for &category in rules.optional {
                if let Some(options) = suitable.get(&category).filter(|items| !items.is_empty()) {
                    if rng.next_f64() > OPTIONAL_SKIP_THRESHOLD {
                        let chosen = options[rng.pick(options.len())].clone();
                        items.insert(category, chosen);
                    }
                }
            }

            let score = score_outfit(&items, &missing);
            tracing::debug!(
                "candidate {}: {} item(s), missing {:?}, score {}",
                index + 1,
                items.len(),
                missing,
                score
            );

            candidates.push(OutfitCandidate {
                id: index + 1,
                items,
                missing,
                score,
                band,
                tips: rules.tips.to_string(),
            });
        }

        // sort_by is stable, so equal scores keep generation order.
        candidates.sort_by(|a, b| b.score.cmp(&a.score));
        Ok(candidates)
    }

    /// Item counts, per-band coverage and the latest additions.
    pub fn wardrobe_summary(&self) -> Result<WardrobeSummary> {
        let statistics = self.store.statistics()?;

        let mut coverage = Vec::with_capacity(BAND_TABLE.len());
        for spec in BAND_TABLE.iter() {
            let items = self.store.list_for_temperature(spec.midpoint(), None)?;
            let categories: BTreeSet<GarmentCategory> = items.iter().map(|i| i.category).collect();
            coverage.push(BandCoverage {
                band: spec.band,
                label: spec.label.to_string(),
                count: items.len(),
                has_complete_outfit: CORE_CATEGORIES.iter().all(|c| categories.contains(c)),
            });
        }

        let mut recent_items = self.store.list(None)?;
        recent_items.truncate(RECENT_ITEMS);

        Ok(WardrobeSummary {
            statistics,
            coverage,
            recent_items,
        })
    }
}

/// Deterministic score in `0..=100` for a set of chosen garments.
pub fn score_outfit(items: &BTreeMap<GarmentCategory, GarmentItem>, missing: &[String]) -> u8 {
    let mut score = items.len() as u32 * POINTS_PER_ITEM;

    if missing.is_empty() {
        score += COMPLETE_BONUS;
    }

    let colors: BTreeSet<ColorCategory> = items.values().filter_map(|item| item.color).collect();
    if (2..=3).contains(&colors.len()) {
        score += PALETTE_BONUS;
    }
    if colors.iter().any(ColorCategory::is_neutral) {
        score += NEUTRAL_BONUS;
    }

    score.min(100) as u8
}
