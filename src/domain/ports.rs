use crate::domain::model::{
    GarmentCategory, GarmentItem, GarmentPatch, NewGarment, WardrobeStatistics,
};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Capability interface over wherever garments are kept.
pub trait ItemStore: Send + Sync {
    /// Newest first, optionally restricted to one category.
    fn list(&self, category: Option<GarmentCategory>) -> Result<Vec<GarmentItem>>;
    fn get(&self, id: u64) -> Result<Option<GarmentItem>>;
    fn add(&self, garment: NewGarment) -> Result<GarmentItem>;
    fn update(&self, id: u64, patch: GarmentPatch) -> Result<bool>;
    fn remove(&self, id: u64) -> Result<bool>;

    fn list_for_temperature(
        &self,
        temperature: f64,
        category: Option<GarmentCategory>,
    ) -> Result<Vec<GarmentItem>> {
        Ok(self
            .list(category)?
            .into_iter()
            .filter(|item| item.suits_temperature(temperature))
            .collect())
    }

    fn statistics(&self) -> Result<WardrobeStatistics> {
        let items = self.list(None)?;
        let mut stats = WardrobeStatistics {
            total: items.len(),
            ..Default::default()
        };
        for item in &items {
            *stats.by_category.entry(item.category).or_insert(0) += 1;
        }
        Ok(stats)
    }
}

/// Source of randomness for outfit generation.
pub trait RandomSource {
    /// Uniform index in `0..len`; `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
    /// Uniform value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Current air temperature in °C.
    async fn current_temperature(&self, city: &str) -> Result<f64>;
}
