pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{csv_store::CsvStore, memory_store::InMemoryStore, random::RngSource};
pub use crate::config::AppConfig;
pub use crate::core::analyzer::ImageAnalyzer;
pub use crate::core::bands::band_of;
pub use crate::core::recommender::OutfitRecommender;
pub use crate::utils::error::{Result, WardrobeError};
