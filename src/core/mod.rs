pub mod analyzer;
pub mod bands;
pub mod color;
pub mod dominant;
pub mod garment;
pub mod recommender;

pub use crate::domain::model::{
    ColorCategory, GarmentCategory, GarmentItem, ImageInferenceResult, OutfitCandidate, Rgb,
    TemperatureBand,
};
pub use crate::domain::ports::{ItemStore, RandomSource, WeatherProvider};
pub use crate::utils::error::Result;
