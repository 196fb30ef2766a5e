// Adapters layer: concrete implementations of the domain ports (stores, weather, randomness, photo archive).

pub mod csv_store;
pub mod memory_store;
pub mod random;
pub mod uploads;
pub mod weather;
