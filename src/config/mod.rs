//! Project settings loaded from `.seedseal.toml`.

pub mod settings;

pub use settings::Settings;
