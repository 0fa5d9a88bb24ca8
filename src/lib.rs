#[cfg(feature = "audit-log")]
pub mod audit;
pub mod cipher;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod errors;
pub mod logging;
