//! One module per subcommand, each exposing `execute`.

#[cfg(feature = "audit-log")]
pub mod audit_cmd;
pub mod completions;
pub mod decrypt;
pub mod encrypt;
pub mod generate;
pub mod inspect;
pub mod strength;
