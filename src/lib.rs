//! vbump - bump `VERSION` files ahead of a release
//!
//! Reads `VERSION` (or `plugins/<protocol>/VERSION` for protocol plugins),
//! computes the next patch, minor or major version, makes sure the repository
//! is not on `main` and has no uncommitted changes, and hands the new version
//! to `make bump`, which owns the actual write.
//!
//! # Examples
//!
//! ## Bumping a version
//!
//! ```
//! use vbump::{
//!     commands::bump_version::{bump_version, BumpLevel},
//!     types::ProtocolVersion,
//! };
//!
//! let current = ProtocolVersion::parse("1.2.3", None).unwrap();
//! let new = bump_version(BumpLevel::Minor, &current);
//! assert_eq!(new.to_string(), "1.3.0");
//! ```
//!
//! ## Protocol versions
//!
//! ```
//! use vbump::types::ProtocolVersion;
//!
//! let current = ProtocolVersion::parse("solana-1.12.2", Some("solana")).unwrap();
//! assert_eq!(current.unprefixed(), "1.12.2");
//! assert_eq!(current.to_string(), "solana-1.12.2");
//! ```

pub mod commands;
pub mod error;
pub mod types;
pub mod utils;

pub use commands::bump_version;
pub use error::Error;

pub type Result<T> = anyhow::Result<T>;
