pub mod version;

pub use version::{increment_field, parse_leading_u64, ProtocolVersion};
