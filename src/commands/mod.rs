pub mod bump_version;
