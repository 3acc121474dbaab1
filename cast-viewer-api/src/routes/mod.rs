pub mod mints;
pub mod tokens;
