pub mod default;
pub mod mints;
pub mod tokens;
