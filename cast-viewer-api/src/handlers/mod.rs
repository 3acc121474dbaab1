pub mod default_handler;
pub mod mints_handler;
pub mod tokens_handler;
