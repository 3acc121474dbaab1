pub mod api_doc;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod types;

#[cfg(test)]
mod tests;
