pub mod admin;
pub mod auth;
pub mod client;
pub mod courses;
pub mod fixtures;
pub mod messaging;
pub mod token;
pub mod types;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;

pub use client::ApiClient;
pub use types::ApiError;
