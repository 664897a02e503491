//! HTTP inbound adapter exposing REST endpoints.

pub mod categories;
pub mod collections;
pub mod responders;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

pub use responders::JSON_MEDIA_TYPE;
pub use state::HttpState;
