//! Records catalogue REST backend.
//!
//! Exposes parallel CRUD endpoints for two resource kinds, categories and
//! collections, over a swappable persistence abstraction. The layout is
//! hexagonal: `domain` holds transport-agnostic types and ports, `inbound`
//! the HTTP adapter, `outbound` the persistence adapters, and `server` the
//! app assembly.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
