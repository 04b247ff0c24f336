//! Network layer: wire types and REST helpers for the asset API.

pub mod api;
pub mod types;
