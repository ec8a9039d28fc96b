//! Flutter-facing bindings for `folio_core`.

pub mod api;
mod host_bridge;
