//! Mobile-shell bridge for GeoRemind core.

pub mod api;
