//! Gateways to external services.

mod forward;

pub mod nominatim;
pub mod opencage;
