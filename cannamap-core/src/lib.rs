//! # cannamap-core
//!
//! Business logic of the cannabis registry map:
//! distances, nearest-location lookup and license statistics.

pub mod gateways;
pub mod resolver;
pub mod usecases;

pub mod entities {
    pub use cannamap_entities::{geo::*, registry::*};
}
