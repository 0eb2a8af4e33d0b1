#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # cannamap-entities
//!
//! Reusable, agnostic domain entities for the cannabis registry map.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod geo;
pub mod registry;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
