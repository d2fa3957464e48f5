//! Detection rules, one module per pattern group
//!
//! Each rule returns the reason text when it fires.

pub mod adverse;
pub mod archetypes;
pub mod assisting;
pub mod baseline;
pub mod career;
pub mod eruptive;
pub mod status;
pub mod wealth;
