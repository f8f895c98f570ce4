//! # Setup Module
//!
//! Everything a gasifier run needs before the first right-hand-side evaluation:
//! - `bfb_params`: validated, immutable parameter record built from the raw configuration
//! - `grid`: container for externally generated axial grids
//! - `initial_conditions`: start-up gas and solid fields

pub mod bfb_params;
pub mod grid;
pub mod initial_conditions;
mod setup_tests;
