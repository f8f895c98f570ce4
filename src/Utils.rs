//! Task-file loading and result packaging around the gas-phase model.
pub mod load_from_file;
pub mod results;
