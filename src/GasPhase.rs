//! # Gas Phase Module
//!
//! Gas phase of a bubbling fluidized-bed gasifier as a one-dimensional, axially discretized set of
//! conservation laws. The time derivatives are handed to an external stiff ODE integrator.
//!
//! ## Nomenclature
//!
//! | Symbol | Description | Units |
//! |--------|-------------|-------|
//! | `Tg` | gas temperature | K |
//! | `mfg` | gas mass flux | kg/(m²·s) |
//! | `rhob_g` | gas bulk density (per unit reactor volume) | kg/m³ |
//! | `rhob_k` | bulk density of species k | kg/m³ |
//! | `ug` | gas velocity, mfg/rhob_gav | m/s |
//! | `ef` | bed voidage | - |
//! | `afg` | gas volume fraction (ef in the bed, 1 in the freeboard) | - |
//! | `Lp` | expanded bed height | m |
//! | `umf` | minimum fluidization velocity | m/s |
//! | `Mg` | mixture molecular weight | g/mol |
//!
//! ## Governing equations
//!
//! ```text
//! ∂ρb_g/∂t = −∂ṁfg/∂x + Sg
//! ∂ρb_k/∂t = −∂(y_k·ṁfg)/∂x + S_k
//! ∂ṁfg/∂t = −∂(ṁfg·ug)/∂x + SmgV + DP
//! ∂Tg/∂t  = −ug·∂Tg/∂x + (−qgs + qg)/(ρb_g·cpg)
//! ```
//!
//! ## Submodules
//! - `gas_properties`: mixture molecular weight, viscosity, conductivity, heat capacity, Prandtl number
//! - `fluidization`: minimum fluidization velocity, bed expansion and voidage
//! - `pressure`: ideal-gas pressure and the pressure-gradient source
//! - `mass_flux`: cell averaging, drag, friction and the mass flux rate
//! - `energy`: heat transfer coefficients and the gas temperature rate
//! - `species_transport`: one parametric rate for the total gas and the six tracked densities
//! - `gas_phase_rhs`: the full pipeline behind a single call
//! - `gas_phase_state`: state, solid fields, sources and derivatives with the packed layout

pub mod energy;
pub mod fluidization;
pub mod gas_phase_error;
pub mod gas_phase_rhs;
pub mod gas_phase_state;
pub mod gas_properties;
pub mod mass_flux;
pub mod pressure;
pub mod species_transport;

mod energy_tests;
