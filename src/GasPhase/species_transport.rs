//! # Density Transport Module
//!
//! One upwind finite-volume operation for the total gas bulk density and the six tracked densities
//! (H₂, CH₄, CO, CO₂, H₂O, tar):
//!
//! ```text
//! ∂ρb_k/∂t = −∂(y_k·ṁfg)/∂x + S_k,    y_k = ρb_k/ρb_g
//! ```
//!
//! The densities differ only in the tracked field, the inlet flux at cell 0 and the reaction source.
//! The feed gas is pure steam: the H₂O inlet concentration equals the inlet gas bulk density, all other
//! species enter with zero concentration, and the total gas density enters with the inlet mass flux.
use super::gas_phase_state::{GasPhaseState, ReactionSources};
use crate::Setup::bfb_params::BFBParams;
use crate::Setup::grid::Grid;
use nalgebra::DVector;

/// density transported by `density_rate`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackedDensity {
    /// total gas bulk density
    Gas,
    H2,
    CH4,
    CO,
    CO2,
    H2O,
    /// tar vapour
    Tar,
}

impl TrackedDensity {
    pub const ALL: [TrackedDensity; 7] = [
        TrackedDensity::Gas,
        TrackedDensity::H2,
        TrackedDensity::CH4,
        TrackedDensity::CO,
        TrackedDensity::CO2,
        TrackedDensity::H2O,
        TrackedDensity::Tar,
    ];

    /// bulk density of the tracked quantity at the inlet, kg/m³
    pub fn inlet_concentration(self, params: &BFBParams) -> f64 {
        match self {
            TrackedDensity::Gas | TrackedDensity::H2O => params.rhob_gin,
            _ => 0.0,
        }
    }

    /// mass flux entering cell 0, kg/(m²·s)
    pub fn inlet_flux(self, params: &BFBParams) -> f64 {
        match self {
            TrackedDensity::Gas => params.mfgin,
            _ => self.inlet_concentration(params) * params.ugin,
        }
    }

    pub fn field(self, state: &GasPhaseState) -> &DVector<f64> {
        match self {
            TrackedDensity::Gas => &state.rhob_g,
            TrackedDensity::H2 => &state.rhob_h2,
            TrackedDensity::CH4 => &state.rhob_ch4,
            TrackedDensity::CO => &state.rhob_co,
            TrackedDensity::CO2 => &state.rhob_co2,
            TrackedDensity::H2O => &state.rhob_h2o,
            TrackedDensity::Tar => &state.rhob_t,
        }
    }

    pub fn source(self, sources: &ReactionSources) -> &DVector<f64> {
        match self {
            TrackedDensity::Gas => &sources.Sg,
            TrackedDensity::H2 => &sources.Sh2,
            TrackedDensity::CH4 => &sources.Sch4,
            TrackedDensity::CO => &sources.Sco,
            TrackedDensity::CO2 => &sources.Sco2,
            TrackedDensity::H2O => &sources.Sh2o,
            TrackedDensity::Tar => &sources.St,
        }
    }
}

/// ∂ρb_k/∂t along the reactor, kg/(m³·s)
#[allow(non_snake_case)]
pub fn density_rate(
    tracked: TrackedDensity,
    params: &BFBParams,
    grid: &Grid,
    state: &GasPhaseState,
    sources: &ReactionSources,
) -> DVector<f64> {
    let N = grid.len();
    let dx = &grid.dx;
    let mfg = &state.mfg;
    let S = tracked.source(sources);

    // mass fraction of the tracked density, identically 1 for the total gas
    let y = match tracked {
        TrackedDensity::Gas => DVector::from_element(N, 1.0),
        _ => tracked.field(state).component_div(&state.rhob_g),
    };

    let mut drhob_dt = DVector::zeros(N);
    drhob_dt[0] = -(y[0] * mfg[0] - tracked.inlet_flux(params)) / dx[0] + S[0];
    for i in 1..N {
        drhob_dt[i] = -(y[i] * mfg[i] - y[i - 1] * mfg[i - 1]) / dx[i] + S[i];
    }
    drhob_dt
}
