//! Uniform start-up fields: hot steam-filled reactor, cold solids, almost no fuel in the bed.
use super::bfb_params::BFBParams;
use crate::GasPhase::gas_phase_state::{GasPhaseState, SolidPhaseFields};
use nalgebra::DVector;
use serde::{Deserialize, Serialize};

/// values of the INITIAL section of a task file; every field has a default
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(non_snake_case)]
pub struct InitialConditions {
    /// gas temperature, K
    pub Tg0: f64,
    /// gas mass flux, kg/(m²·s)
    pub mfg0: f64,
    /// gas bulk density, kg/m³
    pub rhob_g0: f64,
    /// steam bulk density, kg/m³
    pub rhob_h2o0: f64,
    /// solid fuel temperature, K
    pub Ts0: f64,
    /// bed particle temperature, K
    pub Tp0: f64,
    /// wall temperature, K
    pub Tw0: f64,
    /// bulk density of fuel particles, kg/m³
    pub rhob_s0: f64,
    /// particle velocity, m/s; the inlet gas velocity if absent
    pub v0: Option<f64>,
    /// true density of fuel particles, kg/m³
    pub rhos0: f64,
    /// fuel particle diameter, m
    pub ds0: f64,
    /// sphericity correction factor of fuel particles
    pub sfc0: f64,
}

impl Default for InitialConditions {
    fn default() -> Self {
        Self {
            Tg0: 1100.0,
            mfg0: 0.2,
            rhob_g0: 0.15,
            rhob_h2o0: 0.15,
            Ts0: 300.0,
            Tp0: 1100.0,
            Tw0: 1100.0,
            rhob_s0: 1e-8,
            v0: None,
            rhos0: 540.0,
            ds0: 5e-4,
            sfc0: 0.8,
        }
    }
}

impl InitialConditions {
    /// gas phase filled with steam; the other species start at zero
    pub fn gas_state(&self, params: &BFBParams) -> GasPhaseState {
        let n = params.N;
        GasPhaseState {
            Tg: DVector::from_element(n, self.Tg0),
            mfg: DVector::from_element(n, self.mfg0),
            rhob_g: DVector::from_element(n, self.rhob_g0),
            rhob_h2: DVector::zeros(n),
            rhob_ch4: DVector::zeros(n),
            rhob_co: DVector::zeros(n),
            rhob_co2: DVector::zeros(n),
            rhob_h2o: DVector::from_element(n, self.rhob_h2o0),
            rhob_t: DVector::zeros(n),
        }
    }

    pub fn solid_fields(&self, params: &BFBParams) -> SolidPhaseFields {
        let n = params.N;
        SolidPhaseFields {
            Ts: DVector::from_element(n, self.Ts0),
            Tp: DVector::from_element(n, self.Tp0),
            Tw: DVector::from_element(n, self.Tw0),
            rhob_s: DVector::from_element(n, self.rhob_s0),
            v: DVector::from_element(n, self.v0.unwrap_or(params.ugin)),
            rhos: DVector::from_element(n, self.rhos0),
            ds: DVector::from_element(n, self.ds0),
            sfc: DVector::from_element(n, self.sfc0),
        }
    }
}
