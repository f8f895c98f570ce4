//! # Gas-Phase Right-Hand Side
//!
//! ## Aim
//! Turns an instantaneous gas-phase state into its time derivative for an external stiff integrator.
//! Every evaluation runs the full pipeline:
//!
//! ```text
//! state ─► mixture properties ─► fluidization ─► pressure ─► mass flux terms ─► rate functions ─► dy/dt
//! ```
//!
//! ## Contract
//! - `evaluate`/`rhs` borrow every input immutably and return freshly allocated arrays, so repeated
//!   perturbed calls (finite-difference Jacobians) never see each other's results
//! - inputs are validated first; a non-positive density or temperature yields
//!   `GasPhaseError::NumericalDomain` instead of NaN in the output
//! - nothing is cached between calls
//!
//! ## Usage
//! ```rust, ignore
//! let params = BFBParams::new(BFBConfig::default())?;
//! let grid = Grid::uniform(params.N, params.L)?;
//! let model = GasPhaseRHS::new(&params, &grid)?;
//! let dydt = model.rhs(&y, &solids, &sources)?;
//! ```
use super::energy::{HeatTransfer, heat_transfer, tg_rate};
use super::fluidization::{FluidizationState, calc_fluidization};
use super::gas_phase_error::{GasPhaseError, check_finite};
use super::gas_phase_state::{GasPhaseDerivatives, GasPhaseState, ReactionSources, SolidPhaseFields};
use super::gas_properties::{MixtureProperties, calc_mix_props};
use super::mass_flux::{MassFluxTerms, calc_rhob_gav, mfg_rate, mfg_terms};
use super::pressure::{calc_pressure, gas_volume_fraction};
use super::species_transport::{TrackedDensity, density_rate};
use crate::Setup::bfb_params::BFBParams;
use crate::Setup::grid::Grid;
use nalgebra::DVector;

/// closures computed from one state; recomputed on every evaluation
#[derive(Debug, Clone)]
#[allow(non_snake_case)]
pub struct GasPhaseClosures {
    pub props: MixtureProperties,
    pub fluid: FluidizationState,
    /// gas volume fraction
    pub afg: DVector<f64>,
    /// pressure, Pa
    pub P: DVector<f64>,
    /// pressure-gradient source, length N−1
    pub DP: DVector<f64>,
    /// cell-averaged gas bulk density
    pub rhob_gav: DVector<f64>,
    pub mfg_terms: MassFluxTerms,
    pub heat: HeatTransfer,
}

/// gas-phase model bound to one parameter set and grid
#[derive(Debug, Clone, Copy)]
pub struct GasPhaseRHS<'a> {
    params: &'a BFBParams,
    grid: &'a Grid,
}

impl<'a> GasPhaseRHS<'a> {
    pub fn new(params: &'a BFBParams, grid: &'a Grid) -> Result<Self, GasPhaseError> {
        grid.check_against(params)?;
        Ok(Self { params, grid })
    }

    pub fn params(&self) -> &BFBParams {
        self.params
    }

    pub fn grid(&self) -> &Grid {
        self.grid
    }

    /// length of the packed gas-phase vector
    pub fn n_unknowns(&self) -> usize {
        super::gas_phase_state::N_GAS_BLOCKS * self.params.N
    }

    fn validate(
        &self,
        state: &GasPhaseState,
        solids: &SolidPhaseFields,
        sources: &ReactionSources,
    ) -> Result<(), GasPhaseError> {
        let n = self.params.N;
        state.validate(n)?;
        solids.validate(n)?;
        sources.validate(n)?;
        Ok(())
    }

    /// Properties, hydrodynamics, pressure and source terms of one state
    #[allow(non_snake_case)]
    pub fn closures(
        &self,
        state: &GasPhaseState,
        solids: &SolidPhaseFields,
        sources: &ReactionSources,
    ) -> Result<GasPhaseClosures, GasPhaseError> {
        self.validate(state, solids, sources)?;
        let params = self.params;

        let props = calc_mix_props(
            [
                &state.rhob_h2,
                &state.rhob_ch4,
                &state.rhob_co,
                &state.rhob_co2,
                &state.rhob_h2o,
            ],
            &state.rhob_g,
            &state.rhob_t,
            &state.Tg,
        );
        let fluid = calc_fluidization(params, &props.Mg, &state.Tg)?;

        let afg = gas_volume_fraction(params.N, params.Np, fluid.ef);
        let (P, DP) = calc_pressure(self.grid, &afg, &props.Mg, &state.rhob_g, &state.Tg);

        let rhob_gav = calc_rhob_gav(&state.rhob_g);
        let terms = mfg_terms(
            params,
            self.grid,
            &fluid,
            &state.mfg,
            &props.mu,
            &state.rhob_g,
            &rhob_gav,
            solids,
            &sources.Sg,
        );
        // zero gas flux or zero slip turns the friction and drag terms into 0·inf
        check_finite("SmgV", terms.SmgV.as_slice())?;
        let heat = heat_transfer(params, &fluid, &props, &state.Tg, &state.rhob_g, &terms.ug, solids);

        Ok(GasPhaseClosures {
            props,
            fluid,
            afg,
            P,
            DP,
            rhob_gav,
            mfg_terms: terms,
            heat,
        })
    }

    /// time derivatives of every gas-phase quantity
    pub fn evaluate(
        &self,
        state: &GasPhaseState,
        solids: &SolidPhaseFields,
        sources: &ReactionSources,
    ) -> Result<GasPhaseDerivatives, GasPhaseError> {
        let c = self.closures(state, solids, sources)?;
        let (params, grid) = (self.params, self.grid);

        let dmfg_dt = mfg_rate(params, grid, &c.mfg_terms, &c.DP, &state.mfg);
        let dTg_dt = tg_rate(
            params,
            grid,
            &c.props,
            &c.heat,
            &state.Tg,
            &state.rhob_g,
            &c.mfg_terms.ug,
            &solids.Tw,
            sources,
        );
        // same order as TrackedDensity::ALL
        let [
            drhob_g_dt,
            drhob_h2_dt,
            drhob_ch4_dt,
            drhob_co_dt,
            drhob_co2_dt,
            drhob_h2o_dt,
            drhob_t_dt,
        ] = TrackedDensity::ALL.map(|tracked| density_rate(tracked, params, grid, state, sources));

        Ok(GasPhaseDerivatives {
            dTg_dt,
            dmfg_dt,
            drhob_g_dt,
            drhob_h2_dt,
            drhob_ch4_dt,
            drhob_co_dt,
            drhob_co2_dt,
            drhob_h2o_dt,
            drhob_t_dt,
        })
    }

    /// packed form for the integrator: `y` and the result use the `GasPhaseState::to_vector` layout
    pub fn rhs(
        &self,
        y: &DVector<f64>,
        solids: &SolidPhaseFields,
        sources: &ReactionSources,
    ) -> Result<DVector<f64>, GasPhaseError> {
        let state = GasPhaseState::from_vector(y, self.params.N)?;
        Ok(self.evaluate(&state, solids, sources)?.to_vector())
    }
}
