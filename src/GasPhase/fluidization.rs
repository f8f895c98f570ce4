//! # Fluidization Hydrodynamics Module
//!
//! Minimum fluidization velocity (Wen-Yu type correlation for Re_mf), bubble/slug velocity ratios and bed
//! expansion. The bed expansion factor `De = Re − 1` comes from one of two Reynolds-number correlations chosen
//! by the relative bubble diameter `Dbr`:
//!
//! ```text
//! Dbr < 1:  Re = (1 − 0.103·(Ugin − umf)^−0.362·Dbr)⁻¹
//! Dbr ≥ 1:  Re = Rrb·Rrs
//! ```
//!
//! In extreme regimes (for instance a superficial velocity below `umf`) the correlation breaks down and gives a
//! non-positive or NaN factor. Then `De` is set to `DE_FALLBACK`.
use super::gas_phase_error::{GasPhaseError, check_len};
use super::gas_properties::GasSpecies;
use crate::Setup::bfb_params::{BFBParams, G, R_G};
use log::debug;
use nalgebra::DVector;

/// bed expansion factor used when the correlation yields a non-positive or undefined value
pub const DE_FALLBACK: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq)]
#[allow(non_snake_case)]
pub struct FluidizationState {
    /// expanded bed height, m
    pub Lp: f64,
    /// bed average voidage
    pub ef: f64,
    /// minimum fluidization velocity, m/s
    pub umf: f64,
    /// bed expansion factor
    pub De: f64,
}

/// `Mg` and `Tg` must have N entries; only the first `Np` cells (the bed) are used
#[allow(non_snake_case)]
pub fn calc_fluidization(
    params: &BFBParams,
    Mg: &DVector<f64>,
    Tg: &DVector<f64>,
) -> Result<FluidizationState, GasPhaseError> {
    check_len("Mg", Mg.as_slice(), params.N)?;
    check_len("Tg", Tg.as_slice(), params.N)?;
    let Np = params.Np;
    let Db = params.Db;
    let Lmf = params.Lmf;
    let dp = params.dp;
    let rhop = params.rhop;
    let emf = params.emf;

    // inlet referenced temperature, never below the inlet value
    let Tgm = (Tg.rows(0, Np).sum() + params.Tgin) / (Np as f64 + 1.0);
    let Tgi = params.Tgin.max(Tgm);
    let muin = GasSpecies::H2O.viscosity(Tgi);

    let Mgi = Mg.rows(0, Np).mean();
    let rhogi = params.Pin * Mgi / (R_G * Tgi) * 1e-3;

    let Ar = dp.powi(3) * rhogi * (rhop - rhogi) * G / muin.powi(2);
    let Rem = -33.67 + (33.67_f64.powi(2) + 0.0408 * Ar).sqrt();
    let umf = Rem * muin / (rhogi * dp);
    let Umsr = (-0.5405 * params.Lsi / Db).exp() * (4.294e3 / Ar + 1.1) + 3.676e2 * Ar.powf(-1.5) + 1.0;

    let mfgin = params.SB * params.ms_dot() / params.Ab;
    let Ugin = mfgin / rhogi;

    let Drbs = 1.0;
    let Rrb = 1.0 / (1.0 - 0.103 * (Umsr * umf - umf).powf(-0.362) * Drbs);
    let Rrs = 1.0 / (1.0 - 0.305 * (Ugin - umf).powf(-0.362) * Db.powf(0.48));
    let Dbr = 5.64e-4 / (Db * Lmf)
        * (1.0 + 27.2 * (Ugin - umf)).powf(1.0 / 3.0)
        * ((1.0 + 6.84 * Lmf).powf(2.21) - 1.0);

    let Re = if Dbr < Drbs {
        1.0 / (1.0 - 0.103 * (Ugin - umf).powf(-0.362) * Dbr)
    } else {
        Rrb * Rrs
    };

    let mut De = Re - 1.0;
    if De.is_nan() || De <= 0.0 {
        debug!(
            "bed expansion correlation gave De = {} (Ugin = {:.4e}, umf = {:.4e}), using {}",
            De, Ugin, umf, DE_FALLBACK
        );
        De = DE_FALLBACK;
    }

    let ef = 1.0 - (1.0 - emf) / (De + 1.0);
    let Lp = (De + 1.0) * Lmf;

    Ok(FluidizationState { Lp, ef, umf, De })
}
