//! # Gas Mass Flux Module
//!
//! ## Aim
//! Momentum balance of the gas phase written for the mass flux ṁfg = ρb_g·ug:
//!
//! ```text
//! ∂ṁfg/∂t = −∂(ṁfg·ug)/∂x + SmgV + DP
//! ```
//!
//! ## Source terms
//! | Term | Meaning |
//! |------|---------|
//! | `SmgG` | weight of the bed suspended by the gas minus gas weight |
//! | `Smgs` | drag exchange with fuel particles, two-regime drag coefficient with sphericity correction |
//! | `Smgp` | Ergun packed-bed resistance of the inert bed |
//! | `Smgg` | gas produced by reactions, carried with the local velocity |
//! | `SmgF` | wall friction, 16/Re laminar and 0.079·Re^−0.25 turbulent |
//!
//! `SmgV = SmgG + Smgs·(ug + v) − (Smgp − Smgg)·ug − SmgF`
//!
//! ## Discretization
//! Four regions, index by index:
//! - cell 0: central convective difference against the inlet flux `mfgin` and velocity `mfgin/rhob_gin`
//! - cells 1..Np−1 (bed): central convective difference `Cmf`, full source `SmgV`, pressure term
//! - cells Np..N−2 (bed top and freeboard): `Cmf`, reaction gas source only, pressure term
//! - cell N−1 (outlet): backward difference of the velocity
use super::fluidization::FluidizationState;
use super::gas_phase_state::SolidPhaseFields;
use super::pressure::gas_volume_fraction;
use crate::Setup::bfb_params::{BFBParams, G};
use crate::Setup::grid::Grid;
use nalgebra::DVector;

/// Average of each cell with its upper neighbour; the last cell keeps its own value
pub fn cell_average(a: &DVector<f64>) -> DVector<f64> {
    let n = a.len();
    DVector::from_fn(n, |i, _| {
        if i + 1 < n {
            0.5 * (a[i] + a[i + 1])
        } else {
            a[i]
        }
    })
}

/// average gas bulk density between cell faces, kg/m³
pub fn calc_rhob_gav(rhob_g: &DVector<f64>) -> DVector<f64> {
    cell_average(rhob_g)
}

/// drag coefficient of a fuel particle with sphericity correction factor `sfc`
#[allow(non_snake_case)]
pub fn drag_coefficient(Re: f64, sfc: f64) -> f64 {
    24.0 / Re * (1.0 + 8.1716 * Re.powf(0.0964 + 0.5565 * sfc) * (-4.0655 * sfc).exp())
        + Re * 73.69 / (Re + 5.378 * (6.2122 * sfc).exp()) * (-5.0748 * sfc).exp()
}

/// Fanning friction factor of the gas flowing in the reactor tube
#[allow(non_snake_case)]
pub fn friction_factor(Re: f64) -> f64 {
    if Re <= 2300.0 {
        16.0 / Re
    } else {
        0.079 / Re.powf(0.25)
    }
}

/// Convective and source terms of the mass flux equation
#[derive(Debug, Clone, PartialEq)]
#[allow(non_snake_case)]
pub struct MassFluxTerms {
    /// central convective term of interior cells 1..N−2 (length N−2, entry k belongs to cell k+1)
    pub Cmf: DVector<f64>,
    /// cell-averaged reaction gas source
    pub Smgg: DVector<f64>,
    /// net momentum source
    pub SmgV: DVector<f64>,
    /// gas velocity, m/s
    pub ug: DVector<f64>,
    /// drag coefficient of fuel particles
    pub Cd: DVector<f64>,
    /// friction factor
    pub fg: DVector<f64>,
}

#[allow(non_snake_case)]
pub fn mfg_terms(
    params: &BFBParams,
    grid: &Grid,
    fluid: &FluidizationState,
    mfg: &DVector<f64>,
    mu: &DVector<f64>,
    rhob_g: &DVector<f64>,
    rhob_gav: &DVector<f64>,
    solids: &SolidPhaseFields,
    Sg: &DVector<f64>,
) -> MassFluxTerms {
    let N = params.N;
    let Np = params.Np;
    let N1 = params.N1;
    let Db = params.Db;
    let dp = params.dp;
    let phi = params.phi;
    let ef = fluid.ef;
    let dx = &grid.dx;
    let (v, ds, sfc, rhos, rhob_s) = (&solids.v, &solids.ds, &solids.sfc, &solids.rhos, &solids.rhob_s);

    // volume fraction of solids in the expanded bed
    let epb = (1.0 - params.ef0) * params.Ls / fluid.Lp;

    let afg = gas_volume_fraction(N, Np, ef);
    let rhog = rhob_g.component_div(&afg);
    let ug = mfg.component_div(rhob_gav);

    let slip = DVector::from_fn(N, |i, _| (-ug[i] - v[i]).abs());
    let Cd = DVector::from_fn(N, |i, _| {
        let Re_dc = rhog[i] * slip[i] * ds[i] / mu[i];
        drag_coefficient(Re_dc, sfc[i])
    });

    // bulk density of fuel entering at the feed cell
    let vin = v[N1 - 1].max(ug[N1 - 1]);
    let rhobbin = params.ms_dot() / (vin * params.Ab);

    let mut rhosbav = cell_average(rhob_s);
    rhosbav[N - 1] = 0.5 * (rhobbin + rhob_s[N - 1]);

    let fg = DVector::from_fn(N, |i, _| {
        let Reg = rhob_gav[i] * ug[i] * Db / mu[i];
        friction_factor(Reg)
    });

    let Smgg = cell_average(Sg);

    let SmgV = DVector::from_fn(N, |i, _| {
        let Smgp = 150.0 * epb.powi(2) * mu[i] / (ef * (phi * dp).powi(2))
            + 1.75 * epb / (phi * dp) * rhog[i] * ug[i];
        let Smgs = 0.75 * rhosbav[i] * (rhog[i] / rhos[i]) * (Cd[i] / ds[i]) * slip[i];
        let SmgG = G * (epb * afg[i] * params.rhop - rhob_gav[i]);
        let SmgF = 2.0 / Db * fg[i] * rhob_gav[i] * ug[i].abs() * ug[i];
        SmgG + Smgs * (ug[i] + v[i]) - (Smgp - Smgg[i]) * ug[i] - SmgF
    });

    let Cmf = DVector::from_fn(N - 2, |k, _| {
        let i = k + 1;
        -1.0 / (2.0 * dx[i])
            * ((mfg[i + 1] + mfg[i]) * ug[i] - (mfg[i] + mfg[i - 1]) * ug[i - 1])
    });

    MassFluxTerms {
        Cmf,
        Smgg,
        SmgV,
        ug,
        Cd,
        fg,
    }
}

/// ∂ṁfg/∂t along the reactor, kg/(m²·s²)
#[allow(non_snake_case)]
pub fn mfg_rate(
    params: &BFBParams,
    grid: &Grid,
    terms: &MassFluxTerms,
    DP: &DVector<f64>,
    mfg: &DVector<f64>,
) -> DVector<f64> {
    let N = params.N;
    let Np = params.Np;
    let mfgin = params.mfgin;
    let dx = &grid.dx;
    let MassFluxTerms {
        Cmf, Smgg, SmgV, ug, ..
    } = terms;

    let mut dmfgdt = DVector::zeros(N);

    // gas inlet, bottom of the reactor
    let Cmf1 = -1.0 / (2.0 * dx[0])
        * ((mfg[1] + mfg[0]) * ug[0] - (mfg[0] + mfgin) * mfgin / params.rhob_gin);
    dmfgdt[0] = Cmf1 + SmgV[0] + DP[0];

    // bed
    for i in 1..Np {
        dmfgdt[i] = Cmf[i - 1] + SmgV[i] + DP[i];
    }

    // bed top and freeboard
    for i in Np..N - 1 {
        dmfgdt[i] = Cmf[i - 1] + Smgg[i] * ug[i] + DP[i];
    }

    // top of the reactor
    dmfgdt[N - 1] = -1.0 / dx[N - 1] * mfg[N - 1] * (ug[N - 1] - ug[N - 2]) + Smgg[N - 1] * ug[N - 1];

    dmfgdt
}
