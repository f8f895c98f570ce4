//! # Gas Energy Module
//!
//! Gas temperature rate with upwind convection and heat exchange:
//! - gas ↔ fuel particles: Ranz-Marshall, `Nud = 2 + 0.6·Re^0.5·Pr^0.33`
//! - gas ↔ bed particles: Gunn packed-bed correlation `Nup`
//! - gas ↔ wall in the bed: film `hp` in series with conduction through the wall annulus
//! - gas ↔ wall in the freeboard: Dittus-Boelter `Nuf = 0.023·Re^0.8·Pr^0.4` in series with the wall
//!
//! Regions: cell 0 against the inlet temperature, bed cells 1..Np−1, freeboard cells Np..N−1 where the bed
//! particle exchange is replaced by the freeboard wall exchange.
use super::fluidization::FluidizationState;
use super::gas_phase_state::{ReactionSources, SolidPhaseFields};
use super::gas_properties::MixtureProperties;
use super::pressure::gas_volume_fraction;
use crate::Setup::bfb_params::BFBParams;
use crate::Setup::grid::Grid;
use nalgebra::DVector;
use std::f64::consts::PI;

/// heat transfer coefficients along the reactor
#[derive(Debug, Clone, PartialEq)]
#[allow(non_snake_case)]
pub struct HeatTransfer {
    /// gas ↔ fuel particle film coefficient, W/(m²·K)
    pub hs: DVector<f64>,
    /// gas ↔ bed particle coefficient, W/(m³·K)
    pub hp: DVector<f64>,
    /// overall gas ↔ wall coefficient in the bed, W/(m²·K)
    pub Uhb: DVector<f64>,
    /// overall gas ↔ wall coefficient in the freeboard, W/(m²·K)
    pub Uhf: DVector<f64>,
    /// net heat gained by the gas from particles and the wall in the bed, W/m³
    pub qg: DVector<f64>,
}

#[allow(non_snake_case)]
pub fn heat_transfer(
    params: &BFBParams,
    fluid: &FluidizationState,
    props: &MixtureProperties,
    Tg: &DVector<f64>,
    rhob_g: &DVector<f64>,
    ug: &DVector<f64>,
    solids: &SolidPhaseFields,
) -> HeatTransfer {
    let N = params.N;
    let Db = params.Db;
    let Dwi = params.Dwi;
    let dp = params.dp;
    let phi = params.phi;
    let (kg, mu, Pr) = (&props.kg, &props.mu, &props.Pr);
    let SolidPhaseFields {
        Ts, Tp, Tw, rhob_s, v, rhos, ds, ..
    } = solids;

    let afg = gas_volume_fraction(N, params.Np, fluid.ef);
    let epb = (1.0 - params.ef0) * params.Ls / fluid.Lp;
    // conduction resistance of the wall annulus
    let wall = PI * Dwi / (2.0 * params.kw) * (params.Dwo / Dwi).ln();

    let mut ht = HeatTransfer {
        hs: DVector::zeros(N),
        hp: DVector::zeros(N),
        Uhb: DVector::zeros(N),
        Uhf: DVector::zeros(N),
        qg: DVector::zeros(N),
    };
    for i in 0..N {
        let rhog = rhob_g[i] / afg[i];
        let a = afg[i];

        let Re_dc = rhog.abs() * (-ug[i] - v[i]).abs() * ds[i] / mu[i];
        let Nud = 2.0 + 0.6 * Re_dc.powf(0.5) * Pr[i].powf(0.33);
        let hs = Nud * kg[i] / ds[i];

        let Rep = rhog.abs() * ug[i].abs() * dp / mu[i];
        let Nup = (7.0 - 10.0 * a + 5.0 * a.powi(2)) * (1.0 + 0.7 * Rep.powf(0.2) * Pr[i].powf(0.33))
            + (1.33 - 2.4 * a + 1.2 * a.powi(2)) * Rep.powf(0.7) * Pr[i].powf(0.33);
        let hp = 6.0 * epb * kg[i] * Nup / (phi * dp.powi(2));
        let Uhb = 1.0 / (4.0 / (PI * Dwi * hp) + wall);

        let qg = -6.0 * hs * rhob_s[i] / (rhos[i] * ds[i]) * (Tg[i] - Ts[i]) - hp * (Tg[i] - Tp[i])
            + 4.0 / Db * Uhb * (Tw[i] - Tg[i]);

        let ReD = rhog.abs() * ug[i].abs() * Db / mu[i];
        let Nuf = 0.023 * ReD.powf(0.8) * Pr[i].powf(0.4);
        let hf = Nuf * kg[i] / Db;
        let Uhf = 1.0 / (1.0 / hf + wall);

        ht.hs[i] = hs;
        ht.hp[i] = hp;
        ht.Uhb[i] = Uhb;
        ht.Uhf[i] = Uhf;
        ht.qg[i] = qg;
    }
    ht
}

/// ∂Tg/∂t along the reactor, K/s
#[allow(non_snake_case)]
pub fn tg_rate(
    params: &BFBParams,
    grid: &Grid,
    props: &MixtureProperties,
    ht: &HeatTransfer,
    Tg: &DVector<f64>,
    rhob_g: &DVector<f64>,
    ug: &DVector<f64>,
    Tw: &DVector<f64>,
    sources: &ReactionSources,
) -> DVector<f64> {
    let N = params.N;
    let Np = params.Np;
    let Db = params.Db;
    let dx = &grid.dx;
    let qgs = &sources.qgs;
    let qg = &ht.qg;
    // volumetric heat capacity of the gas
    let Cg = rhob_g.component_mul(&props.cpg);

    let mut dtgdt = DVector::zeros(N);

    dtgdt[0] = -ug[0] / dx[0] * (Tg[0] - params.Tgin) + (-qgs[0] + qg[0]) / Cg[0];

    for i in 1..Np {
        dtgdt[i] = -ug[i] / dx[i] * (Tg[i] - Tg[i - 1]) + (-qgs[i] + qg[i]) / Cg[i];
    }

    for i in Np..N {
        dtgdt[i] = -ug[i] / dx[i] * (Tg[i] - Tg[i - 1])
            - (qgs[i] - 4.0 / Db * ht.Uhf[i] * (Tw[i] - Tg[i])) / Cg[i];
    }

    dtgdt
}
