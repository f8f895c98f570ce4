//! Ideal-gas pressure along the reactor and the pressure-gradient momentum source.
use crate::Setup::bfb_params::R_G;
use crate::Setup::grid::Grid;
use nalgebra::DVector;

/// Volume fraction of gas: bed voidage `ef` in the first `Np` cells, 1 in the freeboard
#[allow(non_snake_case)]
pub fn gas_volume_fraction(N: usize, Np: usize, ef: f64) -> DVector<f64> {
    DVector::from_fn(N, |i, _| if i < Np { ef } else { 1.0 })
}

/// Returns `(P, DP)`: pressure in every cell (Pa) and the pressure-gradient term `DP`
/// between cell i and i+1, weighted by the gas volume fraction of cell i (length N−1).
///
/// `Mg` in g/mol, `rhob_g` bulk density in kg/m³ of reactor volume, `Tg` in K.
#[allow(non_snake_case)]
pub fn calc_pressure(
    grid: &Grid,
    afg: &DVector<f64>,
    Mg: &DVector<f64>,
    rhob_g: &DVector<f64>,
    Tg: &DVector<f64>,
) -> (DVector<f64>, DVector<f64>) {
    let N = grid.len();
    let dx = &grid.dx;

    // true gas density is the bulk density over the gas volume fraction
    let P = DVector::from_fn(N, |i, _| R_G * (rhob_g[i] / afg[i]) * Tg[i] / Mg[i] * 1e3);

    let DP = DVector::from_fn(N - 1, |i, _| -afg[i] / dx[i] * (P[i + 1] - P[i]));

    (P, DP)
}
