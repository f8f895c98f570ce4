//! # Gas Mixture Properties Module
//!
//! ## Aim
//! Computes thermophysical properties of the H₂/CH₄/CO/CO₂/H₂O (+tar) gas mixture in every cell from the
//! species bulk densities and the gas temperature.
//!
//! ## Correlations
//! Pure species properties are polynomials in temperature with coefficients from Agu et al. (2019),
//! Tables S1-S3:
//! - viscosity μ = (A + B·T + C·T²)·1e-7, Pa·s
//! - thermal conductivity k = A + B·T + C·T², W/(m·K)
//! - molar heat capacity cp = A + B·T + C·T² + D·T³ + E·T⁴, J/(mol·K)
//!
//! ## Mixing rules
//! - viscosity: Herning-Zipperer, weights x·√M
//! - conductivity: harmonic, k = (Σ x/k)⁻¹
//! - heat capacity: mole fraction weighted, converted to J/(kg·K) and blended with the tar heat capacity by
//!   the tar mass fraction
use nalgebra::{DMatrix, DVector};

/// species that carry property correlations, in table order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GasSpecies {
    H2,
    CH4,
    CO,
    CO2,
    H2O,
}

impl GasSpecies {
    pub const ALL: [GasSpecies; 5] = [
        GasSpecies::H2,
        GasSpecies::CH4,
        GasSpecies::CO,
        GasSpecies::CO2,
        GasSpecies::H2O,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// molecular weight, g/mol
    pub fn M(self) -> f64 {
        M[self.index()]
    }

    /// viscosity of the pure species, Pa·s
    pub fn viscosity(self, T: f64) -> f64 {
        let i = self.index();
        (A_MU[i] + B_MU[i] * T + C_MU[i] * T.powi(2)) * 1e-7
    }

    /// thermal conductivity of the pure species, W/(m·K)
    pub fn conductivity(self, T: f64) -> f64 {
        let i = self.index();
        A_K[i] + B_K[i] * T + C_K[i] * T.powi(2)
    }

    /// molar heat capacity of the pure species, J/(mol·K)
    pub fn heat_capacity(self, T: f64) -> f64 {
        let i = self.index();
        A_CP[i] + B_CP[i] * T + C_CP[i] * T.powi(2) + D_CP[i] * T.powi(3) + E_CP[i] * T.powi(4)
    }
}

/// g/mol, order H2, CH4, CO, CO2, H2O
const M: [f64; 5] = [2.0, 16.0, 28.0, 44.0, 18.0];

// viscosity (Table S1)
const A_MU: [f64; 5] = [27.758, 3.844, 23.811, 11.811, -36.826];
const B_MU: [f64; 5] = [2.120e-1, 4.0112e-1, 5.3944e-1, 4.9838e-1, 4.290e-1];
const C_MU: [f64; 5] = [-0.3280e-4, -1.4303e-4, -1.5411e-4, -1.0851e-4, -0.1620e-4];

// heat capacity (Table S2)
const A_CP: [f64; 5] = [25.399, 34.942, 29.556, 27.437, 33.933];
const B_CP: [f64; 5] = [20.178e-3, -39.957e-3, -6.5807e-3, 42.315e-3, -8.4186e-3];
const C_CP: [f64; 5] = [-3.8549e-5, 19.184e-5, 2.0130e-5, -1.9555e-5, 2.9906e-5];
const D_CP: [f64; 5] = [3.188e-8, -15.303e-8, -1.2227e-8, 0.39968e-8, -1.7825e-8];
const E_CP: [f64; 5] = [-8.7585e-12, 39.321e-12, 2.2617e-12, -0.29872e-12, 3.6934e-12];

// thermal conductivity (Table S3)
const A_K: [f64; 5] = [3.951e-2, -0.935e-2, 0.158e-2, -1.200e-2, 0.053e-2];
const B_K: [f64; 5] = [4.5918e-4, 1.4028e-4, 0.82511e-4, 1.0208e-4, 0.47093e-4];
const C_K: [f64; 5] = [-6.4933e-8, 3.3180e-8, 1.9081e-8, -2.2403e-8, 4.9551e-8];

/// heat capacity of tar vapour, J/(kg·K)
pub fn tar_heat_capacity(T: f64) -> f64 {
    -100.0 + 4.40 * T - 1.57e-3 * T.powi(2)
}

/// mixture properties along the reactor axis
#[derive(Debug, Clone, PartialEq)]
#[allow(non_snake_case)]
pub struct MixtureProperties {
    /// mixture molecular weight, g/mol
    pub Mg: DVector<f64>,
    /// Prandtl number
    pub Pr: DVector<f64>,
    /// mass heat capacity blended with tar, J/(kg·K)
    pub cpg: DVector<f64>,
    /// molar heat capacity, J/(mol·K)
    pub cpgm: DVector<f64>,
    /// thermal conductivity, W/(m·K)
    pub kg: DVector<f64>,
    /// dynamic viscosity, Pa·s
    pub mu: DVector<f64>,
    /// mole fractions, rows in `GasSpecies::ALL` order, one column per cell
    pub xg: DMatrix<f64>,
}

/// Species bulk densities `rhob_x` (order of `GasSpecies::ALL`), tar bulk density and total gas bulk density
/// must have the same length as `Tg`. The caller guarantees `rhob_g > 0`.
#[allow(non_snake_case)]
pub fn calc_mix_props(
    rhob_x: [&DVector<f64>; 5],
    rhob_g: &DVector<f64>,
    rhob_t: &DVector<f64>,
    Tg: &DVector<f64>,
) -> MixtureProperties {
    let n = Tg.len();
    let mut props = MixtureProperties {
        Mg: DVector::zeros(n),
        Pr: DVector::zeros(n),
        cpg: DVector::zeros(n),
        cpgm: DVector::zeros(n),
        kg: DVector::zeros(n),
        mu: DVector::zeros(n),
        xg: DMatrix::zeros(5, n),
    };
    for i in 0..n {
        let T = Tg[i];
        // mole fractions from mass fractions
        let mut moles = [0.0; 5];
        for s in GasSpecies::ALL {
            moles[s.index()] = rhob_x[s.index()][i] / rhob_g[i] / s.M();
        }
        let total: f64 = moles.iter().sum();

        let mut Mg = 0.0;
        let (mut mu_num, mut mu_den) = (0.0, 0.0);
        let mut cpgm = 0.0;
        let mut k_inv = 0.0;
        for s in GasSpecies::ALL {
            let x = moles[s.index()] / total;
            props.xg[(s.index(), i)] = x;
            Mg += x * s.M();
            mu_num += x * s.viscosity(T) * s.M().sqrt();
            mu_den += x * s.M().sqrt();
            cpgm += x * s.heat_capacity(T);
            k_inv += x / s.conductivity(T);
        }
        let mu = mu_num / mu_den;
        let kg = 1.0 / k_inv;

        let cpgg = cpgm / Mg * 1e3;
        let yt = rhob_t[i] / rhob_g[i];
        let cpg = yt * tar_heat_capacity(T) + (1.0 - yt) * cpgg;

        props.Mg[i] = Mg;
        props.mu[i] = mu;
        props.cpgm[i] = cpgm;
        props.kg[i] = kg;
        props.cpg[i] = cpg;
        props.Pr[i] = cpg * mu / kg;
    }
    props
}
