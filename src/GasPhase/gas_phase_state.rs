//! # Gas-Phase State Module
//!
//! Per-cell arrays exchanged with the outside world:
//! - `GasPhaseState`: conserved gas-phase quantities advanced by the integrator
//! - `SolidPhaseFields`: solid and wall fields supplied by the solid-phase model at every evaluation
//! - `ReactionSources`: reaction source arrays supplied by the kinetics model at every evaluation
//! - `GasPhaseDerivatives`: time derivatives returned to the integrator
//!
//! The packed vector layout shared by `GasPhaseState` and `GasPhaseDerivatives` is
//! `[Tg, mfg, rhob_g, rhob_h2, rhob_ch4, rhob_co, rhob_co2, rhob_h2o, rhob_t]`, N entries per block.
use super::gas_phase_error::{GasPhaseError, check_len, check_non_negative, check_positive};
use nalgebra::DVector;

/// number of gas-phase state blocks in the packed vector
pub const N_GAS_BLOCKS: usize = 9;

pub const GAS_BLOCK_NAMES: [&str; N_GAS_BLOCKS] = [
    "Tg", "mfg", "rhob_g", "rhob_h2", "rhob_ch4", "rhob_co", "rhob_co2", "rhob_h2o", "rhob_t",
];

#[derive(Debug, Clone, PartialEq)]
#[allow(non_snake_case)]
pub struct GasPhaseState {
    /// gas temperature, K
    pub Tg: DVector<f64>,
    /// gas mass flux, kg/(m²·s)
    pub mfg: DVector<f64>,
    /// gas bulk density, kg/m³
    pub rhob_g: DVector<f64>,
    pub rhob_h2: DVector<f64>,
    pub rhob_ch4: DVector<f64>,
    pub rhob_co: DVector<f64>,
    pub rhob_co2: DVector<f64>,
    pub rhob_h2o: DVector<f64>,
    /// tar bulk density
    pub rhob_t: DVector<f64>,
}

impl GasPhaseState {
    fn blocks(&self) -> [&DVector<f64>; N_GAS_BLOCKS] {
        [
            &self.Tg,
            &self.mfg,
            &self.rhob_g,
            &self.rhob_h2,
            &self.rhob_ch4,
            &self.rhob_co,
            &self.rhob_co2,
            &self.rhob_h2o,
            &self.rhob_t,
        ]
    }

    /// split a packed vector of length 9·N
    #[allow(non_snake_case)]
    pub fn from_vector(y: &DVector<f64>, N: usize) -> Result<Self, GasPhaseError> {
        check_len("packed gas state", y.as_slice(), N_GAS_BLOCKS * N)?;
        let block = |k: usize| y.rows(k * N, N).into_owned();
        Ok(Self {
            Tg: block(0),
            mfg: block(1),
            rhob_g: block(2),
            rhob_h2: block(3),
            rhob_ch4: block(4),
            rhob_co: block(5),
            rhob_co2: block(6),
            rhob_h2o: block(7),
            rhob_t: block(8),
        })
    }

    pub fn to_vector(&self) -> DVector<f64> {
        concat_blocks(&self.blocks())
    }

    /// Checks array lengths, positivity of the gas temperature and total gas bulk density,
    /// non-negativity of the species densities and a positive sum of the five property-bearing species.
    pub fn validate(&self, n: usize) -> Result<(), GasPhaseError> {
        for (name, block) in GAS_BLOCK_NAMES.iter().zip(self.blocks()) {
            check_len(name, block.as_slice(), n)?;
        }
        check_positive("Tg", self.Tg.as_slice())?;
        check_positive("rhob_g", self.rhob_g.as_slice())?;
        let species = [
            ("rhob_h2", &self.rhob_h2),
            ("rhob_ch4", &self.rhob_ch4),
            ("rhob_co", &self.rhob_co),
            ("rhob_co2", &self.rhob_co2),
            ("rhob_h2o", &self.rhob_h2o),
            ("rhob_t", &self.rhob_t),
        ];
        for (name, rhob) in species {
            check_non_negative(name, rhob.as_slice())?;
        }
        let sum = &self.rhob_h2 + &self.rhob_ch4 + &self.rhob_co + &self.rhob_co2 + &self.rhob_h2o;
        check_positive("sum of species bulk densities", sum.as_slice())?;
        Ok(())
    }
}

/// fields owned by the solid-phase model
#[derive(Debug, Clone, PartialEq)]
#[allow(non_snake_case)]
pub struct SolidPhaseFields {
    /// solid fuel temperature, K
    pub Ts: DVector<f64>,
    /// bed particle temperature, K
    pub Tp: DVector<f64>,
    /// wall temperature, K
    pub Tw: DVector<f64>,
    /// bulk density of fuel particles, kg/m³
    pub rhob_s: DVector<f64>,
    /// particle velocity, m/s
    pub v: DVector<f64>,
    /// true density of fuel particles, kg/m³
    pub rhos: DVector<f64>,
    /// fuel particle diameter, m
    pub ds: DVector<f64>,
    /// sphericity correction factor of the drag law
    pub sfc: DVector<f64>,
}

impl SolidPhaseFields {
    pub fn validate(&self, n: usize) -> Result<(), GasPhaseError> {
        let all = [
            ("Ts", &self.Ts),
            ("Tp", &self.Tp),
            ("Tw", &self.Tw),
            ("rhob_s", &self.rhob_s),
            ("v", &self.v),
            ("rhos", &self.rhos),
            ("ds", &self.ds),
            ("sfc", &self.sfc),
        ];
        for (name, field) in all {
            check_len(name, field.as_slice(), n)?;
        }
        check_positive("Ts", self.Ts.as_slice())?;
        check_positive("Tp", self.Tp.as_slice())?;
        check_positive("Tw", self.Tw.as_slice())?;
        check_positive("rhob_s", self.rhob_s.as_slice())?;
        check_positive("rhos", self.rhos.as_slice())?;
        check_positive("ds", self.ds.as_slice())?;
        Ok(())
    }
}

/// reaction sources from the kinetics model, kg/(m³·s); `qgs` is the gas-solid reaction heat, W/m³
#[derive(Debug, Clone, PartialEq)]
#[allow(non_snake_case)]
pub struct ReactionSources {
    pub Sg: DVector<f64>,
    pub Sh2: DVector<f64>,
    pub Sch4: DVector<f64>,
    pub Sco: DVector<f64>,
    pub Sco2: DVector<f64>,
    pub Sh2o: DVector<f64>,
    pub St: DVector<f64>,
    pub qgs: DVector<f64>,
}

impl ReactionSources {
    pub fn zeros(n: usize) -> Self {
        Self {
            Sg: DVector::zeros(n),
            Sh2: DVector::zeros(n),
            Sch4: DVector::zeros(n),
            Sco: DVector::zeros(n),
            Sco2: DVector::zeros(n),
            Sh2o: DVector::zeros(n),
            St: DVector::zeros(n),
            qgs: DVector::zeros(n),
        }
    }

    pub fn validate(&self, n: usize) -> Result<(), GasPhaseError> {
        let all = [
            ("Sg", &self.Sg),
            ("Sh2", &self.Sh2),
            ("Sch4", &self.Sch4),
            ("Sco", &self.Sco),
            ("Sco2", &self.Sco2),
            ("Sh2o", &self.Sh2o),
            ("St", &self.St),
            ("qgs", &self.qgs),
        ];
        for (name, field) in all {
            check_len(name, field.as_slice(), n)?;
        }
        Ok(())
    }
}

/// time derivatives of the gas-phase state, same layout as `GasPhaseState`
#[derive(Debug, Clone, PartialEq)]
#[allow(non_snake_case)]
pub struct GasPhaseDerivatives {
    pub dTg_dt: DVector<f64>,
    pub dmfg_dt: DVector<f64>,
    pub drhob_g_dt: DVector<f64>,
    pub drhob_h2_dt: DVector<f64>,
    pub drhob_ch4_dt: DVector<f64>,
    pub drhob_co_dt: DVector<f64>,
    pub drhob_co2_dt: DVector<f64>,
    pub drhob_h2o_dt: DVector<f64>,
    pub drhob_t_dt: DVector<f64>,
}

impl GasPhaseDerivatives {
    pub fn to_vector(&self) -> DVector<f64> {
        concat_blocks(&[
            &self.dTg_dt,
            &self.dmfg_dt,
            &self.drhob_g_dt,
            &self.drhob_h2_dt,
            &self.drhob_ch4_dt,
            &self.drhob_co_dt,
            &self.drhob_co2_dt,
            &self.drhob_h2o_dt,
            &self.drhob_t_dt,
        ])
    }
}

fn concat_blocks(blocks: &[&DVector<f64>]) -> DVector<f64> {
    let total: usize = blocks.iter().map(|b| b.len()).sum();
    let mut y = Vec::with_capacity(total);
    for b in blocks {
        y.extend_from_slice(b.as_slice());
    }
    DVector::from_vec(y)
}
