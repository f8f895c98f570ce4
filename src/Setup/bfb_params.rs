//! # BFB Gasifier Parameters Module
//!
//! ## Aim
//! Holds the immutable parameter record of a bubbling fluidized-bed gasifier run: reactor and bed geometry,
//! operating conditions, bed particle and wall properties and grid sizes.
//!
//! ## Main Data Structures
//! - `BFBConfig`: raw input record as it appears in the PARAMETERS section of a task file (serde)
//! - `BFBParams`: validated record with derived quantities (bed cross-section, bed height at minimum
//!   fluidization, inlet gas density, inlet mass flux and velocity). It can only be built through
//!   `BFBParams::new`, so every instance in the program has passed validation.
//!
//! ## Derived quantities
//! | Symbol | Expression | Units |
//! |--------|------------|-------|
//! | `Ab` | π/4·Db² | m² |
//! | `Lmf` | Ls·(1−ef0)/(1−emf) | m |
//! | `rhob_gin` | Pin·Mgin/(R·Tgin)·1e-3, inlet gas is steam | kg/m³ |
//! | `mfgin` | SB·(msdot/3600)/Ab | kg/(m²·s) |
//! | `ugin` | mfgin/rhob_gin | m/s |
use crate::GasPhase::gas_phase_error::GasPhaseError;
use log::info;
use prettytable::{Table, row};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Universal gas constant in J/(mol·K)
pub const R_G: f64 = 8.314;
/// Gravitational acceleration in m/s²
pub const G: f64 = 9.81;
/// molar mass of the inlet gas (steam), g/mol
pub const M_GAS_IN: f64 = 18.0;

/// raw parameter record, deserialized from the PARAMETERS section of a task file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[allow(non_snake_case)]
pub struct BFBConfig {
    /// inner diameter of the bed (m)
    pub Db: f64,
    /// inner wall diameter (m)
    pub Dwi: f64,
    /// outer wall diameter (m)
    pub Dwo: f64,
    /// wall thermal conductivity (W/(m·K))
    pub kw: f64,
    /// reactor length (m)
    pub L: f64,
    /// static bed height (m)
    pub Ls: f64,
    /// static inert-bed height for the bubble/slug velocity ratio (m), Ls if absent
    #[serde(default)]
    pub Lsi: Option<f64>,
    /// bed particle diameter (m)
    pub dp: f64,
    /// bed particle sphericity
    pub phi: f64,
    /// bed particle density (kg/m³)
    pub rhop: f64,
    /// voidage at minimum fluidization
    pub emf: f64,
    /// static bed voidage
    pub ef0: f64,
    /// inlet gas temperature (K)
    pub Tgin: f64,
    /// inlet pressure (Pa)
    pub Pin: f64,
    /// steam to biomass mass ratio
    pub SB: f64,
    /// biomass feed rate (kg/h)
    pub msdot: f64,
    /// number of cells
    pub N: usize,
    /// number of cells in the bed
    pub Np: usize,
    /// cell where the biomass is injected, counted from 1
    pub N1: usize,
}

impl Default for BFBConfig {
    /// laboratory scale steam gasifier with a sand bed
    fn default() -> Self {
        Self {
            Db: 0.1,
            Dwi: 0.1,
            Dwo: 0.11,
            kw: 16.0,
            L: 1.0,
            Ls: 0.1,
            Lsi: None,
            dp: 3.2e-4,
            phi: 0.86,
            rhop: 2500.0,
            emf: 0.45,
            ef0: 0.4,
            Tgin: 773.0,
            Pin: 101325.0,
            SB: 0.8,
            msdot: 1.0,
            N: 100,
            Np: 12,
            N1: 5,
        }
    }
}

/// validated, immutable parameter record shared read-only by every gas-phase component
#[derive(Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
#[allow(non_snake_case)]
pub struct BFBParams {
    pub Db: f64,
    pub Dwi: f64,
    pub Dwo: f64,
    pub kw: f64,
    pub L: f64,
    pub Ls: f64,
    pub Lsi: f64,
    pub dp: f64,
    pub phi: f64,
    pub rhop: f64,
    pub emf: f64,
    pub ef0: f64,
    pub Tgin: f64,
    pub Pin: f64,
    pub SB: f64,
    pub msdot: f64,
    pub N: usize,
    pub Np: usize,
    pub N1: usize,
    /// bed cross-sectional area (m²)
    pub Ab: f64,
    /// bed height at minimum fluidization (m)
    pub Lmf: f64,
    /// inlet gas bulk density (kg/m³)
    pub rhob_gin: f64,
    /// inlet gas mass flux (kg/(m²·s))
    pub mfgin: f64,
    /// inlet gas velocity (m/s)
    pub ugin: f64,
}

impl BFBParams {
    /// Validate the raw record and compute the derived quantities
    pub fn new(config: BFBConfig) -> Result<Self, GasPhaseError> {
        Self::check_config(&config)?;
        let c = config;
        let Ab = (PI / 4.0) * c.Db.powi(2);
        let Lmf = c.Ls * (1.0 - c.ef0) / (1.0 - c.emf);
        let rhob_gin = c.Pin * M_GAS_IN / (R_G * c.Tgin) * 1e-3;
        let mfgin = c.SB * (c.msdot / 3600.0) / Ab;
        let ugin = mfgin / rhob_gin;
        let params = Self {
            Db: c.Db,
            Dwi: c.Dwi,
            Dwo: c.Dwo,
            kw: c.kw,
            L: c.L,
            Ls: c.Ls,
            Lsi: c.Lsi.unwrap_or(c.Ls),
            dp: c.dp,
            phi: c.phi,
            rhop: c.rhop,
            emf: c.emf,
            ef0: c.ef0,
            Tgin: c.Tgin,
            Pin: c.Pin,
            SB: c.SB,
            msdot: c.msdot,
            N: c.N,
            Np: c.Np,
            N1: c.N1,
            Ab,
            Lmf,
            rhob_gin,
            mfgin,
            ugin,
        };
        info!(
            "parameters validated: Ab = {:.4e} m², Lmf = {:.4} m, rhob_gin = {:.4} kg/m³, mfgin = {:.4e} kg/(m²·s), ugin = {:.4} m/s",
            Ab, Lmf, rhob_gin, mfgin, ugin
        );
        Ok(params)
    }

    /// Checks:
    /// - geometry, properties and operating conditions are positive and finite
    /// - voidages and sphericity lie in (0, 1]
    /// - grid sizes are consistent: N ≥ 3, 1 ≤ Np < N, 1 ≤ N1 ≤ N
    fn check_config(c: &BFBConfig) -> Result<(), GasPhaseError> {
        let positive = [
            ("Db", c.Db),
            ("Dwi", c.Dwi),
            ("Dwo", c.Dwo),
            ("kw", c.kw),
            ("L", c.L),
            ("Ls", c.Ls),
            ("Lsi", c.Lsi.unwrap_or(c.Ls)),
            ("dp", c.dp),
            ("phi", c.phi),
            ("rhop", c.rhop),
            ("emf", c.emf),
            ("ef0", c.ef0),
            ("Tgin", c.Tgin),
            ("Pin", c.Pin),
            ("SB", c.SB),
            ("msdot", c.msdot),
        ];
        for (name, value) in positive {
            if !(value > 0.0) || !value.is_finite() {
                return Err(GasPhaseError::InvalidConfiguration(format!(
                    "{} must be positive and finite, got {}",
                    name, value
                )));
            }
        }
        if c.phi > 1.0 {
            return Err(GasPhaseError::InvalidConfiguration(format!(
                "sphericity phi must not exceed 1, got {}",
                c.phi
            )));
        }
        if c.emf >= 1.0 || c.ef0 >= 1.0 {
            return Err(GasPhaseError::InvalidConfiguration(
                "voidages emf and ef0 must be below 1".to_string(),
            ));
        }
        if c.ef0 > c.emf {
            return Err(GasPhaseError::InvalidConfiguration(format!(
                "static bed voidage ef0 = {} exceeds minimum fluidization voidage emf = {}",
                c.ef0, c.emf
            )));
        }
        if c.Dwo <= c.Dwi {
            return Err(GasPhaseError::InvalidConfiguration(
                "outer wall diameter Dwo must exceed inner wall diameter Dwi".to_string(),
            ));
        }
        if c.Ls >= c.L {
            return Err(GasPhaseError::InvalidConfiguration(
                "static bed height Ls must be below reactor length L".to_string(),
            ));
        }
        if c.N < 3 {
            return Err(GasPhaseError::InvalidConfiguration(format!(
                "at least 3 cells are required, got N = {}",
                c.N
            )));
        }
        if c.Np < 1 || c.Np >= c.N {
            return Err(GasPhaseError::InvalidConfiguration(format!(
                "bed cells Np = {} must satisfy 1 <= Np < N = {}",
                c.Np, c.N
            )));
        }
        if c.N1 < 1 || c.N1 > c.N {
            return Err(GasPhaseError::InvalidConfiguration(format!(
                "feed cell N1 = {} must satisfy 1 <= N1 <= N = {}",
                c.N1, c.N
            )));
        }
        Ok(())
    }

    /// biomass feed rate in kg/s
    pub fn ms_dot(&self) -> f64 {
        self.msdot / 3600.0
    }

    pub fn pretty_print(&self) {
        println!("\n=== BFB GASIFIER PARAMETERS ===");
        let mut table = Table::new();
        table.add_row(row!["Parameter", "Value", "Units"]);
        table.add_row(row!["Bed diameter (Db)", format!("{:.4}", self.Db), "m"]);
        table.add_row(row!["Reactor length (L)", format!("{:.4}", self.L), "m"]);
        table.add_row(row!["Static bed height (Ls)", format!("{:.4}", self.Ls), "m"]);
        table.add_row(row!["Bed height at umf (Lmf)", format!("{:.4}", self.Lmf), "m"]);
        table.add_row(row!["Particle diameter (dp)", format!("{:.3e}", self.dp), "m"]);
        table.add_row(row!["Particle density (rhop)", format!("{:.1}", self.rhop), "kg/m³"]);
        table.add_row(row!["Inlet temperature (Tgin)", format!("{:.2}", self.Tgin), "K"]);
        table.add_row(row!["Inlet pressure (Pin)", format!("{:.2e}", self.Pin), "Pa"]);
        table.add_row(row!["Steam/biomass (SB)", format!("{:.3}", self.SB), "-"]);
        table.add_row(row!["Feed rate (msdot)", format!("{:.3}", self.msdot), "kg/h"]);
        table.add_row(row!["Inlet mass flux (mfgin)", format!("{:.4e}", self.mfgin), "kg/(m²·s)"]);
        table.add_row(row!["Inlet velocity (ugin)", format!("{:.4}", self.ugin), "m/s"]);
        table.add_row(row![
            "Cells (N / Np / N1)",
            format!("{} / {} / {}", self.N, self.Np, self.N1),
            "-"
        ]);
        table.printstd();
    }
}
