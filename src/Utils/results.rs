//! # Results Packaging Module
//!
//! Collects gas-phase states sampled by the integrator into named arrays indexed `[cell][time-sample]`
//! (one `DMatrix` per state, N rows, one column per sample). Pressure is not a state; it is reconstructed
//! for every sample from the mixture properties, the bed voidage and the ideal-gas law.
use crate::GasPhase::fluidization::calc_fluidization;
use crate::GasPhase::gas_phase_error::GasPhaseError;
use crate::GasPhase::gas_phase_rhs::GasPhaseRHS;
use crate::GasPhase::gas_phase_state::GasPhaseState;
use crate::GasPhase::gas_properties::calc_mix_props;
use crate::GasPhase::pressure::{calc_pressure, gas_volume_fraction};
use log::info;
use nalgebra::{DMatrix, DVector};
use prettytable::{Table, row};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[allow(non_snake_case)]
pub struct GasPhaseResults {
    /// cell centres, m
    pub x: DVector<f64>,
    /// sample times, s
    pub t: DVector<f64>,
    pub Tg: DMatrix<f64>,
    pub mfg: DMatrix<f64>,
    pub rhob_g: DMatrix<f64>,
    pub rhob_h2: DMatrix<f64>,
    pub rhob_ch4: DMatrix<f64>,
    pub rhob_co: DMatrix<f64>,
    pub rhob_co2: DMatrix<f64>,
    pub rhob_h2o: DMatrix<f64>,
    pub rhob_t: DMatrix<f64>,
    /// pressure, Pa
    pub P: DMatrix<f64>,
}

impl GasPhaseResults {
    /// `samples[j]` is the packed gas-phase vector at time `t[j]`
    pub fn from_samples(
        model: &GasPhaseRHS<'_>,
        t: &[f64],
        samples: &[DVector<f64>],
    ) -> Result<Self, GasPhaseError> {
        if t.len() != samples.len() {
            return Err(GasPhaseError::DimensionMismatch {
                name: "samples".to_string(),
                expected: t.len(),
                found: samples.len(),
            });
        }
        let params = model.params();
        let grid = model.grid();
        let n = params.N;
        let m = t.len();
        let empty = || DMatrix::zeros(n, m);
        let mut res = Self {
            x: grid.x.clone(),
            t: DVector::from_column_slice(t),
            Tg: empty(),
            mfg: empty(),
            rhob_g: empty(),
            rhob_h2: empty(),
            rhob_ch4: empty(),
            rhob_co: empty(),
            rhob_co2: empty(),
            rhob_h2o: empty(),
            rhob_t: empty(),
            P: empty(),
        };
        for (j, y) in samples.iter().enumerate() {
            let s = GasPhaseState::from_vector(y, n)?;
            s.validate(n)?;
            let props = calc_mix_props(
                [&s.rhob_h2, &s.rhob_ch4, &s.rhob_co, &s.rhob_co2, &s.rhob_h2o],
                &s.rhob_g,
                &s.rhob_t,
                &s.Tg,
            );
            let fluid = calc_fluidization(params, &props.Mg, &s.Tg)?;
            let afg = gas_volume_fraction(n, params.Np, fluid.ef);
            let (P, _) = calc_pressure(grid, &afg, &props.Mg, &s.rhob_g, &s.Tg);

            res.Tg.set_column(j, &s.Tg);
            res.mfg.set_column(j, &s.mfg);
            res.rhob_g.set_column(j, &s.rhob_g);
            res.rhob_h2.set_column(j, &s.rhob_h2);
            res.rhob_ch4.set_column(j, &s.rhob_ch4);
            res.rhob_co.set_column(j, &s.rhob_co);
            res.rhob_co2.set_column(j, &s.rhob_co2);
            res.rhob_h2o.set_column(j, &s.rhob_h2o);
            res.rhob_t.set_column(j, &s.rhob_t);
            res.P.set_column(j, &P);
        }
        info!("packaged {} samples of {} cells", m, n);
        Ok(res)
    }

    pub fn n_samples(&self) -> usize {
        self.t.len()
    }

    pub fn save_to_json(&self, file_name: &str) -> Result<(), GasPhaseError> {
        let writer = BufWriter::new(File::create(file_name)?);
        serde_json::to_writer_pretty(writer, self)?;
        info!("results saved to '{}'", file_name);
        Ok(())
    }

    /// inlet and outlet values at the last sample
    pub fn pretty_print(&self) {
        let m = self.n_samples();
        if m == 0 {
            println!("no samples");
            return;
        }
        let last = m - 1;
        let top = self.x.len() - 1;
        println!("\n=== GAS PHASE AT t = {:.4e} s ===", self.t[last]);
        let mut table = Table::new();
        table.add_row(row!["Quantity", "Bottom cell", "Top cell", "Units"]);
        let rows = [
            ("Tg", &self.Tg, "K"),
            ("mfg", &self.mfg, "kg/(m²·s)"),
            ("rhob_g", &self.rhob_g, "kg/m³"),
            ("rhob_h2", &self.rhob_h2, "kg/m³"),
            ("rhob_ch4", &self.rhob_ch4, "kg/m³"),
            ("rhob_co", &self.rhob_co, "kg/m³"),
            ("rhob_co2", &self.rhob_co2, "kg/m³"),
            ("rhob_h2o", &self.rhob_h2o, "kg/m³"),
            ("rhob_t", &self.rhob_t, "kg/m³"),
            ("P", &self.P, "Pa"),
        ];
        for (name, field, unit) in rows {
            table.add_row(row![
                name,
                format!("{:.6e}", field[(0, last)]),
                format!("{:.6e}", field[(top, last)]),
                unit
            ]);
        }
        table.printstd();
    }
}
