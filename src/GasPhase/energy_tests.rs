#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use super::super::energy::*;
    use crate::GasPhase::fluidization::FluidizationState;
    use crate::GasPhase::gas_phase_state::{ReactionSources, SolidPhaseFields};
    use crate::GasPhase::gas_properties::MixtureProperties;
    use crate::Setup::bfb_params::{BFBConfig, BFBParams};
    use crate::Setup::grid::Grid;
    use approx::assert_relative_eq;
    use nalgebra::{DMatrix, DVector};
    use std::f64::consts::PI;

    const N: usize = 6;

    fn c(v: f64) -> DVector<f64> {
        DVector::from_element(N, v)
    }

    /// six cells, three in the bed, default geometry (Db = Dwi = 0.1 m, Dwo = 0.11 m, kw = 16)
    fn create_test_setup() -> (BFBParams, Grid) {
        let params = BFBParams::new(BFBConfig {
            N,
            Np: 3,
            N1: 2,
            ..BFBConfig::default()
        })
        .unwrap();
        let grid = Grid::uniform(params.N, params.L).unwrap();
        (params, grid)
    }

    /// ef = 0.5 and Lp = 0.12 m give a solids fraction epb = 0.5
    fn fluid() -> FluidizationState {
        FluidizationState {
            Lp: 0.12,
            ef: 0.5,
            umf: 0.04,
            De: 0.1,
        }
    }

    fn props(cpg: f64) -> MixtureProperties {
        MixtureProperties {
            Mg: c(18.0),
            Pr: c(0.8),
            cpg: c(cpg),
            cpgm: c(36.0),
            kg: c(0.1),
            mu: c(4e-5),
            xg: DMatrix::zeros(5, N),
        }
    }

    fn hot_wall_cold_fuel() -> SolidPhaseFields {
        SolidPhaseFields {
            Ts: c(600.0),
            Tp: c(1100.0),
            Tw: c(900.0),
            rhob_s: c(2.0),
            v: c(0.1),
            rhos: c(500.0),
            ds: c(5e-4),
            sfc: c(0.8),
        }
    }

    fn wall_resistance() -> f64 {
        PI * 0.1 / (2.0 * 16.0) * (0.11_f64 / 0.1).ln()
    }

    #[test]
    fn test_heat_transfer_in_bed_cell() {
        let (params, _) = create_test_setup();
        let Tg = c(1000.0);
        let rhob_g = c(0.1);
        let ug = c(0.5);
        let ht = heat_transfer(&params, &fluid(), &props(2000.0), &Tg, &rhob_g, &ug, &hot_wall_cold_fuel());

        // cell 1: gas density 0.2 kg/m³, slip 0.6 m/s
        let Pr33 = 0.8_f64.powf(0.33);
        let Re_dc: f64 = 0.2 * 0.6 * 5e-4 / 4e-5;
        let hs = (2.0 + 0.6 * Re_dc.sqrt() * Pr33) * 0.1 / 5e-4;

        let a = 0.5_f64;
        let Rep: f64 = 0.2 * 0.5 * 3.2e-4 / 4e-5;
        let Nup = (7.0 - 10.0 * a + 5.0 * a * a) * (1.0 + 0.7 * Rep.powf(0.2) * Pr33)
            + (1.33 - 2.4 * a + 1.2 * a * a) * Rep.powf(0.7) * Pr33;
        let hp = 6.0 * 0.5 * 0.1 * Nup / (0.86 * 3.2e-4 * 3.2e-4);
        let Uhb = 1.0 / (4.0 / (PI * 0.1 * hp) + wall_resistance());

        let qg = -6.0 * hs * 2.0 / (500.0 * 5e-4) * (1000.0 - 600.0) - hp * (1000.0 - 1100.0)
            + 4.0 / 0.1 * Uhb * (900.0 - 1000.0);

        let ReD: f64 = 0.2 * 0.5 * 0.1 / 4e-5;
        let hf = 0.023 * ReD.powf(0.8) * 0.8_f64.powf(0.4) * 0.1 / 0.1;
        let Uhf = 1.0 / (1.0 / hf + wall_resistance());

        assert_relative_eq!(ht.hs[1], hs, max_relative = 1e-12);
        assert_relative_eq!(ht.hp[1], hp, max_relative = 1e-12);
        assert_relative_eq!(ht.Uhb[1], Uhb, max_relative = 1e-12);
        assert_relative_eq!(ht.Uhf[1], Uhf, max_relative = 1e-12);
        assert_relative_eq!(ht.qg[1], qg, max_relative = 1e-10);
    }

    #[test]
    fn test_heat_transfer_in_freeboard_cell() {
        let (params, _) = create_test_setup();
        let Tg = c(1000.0);
        let rhob_g = c(0.1);
        let ug = c(0.5);
        let ht = heat_transfer(&params, &fluid(), &props(2000.0), &Tg, &rhob_g, &ug, &hot_wall_cold_fuel());

        // cell 4: no voidage correction, gas density 0.1 kg/m³
        let ReD: f64 = 0.1 * 0.5 * 0.1 / 4e-5;
        let hf = 0.023 * ReD.powf(0.8) * 0.8_f64.powf(0.4) * 0.1 / 0.1;
        let Uhf = 1.0 / (1.0 / hf + wall_resistance());
        let Re_dc: f64 = 0.1 * 0.6 * 5e-4 / 4e-5;
        let hs = (2.0 + 0.6 * Re_dc.sqrt() * 0.8_f64.powf(0.33)) * 0.1 / 5e-4;

        assert_relative_eq!(ht.Uhf[4], Uhf, max_relative = 1e-12);
        assert_relative_eq!(ht.hs[4], hs, max_relative = 1e-12);
        // a freeboard cell sees a less dense gas than a bed cell
        assert!(ht.Uhf[4] < ht.Uhf[1]);
    }

    #[test]
    fn test_temperature_rate_regions() {
        let (params, grid) = create_test_setup();
        let Np = params.Np;
        let dx = grid.dx[0];
        let cpg = 2000.0;
        let mix = props(cpg);
        // coefficients chosen so that each region reads a different one
        let ht = HeatTransfer {
            hs: c(0.0),
            hp: c(0.0),
            Uhb: c(1e6),
            Uhf: DVector::from_fn(N, |i, _| 10.0 + i as f64),
            qg: DVector::from_fn(N, |i, _| 100.0 * (i + 1) as f64),
        };
        let Tg = DVector::from_fn(N, |i, _| 1000.0 + 10.0 * i as f64);
        let rhob_g = c(0.1);
        let ug = c(0.5);
        let Tw = c(900.0);
        let mut sources = ReactionSources::zeros(N);
        sources.qgs = DVector::from_fn(N, |i, _| 5.0 * i as f64);

        let rate = tg_rate(&params, &grid, &mix, &ht, &Tg, &rhob_g, &ug, &Tw, &sources);
        let Cg = 0.1 * cpg;

        let inlet = -0.5 / dx * (Tg[0] - params.Tgin) + (-sources.qgs[0] + ht.qg[0]) / Cg;
        assert_relative_eq!(rate[0], inlet, max_relative = 1e-12);
        // bed: particle and wall exchange through qg
        for i in 1..Np {
            let expected = -0.5 / dx * (Tg[i] - Tg[i - 1]) + (-sources.qgs[i] + ht.qg[i]) / Cg;
            assert_relative_eq!(rate[i], expected, max_relative = 1e-12);
        }
        // freeboard: wall exchange through Uhf, qg is ignored
        for i in Np..N {
            let expected = -0.5 / dx * (Tg[i] - Tg[i - 1])
                - (sources.qgs[i] - 4.0 / 0.1 * ht.Uhf[i] * (Tw[i] - Tg[i])) / Cg;
            assert_relative_eq!(rate[i], expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_hot_wall_heats_isothermal_gas() {
        let (params, grid) = create_test_setup();
        let Tg = c(params.Tgin);
        let rhob_g = c(0.1);
        let ug = c(0.5);
        let mut solids = hot_wall_cold_fuel();
        solids.Ts = c(params.Tgin);
        solids.Tp = c(params.Tgin);
        solids.Tw = c(params.Tgin + 100.0);
        let mix = props(2000.0);
        let ht = heat_transfer(&params, &fluid(), &mix, &Tg, &rhob_g, &ug, &solids);
        let rate = tg_rate(&params, &grid, &mix, &ht, &Tg, &rhob_g, &ug, &solids.Tw, &ReactionSources::zeros(N));

        let Cg = 0.1 * 2000.0;
        for i in 0..params.Np {
            assert_relative_eq!(rate[i], 4.0 / 0.1 * ht.Uhb[i] * 100.0 / Cg, max_relative = 1e-12);
        }
        for i in params.Np..N {
            assert_relative_eq!(rate[i], 4.0 / 0.1 * ht.Uhf[i] * 100.0 / Cg, max_relative = 1e-12);
            assert!(rate[i] > 0.0);
        }
    }
}
