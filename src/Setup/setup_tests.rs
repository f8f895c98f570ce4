#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use super::super::bfb_params::*;
    use super::super::grid::Grid;
    use super::super::initial_conditions::InitialConditions;
    use crate::GasPhase::gas_phase_error::GasPhaseError;
    use approx::assert_relative_eq;
    use nalgebra::DVector;
    use std::f64::consts::PI;

    fn rejected(config: BFBConfig) -> bool {
        matches!(
            BFBParams::new(config),
            Err(GasPhaseError::InvalidConfiguration(_))
        )
    }

    #[test]
    fn test_derived_quantities() {
        let params = BFBParams::new(BFBConfig::default()).unwrap();
        assert_relative_eq!(params.Ab, PI / 4.0 * 0.01, epsilon = 1e-15);
        assert_relative_eq!(params.Lmf, 0.1 * 0.6 / 0.55, epsilon = 1e-15);
        assert_relative_eq!(params.rhob_gin, 101325.0 * 18.0 / (R_G * 773.0) * 1e-3, epsilon = 1e-15);
        assert_relative_eq!(params.mfgin, 0.8 * (1.0 / 3600.0) / params.Ab, epsilon = 1e-15);
        assert_relative_eq!(params.ugin, params.mfgin / params.rhob_gin, epsilon = 1e-15);
        assert_relative_eq!(params.ms_dot(), 1.0 / 3600.0, epsilon = 1e-15);
        // inert bed height defaults to the static bed height
        assert_eq!(params.Lsi, params.Ls);

        let with_lsi = BFBParams::new(BFBConfig {
            Lsi: Some(0.05),
            ..BFBConfig::default()
        })
        .unwrap();
        assert_eq!(with_lsi.Lsi, 0.05);
    }

    #[test]
    fn test_invalid_configurations() {
        let base = BFBConfig::default;
        assert!(rejected(BFBConfig { Db: -0.1, ..base() }));
        assert!(rejected(BFBConfig { Tgin: 0.0, ..base() }));
        assert!(rejected(BFBConfig { msdot: f64::NAN, ..base() }));
        assert!(rejected(BFBConfig { Lsi: Some(0.0), ..base() }));
        assert!(rejected(BFBConfig { phi: 1.2, ..base() }));
        assert!(rejected(BFBConfig { emf: 1.0, ..base() }));
        assert!(rejected(BFBConfig { ef0: 0.5, ..base() }));
        assert!(rejected(BFBConfig { Dwo: 0.1, ..base() }));
        assert!(rejected(BFBConfig { Ls: 1.0, ..base() }));
        assert!(rejected(BFBConfig { N: 2, Np: 1, N1: 1, ..base() }));
        assert!(rejected(BFBConfig { Np: 100, ..base() }));
        assert!(rejected(BFBConfig { Np: 0, ..base() }));
        assert!(rejected(BFBConfig { N1: 0, ..base() }));
        assert!(rejected(BFBConfig { N1: 101, ..base() }));
        assert!(!rejected(base()));
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "Db": 0.2, "Dwi": 0.2, "Dwo": 0.22, "kw": 20.0, "L": 2.0, "Ls": 0.3,
            "dp": 5e-4, "phi": 0.9, "rhop": 2600.0, "emf": 0.45, "ef0": 0.42,
            "Tgin": 800.0, "Pin": 1.2e5, "SB": 1.0, "msdot": 3.0,
            "N": 50, "Np": 10, "N1": 3
        }"#;
        let config: BFBConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.Lsi, None);
        let params = BFBParams::new(config).unwrap();
        assert_eq!(params.N, 50);
        assert_eq!(params.Lsi, 0.3);
        assert_relative_eq!(params.Ab, PI / 4.0 * 0.04, epsilon = 1e-15);
    }

    #[test]
    fn test_uniform_grid() {
        let grid = Grid::uniform(4, 2.0).unwrap();
        assert_eq!(grid.len(), 4);
        assert!(!grid.is_empty());
        assert_eq!(grid.dx.as_slice(), &[0.5, 0.5, 0.5, 0.5]);
        assert_eq!(grid.x.as_slice(), &[0.25, 0.75, 1.25, 1.75]);
        assert!(Grid::uniform(0, 1.0).is_err());
        assert!(Grid::uniform(3, -1.0).is_err());
    }

    #[test]
    fn test_external_grid_validation() {
        let dx = DVector::from_vec(vec![0.1, 0.2, 0.7]);
        let x = DVector::from_vec(vec![0.05, 0.2, 0.65]);
        let grid = Grid::new(dx.clone(), x.clone()).unwrap();
        assert_relative_eq!(grid.dx.sum(), 1.0, epsilon = 1e-15);

        let bad_width = DVector::from_vec(vec![0.1, 0.0, 0.9]);
        assert!(matches!(
            Grid::new(bad_width, x.clone()),
            Err(GasPhaseError::InvalidConfiguration(_))
        ));
        let unordered = DVector::from_vec(vec![0.05, 0.65, 0.2]);
        assert!(matches!(
            Grid::new(dx.clone(), unordered),
            Err(GasPhaseError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            Grid::new(DVector::zeros(0), DVector::zeros(0)),
            Err(GasPhaseError::InvalidConfiguration(_))
        ));
        let short = DVector::from_vec(vec![0.05, 0.2]);
        assert!(matches!(
            Grid::new(dx, short),
            Err(GasPhaseError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_grid_against_parameters() {
        let params = BFBParams::new(BFBConfig {
            N: 3,
            Np: 1,
            N1: 1,
            ..BFBConfig::default()
        })
        .unwrap();
        let stretched = Grid::new(
            DVector::from_vec(vec![0.1, 0.2, 0.7]),
            DVector::from_vec(vec![0.05, 0.2, 0.65]),
        )
        .unwrap();
        assert!(stretched.check_against(&params).is_ok());
        let too_short = Grid::uniform(3, 0.5).unwrap();
        assert!(too_short.check_against(&params).is_err());
        let too_many = Grid::uniform(4, 1.0).unwrap();
        assert!(matches!(
            too_many.check_against(&params),
            Err(GasPhaseError::DimensionMismatch { expected: 3, found: 4, .. })
        ));
    }

    #[test]
    fn test_initial_conditions() {
        let params = BFBParams::new(BFBConfig::default()).unwrap();
        let init = InitialConditions::default();
        let state = init.gas_state(&params);
        let solids = init.solid_fields(&params);

        assert_eq!(state.to_vector().len(), 9 * params.N);
        assert!(state.validate(params.N).is_ok());
        assert!(solids.validate(params.N).is_ok());
        assert!(state.Tg.iter().all(|t| *t == 1100.0));
        assert!(state.rhob_co.iter().all(|r| *r == 0.0));
        assert_eq!(state.rhob_h2o, state.rhob_g);
        // particles move with the inlet gas unless told otherwise
        assert_eq!(solids.v[0], params.ugin);

        let partial: InitialConditions = serde_json::from_str(r#"{ "Tg0": 900.0, "v0": 0.01 }"#).unwrap();
        assert_eq!(partial.Tg0, 900.0);
        assert_eq!(partial.mfg0, init.mfg0);
        assert_eq!(partial.solid_fields(&params).v[params.N - 1], 0.01);
    }
}
