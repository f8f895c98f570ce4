//! Axial grid container. Grids are generated elsewhere; this module only checks and stores them.
use super::bfb_params::BFBParams;
use crate::GasPhase::gas_phase_error::GasPhaseError;
use log::info;
use nalgebra::DVector;

/// ordered cells spanning the reactor height: widths `dx` and centres `x`
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub dx: DVector<f64>,
    pub x: DVector<f64>,
}

impl Grid {
    /// Wrap externally generated cell widths and centres.
    ///
    /// Widths must be positive, centres strictly increasing, both of the same length.
    pub fn new(dx: DVector<f64>, x: DVector<f64>) -> Result<Self, GasPhaseError> {
        if dx.len() != x.len() {
            return Err(GasPhaseError::DimensionMismatch {
                name: "x".to_string(),
                expected: dx.len(),
                found: x.len(),
            });
        }
        let grid = Self { dx, x };
        if grid.is_empty() {
            return Err(GasPhaseError::InvalidConfiguration(
                "grid has no cells".to_string(),
            ));
        }
        let (dx, x) = (&grid.dx, &grid.x);
        for (i, &w) in dx.iter().enumerate() {
            if !(w > 0.0) || !w.is_finite() {
                return Err(GasPhaseError::InvalidConfiguration(format!(
                    "cell width dx[{}] = {} must be positive",
                    i, w
                )));
            }
        }
        for i in 1..x.len() {
            if !(x[i] > x[i - 1]) {
                return Err(GasPhaseError::InvalidConfiguration(format!(
                    "cell centres must increase: x[{}] = {} <= x[{}] = {}",
                    i,
                    x[i],
                    i - 1,
                    x[i - 1]
                )));
            }
        }
        Ok(grid)
    }

    /// N equal cells over a reactor of length L
    #[allow(non_snake_case)]
    pub fn uniform(N: usize, L: f64) -> Result<Self, GasPhaseError> {
        if N == 0 || !(L > 0.0) {
            return Err(GasPhaseError::InvalidConfiguration(format!(
                "uniform grid needs N > 0 and L > 0, got N = {}, L = {}",
                N, L
            )));
        }
        let h = L / N as f64;
        let dx = DVector::from_element(N, h);
        let x = DVector::from_fn(N, |i, _| (i as f64 + 0.5) * h);
        Self::new(dx, x)
    }

    pub fn len(&self) -> usize {
        self.dx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dx.is_empty()
    }

    /// cell count must equal N and the widths must add up to the reactor length
    pub fn check_against(&self, params: &BFBParams) -> Result<(), GasPhaseError> {
        if self.len() != params.N {
            return Err(GasPhaseError::DimensionMismatch {
                name: "grid".to_string(),
                expected: params.N,
                found: self.len(),
            });
        }
        let length = self.dx.sum();
        if (length - params.L).abs() > 1e-9 * params.L {
            return Err(GasPhaseError::InvalidConfiguration(format!(
                "sum of cell widths {} differs from reactor length {}",
                length, params.L
            )));
        }
        info!(
            "grid checked: {} cells, {} in the bed, reactor length {} m",
            self.len(),
            params.Np,
            length
        );
        Ok(())
    }
}
