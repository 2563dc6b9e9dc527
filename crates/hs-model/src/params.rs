//! Building thermal parameters.

use hs_core::{Real, ensure_finite, ensure_nonzero};

use crate::error::SimResult;

/// The two calibration coefficients of the building.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeatModelParams {
    /// Energy lost per unit of indoor/outdoor temperature difference over one step.
    pub heat_loss_coeff: Real,
    /// Energy content per unit of temperature (`temperature = energy / specific_heat`).
    pub specific_heat: Real,
}

impl HeatModelParams {
    pub fn new(heat_loss_coeff: Real, specific_heat: Real) -> Self {
        Self {
            heat_loss_coeff,
            specific_heat,
        }
    }

    /// The sign of `heat_loss_coeff` is not constrained.
    pub fn validate(&self) -> SimResult<()> {
        ensure_finite(self.heat_loss_coeff, "heat_loss_coeff")?;
        ensure_nonzero(self.specific_heat, "specific_heat")?;
        Ok(())
    }

    #[inline]
    pub fn energy_to_temp(&self, energy: Real) -> Real {
        energy / self.specific_heat
    }

    #[inline]
    pub fn temp_to_energy(&self, temp: Real) -> Real {
        temp * self.specific_heat
    }
}
