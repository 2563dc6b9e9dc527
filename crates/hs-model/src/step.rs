//! One step of the building energy recurrence.

use hs_core::Real;

use crate::blend::{DegeneracyPolicy, blend_losses};
use crate::error::{SimError, SimResult};
use crate::params::HeatModelParams;

/// Full derived state of a single step `i >= 1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThermalStep {
    /// Energy carried over from the previous corrected step.
    pub init_e: Real,
    /// Energy after this step's heat gain, before losses.
    pub end_e: Real,
    pub init_t: Real,
    pub end_t: Real,
    /// Indoor minus outdoor temperature, pre- and post-gain.
    pub init_dt: Real,
    pub end_dt: Real,
    pub init_loss: Real,
    pub end_loss: Real,
    /// Blended (or fallback) loss actually applied.
    pub good_loss: Real,
    /// Corrected energy content at the end of the step.
    pub good_e: Real,
    /// Corrected room temperature at the end of the step.
    pub good_t: Real,
    /// True if `good_loss` came from the degeneracy fallback.
    pub degenerate: bool,
}

/// Corrected energy content and room temperature carried between steps.
///
/// Both are advanced side by side so the temperature never goes through an
/// energy round trip; `temp` at the seed is exactly the initial room temperature.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoomState {
    pub energy: Real,
    pub temp: Real,
}

impl ThermalStep {
    /// State handed to the next step.
    pub fn state(&self) -> RoomState {
        RoomState {
            energy: self.good_e,
            temp: self.good_t,
        }
    }
}

/// Building heat model with validated parameters.
#[derive(Clone, Copy, Debug)]
pub struct HeatModel {
    params: HeatModelParams,
}

impl HeatModel {
    pub fn new(params: HeatModelParams) -> SimResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &HeatModelParams {
        &self.params
    }

    /// State seeding index 0.
    pub fn initial_state(&self, initial_room_temp: Real) -> SimResult<RoomState> {
        let temp = check_finite(0, "initial_room_temp", initial_room_temp)?;
        let energy = check_finite(0, "heat_content", self.params.temp_to_energy(temp))?;
        Ok(RoomState { energy, temp })
    }

    /// Advance from the corrected state of step `index - 1`.
    pub fn step(
        &self,
        index: usize,
        prev: RoomState,
        outdoor_temp: Real,
        heat_gain: Real,
        policy: DegeneracyPolicy,
    ) -> SimResult<ThermalStep> {
        let hloss = self.params.heat_loss_coeff;

        let init_e = prev.energy;
        let end_e = prev.energy + heat_gain;

        let init_t = prev.temp;
        let end_t = init_t + self.params.energy_to_temp(heat_gain);

        let init_dt = init_t - outdoor_temp;
        let end_dt = end_t - outdoor_temp;

        let init_loss = init_dt * hloss;
        let end_loss = end_dt * hloss;

        let blend = blend_losses(init_loss, end_loss);
        let degenerate = blend.is_degenerate();
        let good_loss = blend.resolve(policy, index)?;
        if degenerate {
            tracing::warn!(
                index,
                init_loss,
                end_t,
                outdoor_temp,
                "post-gain temperature equals outdoor temperature; using unblended loss"
            );
        }

        let good_e = check_finite(index, "heat_content", end_e - good_loss)?;
        let good_t = check_finite(
            index,
            "room_temp",
            end_t - self.params.energy_to_temp(good_loss),
        )?;

        Ok(ThermalStep {
            init_e,
            end_e,
            init_t,
            end_t,
            init_dt,
            end_dt,
            init_loss,
            end_loss,
            good_loss,
            good_e,
            good_t,
            degenerate,
        })
    }
}

fn check_finite(index: usize, what: &'static str, value: Real) -> SimResult<Real> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SimError::NonFinite { index, what, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(hloss: Real, sheat: Real) -> HeatModel {
        HeatModel::new(HeatModelParams::new(hloss, sheat)).unwrap()
    }

    fn at(energy: Real, temp: Real) -> RoomState {
        RoomState { energy, temp }
    }

    #[test]
    fn lossless_step_accumulates_gain() {
        let m = model(0.0, 2.0);
        let s = m.step(1, at(0.0, 0.0), 0.0, 10.0, DegeneracyPolicy::Error).unwrap();
        assert_eq!(s.end_e, 10.0);
        assert_eq!(s.good_loss, 0.0);
        assert_eq!(s.good_e, 10.0);
        assert_eq!(s.good_t, 5.0);
        assert!(!s.degenerate);
    }

    #[test]
    fn lossy_step_hand_computed() {
        // sheat=1, hloss=0.5, prev_e=20, t_out=10, gain=4
        // init_t=20, end_t=24, init_dt=10, end_dt=14
        // init_loss=5, end_loss=7, good_loss=5*(2-5/7)=45/7
        let m = model(0.5, 1.0);
        let s = m
            .step(1, at(20.0, 20.0), 10.0, 4.0, DegeneracyPolicy::Fallback)
            .unwrap();
        assert_eq!(s.init_dt, 10.0);
        assert_eq!(s.end_dt, 14.0);
        assert_eq!(s.init_loss, 5.0);
        assert_eq!(s.end_loss, 7.0);
        assert!((s.good_loss - 45.0 / 7.0).abs() < 1e-12);
        assert!((s.good_e - (24.0 - 45.0 / 7.0)).abs() < 1e-12);
        assert_eq!(s.good_t, s.good_e);
        assert_eq!(s.state(), at(s.good_e, s.good_t));
    }

    #[test]
    fn idle_step_keeps_temperature_bit_exact() {
        // 0.139 * 14.54 / 14.54 rounds to 0.13899999999999998
        let m = model(0.0, 14.54);
        let seed = m.initial_state(0.139).unwrap();
        assert_eq!(seed.temp, 0.139);
        let s = m.step(1, seed, 0.0, 0.0, DegeneracyPolicy::Error).unwrap();
        assert_eq!(s.good_t, 0.139);
        assert_eq!(s.good_e, seed.energy);
    }

    #[test]
    fn degenerate_step_falls_back_to_end_loss() {
        // end_t = 0 + 5 / 1 = 5 = t_out
        let m = model(1.0, 1.0);
        let s = m
            .step(1, at(0.0, 0.0), 5.0, 5.0, DegeneracyPolicy::Fallback)
            .unwrap();
        assert!(s.degenerate);
        assert_eq!(s.init_loss, -5.0);
        assert_eq!(s.good_loss, 0.0);
        assert_eq!(s.good_e, 5.0);
        assert_eq!(s.good_t, 5.0);
    }

    #[test]
    fn degenerate_step_errors_under_strict_policy() {
        let m = model(1.0, 1.0);
        let err = m
            .step(4, at(0.0, 0.0), 5.0, 5.0, DegeneracyPolicy::Error)
            .unwrap_err();
        assert_eq!(
            err,
            SimError::DegenerateLoss {
                index: 4,
                init_loss: -5.0
            }
        );
    }

    #[test]
    fn nan_gain_is_surfaced() {
        let m = model(0.0, 1.0);
        let err = m
            .step(2, at(1.0, 1.0), 0.0, Real::NAN, DegeneracyPolicy::Fallback)
            .unwrap_err();
        assert!(matches!(
            err,
            SimError::NonFinite {
                index: 2,
                what: "heat_content",
                ..
            }
        ));
    }

    #[test]
    fn initial_state_scales_energy_by_specific_heat() {
        let m = model(0.3, 2.5);
        assert_eq!(m.initial_state(20.0).unwrap(), at(50.0, 20.0));
        assert!(m.initial_state(Real::INFINITY).is_err());
    }
}
