//! Loss blending between the pre-gain and post-gain loss estimates.
//!
//! Each step produces two linear loss estimates: one assuming the room sat at
//! its pre-gain temperature for the whole step, one assuming it sat at its
//! post-gain temperature. They are combined as
//!
//! ```text
//! good_loss = init_loss * (2 - init_loss / end_loss)
//!           = init_loss + (end_loss - init_loss) * (init_loss / end_loss)
//! ```
//!
//! The division makes `end_loss == 0` a degenerate case. It is reported as a
//! tagged [`LossBlend::Degenerate`] and resolved by a [`DegeneracyPolicy`].

use hs_core::Real;

use crate::error::{SimError, SimResult};

/// How a degenerate blend (`end_loss == 0`) is resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DegeneracyPolicy {
    /// Skip blending and use `end_loss` for the step.
    #[default]
    Fallback,
    /// Abort the run with [`SimError::DegenerateLoss`].
    Error,
}

/// Outcome of the domain-checked blend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LossBlend {
    Blended(Real),
    Degenerate { init_loss: Real, end_loss: Real },
}

/// Blend the two endpoint loss estimates of a step.
pub fn blend_losses(init_loss: Real, end_loss: Real) -> LossBlend {
    if end_loss != 0.0 {
        return LossBlend::Blended(init_loss * (2.0 - init_loss / end_loss));
    }
    if init_loss == 0.0 {
        // Both estimates agree that nothing leaves the building.
        return LossBlend::Blended(0.0);
    }
    LossBlend::Degenerate {
        init_loss,
        end_loss,
    }
}

impl LossBlend {
    pub fn is_degenerate(&self) -> bool {
        matches!(self, LossBlend::Degenerate { .. })
    }

    /// Turn the tagged blend into a loss value for step `index`.
    pub fn resolve(self, policy: DegeneracyPolicy, index: usize) -> SimResult<Real> {
        match (self, policy) {
            (LossBlend::Blended(loss), _) => Ok(loss),
            (LossBlend::Degenerate { end_loss, .. }, DegeneracyPolicy::Fallback) => Ok(end_loss),
            (LossBlend::Degenerate { init_loss, .. }, DegeneracyPolicy::Error) => {
                Err(SimError::DegenerateLoss { index, init_loss })
            }
        }
    }
}
