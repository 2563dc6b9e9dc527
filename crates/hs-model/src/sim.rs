//! Room temperature trajectory over a full input series.

use hs_core::Real;

use crate::blend::DegeneracyPolicy;
use crate::error::{SimError, SimResult};
use crate::params::HeatModelParams;
use crate::step::{HeatModel, ThermalStep};

/// Options for simulation runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimOptions {
    /// Also return the corrected loss and energy-content series.
    pub expand: bool,
    /// Resolution of zero-denominator loss blends.
    pub policy: DegeneracyPolicy,
}

impl SimOptions {
    pub fn expanded() -> Self {
        Self {
            expand: true,
            ..Self::default()
        }
    }
}

/// Corrected loss and energy content per step.
#[derive(Clone, Debug, PartialEq)]
pub struct SimDetail {
    /// `heat_loss[0]` is 0: no step has elapsed at the seed.
    pub heat_loss: Vec<Real>,
    pub heat_content: Vec<Real>,
}

/// Result of a simulation run.
#[derive(Clone, Debug, PartialEq)]
pub struct SimOutput {
    pub room_temp: Vec<Real>,
    /// Present iff the run was expanded.
    pub detail: Option<SimDetail>,
}

impl SimOutput {
    pub fn len(&self) -> usize {
        self.room_temp.len()
    }

    pub fn is_empty(&self) -> bool {
        self.room_temp.is_empty()
    }

    pub fn is_expanded(&self) -> bool {
        self.detail.is_some()
    }
}

/// Simulate the room temperature for every index of the input series.
///
/// `room_temp[0]` is `initial_room_temp`; each later value follows from the
/// previous corrected state and the inputs at the same index.
pub fn simulate_room_temperature(
    outdoor_temp: &[Real],
    heat_gain: &[Real],
    initial_room_temp: Real,
    params: HeatModelParams,
    opts: &SimOptions,
) -> SimResult<SimOutput> {
    let (model, n) = prepare(outdoor_temp, heat_gain, params)?;
    tracing::debug!(
        n,
        heat_loss_coeff = params.heat_loss_coeff,
        specific_heat = params.specific_heat,
        expand = opts.expand,
        "simulating room temperature"
    );

    let mut state = model.initial_state(initial_room_temp)?;

    let mut room_temp = Vec::with_capacity(n);
    room_temp.push(state.temp);

    let mut detail = opts.expand.then(|| {
        let mut d = SimDetail {
            heat_loss: Vec::with_capacity(n),
            heat_content: Vec::with_capacity(n),
        };
        d.heat_loss.push(0.0);
        d.heat_content.push(state.energy);
        d
    });

    let mut fallbacks = 0usize;
    for i in 1..n {
        let step = model.step(i, state, outdoor_temp[i], heat_gain[i], opts.policy)?;
        state = step.state();
        fallbacks += usize::from(step.degenerate);

        room_temp.push(step.good_t);
        if let Some(d) = detail.as_mut() {
            d.heat_loss.push(step.good_loss);
            d.heat_content.push(step.good_e);
        }
    }

    if fallbacks > 0 {
        tracing::debug!(fallbacks, "degenerate loss blends resolved by fallback");
    }

    Ok(SimOutput { room_temp, detail })
}

/// Every derived quantity for steps `1..n`; index 0 has no step and is omitted.
pub fn trace_steps(
    outdoor_temp: &[Real],
    heat_gain: &[Real],
    initial_room_temp: Real,
    params: HeatModelParams,
    policy: DegeneracyPolicy,
) -> SimResult<Vec<ThermalStep>> {
    let (model, n) = prepare(outdoor_temp, heat_gain, params)?;

    let mut state = model.initial_state(initial_room_temp)?;
    let mut steps = Vec::with_capacity(n - 1);
    for i in 1..n {
        let step = model.step(i, state, outdoor_temp[i], heat_gain[i], policy)?;
        state = step.state();
        steps.push(step);
    }
    Ok(steps)
}

fn prepare(
    outdoor_temp: &[Real],
    heat_gain: &[Real],
    params: HeatModelParams,
) -> SimResult<(HeatModel, usize)> {
    let model = HeatModel::new(params)?;
    if outdoor_temp.len() != heat_gain.len() {
        return Err(SimError::LengthMismatch {
            outdoor: outdoor_temp.len(),
            gain: heat_gain.len(),
        });
    }
    if outdoor_temp.is_empty() {
        return Err(SimError::Empty);
    }
    Ok((model, outdoor_temp.len()))
}
