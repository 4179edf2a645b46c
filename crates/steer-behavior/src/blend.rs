//! Combine a tick's worth of behavior outputs into one applied delta.
//!
//! All three policies drain the input vector as a side effect: a blend call
//! doubles as the agent's per-tick output-buffer reset.

use steer_core::Vec2;

use crate::Output;

/// Blending policy, selectable per agent.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlendMode {
    /// Sum every present field across outputs unconditionally; weights are
    /// ignored.  For behaviors expected to co-apply without normalization.
    #[default]
    Additive,
    /// Average only the acceleration and angular-acceleration fields over
    /// the outputs that actually supplied them.  Meant for steering
    /// behaviors.
    Average,
    /// Like [`Average`](Self::Average), but each contribution is multiplied
    /// by its weight before summing.  The sum is still divided by the
    /// contributor *count*, not the weight sum — deliberately preserved
    /// legacy semantics, not a true weighted mean.
    WeightedAverage,
}

/// Blend `outputs` under `mode` and clear the buffer.
pub fn blend(outputs: &mut Vec<Output>, mode: BlendMode) -> Output {
    let blended = match mode {
        BlendMode::Additive => additive(outputs),
        BlendMode::Average => average(outputs, false),
        BlendMode::WeightedAverage => average(outputs, true),
    };
    outputs.clear();
    blended
}

fn additive(outputs: &[Output]) -> Output {
    let mut out = Output::none();
    for o in outputs {
        accumulate(&mut out.delta_position, o.delta_position);
        accumulate(&mut out.delta_velocity, o.delta_velocity);
        accumulate(&mut out.delta_acceleration, o.delta_acceleration);
        out.delta_orientation += o.delta_orientation;
        out.delta_angular_velocity += o.delta_angular_velocity;
        out.delta_angular_acceleration += o.delta_angular_acceleration;
    }
    out
}

fn average(outputs: &[Output], weighted: bool) -> Output {
    let mut linear_sum = Vec2::ZERO;
    let mut linear_n = 0u32;
    let mut angular_sum = 0.0f32;
    let mut angular_n = 0u32;

    for o in outputs {
        let w = if weighted { o.weight } else { 1.0 };
        if let Some(a) = o.delta_acceleration {
            linear_sum += a * w;
            linear_n += 1;
        }
        if o.delta_angular_acceleration != 0.0 {
            angular_sum += o.delta_angular_acceleration * w;
            angular_n += 1;
        }
    }

    let mut out = Output::none();
    // Zero contributors means "no change", never a division by zero.
    if linear_n > 0 {
        out.delta_acceleration = Some(linear_sum / linear_n as f32);
    }
    if angular_n > 0 {
        out.delta_angular_acceleration = angular_sum / angular_n as f32;
    }
    out
}

fn accumulate(total: &mut Option<Vec2>, contribution: Option<Vec2>) {
    if let Some(v) = contribution {
        *total = Some(total.unwrap_or(Vec2::ZERO) + v);
    }
}
