//! The "smart chaos" randomizer: compatibility-constrained slot sampling.
//!
//! Sampling is driven by the format axis. The format restricts the setting,
//! the (setting, format) pair restricts the lighting, and the format
//! restricts the point of view; persona, action and tone are free. A
//! candidate colliding with an already-fixed slot on the format axis is
//! rejected and redrawn, up to a fixed retry ceiling. Distinctness is
//! best-effort: on exhaustion the last candidate is accepted rather than
//! blocking or erroring.

use rand::Rng;

use crate::foundation::core::AspectRatio;
use crate::matrix::axes::{Action, Format, Persona, Tone};
use crate::matrix::rules::{compatible_lighting, compatible_pov, compatible_settings};
use crate::matrix::slot::{Slot, SlotMatrix};

/// Retry ceiling for the collision-rejection loop.
pub const MAX_SAMPLE_ATTEMPTS: usize = 20;

fn pick<R: Rng + ?Sized, T: Copy>(rng: &mut R, options: &[T]) -> T {
    options[rng.random_range(0..options.len())]
}

fn draw_candidate<R: Rng + ?Sized>(rng: &mut R, label: &str, aspect: AspectRatio) -> Slot {
    // Format first: it drives every constrained axis below.
    let format = pick(rng, Format::ALL);
    let setting = pick(rng, compatible_settings(format));
    let lighting = pick(rng, compatible_lighting(setting, format));
    let pov = pick(rng, compatible_pov(format));

    Slot {
        label: label.to_string(),
        format,
        setting,
        lighting,
        pov,
        persona: pick(rng, Persona::ALL),
        action: pick(rng, Action::ALL),
        tone: pick(rng, Tone::ALL),
        aspect_ratio: aspect,
    }
}

/// Sample one coherent slot whose format avoids `taken_formats`.
///
/// Runs the enforcement pass on the result so sampled slots satisfy the same
/// normalization as user-edited ones.
pub fn sample_slot<R: Rng + ?Sized>(
    rng: &mut R,
    label: &str,
    taken_formats: &[Format],
    aspect: AspectRatio,
) -> Slot {
    let mut candidate = draw_candidate(rng, label, aspect);
    for _ in 1..MAX_SAMPLE_ATTEMPTS {
        if !taken_formats.contains(&candidate.format) {
            break;
        }
        candidate = draw_candidate(rng, label, aspect);
    }
    if taken_formats.contains(&candidate.format) {
        // Soft constraint: accepted anyway after the retry ceiling.
        tracing::debug!(label, "sampler retry ceiling reached, accepting colliding candidate");
    }
    candidate.enforce();
    candidate
}

impl SlotMatrix {
    /// Resample slots B and C, keeping A under user control.
    ///
    /// B avoids A's format; C avoids both. The aspect ratio of slot A is
    /// carried to the resampled slots.
    pub fn inject_chaos<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let aspect = self.a.aspect_ratio;
        self.b = sample_slot(rng, "B", &[self.a.format], aspect);
        self.c = sample_slot(rng, "C", &[self.a.format, self.b.format], aspect);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/matrix/sampler.rs"]
mod tests;
