//! Explicit application state with reducer-style update operations.
//!
//! All mutation of the hypothesis forest is funneled through the named
//! operations below. The core stays synchronous: operations that need the
//! external collaborator return [`GenerationRequest`]s for the caller to
//! dispatch, and completions come back through [`Session::apply_outcome`],
//! where the attempt-token fence drops stale results.

use rand::Rng;

use crate::foundation::core::{AttemptToken, BatchId, HypothesisId};
use crate::foundation::error::{HooklabError, HooklabResult};
use crate::generate::prompt::image_prompt;
use crate::generate::service::{GenerationOutcome, GenerationRequest};
use crate::hypothesis::model::{
    Critique, GenerationStatus, Hypothesis, OverlayConfig, RemixMode,
};
use crate::matrix::sampler::sample_slot;
use crate::matrix::slot::{Slot, SlotMatrix};

/// Number of children created by one remix.
pub const REMIX_FANOUT: usize = 3;

/// One ideation session: the locked anchor plus the hypothesis forest.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Session {
    product_context: String,
    hook: String,
    hypotheses: Vec<Hypothesis>,
}

impl Session {
    /// Start a session around a product context and a locked hook.
    pub fn new(product_context: impl Into<String>, hook: impl Into<String>) -> Self {
        Self {
            product_context: product_context.into(),
            hook: hook.into(),
            hypotheses: Vec::new(),
        }
    }

    /// Product context the anchor was confirmed with.
    pub fn product_context(&self) -> &str {
        &self.product_context
    }

    /// The locked golden hook.
    pub fn hook(&self) -> &str {
        &self.hook
    }

    /// The full hypothesis forest, in creation order.
    pub fn hypotheses(&self) -> &[Hypothesis] {
        &self.hypotheses
    }

    /// Look up one hypothesis.
    pub fn get(&self, id: HypothesisId) -> Option<&Hypothesis> {
        self.hypotheses.iter().find(|h| h.id == id)
    }

    fn get_mut(&mut self, id: HypothesisId) -> Option<&mut Hypothesis> {
        self.hypotheses.iter_mut().find(|h| h.id == id)
    }

    fn request_for(&self, hypothesis: &Hypothesis) -> GenerationRequest {
        GenerationRequest {
            hypothesis_id: hypothesis.id,
            token: hypothesis.attempt,
            prompt: image_prompt(&hypothesis.slot, &self.product_context, &hypothesis.hook),
            aspect_ratio: hypothesis.slot.aspect_ratio,
        }
    }

    fn push_generating(
        &mut self,
        batch_id: BatchId,
        slot_label: String,
        mut slot: Slot,
        hook: String,
        overlay: Option<OverlayConfig>,
        parent_id: Option<HypothesisId>,
    ) -> GenerationRequest {
        slot.enforce();
        let hypothesis = Hypothesis {
            id: HypothesisId::new(),
            batch_id,
            slot_label,
            slot,
            hook,
            status: GenerationStatus::Generating,
            attempt: AttemptToken::default().next(),
            image: None,
            critique: None,
            overlay,
            parent_id,
        };
        let request = self.request_for(&hypothesis);
        self.hypotheses.push(hypothesis);
        request
    }

    /// Execute the three-way matrix: append one hypothesis per slot under a
    /// fresh batch tag and return the generation requests to dispatch.
    ///
    /// Existing hypotheses are never overwritten; repeated executions pile
    /// new batches onto the forest.
    #[tracing::instrument(skip(self, matrix))]
    pub fn execute_matrix(&mut self, matrix: &SlotMatrix) -> Vec<GenerationRequest> {
        let batch_id = BatchId::random();
        let hook = self.hook.clone();
        matrix
            .slots()
            .map(|slot| {
                self.push_generating(
                    batch_id.clone(),
                    slot.label.clone(),
                    slot.clone(),
                    hook.clone(),
                    Some(OverlayConfig::for_hook(&hook)),
                    None,
                )
            })
            .to_vec()
    }

    /// Re-issue generation for one hypothesis, superseding any in-flight
    /// attempt via a fresh token.
    pub fn regenerate(&mut self, id: HypothesisId) -> HooklabResult<GenerationRequest> {
        let hypothesis = self
            .get_mut(id)
            .ok_or_else(|| HooklabError::validation(format!("unknown hypothesis {id}")))?;
        hypothesis.attempt = hypothesis.attempt.next();
        hypothesis.status = GenerationStatus::Generating;
        let snapshot = hypothesis.clone();
        Ok(self.request_for(&snapshot))
    }

    /// Apply the resolution of one generation call.
    ///
    /// Outcomes whose token no longer matches the hypothesis's latest issued
    /// attempt are dropped: a superseded call must not overwrite a newer
    /// one. Failures mark only their own hypothesis as failed.
    pub fn apply_outcome(&mut self, outcome: GenerationOutcome) {
        let Some(hypothesis) = self.get_mut(outcome.hypothesis_id) else {
            tracing::debug!(id = %outcome.hypothesis_id, "outcome for removed hypothesis dropped");
            return;
        };
        if hypothesis.attempt != outcome.token {
            tracing::debug!(id = %outcome.hypothesis_id, "stale outcome dropped");
            return;
        }
        match outcome.result {
            Ok(image) => {
                hypothesis.image = Some(image);
                hypothesis.status = GenerationStatus::Ready;
            }
            Err(error) => {
                hypothesis.status = GenerationStatus::Failed { error };
            }
        }
    }

    /// Record a critique verdict for a finished hypothesis.
    pub fn apply_critique(&mut self, id: HypothesisId, critique: Critique) -> HooklabResult<()> {
        let hypothesis = self
            .get_mut(id)
            .ok_or_else(|| HooklabError::validation(format!("unknown hypothesis {id}")))?;
        if hypothesis.image.is_none() {
            return Err(HooklabError::validation(
                "cannot critique a hypothesis without a generated image",
            ));
        }
        hypothesis.critique = Some(critique);
        Ok(())
    }

    /// Replace one hypothesis's overlay configuration.
    pub fn update_overlay(
        &mut self,
        id: HypothesisId,
        overlay: OverlayConfig,
    ) -> HooklabResult<()> {
        let hypothesis = self
            .get_mut(id)
            .ok_or_else(|| HooklabError::validation(format!("unknown hypothesis {id}")))?;
        hypothesis.overlay = Some(overlay);
        Ok(())
    }

    /// Master-switch update of the anchor hook.
    ///
    /// With `propagate_overlays` every existing hypothesis and its overlay
    /// text are rewritten to the new hook; otherwise only future batches use
    /// it.
    pub fn update_hook(&mut self, new_hook: impl Into<String>, propagate_overlays: bool) {
        self.hook = new_hook.into();
        if !propagate_overlays {
            return;
        }
        let hook = self.hook.clone();
        for hypothesis in &mut self.hypotheses {
            hypothesis.hook = hook.clone();
            if let Some(overlay) = &mut hypothesis.overlay {
                overlay.text = hook.clone();
            }
        }
    }

    /// Derive remix children from one hypothesis.
    ///
    /// `ScaleVibe` keeps the parent's visuals and varies the hook copy (one
    /// child per entry in `hooks`); `ScaleVisual` keeps the hook and
    /// resamples the slot away from the parent's format
    /// ([`REMIX_FANOUT`] children). Children carry `parent_id` lineage.
    pub fn remix<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        mode: RemixMode,
        parent_id: HypothesisId,
        hooks: &[String],
    ) -> HooklabResult<Vec<GenerationRequest>> {
        let parent = self
            .get(parent_id)
            .ok_or_else(|| HooklabError::validation(format!("unknown hypothesis {parent_id}")))?
            .clone();

        let mut requests = Vec::new();
        match mode {
            RemixMode::ScaleVibe => {
                if hooks.is_empty() {
                    return Err(HooklabError::validation(
                        "vibe remix requires at least one hook variation",
                    ));
                }
                for (i, hook) in hooks.iter().enumerate() {
                    let label = format!("{}_vibe_{}", parent.slot_label, i + 1);
                    let mut slot = parent.slot.clone();
                    slot.label = label.clone();
                    let mut overlay =
                        parent.overlay.clone().unwrap_or_else(|| OverlayConfig::for_hook(hook));
                    overlay.text = hook.clone();
                    requests.push(self.push_generating(
                        parent.batch_id.clone(),
                        label,
                        slot,
                        hook.clone(),
                        Some(overlay),
                        Some(parent.id),
                    ));
                }
            }
            RemixMode::ScaleVisual => {
                for i in 0..REMIX_FANOUT {
                    let label = format!("{}_vis_{}", parent.slot_label, i + 1);
                    let slot = sample_slot(
                        rng,
                        &label,
                        &[parent.slot.format],
                        parent.slot.aspect_ratio,
                    );
                    requests.push(self.push_generating(
                        parent.batch_id.clone(),
                        label,
                        slot,
                        parent.hook.clone(),
                        parent.overlay.clone(),
                        Some(parent.id),
                    ));
                }
            }
        }
        Ok(requests)
    }

    /// Remove one hypothesis. Children keep their `parent_id`; their lineage
    /// edge simply stops resolving.
    pub fn remove(&mut self, id: HypothesisId) {
        self.hypotheses.retain(|h| h.id != id);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/state.rs"]
mod tests;
