//! Hooklab is a creative-ad hypothesis engine.
//!
//! Users lock a marketing hook, configure a three-way experiment matrix of
//! visual attributes, generate one image per slot through an external
//! generative collaborator, and explore the results on a free-form canvas.
//!
//! # Pipeline overview
//!
//! 1. **Configure**: a [`SlotMatrix`] of three [`Slot`]s, normalized by the
//!    enforcement pass and optionally resampled by the smart-chaos sampler
//! 2. **Execute**: [`Session::execute_matrix`] appends a hypothesis batch and
//!    hands back [`GenerationRequest`]s
//! 3. **Dispatch**: [`run_batch`] drives the [`ImageGenerator`] collaborator
//!    concurrently; [`Session::apply_outcome`] applies each completion behind
//!    an attempt-token fence
//! 4. **Explore**: [`cluster_layout`] / [`tree_layout`] compute deterministic
//!    canvas positions; [`build_manifest`] prepares the export sheet
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: sampling takes an injected `Rng`; layout
//!   is a pure function of the forest.
//! - **Failure isolation**: a failed generation marks one hypothesis failed
//!   and touches nothing else.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod export;
mod foundation;
mod generate;
mod hypothesis;
mod layout;
mod matrix;
mod session;

pub use export::manifest::{
    MANIFEST_HEADER, ManifestRow, artifact_path, build_manifest, manifest_csv,
    sanitize_component,
};
pub use export::overlay::{OverlayPlacement, overlay_placement, placement_for_dimensions};
pub use foundation::core::{AspectRatio, AttemptToken, BatchId, HypothesisId, Point, Rect, Vec2};
pub use foundation::error::{HooklabError, HooklabResult};
pub use generate::dispatch::run_batch;
pub use generate::prompt::{
    LOCALIZATION, NEGATIVE_PROMPT, anchor_extraction_prompt, critique_prompt, format_directives,
    hook_variations_prompt, image_prompt,
};
pub use generate::service::{GenerationOutcome, GenerationRequest, ImageGenerator};
pub use hypothesis::model::{
    Critique, GenerationStatus, Hypothesis, ImageArtifact, OverlayAlign, OverlayConfig,
    OverlayFont, OverlayStyle, RemixMode,
};
pub use layout::cluster::{
    CLUSTER_RING_RADIUS, ClusterLayout, ITEM_RING_RADIUS, SINGLE_CLUSTER_OFFSET_Y, cluster_layout,
};
pub use layout::node::{Edge, Positioned};
pub use layout::tree::{StrategyKind, StrategyNode, TreeLayout, TreeLayoutParams, tree_layout};
pub use matrix::axes::{Action, Format, Lighting, Persona, Pov, Setting, Tone};
pub use matrix::rules::{compatible_lighting, compatible_pov, compatible_settings};
pub use matrix::sampler::{MAX_SAMPLE_ATTEMPTS, sample_slot};
pub use matrix::slot::{SIMILARITY_WARN_THRESHOLD, Slot, SlotMatrix};
pub use session::state::{REMIX_FANOUT, Session};
