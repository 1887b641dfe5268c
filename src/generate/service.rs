use async_trait::async_trait;

use crate::foundation::core::{AspectRatio, AttemptToken, HypothesisId};
use crate::foundation::error::HooklabResult;
use crate::hypothesis::model::{Critique, ImageArtifact};

/// One generation call to issue against the external collaborator.
///
/// Carries everything the collaborator needs plus the attempt token that
/// fences the eventual outcome against superseding regenerates.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct GenerationRequest {
    /// Target hypothesis.
    pub hypothesis_id: HypothesisId,
    /// Attempt token issued for this request.
    pub token: AttemptToken,
    /// Fully templated image prompt.
    pub prompt: String,
    /// Requested output aspect ratio.
    pub aspect_ratio: AspectRatio,
}

/// Resolution of one generation call.
#[derive(Clone, Debug)]
pub struct GenerationOutcome {
    /// Target hypothesis.
    pub hypothesis_id: HypothesisId,
    /// Token the originating request carried.
    pub token: AttemptToken,
    /// The artifact, or the error string to record on the hypothesis.
    pub result: Result<ImageArtifact, String>,
}

/// The external generative-image and vision-critique collaborator.
///
/// Implementations wrap whatever API the deployment talks to; the engine
/// only requires that a failed call surfaces as an error for that one
/// request and corrupts nothing else.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generate one image for a templated request.
    async fn generate(&self, request: &GenerationRequest) -> HooklabResult<ImageArtifact>;

    /// Critique a finished artifact against its hook.
    async fn critique(&self, image: &ImageArtifact, hook: &str) -> HooklabResult<Critique>;

    /// Produce alternative hooks for a vibe remix.
    async fn hook_variations(
        &self,
        hook: &str,
        product_context: &str,
        count: usize,
    ) -> HooklabResult<Vec<String>>;
}
