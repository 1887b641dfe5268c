use futures::future::join_all;

use crate::generate::service::{GenerationOutcome, GenerationRequest, ImageGenerator};

/// Issue a batch of generation requests concurrently and collect every
/// outcome.
///
/// Requests are fired back-to-back without awaiting each other; each
/// completion maps to exactly one outcome. A failed call becomes a failed
/// outcome for its own request and never aborts the batch. There is no
/// cancellation; staleness is handled by the session's token fence when
/// outcomes are applied.
#[tracing::instrument(skip_all, fields(requests = requests.len()))]
pub async fn run_batch(
    generator: &(dyn ImageGenerator),
    requests: Vec<GenerationRequest>,
) -> Vec<GenerationOutcome> {
    let calls = requests.into_iter().map(|request| async move {
        let result = generator
            .generate(&request)
            .await
            .map_err(|err| err.to_string());
        if let Err(error) = &result {
            tracing::warn!(id = %request.hypothesis_id, error = %error, "generation call failed");
        }
        GenerationOutcome {
            hypothesis_id: request.hypothesis_id,
            token: request.token,
            result,
        }
    });
    join_all(calls).await
}
