use super::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::hypothesis::model::ImageArtifact;

fn artifact() -> ImageArtifact {
    ImageArtifact {
        bytes: vec![0xFF, 0xD8, 0xFF],
        mime: "image/jpeg".to_string(),
    }
}

fn ok_outcome(request: &GenerationRequest) -> GenerationOutcome {
    GenerationOutcome {
        hypothesis_id: request.hypothesis_id,
        token: request.token,
        result: Ok(artifact()),
    }
}

fn failed_outcome(request: &GenerationRequest, error: &str) -> GenerationOutcome {
    GenerationOutcome {
        hypothesis_id: request.hypothesis_id,
        token: request.token,
        result: Err(error.to_string()),
    }
}

#[test]
fn execute_matrix_appends_one_batch_of_three() {
    let mut session = Session::new("collagen drink", "Skin in 7 days");
    let requests = session.execute_matrix(&SlotMatrix::default());
    assert_eq!(requests.len(), 3);
    assert_eq!(session.hypotheses().len(), 3);

    let batch = session.hypotheses()[0].batch_id.clone();
    for (h, label) in session.hypotheses().iter().zip(["A", "B", "C"]) {
        assert_eq!(h.batch_id, batch);
        assert_eq!(h.slot_label, label);
        assert_eq!(h.status, GenerationStatus::Generating);
        assert_eq!(h.hook, "Skin in 7 days");
        assert!(h.overlay.as_ref().is_some_and(|o| o.text == h.hook));
        assert!(h.parent_id.is_none());
    }
    for request in &requests {
        assert!(request.prompt.contains("Skin in 7 days"));
        assert!(request.prompt.contains("collagen drink"));
    }
}

#[test]
fn repeated_execution_piles_batches_without_wiping() {
    let mut session = Session::new("p", "h");
    session.execute_matrix(&SlotMatrix::default());
    session.execute_matrix(&SlotMatrix::default());
    assert_eq!(session.hypotheses().len(), 6);
    assert_ne!(
        session.hypotheses()[0].batch_id,
        session.hypotheses()[3].batch_id
    );
}

#[test]
fn outcomes_update_exactly_one_hypothesis() {
    let mut session = Session::new("p", "h");
    let requests = session.execute_matrix(&SlotMatrix::default());

    session.apply_outcome(ok_outcome(&requests[0]));
    session.apply_outcome(failed_outcome(&requests[1], "quota exceeded"));

    let hs = session.hypotheses();
    assert_eq!(hs[0].status, GenerationStatus::Ready);
    assert!(hs[0].image.is_some());
    assert_eq!(
        hs[1].status,
        GenerationStatus::Failed {
            error: "quota exceeded".to_string()
        }
    );
    assert!(hs[1].image.is_none());
    // The third sibling stays untouched by its siblings' resolutions.
    assert_eq!(hs[2].status, GenerationStatus::Generating);
}

#[test]
fn stale_outcome_is_fenced_out_after_regenerate() {
    let mut session = Session::new("p", "h");
    let requests = session.execute_matrix(&SlotMatrix::default());
    let first = requests[0].clone();

    let second = session.regenerate(first.hypothesis_id).unwrap();
    assert_eq!(second.token, first.token.next());

    // The superseded call resolves late; its write must be dropped.
    session.apply_outcome(ok_outcome(&first));
    let h = session.get(first.hypothesis_id).unwrap();
    assert_eq!(h.status, GenerationStatus::Generating);
    assert!(h.image.is_none());

    session.apply_outcome(ok_outcome(&second));
    assert_eq!(
        session.get(first.hypothesis_id).unwrap().status,
        GenerationStatus::Ready
    );
}

#[test]
fn outcome_for_a_removed_hypothesis_is_dropped_silently() {
    let mut session = Session::new("p", "h");
    let requests = session.execute_matrix(&SlotMatrix::default());
    session.remove(requests[0].hypothesis_id);
    session.apply_outcome(ok_outcome(&requests[0]));
    assert_eq!(session.hypotheses().len(), 2);
}

#[test]
fn regenerate_unknown_hypothesis_is_a_validation_error() {
    let mut session = Session::new("p", "h");
    let err = session.regenerate(HypothesisId::new()).unwrap_err();
    assert!(matches!(err, HooklabError::Validation(_)));
}

#[test]
fn update_hook_propagates_to_overlays_when_asked() {
    let mut session = Session::new("p", "old hook");
    session.execute_matrix(&SlotMatrix::default());

    session.update_hook("kept local", false);
    assert_eq!(session.hypotheses()[0].hook, "old hook");

    session.update_hook("new hook", true);
    assert_eq!(session.hook(), "new hook");
    for h in session.hypotheses() {
        assert_eq!(h.hook, "new hook");
        assert_eq!(h.overlay.as_ref().unwrap().text, "new hook");
    }
}

#[test]
fn vibe_remix_keeps_visuals_and_varies_the_hook() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut session = Session::new("p", "h");
    let requests = session.execute_matrix(&SlotMatrix::default());
    let parent_id = requests[0].hypothesis_id;
    let parent_slot = session.get(parent_id).unwrap().slot.clone();

    let hooks = vec!["hook one".to_string(), "hook two".to_string()];
    let remixes = session
        .remix(&mut rng, RemixMode::ScaleVibe, parent_id, &hooks)
        .unwrap();
    assert_eq!(remixes.len(), 2);

    let children: Vec<_> = session
        .hypotheses()
        .iter()
        .filter(|h| h.parent_id == Some(parent_id))
        .collect();
    assert_eq!(children.len(), 2);
    for (child, hook) in children.iter().zip(&hooks) {
        assert_eq!(&child.hook, hook);
        assert_eq!(child.slot.format, parent_slot.format);
        assert_eq!(child.slot.setting, parent_slot.setting);
        assert_eq!(child.overlay.as_ref().unwrap().text, *hook);
        assert!(child.slot_label.contains("vibe"));
    }
}

#[test]
fn vibe_remix_without_hooks_is_rejected() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut session = Session::new("p", "h");
    let requests = session.execute_matrix(&SlotMatrix::default());
    let err = session
        .remix(&mut rng, RemixMode::ScaleVibe, requests[0].hypothesis_id, &[])
        .unwrap_err();
    assert!(matches!(err, HooklabError::Validation(_)));
}

#[test]
fn visual_remix_keeps_the_hook_and_resamples_the_slot() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut session = Session::new("p", "golden");
    let requests = session.execute_matrix(&SlotMatrix::default());
    let parent_id = requests[0].hypothesis_id;
    let parent_format = session.get(parent_id).unwrap().slot.format;

    let remixes = session
        .remix(&mut rng, RemixMode::ScaleVisual, parent_id, &[])
        .unwrap();
    assert_eq!(remixes.len(), REMIX_FANOUT);

    let children: Vec<_> = session
        .hypotheses()
        .iter()
        .filter(|h| h.parent_id == Some(parent_id))
        .collect();
    assert_eq!(children.len(), REMIX_FANOUT);
    for child in children {
        assert_eq!(child.hook, "golden");
        assert_ne!(child.slot.format, parent_format);
        assert!(child.slot_label.contains("vis"));
    }
}

#[test]
fn critique_requires_a_generated_image() {
    let mut session = Session::new("p", "h");
    let requests = session.execute_matrix(&SlotMatrix::default());
    let id = requests[0].hypothesis_id;
    let critique = Critique {
        vibe: "Cheap, Authentic, Scary".to_string(),
        target_audience: "Stressed Students".to_string(),
        thumbstop_score: 71,
        critique: "Works because it looks like evidence.".to_string(),
    };

    assert!(session.apply_critique(id, critique.clone()).is_err());

    session.apply_outcome(ok_outcome(&requests[0]));
    session.apply_critique(id, critique.clone()).unwrap();
    assert_eq!(session.get(id).unwrap().critique, Some(critique));
}
