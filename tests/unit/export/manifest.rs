use super::*;
use crate::foundation::core::{AttemptToken, BatchId, HypothesisId};
use crate::hypothesis::model::{Critique, GenerationStatus, ImageArtifact};
use crate::matrix::slot::SlotMatrix;

fn ready_hypothesis(batch: &str, label: &str) -> Hypothesis {
    Hypothesis {
        id: HypothesisId::new(),
        batch_id: BatchId::from(batch),
        slot_label: label.to_string(),
        slot: SlotMatrix::default().a,
        hook: "Skin in 7 days".to_string(),
        status: GenerationStatus::Ready,
        attempt: AttemptToken::default(),
        image: Some(ImageArtifact {
            bytes: vec![0xFF, 0xD8, 0xFF],
            mime: "image/jpeg".to_string(),
        }),
        critique: None,
        overlay: None,
        parent_id: None,
    }
}

#[test]
fn sanitize_replaces_everything_outside_ascii_alnum() {
    assert_eq!(sanitize_component("Gen Z Real"), "Gen_Z_Real");
    assert_eq!(sanitize_component("a/b\\c:d"), "a_b_c_d");
    assert_eq!(sanitize_component("plain123"), "plain123");
}

#[test]
fn artifact_path_nests_persona_then_format() {
    let h = ready_hypothesis("k3x9", "A");
    let path = artifact_path(&h, "Summer Launch");
    assert_eq!(path, "Gen_Z_Real/Direct_Flash_Selfie/Summer_Launch_k3x9_A.jpg");
}

#[test]
fn manifest_skips_unfinished_hypotheses() {
    let mut pending = ready_hypothesis("k3x9", "B");
    pending.status = GenerationStatus::Generating;
    pending.image = None;
    let done = ready_hypothesis("k3x9", "A");

    let rows = build_manifest(&[pending, done], "camp").unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].slot, "k3x9_A");
}

#[test]
fn manifest_without_any_finished_artifact_is_an_export_error() {
    let mut pending = ready_hypothesis("k3x9", "A");
    pending.image = None;
    pending.status = GenerationStatus::Generating;
    let err = build_manifest(&[pending], "camp").unwrap_err();
    assert!(matches!(err, HooklabError::Export(_)));
}

#[test]
fn critique_fills_score_and_vibe_columns() {
    let mut h = ready_hypothesis("k3x9", "A");
    h.critique = Some(Critique {
        vibe: "Cheap, Authentic, Scary".to_string(),
        target_audience: "Stressed Students".to_string(),
        thumbstop_score: 71,
        critique: "Looks like evidence.".to_string(),
    });
    let uncritiqued = ready_hypothesis("k3x9", "B");

    let rows = build_manifest(&[h, uncritiqued], "camp").unwrap();
    assert_eq!(rows[0].roast_score, 71);
    assert_eq!(rows[0].vibe, "Cheap, Authentic, Scary");
    assert_eq!(rows[1].roast_score, 0);
    assert_eq!(rows[1].vibe, "");
}

#[test]
fn csv_rows_quote_and_escape_embedded_quotes() {
    let mut h = ready_hypothesis("k3x9", "A");
    h.hook = "She said \"wow\"".to_string();
    let rows = build_manifest(&[h], "camp").unwrap();
    let line = rows[0].to_csv();
    assert!(line.contains("\"She said \"\"wow\"\"\""));
    assert!(line.matches(',').count() >= 7);
}

#[test]
fn manifest_csv_starts_with_the_fixed_header() {
    let rows = build_manifest(&[ready_hypothesis("k3x9", "A")], "camp").unwrap();
    let sheet = manifest_csv(&rows);
    let mut lines = sheet.lines();
    assert_eq!(
        lines.next(),
        Some("Campaign,Slot,Format,Persona,Hook,Roast Score,Vibe,Filename")
    );
    assert_eq!(lines.count(), 1);
}
