use super::*;
use crate::matrix::slot::SlotMatrix;

#[test]
fn image_prompt_carries_every_scene_axis() {
    let slot = SlotMatrix::default().a;
    let prompt = image_prompt(&slot, "Collagen drink for tired skin", "Skin in 7 days");
    for label in [
        slot.persona.label(),
        slot.action.label(),
        slot.setting.label(),
        slot.lighting.label(),
        slot.pov.label(),
        slot.tone.label(),
    ] {
        assert!(prompt.contains(label), "missing scene axis: {label}");
    }
    assert!(prompt.contains("Collagen drink for tired skin"));
    assert!(prompt.contains("Skin in 7 days"));
    assert!(prompt.contains(LOCALIZATION));
    assert!(prompt.contains(NEGATIVE_PROMPT));
}

#[test]
fn hook_text_is_context_only_never_rendered() {
    let slot = SlotMatrix::default().a;
    let prompt = image_prompt(&slot, "p", "BUY NOW");
    assert!(prompt.contains("Do not render text"));
    assert!(prompt.contains("\"BUY NOW\""));
}

#[test]
fn dedicated_formats_get_their_own_directives() {
    let flash = format_directives(Format::DirectFlashSelfie);
    assert!(flash.contains("Direct flash"));
    assert!(flash.contains("FORBIDDEN"));

    let cctv = format_directives(Format::CctvSecurityFootage);
    assert!(cctv.contains("Security camera"));

    let big_font = format_directives(Format::BigFontImpact);
    assert!(big_font.contains("typography"));
}

#[test]
fn undedicated_formats_fall_back_to_realistic_photography() {
    let directives = format_directives(Format::HandwrittenWhiteboard);
    assert!(directives.starts_with("Style: Realistic photography"));
    assert!(directives.contains(Format::HandwrittenWhiteboard.label()));
}

#[test]
fn critique_prompt_names_the_headline_and_demands_json() {
    let prompt = critique_prompt("Skin in 7 days");
    assert!(prompt.contains("\"Skin in 7 days\""));
    assert!(prompt.contains("thumbstopScore"));
    assert!(prompt.contains("Output JSON only"));
}

#[test]
fn hook_variations_prompt_carries_the_count() {
    let prompt = hook_variations_prompt("Skin in 7 days", "collagen", 3);
    assert!(prompt.contains("Write 3 alternative hooks"));
    assert!(prompt.contains("collagen"));
}

#[test]
fn anchor_extraction_clips_oversized_copy() {
    let long = "x".repeat(5000);
    let prompt = anchor_extraction_prompt(&long);
    assert!(prompt.contains(&"x".repeat(2000)));
    assert!(!prompt.contains(&"x".repeat(2001)));
    assert!(prompt.contains("goldenHook"));
}
