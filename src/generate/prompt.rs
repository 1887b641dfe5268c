//! Prompt templating for the external generative-image and vision models.
//!
//! Everything here is pure string assembly; the crate contributes the
//! templates, the external collaborator does the heavy lifting.

use crate::matrix::axes::Format;
use crate::matrix::slot::Slot;

/// Regional grounding block appended to every image prompt.
pub const LOCALIZATION: &str = "Context: Indonesia. Use local housing architecture (ceramic \
     tiles, gypsum ceiling), local skin tones (Southeast Asian), and modest styling.";

/// Negative prompt appended to every image prompt.
pub const NEGATIVE_PROMPT: &str = "text, watermark, logo, illustration, painting, 3d render, \
     cartoon, anime, deformed, distorted faces.";

/// Style directives per format: the "uglifier". Formats without a dedicated
/// block fall back to a generic realistic-photography line.
pub fn format_directives(format: Format) -> String {
    match format {
        Format::DirectFlashSelfie => "STYLE: Direct flash photography (snapshot aesthetic).\n\
             LIGHTING: Harsh on-camera flash, dark background, high contrast / deep shadows.\n\
             QUALITY: Low fidelity, slight noise, NOT professional.\n\
             FORBIDDEN: Bokeh, studio lighting, perfect skin, professional composition."
            .to_string(),
        Format::CctvSecurityFootage => "STYLE: Security camera footage, fisheye lens distortion.\n\
             QUALITY: Grainy, timestamp overlay style, high contrast, desaturated.\n\
             ANGLE: High angle looking down (Top-down).\n\
             VIBE: Voyeuristic, raw, \"caught on camera\" feel."
            .to_string(),
        Format::MemeFormat => "STYLE: Chaotic meme snapshot.\n\
             VIBE: Cursed image aesthetic, viral internet content, chaotic energy.\n\
             COLORS: Oversaturated, frying effect."
            .to_string(),
        Format::MsPaintNostalgia => "STYLE: Crude digital drawing, early-2000s paint program.\n\
             QUALITY: Jagged lines, default palette, visible pixelation.\n\
             FORBIDDEN: Smooth gradients, professional illustration."
            .to_string(),
        Format::BigFontImpact => "STYLE: Flat graphic dominated by oversized typography.\n\
             COMPOSITION: Blank background, nothing competes with the text area.\n\
             QUALITY: Flat digital rendering, no photographic depth."
            .to_string(),
        other => format!("Style: Realistic photography adapted for {}.", other.label()),
    }
}

/// Full image-generation prompt for one slot.
pub fn image_prompt(slot: &Slot, product_context: &str, hook: &str) -> String {
    format!(
        "ROLE: You are a specialized photographer tasked with creating a specific visual asset \
         for an ad campaign.\n\
         \n\
         THE SCENE:\n\
         - Subject: {persona}\n\
         - Action: {action}\n\
         - Setting: {setting}\n\
         - Lighting Code: {lighting}\n\
         - Camera POV: {pov}\n\
         - Emotional Tone: {tone}\n\
         \n\
         PRODUCT CONTEXT:\n{product}\n\
         \n\
         TEXT OVERLAY CONTEXT (Do not render text, but match the vibe):\n\
         The image will have a text overlay saying: \"{hook}\"\n\
         \n\
         THE UGLIFIER DIRECTIVES (STRICTLY FOLLOW):\n{directives}\n\
         \n\
         LOCALIZATION:\n{localization}\n\
         \n\
         NEGATIVE PROMPT: {negative}",
        persona = slot.persona.label(),
        action = slot.action.label(),
        setting = slot.setting.label(),
        lighting = slot.lighting.label(),
        pov = slot.pov.label(),
        tone = slot.tone.label(),
        product = product_context,
        hook = hook,
        directives = format_directives(slot.format),
        localization = LOCALIZATION,
        negative = NEGATIVE_PROMPT,
    )
}

/// Vision-critique prompt for a finished artifact.
pub fn critique_prompt(hook: &str) -> String {
    format!(
        "Act as a brutal Senior Creative Director. Analyze this ad creative.\n\
         The Headline used is: \"{hook}\"\n\
         \n\
         Provide a JSON output with:\n\
         1. \"vibe\": 3 words describing the aesthetic (e.g., \"Cheap, Authentic, Scary\").\n\
         2. \"targetAudience\": Who does this appeal to? (e.g., \"Stressed Students\", \"Rich Moms\").\n\
         3. \"thumbstopScore\": A score from 0-100 on how likely this is to stop scrolling. Be harsh.\n\
         4. \"critique\": A 1-sentence roast of why it works or fails.\n\
         \n\
         Output JSON only."
    )
}

/// Prompt asking for `count` hook rewrites for a vibe remix.
pub fn hook_variations_prompt(hook: &str, product_context: &str, count: usize) -> String {
    format!(
        "Act as a Direct Response copywriter.\n\
         Product context: {product_context}\n\
         Current winning hook: \"{hook}\"\n\
         \n\
         Write {count} alternative hooks that keep the same promise but change the angle.\n\
         Keep each under 10 words. Return a JSON array of strings only."
    )
}

/// Prompt extracting product info and the golden hook from pasted copy.
pub fn anchor_extraction_prompt(text_input: &str) -> String {
    let clipped: String = text_input.chars().take(2000).collect();
    format!(
        "Analyze the following marketing copy (from a landing page or ad caption).\n\
         \n\
         COPY DATA:\n\"{clipped}\"\n\
         \n\
         Extract two critical pieces of information:\n\
         1. \"productInfo\": What is the product? Who is the target audience? (Summarize in 2 sentences).\n\
         2. \"goldenHook\": What is the strongest Hook or Offer found in the text? Keep it under 10 words.\n\
         \n\
         Return JSON only."
    )
}

#[cfg(test)]
#[path = "../../tests/unit/generate/prompt.rs"]
mod tests;
