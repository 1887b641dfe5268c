//! Export manifest: one row per finished artifact, in the column layout the
//! ads-manager import sheet expects. Archive assembly itself happens
//! downstream; this module only prepares names and rows.

use crate::foundation::error::{HooklabError, HooklabResult};
use crate::hypothesis::model::Hypothesis;

/// CSV header row of the ads-manager import sheet.
pub const MANIFEST_HEADER: &str =
    "Campaign,Slot,Format,Persona,Hook,Roast Score,Vibe,Filename";

/// Replace everything outside `[A-Za-z0-9]` with underscores.
pub fn sanitize_component(raw: &str) -> String {
    raw.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// One manifest row describing a finished artifact inside the archive.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ManifestRow {
    /// Campaign name the export was run under.
    pub campaign: String,
    /// Display label of the hypothesis (batch tag + slot position).
    pub slot: String,
    /// Format axis label.
    pub format: String,
    /// Persona axis label.
    pub persona: String,
    /// The hook overlaid on the artifact.
    pub hook: String,
    /// Thumbstop score from the critique, 0 when never critiqued.
    pub roast_score: u8,
    /// Critique vibe words, empty when never critiqued.
    pub vibe: String,
    /// Archive-relative path of the composited image.
    pub filename: String,
}

fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

impl ManifestRow {
    /// Render this row as one CSV line.
    pub fn to_csv(&self) -> String {
        [
            csv_field(&self.campaign),
            csv_field(&self.slot),
            csv_field(&self.format),
            csv_field(&self.persona),
            csv_field(&self.hook),
            csv_field(&self.roast_score.to_string()),
            csv_field(&self.vibe),
            csv_field(&self.filename),
        ]
        .join(",")
    }
}

/// Archive-relative path for one artifact: `persona/format/campaign_label.jpg`.
pub fn artifact_path(hypothesis: &Hypothesis, campaign: &str) -> String {
    format!(
        "{}/{}/{}_{}.jpg",
        sanitize_component(hypothesis.slot.persona.label()),
        sanitize_component(hypothesis.slot.format.label()),
        sanitize_component(campaign),
        hypothesis.display_label(),
    )
}

/// Build manifest rows for every hypothesis with a finished artifact.
///
/// Fails only when nothing is exportable; hypotheses still generating or
/// failed are skipped, not errors.
pub fn build_manifest(
    hypotheses: &[Hypothesis],
    campaign: &str,
) -> HooklabResult<Vec<ManifestRow>> {
    let rows: Vec<ManifestRow> = hypotheses
        .iter()
        .filter(|h| h.has_image())
        .map(|h| ManifestRow {
            campaign: campaign.to_string(),
            slot: h.display_label(),
            format: h.slot.format.label().to_string(),
            persona: h.slot.persona.label().to_string(),
            hook: h.hook.clone(),
            roast_score: h.critique.as_ref().map(|c| c.thumbstop_score).unwrap_or(0),
            vibe: h
                .critique
                .as_ref()
                .map(|c| c.vibe.clone())
                .unwrap_or_default(),
            filename: artifact_path(h, campaign),
        })
        .collect();

    if rows.is_empty() {
        return Err(HooklabError::export("no generated images to export"));
    }
    Ok(rows)
}

/// Render the full CSV sheet: header plus one line per row.
pub fn manifest_csv(rows: &[ManifestRow]) -> String {
    let mut out = String::from(MANIFEST_HEADER);
    for row in rows {
        out.push('\n');
        out.push_str(&row.to_csv());
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/export/manifest.rs"]
mod tests;
