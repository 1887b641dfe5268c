use crate::foundation::core::{AttemptToken, BatchId, HypothesisId};
use crate::matrix::slot::Slot;

/// Lifecycle of one hypothesis's generated artifact.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GenerationStatus {
    /// Created but no generation issued yet.
    #[default]
    Pending,
    /// A generation request is in flight.
    Generating,
    /// The artifact arrived.
    Ready,
    /// The latest attempt failed; retry is manual.
    Failed {
        /// Error string recorded from the collaborator.
        error: String,
    },
}

/// Raw generated image bytes plus their mime type.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ImageArtifact {
    /// Encoded image bytes as returned by the collaborator.
    pub bytes: Vec<u8>,
    /// Mime type of `bytes`, e.g. `image/jpeg`.
    pub mime: String,
}

/// Vision-critique verdict for one generated artifact.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Critique {
    /// Three words describing the aesthetic.
    pub vibe: String,
    /// Who the creative appeals to.
    pub target_audience: String,
    /// Scroll-stopping likelihood, 0-100.
    pub thumbstop_score: u8,
    /// One-sentence verdict.
    pub critique: String,
}

/// Visual style of the text overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum OverlayStyle {
    /// Instagram story caption band.
    #[default]
    IgStory,
    /// TikTok-style stroked text.
    TikTokModern,
    /// Classic impact-font meme text.
    MemeImpact,
}

/// Horizontal alignment of the overlay text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum OverlayAlign {
    /// Left margin.
    Left,
    /// Centered.
    #[default]
    Center,
    /// Right margin.
    Right,
}

/// Named overlay font choices, mapped to concrete families at composite time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum OverlayFont {
    /// Neutral sans-serif.
    #[default]
    Classic,
    /// Geometric sans-serif.
    Modern,
    /// Monospace.
    Neon,
    /// Serif.
    Typewriter,
    /// Impact-style meme font.
    Meme,
}

impl OverlayFont {
    /// CSS font stack for this choice.
    pub fn css_family(self) -> &'static str {
        match self {
            OverlayFont::Classic => "Inter, sans-serif",
            OverlayFont::Modern => "Montserrat, sans-serif",
            OverlayFont::Neon => "Courier New, monospace",
            OverlayFont::Typewriter => "Times New Roman, serif",
            OverlayFont::Meme => "Impact, Oswald, sans-serif",
        }
    }
}

/// Text-overlay configuration composited onto a finished artifact at export.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OverlayConfig {
    /// Whether the overlay is drawn at all.
    pub enabled: bool,
    /// Overlay text (usually the hook).
    pub text: String,
    /// Visual style of the band.
    pub style: OverlayStyle,
    /// Vertical position as a percentage of image height, 0-100.
    pub y_position: f64,
    /// Text color.
    pub color: String,
    /// Optional band background color; `None` means transparent.
    pub background: Option<String>,
    /// Relative font scale, 10-100 against the image width.
    pub font_scale: f64,
    /// Horizontal alignment.
    pub align: OverlayAlign,
    /// Font family choice.
    pub font: OverlayFont,
}

impl OverlayConfig {
    /// Default overlay carrying the given hook text.
    pub fn for_hook(hook: &str) -> Self {
        Self {
            enabled: true,
            text: hook.to_string(),
            style: OverlayStyle::IgStory,
            y_position: 50.0,
            color: "#ffffff".to_string(),
            background: None,
            font_scale: 40.0,
            align: OverlayAlign::Center,
            font: OverlayFont::Classic,
        }
    }
}

/// How a remix derives children from an existing hypothesis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RemixMode {
    /// Keep the visuals, vary the hook copy.
    ScaleVibe,
    /// Keep the hook, vary the visual slot.
    ScaleVisual,
}

/// One generated visual artifact bound to a slot, with its lineage.
///
/// Hypotheses form a forest: roots have no `parent_id`; remix children point
/// to exactly one parent. Batch membership is a first-class field rather
/// than an encoding inside the display label.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Hypothesis {
    /// Stable identifier.
    pub id: HypothesisId,
    /// Batch this hypothesis was created in.
    pub batch_id: BatchId,
    /// Position within the batch ("A".."C") or a remix suffix ("vibe_1").
    pub slot_label: String,
    /// The visual attribute bundle this artifact was generated from.
    pub slot: Slot,
    /// The locked headline/offer string.
    pub hook: String,
    /// Generation lifecycle state.
    pub status: GenerationStatus,
    /// Latest issued generation attempt token (request fence).
    pub attempt: AttemptToken,
    /// Generated artifact, once ready.
    pub image: Option<ImageArtifact>,
    /// Optional vision-critique verdict.
    pub critique: Option<Critique>,
    /// Optional text-overlay configuration.
    pub overlay: Option<OverlayConfig>,
    /// Parent hypothesis when this one was produced by a remix.
    pub parent_id: Option<HypothesisId>,
}

impl Hypothesis {
    /// Display label combining batch tag and slot position, e.g. `a1f3_B`.
    pub fn display_label(&self) -> String {
        format!("{}_{}", self.batch_id, self.slot_label)
    }

    /// Whether this hypothesis was derived from another by a remix.
    pub fn is_remix(&self) -> bool {
        self.parent_id.is_some()
    }

    /// Whether a finished artifact is available.
    pub fn has_image(&self) -> bool {
        self.image.is_some() && self.status == GenerationStatus::Ready
    }
}
