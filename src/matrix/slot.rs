use crate::foundation::core::AspectRatio;
use crate::matrix::axes::{Action, Format, Lighting, Persona, Pov, Setting, Tone};

/// Pairwise similarity above this score should warn the user that the
/// experiment slots barely diverge.
pub const SIMILARITY_WARN_THRESHOLD: usize = 5;

/// One configured bundle of visual attributes for a single planned
/// generation: exactly one value per axis plus a display label and the
/// requested output aspect ratio.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Slot {
    /// Position label within its matrix ("A", "B", "C") or a derived string
    /// for remix children.
    pub label: String,
    /// Visual vehicle (driving axis).
    pub format: Format,
    /// Physical environment.
    pub setting: Setting,
    /// Light quality.
    pub lighting: Lighting,
    /// Camera point of view.
    pub pov: Pov,
    /// Subject shown.
    pub persona: Persona,
    /// What the subject does.
    pub action: Action,
    /// Emotional register.
    pub tone: Tone,
    /// Requested output aspect ratio.
    #[serde(default)]
    pub aspect_ratio: AspectRatio,
}

impl Slot {
    /// Number of axes whose values match exactly between two slots.
    ///
    /// Label and aspect ratio are not axes and do not count.
    pub fn matching_axes(&self, other: &Slot) -> usize {
        let mut n = 0;
        n += usize::from(self.format == other.format);
        n += usize::from(self.setting == other.setting);
        n += usize::from(self.lighting == other.lighting);
        n += usize::from(self.pov == other.pov);
        n += usize::from(self.persona == other.persona);
        n += usize::from(self.action == other.action);
        n += usize::from(self.tone == other.tone);
        n
    }

    /// Normalize the slot after an edit or a sampling pass.
    ///
    /// Certain formats demand a specific environment no matter how the slot
    /// was produced: screen-bound text formats must sit on a screen (or a
    /// blank wall), and big-font impact must sit on a blank wall. Returns
    /// whether anything was rewritten. Idempotent.
    pub fn enforce(&mut self) -> bool {
        match self.format {
            Format::GmailLetterUx | Format::LongTextStory | Format::RedditThreadUx => {
                if self.setting != Setting::ComputerScreenMacro
                    && self.setting != Setting::BlankWallBackground
                {
                    self.setting = Setting::ComputerScreenMacro;
                    self.lighting = Lighting::FlatDigitalNoShadow;
                    self.pov = Pov::ScreenScreenshot;
                    return true;
                }
                false
            }
            Format::BigFontImpact => {
                if self.setting != Setting::BlankWallBackground {
                    self.setting = Setting::BlankWallBackground;
                    self.lighting = Lighting::FlatDigitalNoShadow;
                    self.pov = Pov::MacroTexture;
                    return true;
                }
                false
            }
            _ => false,
        }
    }
}

/// The three-way experiment matrix: slot A is user-controlled, B and C are
/// the divergence candidates.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SlotMatrix {
    /// Slot A (kept under user control during chaos injection).
    pub a: Slot,
    /// Slot B.
    pub b: Slot,
    /// Slot C.
    pub c: Slot,
}

impl SlotMatrix {
    /// The three slots in A, B, C order.
    pub fn slots(&self) -> [&Slot; 3] {
        [&self.a, &self.b, &self.c]
    }

    /// Count of exact axis-value matches across the pairs A-B, B-C and A-C.
    ///
    /// Read-only diagnostic; a score above
    /// [`SIMILARITY_WARN_THRESHOLD`] means the slots are close to testing the
    /// same thing three times.
    pub fn similarity_score(&self) -> usize {
        self.a.matching_axes(&self.b)
            + self.b.matching_axes(&self.c)
            + self.a.matching_axes(&self.c)
    }

    /// Whether the similarity score crosses the warning threshold.
    pub fn is_too_similar(&self) -> bool {
        self.similarity_score() > SIMILARITY_WARN_THRESHOLD
    }

    /// Run the enforcement pass over all three slots. Returns whether any
    /// slot was rewritten.
    pub fn enforce_all(&mut self) -> bool {
        let a = self.a.enforce();
        let b = self.b.enforce();
        let c = self.c.enforce();
        a || b || c
    }

    /// Set the output aspect ratio on all three slots at once.
    pub fn set_aspect_ratio(&mut self, aspect: AspectRatio) {
        self.a.aspect_ratio = aspect;
        self.b.aspect_ratio = aspect;
        self.c.aspect_ratio = aspect;
    }
}

impl Default for SlotMatrix {
    /// Three intentionally divergent starting slots.
    fn default() -> Self {
        Self {
            a: Slot {
                label: "A".to_string(),
                format: Format::DirectFlashSelfie,
                setting: Setting::MessyBedroom,
                lighting: Lighting::HarshFlashOn,
                pov: Pov::SelfieBadAngle,
                persona: Persona::GenZReal,
                action: Action::ShowingProblemCloseUp,
                tone: Tone::BrutallyHonest,
                aspect_ratio: AspectRatio::Story,
            },
            b: Slot {
                label: "B".to_string(),
                format: Format::GmailLetterUx,
                setting: Setting::ComputerScreenMacro,
                lighting: Lighting::ScreenGlowBlue,
                pov: Pov::ScreenScreenshot,
                persona: Persona::AnonymousPoster,
                action: Action::JustTextNoAction,
                tone: Tone::DeadpanHumor,
                aspect_ratio: AspectRatio::Story,
            },
            c: Slot {
                label: "C".to_string(),
                format: Format::CctvSecurityFootage,
                setting: Setting::SupermarketAisle,
                lighting: Lighting::FlatDigitalNoShadow,
                pov: Pov::SecurityCamTopDown,
                persona: Persona::BlueCollarWorker,
                action: Action::HoldingProductAwkwardly,
                tone: Tone::UrgentWarning,
                aspect_ratio: AspectRatio::Story,
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/matrix/slot.rs"]
mod tests;
