pub use kurbo::{Point, Rect, Vec2};

use uuid::Uuid;

/// Stable identifier for one hypothesis within a session.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct HypothesisId(Uuid);

impl HypothesisId {
    /// Mint a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for HypothesisId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for HypothesisId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.simple().fmt(f)
    }
}

/// Short tag grouping the hypotheses created by one matrix execution.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct BatchId(String);

impl BatchId {
    /// Mint a fresh four-character batch tag.
    pub fn random() -> Self {
        let simple = Uuid::new_v4().simple().to_string();
        Self(simple[..4].to_string())
    }

    /// Tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BatchId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for BatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Monotonic per-hypothesis generation attempt counter.
///
/// An in-flight generation call cannot be aborted; a superseding regenerate
/// simply issues a new token. A completion whose token no longer matches the
/// latest issued one is dropped instead of overwriting the newer attempt.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
pub struct AttemptToken(pub u64);

impl AttemptToken {
    /// Token for the following attempt.
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Output aspect ratio requested from the image collaborator.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum AspectRatio {
    /// 9:16 story/reels portrait.
    #[default]
    #[serde(rename = "9:16")]
    Story,
    /// 4:5 portrait feed.
    #[serde(rename = "4:5")]
    PortraitFeed,
    /// 1:1 square.
    #[serde(rename = "1:1")]
    Square,
}

impl AspectRatio {
    /// The `w:h` string understood by the generation API.
    pub fn as_str(self) -> &'static str {
        match self {
            AspectRatio::Story => "9:16",
            AspectRatio::PortraitFeed => "4:5",
            AspectRatio::Square => "1:1",
        }
    }
}
