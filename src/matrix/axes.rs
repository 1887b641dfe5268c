//! The fixed attribute catalogue: one enum per visual axis.
//!
//! Each axis is a closed set of options defined once for the whole process.
//! Keeping the axes as fieldless enums makes an invalid slot value
//! unrepresentable; the catalogue order is the order shown to users and the
//! order the sampler draws from.

/// Visual vehicle of the ad ("format" axis). The driving axis for sampling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Format {
    /// Oversized typography on a flat background.
    BigFontImpact,
    /// Screenshot of an email client letter.
    GmailLetterUx,
    /// Billboard photographed in its street context.
    BillboardContext,
    /// Long-form text story screenshot.
    LongTextStory,
    /// Unvarnished close-up of the problem itself.
    UglyProblemVisual,
    /// Deliberately crude drawing, early-2000s paint aesthetic.
    MsPaintNostalgia,
    /// Instagram story interface mockup.
    InstagramStoryUx,
    /// Reddit thread interface mockup.
    RedditThreadUx,
    /// Handwritten marker on a whiteboard.
    HandwrittenWhiteboard,
    /// Meme layout with chaotic energy.
    MemeFormat,
    /// Security camera footage still.
    CctvSecurityFootage,
    /// Harsh direct-flash selfie snapshot.
    DirectFlashSelfie,
    /// Flat cartoon graphic.
    CartoonicGraphic,
}

impl Format {
    /// Every format in catalogue order.
    pub const ALL: &'static [Format] = &[
        Format::BigFontImpact,
        Format::GmailLetterUx,
        Format::BillboardContext,
        Format::LongTextStory,
        Format::UglyProblemVisual,
        Format::MsPaintNostalgia,
        Format::InstagramStoryUx,
        Format::RedditThreadUx,
        Format::HandwrittenWhiteboard,
        Format::MemeFormat,
        Format::CctvSecurityFootage,
        Format::DirectFlashSelfie,
        Format::CartoonicGraphic,
    ];

    /// Human-readable label used in prompts and exports.
    pub fn label(self) -> &'static str {
        match self {
            Format::BigFontImpact => "Big Font Impact",
            Format::GmailLetterUx => "Gmail Letter UX",
            Format::BillboardContext => "Billboard Context",
            Format::LongTextStory => "Long Text Story",
            Format::UglyProblemVisual => "Ugly Problem Visual",
            Format::MsPaintNostalgia => "MS Paint Nostalgia",
            Format::InstagramStoryUx => "Instagram Story UX",
            Format::RedditThreadUx => "Reddit Thread UX",
            Format::HandwrittenWhiteboard => "Handwritten Whiteboard",
            Format::MemeFormat => "Meme Format",
            Format::CctvSecurityFootage => "CCTV Security Footage",
            Format::DirectFlashSelfie => "Direct Flash Selfie",
            Format::CartoonicGraphic => "Cartoonic Graphic",
        }
    }

    /// True for the screen-interface mockup formats (rendered UI on a screen).
    pub fn is_screen_ux(self) -> bool {
        matches!(
            self,
            Format::GmailLetterUx | Format::InstagramStoryUx | Format::RedditThreadUx
        )
    }
}

/// Physical environment of the scene ("setting" axis).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Setting {
    /// Lived-in bedroom, visible clutter.
    MessyBedroom,
    /// Bathroom mirror with smudges.
    BathroomMirrorDirty,
    /// Car dashboard stuck in traffic.
    CarDashboardTraffic,
    /// Supermarket aisle.
    SupermarketAisle,
    /// Street pavement at eye level.
    StreetPavement,
    /// Kitchen table covered in stuff.
    KitchenTableCluttered,
    /// Plain blank wall.
    BlankWallBackground,
    /// Macro shot of a computer screen.
    ComputerScreenMacro,
}

impl Setting {
    /// Every setting in catalogue order.
    pub const ALL: &'static [Setting] = &[
        Setting::MessyBedroom,
        Setting::BathroomMirrorDirty,
        Setting::CarDashboardTraffic,
        Setting::SupermarketAisle,
        Setting::StreetPavement,
        Setting::KitchenTableCluttered,
        Setting::BlankWallBackground,
        Setting::ComputerScreenMacro,
    ];

    /// Human-readable label used in prompts and exports.
    pub fn label(self) -> &'static str {
        match self {
            Setting::MessyBedroom => "Messy Bedroom",
            Setting::BathroomMirrorDirty => "Bathroom Mirror Dirty",
            Setting::CarDashboardTraffic => "Car Dashboard Traffic",
            Setting::SupermarketAisle => "Supermarket Aisle",
            Setting::StreetPavement => "Street Pavement",
            Setting::KitchenTableCluttered => "Kitchen Table Cluttered",
            Setting::BlankWallBackground => "Blank Wall Background",
            Setting::ComputerScreenMacro => "Computer Screen Macro",
        }
    }
}

/// Light quality of the scene ("lighting" axis).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Lighting {
    /// Hard on-camera flash.
    HarshFlashOn,
    /// Flickery office fluorescents.
    BadFluorescentOffice,
    /// Dim bedside lamp.
    DimBedroomLamp,
    /// Blown-out direct sunlight.
    OverexposedSunlight,
    /// Blue glow of a screen.
    ScreenGlowBlue,
    /// Flat digital rendering, no shadows.
    FlatDigitalNoShadow,
}

impl Lighting {
    /// Every lighting option in catalogue order.
    pub const ALL: &'static [Lighting] = &[
        Lighting::HarshFlashOn,
        Lighting::BadFluorescentOffice,
        Lighting::DimBedroomLamp,
        Lighting::OverexposedSunlight,
        Lighting::ScreenGlowBlue,
        Lighting::FlatDigitalNoShadow,
    ];

    /// Human-readable label used in prompts and exports.
    pub fn label(self) -> &'static str {
        match self {
            Lighting::HarshFlashOn => "Harsh Flash ON",
            Lighting::BadFluorescentOffice => "Bad Fluorescent Office",
            Lighting::DimBedroomLamp => "Dim Bedroom Lamp",
            Lighting::OverexposedSunlight => "Overexposed Sunlight",
            Lighting::ScreenGlowBlue => "Screen Glow Blue",
            Lighting::FlatDigitalNoShadow => "Flat Digital NoShadow",
        }
    }
}

/// Subject shown in the scene ("persona" axis). Unconstrained by rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Persona {
    /// Unpolished gen-Z user.
    GenZReal,
    /// Visibly tired parent.
    StressedParent,
    /// Arms-crossed skeptic.
    SkepticalUser,
    /// Blue-collar worker.
    BlueCollarWorker,
    /// Faceless/anonymous poster.
    AnonymousPoster,
}

impl Persona {
    /// Every persona in catalogue order.
    pub const ALL: &'static [Persona] = &[
        Persona::GenZReal,
        Persona::StressedParent,
        Persona::SkepticalUser,
        Persona::BlueCollarWorker,
        Persona::AnonymousPoster,
    ];

    /// Human-readable label used in prompts and exports.
    pub fn label(self) -> &'static str {
        match self {
            Persona::GenZReal => "Gen Z Real",
            Persona::StressedParent => "Stressed Parent",
            Persona::SkepticalUser => "Skeptical User",
            Persona::BlueCollarWorker => "Blue Collar Worker",
            Persona::AnonymousPoster => "Anonymous Poster",
        }
    }
}

/// Camera point of view ("pov" axis).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Pov {
    /// Selfie held at an unflattering angle.
    SelfieBadAngle,
    /// Shaky first-person shot.
    FirstPersonShaky,
    /// Literal screenshot of a screen.
    ScreenScreenshot,
    /// Security camera top-down angle.
    SecurityCamTopDown,
    /// Wide shot from street level.
    StreetLevelWide,
    /// Extreme macro on texture.
    MacroTexture,
}

impl Pov {
    /// Every point of view in catalogue order.
    pub const ALL: &'static [Pov] = &[
        Pov::SelfieBadAngle,
        Pov::FirstPersonShaky,
        Pov::ScreenScreenshot,
        Pov::SecurityCamTopDown,
        Pov::StreetLevelWide,
        Pov::MacroTexture,
    ];

    /// Human-readable label used in prompts and exports.
    pub fn label(self) -> &'static str {
        match self {
            Pov::SelfieBadAngle => "Selfie Bad Angle",
            Pov::FirstPersonShaky => "First Person Shaky",
            Pov::ScreenScreenshot => "Screen Screenshot",
            Pov::SecurityCamTopDown => "Security Cam TopDown",
            Pov::StreetLevelWide => "Street Level Wide",
            Pov::MacroTexture => "Macro Texture",
        }
    }
}

/// What the subject is doing ("action" axis). Unconstrained by rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Action {
    /// Close-up on the problem being shown.
    ShowingProblemCloseUp,
    /// Messy unboxing in progress.
    UnboxingMessy,
    /// Pointing a finger at the subject.
    PointingFinger,
    /// Holding the product awkwardly.
    HoldingProductAwkwardly,
    /// No action, text carries the ad.
    JustTextNoAction,
}

impl Action {
    /// Every action in catalogue order.
    pub const ALL: &'static [Action] = &[
        Action::ShowingProblemCloseUp,
        Action::UnboxingMessy,
        Action::PointingFinger,
        Action::HoldingProductAwkwardly,
        Action::JustTextNoAction,
    ];

    /// Human-readable label used in prompts and exports.
    pub fn label(self) -> &'static str {
        match self {
            Action::ShowingProblemCloseUp => "Showing Problem CloseUp",
            Action::UnboxingMessy => "Unboxing Messy",
            Action::PointingFinger => "Pointing Finger",
            Action::HoldingProductAwkwardly => "Holding Product Awkwardly",
            Action::JustTextNoAction => "Just Text No Action",
        }
    }
}

/// Emotional register of the scene ("tone" axis). Unconstrained by rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Tone {
    /// Brutally honest.
    BrutallyHonest,
    /// Urgent warning.
    UrgentWarning,
    /// Confused and skeptical.
    ConfusedSkeptical,
    /// Manic energy.
    ManicEnergy,
    /// Deadpan humor.
    DeadpanHumor,
}

impl Tone {
    /// Every tone in catalogue order.
    pub const ALL: &'static [Tone] = &[
        Tone::BrutallyHonest,
        Tone::UrgentWarning,
        Tone::ConfusedSkeptical,
        Tone::ManicEnergy,
        Tone::DeadpanHumor,
    ];

    /// Human-readable label used in prompts and exports.
    pub fn label(self) -> &'static str {
        match self {
            Tone::BrutallyHonest => "Brutally Honest",
            Tone::UrgentWarning => "Urgent Warning",
            Tone::ConfusedSkeptical => "Confused Skeptical",
            Tone::ManicEnergy => "Manic Energy",
            Tone::DeadpanHumor => "Deadpan Humor",
        }
    }
}
