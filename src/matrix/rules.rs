//! Hand-authored compatibility rules between axes.
//!
//! Rules are directional: a chosen value on one axis restricts the allowed
//! options on another. No rule references more than two axes. Absence of a
//! rule means the full catalogue is allowed. The tables keep the randomizer
//! from producing impossible scenes (a security-camera still lit by a
//! bedside lamp, a billboard inside a bathroom).

use crate::matrix::axes::{Format, Lighting, Pov, Setting};

/// Settings allowed for a chosen format.
pub fn compatible_settings(format: Format) -> &'static [Setting] {
    match format {
        Format::GmailLetterUx | Format::RedditThreadUx | Format::LongTextStory => {
            &[Setting::ComputerScreenMacro, Setting::BlankWallBackground]
        }
        Format::BillboardContext => &[Setting::StreetPavement, Setting::CarDashboardTraffic],
        Format::CctvSecurityFootage => &[
            Setting::SupermarketAisle,
            Setting::StreetPavement,
            Setting::CarDashboardTraffic,
        ],
        Format::InstagramStoryUx | Format::DirectFlashSelfie => &[
            Setting::MessyBedroom,
            Setting::BathroomMirrorDirty,
            Setting::KitchenTableCluttered,
            Setting::CarDashboardTraffic,
        ],
        // Home office vibe.
        Format::HandwrittenWhiteboard => &[Setting::BlankWallBackground, Setting::MessyBedroom],
        _ => Setting::ALL,
    }
}

/// Lighting allowed for a chosen (setting, format) pair.
///
/// Format overrides win over setting overrides.
pub fn compatible_lighting(setting: Setting, format: Format) -> &'static [Lighting] {
    if format == Format::DirectFlashSelfie {
        return &[Lighting::HarshFlashOn];
    }
    if format == Format::CctvSecurityFootage {
        return &[Lighting::FlatDigitalNoShadow, Lighting::BadFluorescentOffice];
    }
    if format.is_screen_ux() {
        return &[Lighting::ScreenGlowBlue, Lighting::FlatDigitalNoShadow];
    }

    match setting {
        Setting::ComputerScreenMacro => &[Lighting::ScreenGlowBlue],
        Setting::StreetPavement => &[Lighting::OverexposedSunlight],
        Setting::MessyBedroom => &[Lighting::DimBedroomLamp, Lighting::HarshFlashOn],
        Setting::BathroomMirrorDirty => {
            &[Lighting::HarshFlashOn, Lighting::BadFluorescentOffice]
        }
        _ => Lighting::ALL,
    }
}

/// Points of view allowed for a chosen format.
pub fn compatible_pov(format: Format) -> &'static [Pov] {
    if format == Format::CctvSecurityFootage {
        return &[Pov::SecurityCamTopDown];
    }
    if format.is_screen_ux() {
        return &[Pov::ScreenScreenshot];
    }
    match format {
        Format::DirectFlashSelfie => &[Pov::SelfieBadAngle],
        Format::BillboardContext => &[Pov::StreetLevelWide, Pov::FirstPersonShaky],
        _ => Pov::ALL,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/matrix/rules.rs"]
mod tests;
