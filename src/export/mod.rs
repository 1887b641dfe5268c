pub mod manifest;
pub mod overlay;
