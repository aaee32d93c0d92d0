use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum Colour {
    RGBA(f32, f32, f32, f32), // Each component is in the range [0.0, 1.0]
}

impl Colour {
    /// Opaque colour from 8-bit channels, e.g. `Colour::rgb8(0xcc, 0xcc, 0xcc)`
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Colour::RGBA(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }
}
