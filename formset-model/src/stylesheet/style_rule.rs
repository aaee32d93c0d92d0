use serde::{Deserialize, Serialize};

use crate::stylesheet::{colour::Colour, font_weight::FontWeight, length::Length};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StyleRule {
    // Text
    TextColour(Colour),
    FontSize(Length),
    FontWeight(FontWeight),

    // Background
    BackgroundColour(Colour),

    // Border
    BorderWidth(Length),
    BorderColour(Colour),
    BorderRadius(Length),

    // Spacing
    Padding(Length),
    Gap(Length),
}
