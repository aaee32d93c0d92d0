mod button;
mod container;
mod text;
mod text_input;

use formset_model::stylesheet::{Colour, ComputedStyle, FontWeight, Length};

/// Widgets that can take their appearance from stylesheet classes
pub trait Styleable {
    fn apply_stylesheet(self, stylesheet: &Stylesheet, classes: &[String]) -> Self;
}

pub struct Stylesheet(pub formset_model::stylesheet::Stylesheet);

impl Stylesheet {
    pub fn compute(&self, classes: &[String]) -> ComputedStyle {
        ComputedStyle::compute(&self.0, classes)
    }
}

pub fn convert_colour(colour: Colour) -> iced::Color {
    let Colour::RGBA(r, g, b, a) = colour;
    iced::Color::from_rgba(r, g, b, a)
}

pub fn convert_length(length: Length) -> f32 {
    let Length::Pixels(pixels) = length;
    pixels
}

pub fn convert_font_weight(weight: FontWeight) -> iced::font::Weight {
    match weight {
        FontWeight::Normal => iced::font::Weight::Normal,
        FontWeight::Medium => iced::font::Weight::Medium,
        FontWeight::Bold => iced::font::Weight::Bold,
    }
}
