use formset_model::stylesheet::StyleRule;

use super::{convert_colour, convert_font_weight, convert_length, Styleable, Stylesheet};

impl Styleable for iced::widget::Text<'static> {
    fn apply_stylesheet(self, stylesheet: &Stylesheet, classes: &[String]) -> Self {
        let computed = stylesheet.compute(classes);

        let font_size = computed
            .extract(|r| match r {
                StyleRule::FontSize(s) => Some(convert_length(*s)),
                _ => None,
            })
            .unwrap_or(14.0);

        let mut font = iced::Font::DEFAULT;
        if let Some(weight) = computed.extract(|r| match r {
            StyleRule::FontWeight(w) => Some(convert_font_weight(*w)),
            _ => None,
        }) {
            font.weight = weight;
        }

        let text = self.size(font_size).font(font);

        match computed.extract(|r| match r {
            StyleRule::TextColour(c) => Some(convert_colour(*c)),
            _ => None,
        }) {
            Some(colour) => text.color(colour),
            None => text,
        }
    }
}
