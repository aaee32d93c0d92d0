use formset_model::stylesheet::StyleRule;
use iced::widget::text_input;

use super::{convert_colour, convert_length, Styleable, Stylesheet};

impl<'a, M: Clone + 'a> Styleable for iced::widget::TextInput<'a, M> {
    fn apply_stylesheet(self, stylesheet: &Stylesheet, classes: &[String]) -> Self {
        let computed = stylesheet.compute(classes);

        let mut padding = 5.0;
        let mut background = iced::Background::Color(iced::Color::WHITE);
        let mut border = iced::Border {
            color: iced::Color::from_rgba(0., 0., 0., 0.5),
            width: 1.0,
            radius: 0.0_f32.into(),
        };

        for rule in computed.rules() {
            match rule {
                StyleRule::Padding(length) => padding = convert_length(*length),
                StyleRule::BackgroundColour(colour) => {
                    background = iced::Background::Color(convert_colour(*colour));
                }
                StyleRule::BorderRadius(radius) => border.radius = convert_length(*radius).into(),
                StyleRule::BorderColour(colour) => border.color = convert_colour(*colour),
                StyleRule::BorderWidth(width) => border.width = convert_length(*width),
                _ => {}
            }
        }

        self.padding(padding)
            .style(move |_theme, _status| text_input::Style {
                background,
                border,
                icon: iced::Color::TRANSPARENT,
                placeholder: iced::Color::from_rgba(0., 0., 0., 0.5),
                value: iced::Color::BLACK,
                selection: iced::Color::from_rgba(0., 0., 0.3, 0.5),
            })
    }
}
