use formset_model::stylesheet::StyleRule;
use iced::widget::button;

use super::{convert_colour, convert_length, Styleable, Stylesheet};

impl<'a, M: 'a> Styleable for iced::widget::Button<'a, M> {
    fn apply_stylesheet(self, stylesheet: &Stylesheet, classes: &[String]) -> Self {
        let computed = stylesheet.compute(classes);

        let mut background = None;
        let mut text_colour = iced::Color::BLACK;
        let mut border = iced::Border::default();

        for rule in computed.rules() {
            match rule {
                StyleRule::BackgroundColour(colour) => {
                    background = Some(iced::Background::Color(convert_colour(*colour)))
                }
                StyleRule::TextColour(colour) => text_colour = convert_colour(*colour),
                StyleRule::BorderRadius(radius) => border.radius = convert_length(*radius).into(),
                StyleRule::BorderColour(colour) => border.color = convert_colour(*colour),
                StyleRule::BorderWidth(width) => border.width = convert_length(*width),
                _ => {}
            }
        }

        self.width(iced::Length::Fill)
            .style(move |_theme, status| {
                let background = match status {
                    button::Status::Pressed => background.map(|b| b.scale_alpha(0.8)),
                    button::Status::Disabled => background.map(|b| b.scale_alpha(0.5)),
                    _ => background,
                };

                button::Style {
                    background,
                    text_color: text_colour,
                    border,
                    shadow: iced::Shadow::default(),
                }
            })
    }
}
