use formset_model::stylesheet::StyleRule;

use super::{convert_colour, convert_length, Styleable, Stylesheet};

impl<'a, M: 'a> Styleable for iced::widget::Column<'a, M> {
    fn apply_stylesheet(self, stylesheet: &Stylesheet, classes: &[String]) -> Self {
        let spacing = stylesheet
            .compute(classes)
            .extract(|r| match r {
                StyleRule::Gap(length) => Some(convert_length(*length)),
                _ => None,
            })
            .unwrap_or(0.0);

        self.spacing(spacing)
    }
}

impl<'a, M: 'a> Styleable for iced::widget::Container<'a, M> {
    fn apply_stylesheet(self, stylesheet: &Stylesheet, classes: &[String]) -> Self {
        let computed = stylesheet.compute(classes);

        let mut padding = 0.0;
        let mut background = None;

        for rule in computed.rules() {
            match rule {
                StyleRule::Padding(length) => padding = convert_length(*length),
                StyleRule::BackgroundColour(colour) => {
                    background = Some(iced::Background::Color(convert_colour(*colour)))
                }
                _ => {}
            }
        }

        self.padding(padding)
            .style(move |_theme| iced::widget::container::Style {
                background,
                ..iced::widget::container::Style::default()
            })
    }
}
