use formset_model::stylesheet::{
    Colour, FontWeight, Length, StyleRule, Stylesheet, StylesheetClass,
};

pub fn stylesheet() -> Stylesheet {
    Stylesheet::new(vec![
        StylesheetClass::new(
            "container",
            vec![
                StyleRule::Padding(Length::Pixels(16.)),
                StyleRule::Gap(Length::Pixels(8.)),
            ],
        ),
        StylesheetClass::new(
            "title",
            vec![
                StyleRule::FontSize(Length::Pixels(20.)),
                StyleRule::FontWeight(FontWeight::Bold),
            ],
        ),
        StylesheetClass::new(
            "input",
            vec![
                StyleRule::BorderWidth(Length::Pixels(1.)),
                StyleRule::BorderColour(Colour::rgb8(0xcc, 0xcc, 0xcc)),
                StyleRule::BorderRadius(Length::Pixels(4.)),
                StyleRule::Padding(Length::Pixels(8.)),
            ],
        ),
        StylesheetClass::new(
            "success-message",
            vec![StyleRule::TextColour(Colour::rgb8(0x00, 0x80, 0x00))],
        ),
        StylesheetClass::new(
            "primary-action",
            vec![
                StyleRule::BorderRadius(Length::Pixels(2.0)),
                StyleRule::TextColour(Colour::RGBA(1.0, 1.0, 1.0, 1.0)),
                StyleRule::BackgroundColour(Colour::rgb8(0x21, 0x96, 0xf3)),
            ],
        ),
        StylesheetClass::new(
            "destructive-action",
            vec![
                StyleRule::BorderRadius(Length::Pixels(2.0)),
                StyleRule::TextColour(Colour::RGBA(1.0, 1.0, 1.0, 1.0)),
                StyleRule::BackgroundColour(Colour::RGBA(0.7, 0.0, 0.0, 1.0)),
            ],
        ),
    ])
}
