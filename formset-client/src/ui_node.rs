use iced::{
    widget::{
        center, column, container, opaque, stack, Button, Column, Container, PickList, Text,
        TextInput,
    },
    Color, Element, Length,
};

use formset::{
    ButtonProps, ContainerProps, DialogProps, Document, InputProps, Message, Node, SelectProps,
    TextProps,
};

use crate::stylesheet::{Styleable, Stylesheet};

/// Build the widget tree for a rendered screen
pub fn document(document: Document) -> Element<'static, Message> {
    let Document {
        node,
        dialog,
        stylesheet,
    } = document;
    let stylesheet = Stylesheet(stylesheet);

    let content = Container::new(view(node, &stylesheet))
        .width(Length::Fill)
        .height(Length::Fill);

    match dialog {
        Some(dialog) => modal(content.into(), dialog_box(dialog)),
        None => content.into(),
    }
}

fn view(node: Node, stylesheet: &Stylesheet) -> Element<'static, Message> {
    match node {
        Node::Container(ContainerProps { children, classes }) => {
            let elements: Vec<Element<'static, Message>> = children
                .into_iter()
                .map(|child| view(child, stylesheet))
                .collect();

            let content = Column::with_children(elements).apply_stylesheet(stylesheet, &classes);

            Container::new(content)
                .width(Length::Fill)
                .apply_stylesheet(stylesheet, &classes)
                .into()
        }

        Node::Text(TextProps { text, classes }) => Text::new(text)
            .apply_stylesheet(stylesheet, &classes)
            .into(),

        Node::Button(ButtonProps {
            label,
            on_click,
            classes,
        }) => Button::new(Text::new(label))
            .on_press(Message::Action(on_click))
            .apply_stylesheet(stylesheet, &classes)
            .into(),

        Node::Select(SelectProps {
            options,
            selected,
            placeholder,
            ..
        }) => PickList::new(options, selected, Message::FormSelected)
            .placeholder(placeholder)
            .width(Length::Fill)
            .into(),

        Node::Input(InputProps {
            field,
            placeholder,
            value,
            classes,
        }) => TextInput::new(&placeholder, &value)
            .on_input(move |value| Message::FieldChanged { field, value })
            .apply_stylesheet(stylesheet, &classes)
            .into(),
    }
}

fn dialog_box(dialog: DialogProps) -> Element<'static, Message> {
    let DialogProps {
        title,
        message,
        dismiss_label,
        on_dismiss,
    } = dialog;

    container(
        column![
            Text::new(title).size(iced::Pixels(20.0)),
            Text::new(message),
            Button::new(Text::new(dismiss_label)).on_press(Message::Action(on_dismiss)),
        ]
        .spacing(iced::Pixels(10.0)),
    )
    .width(Length::Fixed(300.0))
    .padding(iced::Padding::new(20.0))
    .style(container::rounded_box)
    .into()
}

/// Overlay `content` on `base`, swallowing all input to `base` until the
/// dialog is dismissed
fn modal(
    base: Element<'static, Message>,
    content: Element<'static, Message>,
) -> Element<'static, Message> {
    stack![
        base,
        opaque(center(opaque(content)).style(|_theme| container::Style {
            background: Some(
                Color {
                    a: 0.6,
                    ..Color::BLACK
                }
                .into()
            ),
            ..container::Style::default()
        }))
    ]
    .into()
}
