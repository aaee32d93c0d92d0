use formset_model::{
    node::{ButtonProps, ContainerProps, InputProps, Node, SelectProps, TextProps},
    Action, DialogProps, Document, Field, FormName, Record,
};

use crate::{screen::FormScreen, stylesheet::stylesheet};

pub const TITLE: &str = "Fill the Form";
pub const DIALOG_TITLE: &str = "Success";

impl FormScreen {
    /// Describe the screen as it should currently be drawn
    pub fn view(&self) -> Document {
        let mut children = vec![
            Node::Text(TextProps {
                text: TITLE.to_string(),
                classes: vec!["title".to_string()],
            }),
            Node::Select(SelectProps {
                options: FormName::ALL.to_vec(),
                selected: self.selection(),
                placeholder: "Select a form...".to_string(),
                classes: vec![],
            }),
        ];

        if let Some(record) = self.current_record() {
            children.extend(Field::ALL.iter().map(|field| input(*field, record)));
            children.push(button("Submit", Action::Submit, "primary-action"));
            children.push(Node::Text(TextProps {
                text: self.status().unwrap_or_default().to_string(),
                classes: vec!["success-message".to_string()],
            }));
        }

        children.push(button("Clear Data", Action::ClearData, "destructive-action"));

        Document {
            node: Node::Container(ContainerProps {
                children,
                classes: vec!["container".to_string()],
            }),
            dialog: self.dialog().map(|message| DialogProps {
                title: DIALOG_TITLE.to_string(),
                message: message.to_string(),
                dismiss_label: "OK".to_string(),
                on_dismiss: Action::DismissDialog,
            }),
            stylesheet: stylesheet(),
        }
    }
}

fn input(field: Field, record: &Record) -> Node {
    Node::Input(InputProps {
        field,
        placeholder: field.label().to_string(),
        value: record.get(field).to_string(),
        classes: vec!["input".to_string()],
    })
}

fn button(label: &str, on_click: Action, class: &str) -> Node {
    Node::Button(ButtonProps {
        label: label.to_string(),
        on_click,
        classes: vec![class.to_string()],
    })
}
