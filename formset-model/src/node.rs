use serde::{Deserialize, Serialize};

use crate::{action::Action, form_name::FormName, record::Field};

/// Children laid out top to bottom
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContainerProps {
    pub children: Vec<Node>,
    pub classes: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextProps {
    pub text: String,
    pub classes: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ButtonProps {
    pub label: String,
    pub on_click: Action,
    pub classes: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelectProps {
    pub options: Vec<FormName>,
    pub selected: Option<FormName>,
    pub placeholder: String,
    pub classes: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputProps {
    pub field: Field,
    pub placeholder: String,
    pub value: String,
    pub classes: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Container(ContainerProps),
    Text(TextProps),
    Button(ButtonProps),
    Select(SelectProps),
    Input(InputProps),
}

impl Node {
    /// Depth-first search for the first node matching `predicate`
    pub fn find(&self, predicate: &impl Fn(&Node) -> bool) -> Option<&Node> {
        if predicate(self) {
            return Some(self);
        }

        match self {
            Node::Container(ContainerProps { children, .. }) => {
                children.iter().find_map(|child| child.find(predicate))
            }
            _ => None,
        }
    }

    pub fn input(&self, field: Field) -> Option<&InputProps> {
        match self.find(&|node: &Node| matches!(node, Node::Input(props) if props.field == field)) {
            Some(Node::Input(props)) => Some(props),
            _ => None,
        }
    }

    pub fn button(&self, action: Action) -> Option<&ButtonProps> {
        match self.find(&|node: &Node| matches!(node, Node::Button(props) if props.on_click == action)) {
            Some(Node::Button(props)) => Some(props),
            _ => None,
        }
    }

    pub fn select(&self) -> Option<&SelectProps> {
        match self.find(&|node: &Node| matches!(node, Node::Select(_))) {
            Some(Node::Select(props)) => Some(props),
            _ => None,
        }
    }

    /// First text node carrying the given stylesheet class
    pub fn text_with_class(&self, class: &str) -> Option<&TextProps> {
        let has_class = |node: &Node| match node {
            Node::Text(props) => props.classes.iter().any(|c| c == class),
            _ => false,
        };

        match self.find(&has_class) {
            Some(Node::Text(props)) => Some(props),
            _ => None,
        }
    }
}
