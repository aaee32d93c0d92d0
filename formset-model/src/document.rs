use serde::{Deserialize, Serialize};

use crate::{action::Action, node::Node, stylesheet::Stylesheet};

/// A blocking confirmation shown on top of the screen
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DialogProps {
    pub title: String,
    pub message: String,
    pub dismiss_label: String,
    pub on_dismiss: Action,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub node: Node,
    pub dialog: Option<DialogProps>,
    pub stylesheet: Stylesheet,
}
