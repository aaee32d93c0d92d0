use serde::{Deserialize, Serialize};

/// Commands a button on the form screen can trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Persist the record of the selected form
    Submit,

    /// Reset the selected form and delete its stored entry
    ClearData,

    /// Close the confirmation dialog
    DismissDialog,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Submit => "submit",
            Action::ClearData => "clear_data",
            Action::DismissDialog => "dismiss_dialog",
        }
    }
}

impl log::kv::ToValue for Action {
    fn to_value(&self) -> log::kv::Value<'_> {
        log::kv::Value::from(self.name())
    }
}
