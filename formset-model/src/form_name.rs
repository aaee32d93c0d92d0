use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// One of the five fixed forms offered by the selector.
///
/// The storage key of a form is its [`FormName::key`]; the selector shows its
/// [`FormName::label`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormName {
    #[default]
    Form1,
    Form2,
    Form3,
    Form4,
    Form5,
}

impl FormName {
    pub const ALL: [FormName; 5] = [
        FormName::Form1,
        FormName::Form2,
        FormName::Form3,
        FormName::Form4,
        FormName::Form5,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            FormName::Form1 => "Form1",
            FormName::Form2 => "Form2",
            FormName::Form3 => "Form3",
            FormName::Form4 => "Form4",
            FormName::Form5 => "Form5",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormName::Form1 => "Form 1",
            FormName::Form2 => "Form 2",
            FormName::Form3 => "Form 3",
            FormName::Form4 => "Form 4",
            FormName::Form5 => "Form 5",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            FormName::Form1 => 0,
            FormName::Form2 => 1,
            FormName::Form3 => 2,
            FormName::Form4 => 3,
            FormName::Form5 => 4,
        }
    }
}

impl fmt::Display for FormName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFormName(pub String);

impl fmt::Display for UnknownFormName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown form name '{}'", self.0)
    }
}

impl std::error::Error for UnknownFormName {}

impl FromStr for FormName {
    type Err = UnknownFormName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormName::ALL
            .into_iter()
            .find(|form| form.key() == s)
            .ok_or_else(|| UnknownFormName(s.to_string()))
    }
}

impl log::kv::ToValue for FormName {
    fn to_value(&self) -> log::kv::Value<'_> {
        log::kv::Value::from(self.key())
    }
}
