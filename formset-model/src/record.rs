use serde::{Deserialize, Serialize};

/// The four text fields every form carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::FirstName, Field::LastName, Field::Email, Field::Phone];

    /// Placeholder shown in the empty text input
    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email",
            Field::Phone => "Phone",
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Phone => "phone",
        }
    }
}

impl log::kv::ToValue for Field {
    fn to_value(&self) -> log::kv::Value<'_> {
        log::kv::Value::from(self.id())
    }
}

/// Contents of one form.
///
/// Serialized as a JSON object with the keys `firstName`, `lastName`,
/// `email` and `phone`. All four keys must be present when reading.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl Record {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Record> {
        serde_json::from_str(json)
    }
}
