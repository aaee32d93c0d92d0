use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub enum FontWeight {
    Normal,
    Medium,
    Bold,
}
