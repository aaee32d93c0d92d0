pub mod action;
pub mod document;
pub mod form_name;
pub mod form_set;
pub mod node;
pub mod record;
pub mod stylesheet;

// Re-export commonly used types
pub use action::Action;
pub use document::{DialogProps, Document};
pub use form_name::FormName;
pub use form_set::FormSet;
pub use record::{Field, Record};
