//! State container and persistence bridge for the form screen.
//!
//! [`FormScreen`] owns every record and reacts to [`Message`]s. Work that
//! touches storage is returned as an [`Effect`] for the host to run through a
//! [`PersistenceBridge`], whose result comes back as another [`Message`].

mod bridge;
mod error;
mod generation;
mod screen;
mod stylesheet;
mod view;

pub use bridge::{Outcome, PersistenceBridge};
pub use error::PersistenceError;
pub use generation::Generation;
pub use screen::{Effect, FormScreen, Message, CLEARED_MESSAGE, SAVED_MESSAGE};
pub use stylesheet::stylesheet;
pub use view::{DIALOG_TITLE, TITLE};

pub use formset_model::{
    node::{ButtonProps, ContainerProps, InputProps, Node, SelectProps, TextProps},
    Action, DialogProps, Document, Field, FormName, FormSet, Record,
};
pub use formset_store::{FileStore, KeyValueStore, MemoryStore, StoreError};
