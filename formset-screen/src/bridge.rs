use std::sync::Arc;

use formset_model::{FormName, Record};
use formset_store::KeyValueStore;
use kv_log_macro as log;

use crate::{
    error::PersistenceError,
    screen::{Effect, Message},
};

/// Whether a store write went through
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Succeeded)
    }
}

/// Moves records between the screen and a [`KeyValueStore`], keyed by form
/// name.
///
/// Errors are logged here and never propagated.
#[derive(Clone)]
pub struct PersistenceBridge {
    store: Arc<dyn KeyValueStore>,
}

impl PersistenceBridge {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        PersistenceBridge { store }
    }

    /// Saved record for `form`, or `None` when nothing usable is stored
    pub async fn load(&self, form: FormName) -> Option<Record> {
        match self.try_load(form).await {
            Ok(Some(record)) => {
                log::info!("Data loaded successfully!", { form: form });
                Some(record)
            }
            Ok(None) => {
                log::debug!("No saved data", { form: form });
                None
            }
            Err(err) => {
                log::error!("Error loading data: {}", err, { form: form });
                None
            }
        }
    }

    pub async fn save(&self, form: FormName, record: &Record) -> Outcome {
        match self.try_save(form, record).await {
            Ok(()) => {
                log::info!("Data saved successfully!", { form: form });
                Outcome::Succeeded
            }
            Err(err) => {
                log::error!("Error saving data: {}", err, { form: form });
                Outcome::Failed
            }
        }
    }

    pub async fn clear(&self, form: FormName) -> Outcome {
        match self.store.remove(form.key()).await {
            Ok(()) => {
                log::info!("Data cleared successfully!", { form: form });
                Outcome::Succeeded
            }
            Err(source) => {
                let err = PersistenceError::Write { form, source };
                log::error!("Error clearing data: {}", err, { form: form });
                Outcome::Failed
            }
        }
    }

    /// Execute an effect and produce the message reporting its result
    pub async fn run(&self, effect: Effect) -> Message {
        match effect {
            Effect::Load { form, generation } => Message::Loaded {
                form,
                generation,
                record: self.load(form).await,
            },
            Effect::Save {
                form,
                generation,
                record,
            } => Message::Saved {
                form,
                generation,
                outcome: self.save(form, &record).await,
            },
            Effect::Clear { form, generation } => Message::Cleared {
                form,
                generation,
                outcome: self.clear(form).await,
            },
        }
    }

    async fn try_load(&self, form: FormName) -> Result<Option<Record>, PersistenceError> {
        let saved = self
            .store
            .get(form.key())
            .await
            .map_err(|source| PersistenceError::Read { form, source })?;

        match saved {
            Some(json) => Record::from_json(&json)
                .map(Some)
                .map_err(|source| PersistenceError::Malformed { form, source }),
            None => Ok(None),
        }
    }

    async fn try_save(&self, form: FormName, record: &Record) -> Result<(), PersistenceError> {
        let json = record
            .to_json()
            .map_err(|source| PersistenceError::Encode { form, source })?;

        self.store
            .set(form.key(), json)
            .await
            .map_err(|source| PersistenceError::Write { form, source })
    }
}
