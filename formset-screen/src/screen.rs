use formset_model::{Action, Field, FormName, FormSet, Record};
use kv_log_macro as log;

use crate::{bridge::Outcome, generation::Generation};

pub const SAVED_MESSAGE: &str = "Data saved successfully!";
pub const CLEARED_MESSAGE: &str = "Data cleared successfully!";

#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    /// The screen has been shown for the first time
    Mounted,
    FormSelected(FormName),
    FieldChanged {
        field: Field,
        value: String,
    },
    Action(Action),

    Loaded {
        form: FormName,
        generation: Generation,
        record: Option<Record>,
    },
    Saved {
        form: FormName,
        generation: Generation,
        outcome: Outcome,
    },
    Cleared {
        form: FormName,
        generation: Generation,
        outcome: Outcome,
    },
}

/// Storage work requested by the screen, tagged with the selection it was
/// issued under.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    Load {
        form: FormName,
        generation: Generation,
    },
    Save {
        form: FormName,
        generation: Generation,
        record: Record,
    },
    Clear {
        form: FormName,
        generation: Generation,
    },
}

/// All state behind the form screen.
///
/// Starts with no form selected; [`Message::Mounted`] selects the first form.
#[derive(Debug, Default)]
pub struct FormScreen {
    forms: FormSet,
    selection: Option<FormName>,
    generation: Generation,
    status: Option<&'static str>,
    dialog: Option<&'static str>,
}

impl FormScreen {
    pub fn new() -> Self {
        FormScreen::default()
    }

    pub fn forms(&self) -> &FormSet {
        &self.forms
    }

    pub fn selection(&self) -> Option<FormName> {
        self.selection
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Record currently shown in the field editor
    pub fn current_record(&self) -> Option<&Record> {
        self.selection.map(|form| self.forms.get(form))
    }

    pub fn status(&self) -> Option<&'static str> {
        self.status
    }

    pub fn dialog(&self) -> Option<&'static str> {
        self.dialog
    }

    pub fn update(&mut self, message: Message) -> Option<Effect> {
        match message {
            Message::Mounted => {
                if self.selection.is_some() {
                    log::warn!("Screen mounted twice, ignoring");
                    return None;
                }
                self.select(FormName::default())
            }

            Message::FormSelected(form) => self.select(form),

            Message::FieldChanged { field, value } => {
                let Some(form) = self.selection else {
                    log::warn!("Field edited with no form selected", { field: field });
                    return None;
                };

                log::trace!("Field changed", { form: form, field: field });
                self.forms.set_field(form, field, value);
                self.status = None;
                None
            }

            Message::Action(action) => self.perform(action),

            Message::Loaded {
                form,
                generation,
                record,
            } => {
                if !self.is_current(form, generation) {
                    log::debug!("Discarding stale load", {
                        form: form,
                        generation: generation
                    });
                    return None;
                }

                if let Some(record) = record {
                    self.forms.replace(form, record);
                }
                None
            }

            Message::Saved {
                form,
                generation,
                outcome,
            } => {
                if outcome.is_success() && self.is_current(form, generation) {
                    self.status = Some(SAVED_MESSAGE);
                }
                None
            }

            Message::Cleared {
                form,
                generation,
                outcome,
            } => {
                if outcome.is_success() && self.is_current(form, generation) {
                    self.status = Some(CLEARED_MESSAGE);
                    self.dialog = Some(CLEARED_MESSAGE);
                }
                None
            }
        }
    }

    fn select(&mut self, form: FormName) -> Option<Effect> {
        self.status = None;

        if self.selection == Some(form) {
            return None;
        }

        // Unsaved edits do not survive leaving a form
        if let Some(previous) = self.selection {
            self.forms.reset(previous);
        }

        self.selection = Some(form);
        self.generation = self.generation.next();

        log::debug!("Form selected", {
            form: form,
            generation: self.generation
        });

        Some(Effect::Load {
            form,
            generation: self.generation,
        })
    }

    fn perform(&mut self, action: Action) -> Option<Effect> {
        log::info!("Received action", { action: action });

        match action {
            Action::Submit => {
                let form = self.selection?;
                Some(Effect::Save {
                    form,
                    generation: self.generation,
                    record: self.forms.get(form).clone(),
                })
            }

            Action::ClearData => {
                let form = self.selection?;
                // The in-memory record is blanked whatever the store says
                self.forms.reset(form);
                // Loads still in flight were issued for data that is now gone
                self.generation = self.generation.next();

                log::debug!("Form cleared", {
                    form: form,
                    generation: self.generation
                });

                Some(Effect::Clear {
                    form,
                    generation: self.generation,
                })
            }

            Action::DismissDialog => {
                self.dialog = None;
                None
            }
        }
    }

    fn is_current(&self, form: FormName, generation: Generation) -> bool {
        self.selection == Some(form) && self.generation == generation
    }
}
