use crate::{
    form_name::FormName,
    record::{Field, Record},
};

/// In-memory table holding one [`Record`] for each of the five forms.
///
/// Every form always has an entry; updates are scoped to a single form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormSet {
    records: [Record; 5],
}

impl FormSet {
    pub fn new() -> Self {
        FormSet::default()
    }

    pub fn get(&self, form: FormName) -> &Record {
        &self.records[form.index()]
    }

    pub fn set_field(&mut self, form: FormName, field: Field, value: impl Into<String>) {
        self.records[form.index()].set(field, value);
    }

    pub fn replace(&mut self, form: FormName, record: Record) {
        self.records[form.index()] = record;
    }

    pub fn reset(&mut self, form: FormName) {
        self.records[form.index()] = Record::default();
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormName, &Record)> {
        FormName::ALL.into_iter().zip(self.records.iter())
    }
}
