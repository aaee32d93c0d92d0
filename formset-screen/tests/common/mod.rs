//! Common test utilities shared across integration tests

use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use async_trait::async_trait;
use formset::{
    Action, Effect, Field, FormName, FormScreen, KeyValueStore, Message, PersistenceBridge,
    StoreError,
};
use formset_store::Result as StoreResult;

/// Drives a [`FormScreen`] the way the client does, but lets tests decide when
/// each effect completes.
pub struct Harness {
    pub screen: FormScreen,
    bridge: PersistenceBridge,
    pending: VecDeque<Effect>,
}

#[allow(dead_code)]
impl Harness {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Harness {
            screen: FormScreen::new(),
            bridge: PersistenceBridge::new(store),
            pending: VecDeque::new(),
        }
    }

    /// Fresh screen over `store`, mounted and with its first load finished
    pub async fn mounted(store: Arc<dyn KeyValueStore>) -> Self {
        let mut harness = Harness::new(store);
        harness.dispatch(Message::Mounted);
        harness.settle().await;
        harness
    }

    /// Feed a message to the screen; any effect is queued, not run
    pub fn dispatch(&mut self, message: Message) {
        if let Some(effect) = self.screen.update(message) {
            self.pending.push_back(effect);
        }
    }

    /// Run queued effects in issue order until none remain
    pub async fn settle(&mut self) {
        while let Some(effect) = self.pending.pop_front() {
            self.complete(effect).await;
        }
    }

    /// Run a single effect and feed its result back to the screen
    pub async fn complete(&mut self, effect: Effect) {
        let message = self.bridge.run(effect).await;
        self.dispatch(message);
    }

    pub fn take_pending(&mut self) -> Vec<Effect> {
        self.pending.drain(..).collect()
    }

    pub async fn select(&mut self, form: FormName) {
        self.dispatch(Message::FormSelected(form));
        self.settle().await;
    }

    pub fn type_into(&mut self, field: Field, value: &str) {
        self.dispatch(Message::FieldChanged {
            field,
            value: value.to_string(),
        });
    }

    pub async fn press(&mut self, action: Action) {
        self.dispatch(Message::Action(action));
        self.settle().await;
    }

    /// Value shown in the rendered input for `field`
    pub fn field(&self, field: Field) -> String {
        self.screen
            .view()
            .node
            .input(field)
            .map(|input| input.value.clone())
            .unwrap_or_default()
    }

    /// Text of the rendered status line
    pub fn status_line(&self) -> String {
        self.screen
            .view()
            .node
            .text_with_class("success-message")
            .map(|text| text.text.clone())
            .unwrap_or_default()
    }
}

/// Forms that currently have an entry in `store`
#[allow(dead_code)]
pub async fn stored_forms(store: &dyn KeyValueStore) -> Vec<FormName> {
    let mut forms = Vec::new();
    for form in FormName::ALL {
        if store.get(form.key()).await.unwrap().is_some() {
            forms.push(form);
        }
    }
    forms
}

/// Store whose reads and writes can be made to fail
#[derive(Default)]
pub struct FlakyStore {
    inner: formset::MemoryStore,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
}

#[allow(dead_code)]
impl FlakyStore {
    pub fn new() -> Self {
        FlakyStore::default()
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn failure() -> StoreError {
        StoreError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            "injected failure",
        ))
    }
}

#[async_trait]
impl KeyValueStore for FlakyStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(Self::failure());
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: String) -> StoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Self::failure());
        }
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> StoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Self::failure());
        }
        self.inner.remove(key).await
    }
}
