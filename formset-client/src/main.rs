mod stylesheet;
mod ui_node;

use kv_log_macro as log;

use iced::Task;

use formset::{
    FileStore, FormScreen, KeyValueStore, MemoryStore, Message, PersistenceBridge, TITLE,
};
use std::sync::Arc;

const STORAGE_NAMESPACE: &str = "formset";

struct Formset {
    screen: FormScreen,
    bridge: PersistenceBridge,
}

impl Formset {
    fn new(bridge: PersistenceBridge) -> (Self, Task<Message>) {
        (
            Formset {
                screen: FormScreen::new(),
                bridge,
            },
            Task::perform(async {}, |_| Message::Mounted),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match self.screen.update(message) {
            Some(effect) => {
                let bridge = self.bridge.clone();
                Task::perform(async move { bridge.run(effect).await }, |message| message)
            }
            None => Task::none(),
        }
    }

    fn view(&self) -> iced::Element<'_, Message> {
        ui_node::document(self.screen.view())
    }
}

fn open_store() -> Arc<dyn KeyValueStore> {
    match FileStore::open(STORAGE_NAMESPACE) {
        Ok(store) => {
            log::info!("Opened storage at {}", store.path().display());
            Arc::new(store)
        }
        Err(e) => {
            log::error!("Failed to open storage, data will not persist: {}", e);
            Arc::new(MemoryStore::new())
        }
    }
}

fn main() -> iced::Result {
    env_logger::init();

    let bridge = PersistenceBridge::new(open_store());

    iced::application(TITLE, Formset::update, Formset::view)
        .window_size((420.0, 560.0))
        .run_with(move || Formset::new(bridge))
}
