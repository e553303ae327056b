//! Modal and app-home surfaces.

use blockkit_core::{value_text, Block, HomeView, ModalView, TextObject, View};
use serde_json::Value;

#[derive(Clone, Debug, PartialEq)]
pub struct ModalParams {
    title: String,
    blocks: Vec<Block>,
    callback_id: String,
    submit_text: Option<String>,
    close_text: Option<String>,
    metadata: Option<Value>,
    clear_on_close: bool,
    notify_on_close: bool,
}

impl ModalParams {
    pub fn new(
        title: impl Into<String>,
        blocks: Vec<Block>,
        callback_id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            blocks,
            callback_id: callback_id.into(),
            submit_text: None,
            close_text: None,
            metadata: None,
            clear_on_close: false,
            notify_on_close: false,
        }
    }

    pub fn submit_text(mut self, submit_text: impl Into<String>) -> Self {
        self.submit_text = Some(submit_text.into());
        self
    }

    pub fn close_text(mut self, close_text: impl Into<String>) -> Self {
        self.close_text = Some(close_text.into());
        self
    }

    /// Strings are stored as-is, anything else as JSON text.
    pub fn metadata(mut self, metadata: impl Into<Value>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }

    pub fn clear_on_close(mut self, clear_on_close: bool) -> Self {
        self.clear_on_close = clear_on_close;
        self
    }

    pub fn notify_on_close(mut self, notify_on_close: bool) -> Self {
        self.notify_on_close = notify_on_close;
        self
    }
}

pub fn modal(params: ModalParams) -> View {
    let private_metadata = params
        .metadata
        .filter(|metadata| !metadata.is_null())
        .map(|metadata| value_text(&metadata))
        .filter(|metadata| !metadata.is_empty());
    let button_text = |text: Option<String>| {
        text.filter(|text| !text.is_empty()).map(TextObject::plain_emoji)
    };

    View::Modal(ModalView {
        title: TextObject::plain_emoji(params.title),
        blocks: params.blocks,
        callback_id: params.callback_id,
        private_metadata,
        submit: button_text(params.submit_text),
        close: button_text(params.close_text),
        clear_on_close: params.clear_on_close.then_some(true),
        notify_on_close: params.notify_on_close.then_some(true),
    })
}

#[derive(Clone, Debug, PartialEq)]
pub struct HomeParams {
    blocks: Vec<Block>,
}

impl HomeParams {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }
}

pub fn home(params: HomeParams) -> View {
    View::Home(HomeView { blocks: params.blocks })
}
