use serde::Serialize;

use crate::domain::block::Block;
use crate::domain::text::TextObject;

/// Top-level surface wrapping a list of blocks.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum View {
    Modal(ModalView),
    Home(HomeView),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ModalView {
    pub title: TextObject,
    pub blocks: Vec<Block>,
    pub callback_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_metadata: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submit: Option<TextObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close: Option<TextObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clear_on_close: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_on_close: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HomeView {
    pub blocks: Vec<Block>,
}
