//! Side elements attached to a section block.
//!
//! Each builder returns an [`Accessory`], which serializes as
//! `{"accessory": {..}}` and plugs into [`crate::blocks::MarkdownParams::accessory`].

use blockkit_core::options::{find_exact, render_options, OptionText};
use blockkit_core::{
    confirm_for, supplied, value_text, ButtonElement, ButtonStyle, ConfirmDialog,
    ConversationFilter, ConversationType, ConversationsSelectElement, Element, ImageElement,
    OneOrMany, OptionList, OverflowElement, SelectOption, StaticSelectElement, TextObject,
};
use serde::Serialize;
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Accessory {
    pub accessory: Element,
}

impl Accessory {
    pub fn into_element(self) -> Element {
        self.accessory
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ButtonParams {
    text: String,
    value: Value,
    action_id: Option<String>,
    style: Option<ButtonStyle>,
    url: Option<String>,
}

impl ButtonParams {
    pub fn new(text: impl Into<String>, value: impl Into<Value>) -> Self {
        Self { text: text.into(), value: value.into(), action_id: None, style: None, url: None }
    }

    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = supplied(action_id);
        self
    }

    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = supplied(url);
        self
    }
}

pub fn button(params: ButtonParams) -> Accessory {
    Accessory {
        accessory: Element::Button(ButtonElement {
            text: TextObject::plain_emoji(params.text),
            value: value_text(&params.value),
            action_id: params.action_id,
            style: params.style,
            url: params.url,
            confirm: None,
        }),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StaticSelectParams {
    options: Vec<SelectOption>,
    initial_option: Option<Value>,
    action_id: Option<String>,
    placeholder: String,
}

impl StaticSelectParams {
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self {
            options,
            initial_option: None,
            action_id: None,
            placeholder: "Pick an option".to_string(),
        }
    }

    /// Must equal one option value exactly; no text-form coercion happens here.
    pub fn initial_option(mut self, value: impl Into<Value>) -> Self {
        self.initial_option = Some(value.into());
        self
    }

    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = supplied(action_id);
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }
}

pub fn static_select(params: StaticSelectParams) -> Accessory {
    let options = render_options(&params.options, OptionText::Plain);
    let initial_option = params
        .initial_option
        .as_ref()
        .and_then(|value| find_exact(&options, value))
        .cloned();

    let mut element = StaticSelectElement::new(
        TextObject::plain_emoji(params.placeholder),
        OptionList::Options(options),
    );
    element.action_id = params.action_id;
    element.initial_option = initial_option;

    Accessory { accessory: Element::StaticSelect(element) }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OverflowParams {
    options: Vec<SelectOption>,
    action_id: Option<String>,
    dialog: Option<ConfirmDialog>,
}

impl OverflowParams {
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self { options, action_id: None, dialog: None }
    }

    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = supplied(action_id);
        self
    }

    pub fn dialog(mut self, dialog: ConfirmDialog) -> Self {
        self.dialog = Some(dialog);
        self
    }
}

pub fn overflow(params: OverflowParams) -> Accessory {
    Accessory {
        accessory: Element::Overflow(OverflowElement {
            options: render_options(&params.options, OptionText::Plain),
            action_id: params.action_id,
            confirm: confirm_for(params.dialog.as_ref()),
        }),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageParams {
    url: String,
    alt: String,
}

impl ImageParams {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into(), alt: "image".to_string() }
    }

    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = alt.into();
        self
    }
}

pub fn image(params: ImageParams) -> Accessory {
    Accessory {
        accessory: Element::Image(ImageElement { image_url: params.url, alt_text: params.alt }),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversationSelectParams {
    initial_conversation: Option<String>,
    action_id: Option<String>,
    filter: Vec<ConversationType>,
    placeholder: String,
    exclude_bot_users: bool,
    exclude_external_shared_channels: bool,
}

impl Default for ConversationSelectParams {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationSelectParams {
    pub fn new() -> Self {
        Self {
            initial_conversation: None,
            action_id: None,
            filter: ConversationType::channels(),
            placeholder: "Select channel".to_string(),
            exclude_bot_users: true,
            exclude_external_shared_channels: true,
        }
    }

    pub fn initial_conversation(mut self, channel_id: impl Into<String>) -> Self {
        self.initial_conversation = supplied(channel_id);
        self
    }

    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = supplied(action_id);
        self
    }

    pub fn filter(mut self, filter: Vec<ConversationType>) -> Self {
        self.filter = filter;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn exclude_bot_users(mut self, exclude: bool) -> Self {
        self.exclude_bot_users = exclude;
        self
    }

    pub fn exclude_external_shared_channels(mut self, exclude: bool) -> Self {
        self.exclude_external_shared_channels = exclude;
        self
    }
}

pub fn conversation_select(params: ConversationSelectParams) -> Accessory {
    Accessory {
        accessory: Element::ConversationsSelect(ConversationsSelectElement {
            placeholder: TextObject::plain_emoji(params.placeholder),
            filter: ConversationFilter {
                include: params.filter,
                exclude_bot_users: params.exclude_bot_users,
                exclude_external_shared_channels: params.exclude_external_shared_channels,
            },
            action_id: params.action_id,
            initial_conversation: params.initial_conversation.map(OneOrMany::One),
            initial_conversations: None,
        }),
    }
}
