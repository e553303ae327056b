//! Standalone buttons in the three platform styles.

use blockkit_core::{
    confirm_for, supplied, value_text, ButtonElement, ButtonStyle, ConfirmDialog, Element,
    TextObject,
};
use serde_json::Value;

#[derive(Clone, Debug, PartialEq)]
pub struct ButtonParams {
    text: String,
    value: Value,
    action_id: Option<String>,
    dialog: Option<ConfirmDialog>,
}

impl ButtonParams {
    /// `value` is sent verbatim when it is a string and as JSON text otherwise.
    pub fn new(text: impl Into<String>, value: impl Into<Value>) -> Self {
        Self { text: text.into(), value: value.into(), action_id: None, dialog: None }
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

pub fn primary(params: ButtonParams) -> Element {
    styled(params, Some(ButtonStyle::Primary))
}

pub fn default(params: ButtonParams) -> Element {
    styled(params, None)
}

pub fn danger(params: ButtonParams) -> Element {
    styled(params, Some(ButtonStyle::Danger))
}

fn styled(params: ButtonParams, style: Option<ButtonStyle>) -> Element {
    Element::Button(ButtonElement {
        text: TextObject::plain_emoji(params.text),
        value: value_text(&params.value),
        action_id: params.action_id,
        style,
        url: None,
        confirm: confirm_for(params.dialog.as_ref()),
    })
}
