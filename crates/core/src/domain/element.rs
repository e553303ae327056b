use serde::Serialize;
use serde_json::Value;

use crate::domain::confirm::Confirm;
use crate::domain::option::{OptionList, OptionObject};
use crate::domain::text::{OneOrMany, TextObject};

/// Interactive or display control placed in a block, an accessory slot or an input.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    Button(ButtonElement),
    StaticSelect(StaticSelectElement),
    MultiStaticSelect(StaticSelectElement),
    UsersSelect(UsersSelectElement),
    ConversationsSelect(ConversationsSelectElement),
    MultiConversationsSelect(ConversationsSelectElement),
    ExternalSelect(ExternalSelectElement),
    MultiExternalSelect(ExternalSelectElement),
    PlainTextInput(PlainTextInputElement),
    Datepicker(DatepickerElement),
    Timepicker(TimepickerElement),
    RadioButtons(RadioButtonsElement),
    Checkboxes(CheckboxesElement),
    Overflow(OverflowElement),
    Image(ImageElement),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonStyle {
    Primary,
    Danger,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ButtonElement {
    pub text: TextObject,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ButtonStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<Confirm>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StaticSelectElement {
    pub placeholder: TextObject,
    #[serde(flatten)]
    pub options: OptionList,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_option: Option<OptionObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_options: Option<Vec<OptionObject>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_selected_items: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<Confirm>,
}

impl StaticSelectElement {
    pub fn new(placeholder: TextObject, options: OptionList) -> Self {
        Self {
            placeholder,
            options,
            action_id: None,
            initial_option: None,
            initial_options: None,
            max_selected_items: None,
            focus_on_load: None,
            confirm: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UsersSelectElement {
    pub placeholder: TextObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<Confirm>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationType {
    Public,
    Private,
    Im,
    Mpim,
}

impl ConversationType {
    /// Public and private channels, the filter used when the caller names none.
    pub fn channels() -> Vec<Self> {
        vec![Self::Public, Self::Private]
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConversationFilter {
    pub include: Vec<ConversationType>,
    pub exclude_bot_users: bool,
    pub exclude_external_shared_channels: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConversationsSelectElement {
    pub placeholder: TextObject,
    pub filter: ConversationFilter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_conversation: Option<OneOrMany<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_conversations: Option<OneOrMany<String>>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExternalSelectElement {
    pub placeholder: TextObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_query_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_options: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_selected_items: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerAction {
    OnEnterPressed,
    OnCharacterEntered,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DispatchActionConfig {
    pub trigger_actions_on: Vec<TriggerAction>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlainTextInputElement {
    pub placeholder: TextObject,
    pub multiline: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dispatch_action_config: Option<DispatchActionConfig>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DatepickerElement {
    pub placeholder: TextObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_date: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TimepickerElement {
    pub placeholder: TextObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_time: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RadioButtonsElement {
    pub options: Vec<OptionObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_option: Option<OptionObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CheckboxesElement {
    pub options: Vec<OptionObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_options: Option<Vec<OptionObject>>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OverflowElement {
    pub options: Vec<OptionObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<Confirm>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ImageElement {
    pub image_url: String,
    pub alt_text: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{ButtonElement, ButtonStyle, ConversationType, Element, ImageElement};
    use crate::domain::text::TextObject;

    #[test]
    fn element_type_tag_uses_platform_names() {
        let image = Element::Image(ImageElement {
            image_url: "https://example.com/a.png".to_owned(),
            alt_text: "a".to_owned(),
        });
        assert_eq!(
            serde_json::to_value(image).expect("serialize"),
            json!({ "type": "image", "image_url": "https://example.com/a.png", "alt_text": "a" })
        );
    }

    #[test]
    fn button_omits_unset_fields() {
        let button = Element::Button(ButtonElement {
            text: TextObject::plain_emoji("Go"),
            value: "go".to_owned(),
            action_id: None,
            style: Some(ButtonStyle::Danger),
            url: None,
            confirm: None,
        });
        assert_eq!(
            serde_json::to_value(button).expect("serialize"),
            json!({
                "type": "button",
                "text": { "type": "plain_text", "text": "Go", "emoji": true },
                "value": "go",
                "style": "danger"
            })
        );
    }

    #[test]
    fn default_conversation_filter_is_public_and_private() {
        assert_eq!(
            serde_json::to_value(ConversationType::channels()).expect("serialize"),
            json!(["public", "private"])
        );
    }
}
