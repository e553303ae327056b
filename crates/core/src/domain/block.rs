use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::element::Element;
use crate::domain::text::TextObject;

/// Top-level layout unit of a message or view.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Section(SectionBlock),
    Actions(ActionsBlock),
    Context(ContextBlock),
    Divider(DividerBlock),
    Header(HeaderBlock),
    Image(ImageBlock),
    Input(InputBlock),
    /// A block whose keys were overridden past the typed model, emitted as given.
    #[serde(untagged)]
    Raw(Map<String, Value>),
}

impl Block {
    pub fn block_id(&self) -> Option<&str> {
        match self {
            Self::Section(SectionBlock { block_id, .. })
            | Self::Actions(ActionsBlock { block_id, .. })
            | Self::Context(ContextBlock { block_id, .. })
            | Self::Divider(DividerBlock { block_id })
            | Self::Header(HeaderBlock { block_id, .. })
            | Self::Image(ImageBlock { block_id, .. })
            | Self::Input(InputBlock { block_id, .. }) => block_id.as_deref(),
            Self::Raw(fields) => fields.get("block_id").and_then(Value::as_str),
        }
    }
}

/// A text or fields section. `extra` holds caller keys merged into the
/// serialized object after the typed fields.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SectionBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<TextObject>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessory: Option<Element>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ActionsBlock {
    pub elements: Vec<Element>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContextBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
    pub elements: Vec<TextObject>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DividerBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HeaderBlock {
    pub text: TextObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ImageBlock {
    pub image_url: String,
    pub alt_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
}

/// Pairs a label with a form element.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InputBlock {
    pub element: Element,
    pub label: TextObject,
    pub optional: bool,
    pub dispatch_action: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Map};

    use super::{Block, DividerBlock, SectionBlock};
    use crate::domain::text::TextObject;

    #[test]
    fn divider_without_block_id_is_just_a_type() {
        let divider = Block::Divider(DividerBlock::default());
        assert_eq!(
            serde_json::to_value(&divider).expect("serialize"),
            json!({ "type": "divider" })
        );
        assert_eq!(divider.block_id(), None);
    }

    #[test]
    fn section_extra_keys_are_flattened() {
        let mut extra = Map::new();
        extra.insert("expand".to_owned(), json!(true));
        let section = Block::Section(SectionBlock {
            text: Some(TextObject::mrkdwn("*hi*")),
            block_id: Some("s1".to_owned()),
            extra,
            ..SectionBlock::default()
        });

        assert_eq!(section.block_id(), Some("s1"));
        assert_eq!(
            serde_json::to_value(section).expect("serialize"),
            json!({
                "type": "section",
                "text": { "type": "mrkdwn", "text": "*hi*" },
                "block_id": "s1",
                "expand": true
            })
        );
    }

    #[test]
    fn raw_block_serializes_its_map_without_an_added_tag() {
        let mut fields = Map::new();
        fields.insert("type".to_owned(), json!("header"));
        fields.insert("block_id".to_owned(), json!("h1"));
        let block = Block::Raw(fields);

        assert_eq!(block.block_id(), Some("h1"));
        assert_eq!(
            serde_json::to_string(&block).expect("serialize"),
            r#"{"type":"header","block_id":"h1"}"#
        );
    }
}
