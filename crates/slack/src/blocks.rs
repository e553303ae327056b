//! Layout blocks: actions, context, divider, fields, header, image and text sections.

use blockkit_core::{
    supplied, ActionsBlock, Block, ContextBlock, DividerBlock, Element, HeaderBlock, ImageBlock,
    OneOrMany, SectionBlock, TextObject,
};
use serde_json::{Map, Value};
use tracing::debug;

use crate::accessory::Accessory;

#[derive(Clone, Debug, PartialEq)]
pub struct ActionsParams {
    elements: Vec<Element>,
    block_id: Option<String>,
}

impl ActionsParams {
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements, block_id: None }
    }

    pub fn block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = supplied(block_id);
        self
    }
}

pub fn actions(params: ActionsParams) -> Block {
    Block::Actions(ActionsBlock { elements: params.elements, block_id: params.block_id })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContextParams {
    text: OneOrMany<String>,
    block_id: Option<String>,
}

impl ContextParams {
    /// One string yields one element, a sequence one element per entry.
    pub fn new(text: impl Into<OneOrMany<String>>) -> Self {
        Self { text: text.into(), block_id: None }
    }

    pub fn block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = supplied(block_id);
        self
    }
}

pub fn context(params: ContextParams) -> Block {
    Block::Context(ContextBlock {
        block_id: params.block_id,
        elements: params.text.into_vec().into_iter().map(TextObject::mrkdwn).collect(),
    })
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DividerParams {
    block_id: Option<String>,
}

impl DividerParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = supplied(block_id);
        self
    }
}

pub fn divider(params: DividerParams) -> Block {
    Block::Divider(DividerBlock { block_id: params.block_id })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldsParams {
    fields: Vec<String>,
    block_id: Option<String>,
}

impl FieldsParams {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { fields: fields.into_iter().map(Into::into).collect(), block_id: None }
    }

    pub fn block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = supplied(block_id);
        self
    }
}

pub fn fields(params: FieldsParams) -> Block {
    Block::Section(SectionBlock {
        fields: Some(params.fields.into_iter().map(TextObject::mrkdwn).collect()),
        block_id: params.block_id,
        ..SectionBlock::default()
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderParams {
    text: String,
    block_id: Option<String>,
}

impl HeaderParams {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), block_id: None }
    }

    pub fn block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = supplied(block_id);
        self
    }
}

pub fn header(params: HeaderParams) -> Block {
    Block::Header(HeaderBlock { text: TextObject::plain(params.text), block_id: params.block_id })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageParams {
    url: String,
    alt: String,
    block_id: Option<String>,
}

impl ImageParams {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into(), alt: "image".to_string(), block_id: None }
    }

    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = alt.into();
        self
    }

    pub fn block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = supplied(block_id);
        self
    }
}

pub fn image(params: ImageParams) -> Block {
    Block::Image(ImageBlock {
        image_url: params.url,
        alt_text: params.alt,
        block_id: params.block_id,
    })
}

#[derive(Clone, Debug, PartialEq)]
pub struct MarkdownParams {
    text: String,
    block_id: Option<String>,
    accessory: Option<Element>,
    extra: Map<String, Value>,
}

impl MarkdownParams {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), block_id: None, accessory: None, extra: Map::new() }
    }

    pub fn block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = supplied(block_id);
        self
    }

    pub fn accessory(mut self, accessory: Accessory) -> Self {
        self.accessory = Some(accessory.into_element());
        self
    }

    /// Adds a free-form key to the section, applied after the built fields.
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Markdown section. Extra keys win over the built ones: a colliding typed
/// field is cleared and the caller's value is emitted verbatim in its place.
/// An extra `type` replaces the `section` tag.
pub fn markdown(params: MarkdownParams) -> Block {
    let mut section = SectionBlock {
        text: Some(TextObject::mrkdwn(params.text)),
        block_id: params.block_id,
        accessory: params.accessory,
        ..SectionBlock::default()
    };
    let mut kind = None;

    for (key, value) in params.extra {
        match key.as_str() {
            "type" => {
                kind = Some(value);
                continue;
            }
            "text" => section.text = None,
            "fields" => section.fields = None,
            "block_id" => section.block_id = None,
            "accessory" => section.accessory = None,
            _ => {}
        }
        section.extra.insert(key, value);
    }

    match kind {
        Some(kind) => retagged(section, kind),
        None => Block::Section(section),
    }
}

/// Re-emits a section under a caller-chosen `type`, the tag staying first.
fn retagged(section: SectionBlock, kind: Value) -> Block {
    match serde_json::to_value(&section) {
        Ok(Value::Object(fields)) => {
            debug!(
                event_name = "blockkit.blocks.section_retagged",
                requested = %kind,
                "markdown section emitted under a caller-supplied type"
            );
            let mut block = Map::with_capacity(fields.len() + 1);
            block.insert("type".to_owned(), kind);
            block.extend(fields);
            Block::Raw(block)
        }
        _ => Block::Section(section),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlainTextParams {
    text: String,
    block_id: Option<String>,
}

impl PlainTextParams {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), block_id: None }
    }

    pub fn block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = supplied(block_id);
        self
    }
}

pub fn plain_text(params: PlainTextParams) -> Block {
    Block::Section(SectionBlock {
        text: Some(TextObject::plain_emoji(params.text)),
        block_id: params.block_id,
        ..SectionBlock::default()
    })
}
