//! Legacy message attachments rendered from key/value data.

use blockkit_core::{value_text, AttachmentField, LegacyAttachment};
use serde_json::{Map, Value};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttachmentParams {
    fallback: Option<String>,
    color: Option<String>,
    pretext: Option<String>,
    title: Option<String>,
    data: Map<String, Value>,
}

impl AttachmentParams {
    pub fn new(data: Map<String, Value>) -> Self {
        Self { data, ..Self::default() }
    }

    pub fn fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn pretext(mut self, pretext: impl Into<String>) -> Self {
        self.pretext = Some(pretext.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// One attachment per descriptor, each with a single field listing the data
/// as `*Key*: value` lines. `null` values are skipped.
pub fn get(attachments: &[AttachmentParams]) -> Vec<LegacyAttachment> {
    attachments
        .iter()
        .map(|attachment| LegacyAttachment {
            fallback: attachment.fallback.clone(),
            color: attachment.color.clone(),
            pretext: attachment.pretext.clone(),
            fields: vec![AttachmentField {
                title: attachment.title.clone(),
                short: false,
                value: render_data(&attachment.data),
            }],
        })
        .collect()
}

fn render_data(data: &Map<String, Value>) -> String {
    data.iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| format!("*{}*: {}\n", capitalize(key), value_text(value)))
        .collect()
}

/// Upper-cases the first character and lower-cases the rest.
fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}
