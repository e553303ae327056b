use serde::Serialize;

/// Pre-Block-Kit message attachment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LegacyAttachment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretext: Option<String>,
    pub fields: Vec<AttachmentField>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AttachmentField {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub short: bool,
    pub value: String,
}
