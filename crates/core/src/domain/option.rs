use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::text::TextObject;

/// A selectable choice as supplied by the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub text: String,
    pub value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SelectOption {
    pub fn new(text: impl Into<String>, value: impl Into<Value>) -> Self {
        Self { text: text.into(), value: value.into(), description: None }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A labeled bucket of choices.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelectOptionGroup {
    pub label: String,
    pub options: Vec<SelectOption>,
}

impl SelectOptionGroup {
    pub fn new(label: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Self { label: label.into(), options }
    }
}

/// The choices fed to a static select, flat or grouped.
#[derive(Clone, Debug, PartialEq)]
pub enum OptionSet {
    Flat(Vec<SelectOption>),
    Grouped(Vec<SelectOptionGroup>),
}

impl From<Vec<SelectOption>> for OptionSet {
    fn from(options: Vec<SelectOption>) -> Self {
        Self::Flat(options)
    }
}

impl From<Vec<SelectOptionGroup>> for OptionSet {
    fn from(groups: Vec<SelectOptionGroup>) -> Self {
        Self::Grouped(groups)
    }
}

/// Wire form of a choice.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OptionObject {
    pub text: TextObject,
    pub value: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<TextObject>,
}

impl OptionObject {
    pub fn new(text: TextObject, value: Value) -> Self {
        Self { text, value, description: None }
    }

    /// The `{text, value}` pair used for initial selections.
    pub fn reduced(&self) -> Self {
        Self::new(self.text.clone(), self.value.clone())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OptionGroupObject {
    pub label: TextObject,
    pub options: Vec<OptionObject>,
}

/// Serialized under `options` or `option_groups` when flattened into an element.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionList {
    Options(Vec<OptionObject>),
    OptionGroups(Vec<OptionGroupObject>),
}

impl OptionList {
    /// Every choice in list order, groups flattened in group order.
    pub fn candidates(&self) -> Vec<&OptionObject> {
        match self {
            Self::Options(options) => options.iter().collect(),
            Self::OptionGroups(groups) => {
                groups.iter().flat_map(|group| group.options.iter()).collect()
            }
        }
    }
}

/// The caller's requested initial selection.
#[derive(Clone, Debug, PartialEq)]
pub enum InitialOptions {
    Single(String),
    Multiple(Vec<Value>),
}

impl From<&str> for InitialOptions {
    fn from(value: &str) -> Self {
        Self::Single(value.to_owned())
    }
}

impl From<String> for InitialOptions {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<Value>> for InitialOptions {
    fn from(values: Vec<Value>) -> Self {
        Self::Multiple(values)
    }
}

impl From<Vec<&str>> for InitialOptions {
    fn from(values: Vec<&str>) -> Self {
        Self::Multiple(values.into_iter().map(Value::from).collect())
    }
}

/// A resolved initial selection: one option for single selects, a subset for multi selects.
#[derive(Clone, Debug, PartialEq)]
pub enum InitialSelection {
    One(OptionObject),
    Many(Vec<OptionObject>),
}
