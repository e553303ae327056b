//! Option rendering and initial-selection resolution shared by every
//! select-style builder.
//!
//! Two matching rules coexist:
//! - the static select family compares values by their text form, so `1`
//!   and `"1"` select the same option;
//! - radio buttons, checkboxes and the section accessory select compare
//!   values exactly.

use serde_json::Value;
use tracing::debug;

use crate::domain::option::{
    InitialOptions, InitialSelection, OptionGroupObject, OptionList, OptionObject, OptionSet,
    SelectOption,
};
use crate::domain::text::{value_text, TextObject};

/// How an option's caption is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionText {
    Plain,
    PlainEmoji,
    Mrkdwn,
}

impl OptionText {
    fn render(self, text: &str) -> TextObject {
        match self {
            Self::Plain => TextObject::plain(text),
            Self::PlainEmoji => TextObject::plain_emoji(text),
            Self::Mrkdwn => TextObject::mrkdwn(text),
        }
    }
}

pub fn render_option(option: &SelectOption, style: OptionText) -> OptionObject {
    OptionObject::new(style.render(&option.text), option.value.clone())
}

pub fn render_options(options: &[SelectOption], style: OptionText) -> Vec<OptionObject> {
    options.iter().map(|option| render_option(option, style)).collect()
}

/// Renders the choices of a static select. Flat options carry `emoji: true`,
/// grouped ones plain captions under a plain group label.
pub fn render_option_set(options: &OptionSet) -> OptionList {
    match options {
        OptionSet::Flat(options) => {
            OptionList::Options(render_options(options, OptionText::PlainEmoji))
        }
        OptionSet::Grouped(groups) => OptionList::OptionGroups(
            groups
                .iter()
                .map(|group| OptionGroupObject {
                    label: TextObject::plain(&group.label),
                    options: render_options(&group.options, OptionText::Plain),
                })
                .collect(),
        ),
    }
}

/// Resolves the initial selection of a static select using text-form equality.
///
/// A multi select keeps the candidates whose value appears in the requested
/// sequence, in candidate order. A single select takes the first candidate
/// matching the requested value, reduced to `{text, value}`. Any other
/// pairing selects nothing.
pub fn resolve_initial_options(
    options: &OptionList,
    initial: Option<&InitialOptions>,
    multi: bool,
) -> Option<InitialSelection> {
    let initial = initial?;
    let candidates = options.candidates();

    match (multi, initial) {
        (true, InitialOptions::Multiple(values)) if !values.is_empty() => {
            let wanted: Vec<String> = values.iter().map(value_text).collect();
            let selected = candidates
                .into_iter()
                .filter(|option| wanted.contains(&value_text(&option.value)))
                .cloned()
                .collect();
            Some(InitialSelection::Many(selected))
        }
        (false, InitialOptions::Single(value)) => {
            let found = candidates
                .into_iter()
                .find(|option| value_text(&option.value) == *value)
                .map(OptionObject::reduced);
            if found.is_none() {
                debug!(
                    event_name = "blockkit.options.initial_unmatched",
                    initial_value = value.as_str(),
                    "initial option does not match any option value"
                );
            }
            found.map(InitialSelection::One)
        }
        _ => None,
    }
}

/// Finds the first option whose value equals `value` exactly.
pub fn find_exact<'a>(options: &'a [OptionObject], value: &Value) -> Option<&'a OptionObject> {
    options.iter().find(|option| option.value == *value)
}
