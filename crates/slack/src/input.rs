//! Form elements wrapped in `input` blocks.
//!
//! Every builder here returns the element inside the input envelope
//! (`label`, `optional`, `dispatch_action`, optional `block_id`), except
//! [`checkboxes`] when asked for a bare element.

use blockkit_core::options::{
    find_exact, render_option_set, render_options, resolve_initial_options, OptionText,
};
use blockkit_core::{
    group_timezones, supplied, Block, CheckboxesElement, ConversationFilter, ConversationType,
    ConversationsSelectElement, DatepickerElement, DispatchActionConfig, Element,
    ExternalSelectElement, InitialOptions, InitialSelection, InputBlock, OneOrMany, OptionObject,
    OptionSet, PlainTextInputElement, RadioButtonsElement, SelectOption, StaticSelectElement,
    TextObject, TimepickerElement, TimezoneTable, TriggerAction,
};
use chrono::{DateTime, FixedOffset, Local, NaiveTime, TimeDelta, Timelike, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";
const TIME_STEP_MINUTES: u32 = 5;

fn wrap_input(
    element: Element,
    label: String,
    block_id: Option<String>,
    optional: bool,
    dispatch_action: bool,
) -> Block {
    Block::Input(InputBlock {
        element,
        label: TextObject::plain_emoji(label),
        optional,
        dispatch_action,
        block_id,
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextParams {
    label: String,
    placeholder: String,
    min_length: Option<u32>,
    max_length: Option<u32>,
    block_id: Option<String>,
    action_id: Option<String>,
    optional: bool,
    initial_value: Option<String>,
    multiline: bool,
    dispatch_action: bool,
}

impl TextParams {
    pub fn new(label: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            placeholder: placeholder.into(),
            min_length: None,
            max_length: None,
            block_id: None,
            action_id: None,
            optional: false,
            initial_value: None,
            multiline: false,
            dispatch_action: false,
        }
    }

    /// Zero means unset.
    pub fn min_length(mut self, min_length: u32) -> Self {
        self.min_length = Some(min_length).filter(|length| *length > 0);
        self
    }

    /// Zero means unset.
    pub fn max_length(mut self, max_length: u32) -> Self {
        self.max_length = Some(max_length).filter(|length| *length > 0);
        self
    }

    pub fn block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = supplied(block_id);
        self
    }

    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = supplied(action_id);
        self
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn initial_value(mut self, initial_value: impl Into<String>) -> Self {
        self.initial_value = supplied(initial_value);
        self
    }

    pub fn multiline(mut self, multiline: bool) -> Self {
        self.multiline = multiline;
        self
    }

    /// Fire a block action when the user presses enter.
    pub fn dispatch_action(mut self, dispatch_action: bool) -> Self {
        self.dispatch_action = dispatch_action;
        self
    }
}

pub fn text(params: TextParams) -> Block {
    let element = PlainTextInputElement {
        placeholder: TextObject::plain(params.placeholder),
        multiline: params.multiline,
        action_id: params.action_id,
        initial_value: params.initial_value,
        min_length: params.min_length,
        max_length: params.max_length,
        dispatch_action_config: params.dispatch_action.then(|| DispatchActionConfig {
            trigger_actions_on: vec![TriggerAction::OnEnterPressed],
        }),
    };

    wrap_input(
        Element::PlainTextInput(element),
        params.label,
        params.block_id,
        params.optional,
        params.dispatch_action,
    )
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversationSelectParams {
    label: String,
    placeholder: String,
    block_id: Option<String>,
    action_id: Option<String>,
    optional: bool,
    initial_conversations: Option<OneOrMany<String>>,
    filter: Vec<ConversationType>,
    multi: bool,
    exclude_bot_users: bool,
    exclude_external_shared_channels: bool,
}

impl ConversationSelectParams {
    pub fn new(label: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            placeholder: placeholder.into(),
            block_id: None,
            action_id: None,
            optional: false,
            initial_conversations: None,
            filter: ConversationType::channels(),
            multi: false,
            exclude_bot_users: true,
            exclude_external_shared_channels: true,
        }
    }

    pub fn block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = supplied(block_id);
        self
    }

    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = supplied(action_id);
        self
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Conversation id(s); sent as `initial_conversations` for multi pickers.
    pub fn initial_conversations(mut self, conversations: impl Into<OneOrMany<String>>) -> Self {
        self.initial_conversations = Some(conversations.into());
        self
    }

    pub fn filter(mut self, filter: Vec<ConversationType>) -> Self {
        self.filter = filter;
        self
    }

    pub fn multi(mut self, multi: bool) -> Self {
        self.multi = multi;
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

pub fn conversation_select(params: ConversationSelectParams) -> Block {
    let (initial_conversation, initial_conversations) = if params.multi {
        (None, params.initial_conversations)
    } else {
        (params.initial_conversations, None)
    };

    let select = ConversationsSelectElement {
        placeholder: TextObject::plain(params.placeholder),
        filter: ConversationFilter {
            include: params.filter,
            exclude_bot_users: params.exclude_bot_users,
            exclude_external_shared_channels: params.exclude_external_shared_channels,
        },
        action_id: params.action_id,
        initial_conversation,
        initial_conversations,
    };
    let element = if params.multi {
        Element::MultiConversationsSelect(select)
    } else {
        Element::ConversationsSelect(select)
    };

    wrap_input(element, params.label, params.block_id, params.optional, false)
}

#[derive(Clone, Debug, PartialEq)]
pub struct StaticSelectParams {
    label: String,
    placeholder: String,
    options: OptionSet,
    block_id: Option<String>,
    action_id: Option<String>,
    optional: bool,
    initial_options: Option<InitialOptions>,
    multi: bool,
    max_selected_items: Option<u32>,
}

impl StaticSelectParams {
    /// Grouped option sets render as `option_groups`, flat ones as `options`.
    pub fn new(
        label: impl Into<String>,
        placeholder: impl Into<String>,
        options: impl Into<OptionSet>,
    ) -> Self {
        Self {
            label: label.into(),
            placeholder: placeholder.into(),
            options: options.into(),
            block_id: None,
            action_id: None,
            optional: false,
            initial_options: None,
            multi: false,
            max_selected_items: None,
        }
    }

    pub fn block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = supplied(block_id);
        self
    }

    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = supplied(action_id);
        self
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// A single value for single selects, a sequence for multi selects.
    pub fn initial_options(mut self, initial: impl Into<InitialOptions>) -> Self {
        self.initial_options = Some(initial.into());
        self
    }

    pub fn multi(mut self, multi: bool) -> Self {
        self.multi = multi;
        self
    }

    /// Advisory cap forwarded to the platform; not enforced here.
    pub fn max_selected_items(mut self, max_selected_items: u32) -> Self {
        self.max_selected_items = Some(max_selected_items).filter(|max| *max > 0);
        self
    }
}

pub fn static_select(params: StaticSelectParams) -> Block {
    let options = render_option_set(&params.options);
    let initial = resolve_initial_options(&options, params.initial_options.as_ref(), params.multi);

    let mut select = StaticSelectElement::new(TextObject::plain(params.placeholder), options);
    match initial {
        Some(InitialSelection::One(option)) => select.initial_option = Some(option),
        Some(InitialSelection::Many(options)) => select.initial_options = Some(options),
        None => {}
    }
    select.action_id = params.action_id;
    select.max_selected_items = params.max_selected_items;

    let element = if params.multi {
        Element::MultiStaticSelect(select)
    } else {
        Element::StaticSelect(select)
    };

    wrap_input(element, params.label, params.block_id, params.optional, false)
}

#[derive(Clone, Debug, PartialEq)]
pub struct RadioSelectParams {
    label: String,
    options: Vec<SelectOption>,
    initial_option: Option<Value>,
    block_id: Option<String>,
    action_id: Option<String>,
    optional: bool,
}

impl RadioSelectParams {
    pub fn new(label: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Self {
            label: label.into(),
            options,
            initial_option: None,
            block_id: None,
            action_id: None,
            optional: false,
        }
    }

    /// Matched against option values exactly: `1` does not select `"1"`.
    pub fn initial_option(mut self, value: impl Into<Value>) -> Self {
        self.initial_option = Some(value.into());
        self
    }

    pub fn block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = supplied(block_id);
        self
    }

    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = supplied(action_id);
        self
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }
}

/// Radio buttons. Captions go under `text` and the initial option matches by
/// exact value, unlike the coercing static selects.
pub fn radio_select(params: RadioSelectParams) -> Block {
    let options = render_options(&params.options, OptionText::Plain);
    let initial_option = params
        .initial_option
        .as_ref()
        .and_then(|value| find_exact(&options, value))
        .map(OptionObject::reduced);

    let element = RadioButtonsElement { options, initial_option, action_id: params.action_id };

    wrap_input(
        Element::RadioButtons(element),
        params.label,
        params.block_id,
        params.optional,
        false,
    )
}

#[derive(Clone, Debug, PartialEq)]
pub struct CheckboxesParams {
    options: Vec<SelectOption>,
    action_id: Option<String>,
    initial_options: Option<Vec<Value>>,
    label: Option<String>,
    block_id: Option<String>,
    optional: bool,
    as_input: bool,
}

impl CheckboxesParams {
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self {
            options,
            action_id: None,
            initial_options: None,
            label: None,
            block_id: None,
            optional: false,
            as_input: true,
        }
    }

    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = supplied(action_id);
        self
    }

    /// Values matched exactly against option values.
    pub fn initial_options<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.initial_options = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Required when the checkboxes are wrapped in an input block.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = supplied(block_id);
        self
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// `false` returns the bare element, for use inside an actions block.
    pub fn as_input(mut self, as_input: bool) -> Self {
        self.as_input = as_input;
        self
    }
}

/// Checkbox group, either input-wrapped or bare.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Checkboxes {
    Input(Block),
    Element(Element),
}

pub fn checkboxes(params: CheckboxesParams) -> Checkboxes {
    let initial_options = params.initial_options.as_ref().map(|wanted| {
        params
            .options
            .iter()
            .filter(|option| wanted.contains(&option.value))
            .map(|option| OptionObject::new(TextObject::mrkdwn(&option.text), option.value.clone()))
            .collect()
    });
    let options = params
        .options
        .iter()
        .map(|option| OptionObject {
            text: TextObject::mrkdwn(&option.text),
            value: option.value.clone(),
            description: option
                .description
                .as_deref()
                .filter(|description| !description.is_empty())
                .map(TextObject::mrkdwn),
        })
        .collect();

    let element = Element::Checkboxes(CheckboxesElement {
        options,
        action_id: params.action_id,
        initial_options,
    });

    if params.as_input {
        Checkboxes::Input(wrap_input(
            element,
            params.label.unwrap_or_default(),
            params.block_id,
            params.optional,
            false,
        ))
    } else {
        Checkboxes::Element(element)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatepickerParams {
    label: String,
    placeholder: String,
    block_id: Option<String>,
    action_id: Option<String>,
    initial_date: Option<String>,
    timezone: Option<String>,
    optional: bool,
}

impl DatepickerParams {
    pub fn new(label: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            placeholder: placeholder.into(),
            block_id: None,
            action_id: None,
            initial_date: None,
            timezone: None,
            optional: false,
        }
    }

    pub fn block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = supplied(block_id);
        self
    }

    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = supplied(action_id);
        self
    }

    /// `YYYY-MM-DD`; defaults to today.
    pub fn initial_date(mut self, initial_date: impl Into<String>) -> Self {
        self.initial_date = supplied(initial_date);
        self
    }

    /// IANA zone used to compute "today"; local time when unset.
    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = supplied(timezone);
        self
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }
}

pub fn datepicker(params: DatepickerParams) -> Block {
    datepicker_at(params, Utc::now())
}

fn datepicker_at(params: DatepickerParams, now: DateTime<Utc>) -> Block {
    let initial_date = params.initial_date.unwrap_or_else(|| {
        zoned_now(now, params.timezone.as_deref()).format(DATE_FORMAT).to_string()
    });

    let element = DatepickerElement {
        placeholder: TextObject::plain_emoji(params.placeholder),
        action_id: params.action_id,
        initial_date: Some(initial_date),
    };

    wrap_input(Element::Datepicker(element), params.label, params.block_id, params.optional, false)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimepickerParams {
    label: String,
    placeholder: String,
    block_id: Option<String>,
    action_id: Option<String>,
    initial_time: Option<String>,
    timezone: Option<String>,
    optional: bool,
}

impl TimepickerParams {
    pub fn new(label: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            placeholder: placeholder.into(),
            block_id: None,
            action_id: None,
            initial_time: None,
            timezone: None,
            optional: false,
        }
    }

    pub fn block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = supplied(block_id);
        self
    }

    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = supplied(action_id);
        self
    }

    /// `hh:mm am|pm` (24-hour `HH:MM` is accepted too); sent as `HH:MM`.
    pub fn initial_time(mut self, initial_time: impl Into<String>) -> Self {
        self.initial_time = supplied(initial_time);
        self
    }

    /// IANA zone used for the default time; local time when unset.
    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = supplied(timezone);
        self
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }
}

pub fn timepicker(params: TimepickerParams) -> Block {
    timepicker_at(params, Utc::now())
}

fn timepicker_at(params: TimepickerParams, now: DateTime<Utc>) -> Block {
    let initial_time = match params.initial_time.as_deref() {
        Some(raw) => normalize_time(raw),
        None => {
            let zoned = zoned_now(now, params.timezone.as_deref());
            let minutes = TIME_STEP_MINUTES - zoned.minute() % TIME_STEP_MINUTES;
            (zoned + TimeDelta::minutes(i64::from(minutes))).format(TIME_FORMAT).to_string()
        }
    };

    let element = TimepickerElement {
        placeholder: TextObject::plain_emoji(params.placeholder),
        action_id: params.action_id,
        initial_time: Some(initial_time),
    };

    wrap_input(Element::Timepicker(element), params.label, params.block_id, params.optional, false)
}

fn zoned_now(now: DateTime<Utc>, timezone: Option<&str>) -> DateTime<FixedOffset> {
    match timezone.and_then(resolve_zone) {
        Some(zone) => now.with_timezone(&zone).fixed_offset(),
        None => now.with_timezone(&Local).fixed_offset(),
    }
}

fn resolve_zone(name: &str) -> Option<Tz> {
    match name.parse::<Tz>() {
        Ok(zone) => Some(zone),
        Err(_) => {
            warn!(
                event_name = "blockkit.input.unknown_timezone",
                timezone = name,
                "unknown timezone, falling back to local time"
            );
            None
        }
    }
}

fn normalize_time(raw: &str) -> String {
    let trimmed = raw.trim();
    NaiveTime::parse_from_str(trimmed, "%I:%M %p")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map(|time| time.format(TIME_FORMAT).to_string())
        .unwrap_or_else(|_| {
            warn!(
                event_name = "blockkit.input.unparsed_time",
                initial_time = raw,
                "initial time is neither `hh:mm am|pm` nor `HH:MM`, sending it unchanged"
            );
            raw.to_owned()
        })
}

#[derive(Clone, Debug, PartialEq)]
pub struct TimezonePickerParams {
    label: String,
    placeholder: String,
    block_id: Option<String>,
    action_id: Option<String>,
    initial_timezone: Option<String>,
    optional: bool,
    table: Option<TimezoneTable>,
}

impl TimezonePickerParams {
    pub fn new(label: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            placeholder: placeholder.into(),
            block_id: None,
            action_id: None,
            initial_timezone: None,
            optional: false,
            table: None,
        }
    }

    pub fn block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = supplied(block_id);
        self
    }

    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = supplied(action_id);
        self
    }

    pub fn initial_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.initial_timezone = supplied(timezone);
        self
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Replaces the bundled reference table.
    pub fn table(mut self, table: TimezoneTable) -> Self {
        self.table = Some(table);
        self
    }
}

/// Grouped static select over the reference timezone table.
pub fn timezone_picker(params: TimezonePickerParams) -> Block {
    let table = match &params.table {
        Some(table) => table,
        None => TimezoneTable::bundled(),
    };
    let groups = group_timezones(table);

    let mut select = StaticSelectParams::new(params.label, params.placeholder, groups)
        .optional(params.optional);
    select.block_id = params.block_id;
    select.action_id = params.action_id;
    select.initial_options = params.initial_timezone.map(InitialOptions::Single);

    static_select(select)
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExternalSelectParams {
    label: String,
    placeholder: String,
    block_id: Option<String>,
    action_id: Option<String>,
    optional: bool,
    multi: bool,
    min_query_length: Option<u32>,
    max_selected_items: Option<u32>,
    initial_options: Option<Value>,
}

impl ExternalSelectParams {
    pub fn new(label: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            placeholder: placeholder.into(),
            block_id: None,
            action_id: None,
            optional: false,
            multi: false,
            min_query_length: None,
            max_selected_items: None,
            initial_options: None,
        }
    }

    pub fn block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = supplied(block_id);
        self
    }

    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = supplied(action_id);
        self
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn multi(mut self, multi: bool) -> Self {
        self.multi = multi;
        self
    }

    pub fn min_query_length(mut self, min_query_length: u32) -> Self {
        self.min_query_length = Some(min_query_length);
        self
    }

    pub fn max_selected_items(mut self, max_selected_items: u32) -> Self {
        self.max_selected_items = Some(max_selected_items).filter(|max| *max > 0);
        self
    }

    /// Forwarded verbatim; there is no local option list to check them against.
    pub fn initial_options(mut self, initial_options: impl Into<Value>) -> Self {
        self.initial_options = Some(initial_options.into()).filter(|value| !value.is_null());
        self
    }
}

pub fn external_select(params: ExternalSelectParams) -> Block {
    let select = ExternalSelectElement {
        placeholder: TextObject::plain(params.placeholder),
        min_query_length: params.min_query_length,
        initial_options: params.initial_options,
        max_selected_items: params.max_selected_items,
        action_id: params.action_id,
    };
    let element = if params.multi {
        Element::MultiExternalSelect(select)
    } else {
        Element::ExternalSelect(select)
    };

    wrap_input(element, params.label, params.block_id, params.optional, false)
}

#[cfg(test)]
mod tests {
    use blockkit_core::{
        Block, ConversationType, Element, SelectOption, SelectOptionGroup, TimezoneTable,
    };
    use chrono::{DateTime, Local, TimeZone, Utc};
    use serde_json::{json, Value};

    use super::{
        checkboxes, conversation_select, datepicker, datepicker_at, external_select,
        normalize_time, radio_select, static_select, text, timepicker_at, timezone_picker,
        Checkboxes, CheckboxesParams, ConversationSelectParams, DatepickerParams,
        ExternalSelectParams, RadioSelectParams, StaticSelectParams, TextParams,
        TimepickerParams, TimezonePickerParams,
    };

    fn json_of(block: Block) -> Value {
        serde_json::to_value(block).expect("serialize")
    }

    fn letters() -> Vec<SelectOption> {
        vec![SelectOption::new("A", "1"), SelectOption::new("B", "2")]
    }

    fn instant(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, hour, minute, 42).single().expect("valid instant")
    }

    #[test]
    fn text_input_uses_canonical_envelope() {
        assert_eq!(
            json_of(text(TextParams::new("Name", "Your name"))),
            json!({
                "type": "input",
                "element": {
                    "type": "plain_text_input",
                    "placeholder": { "type": "plain_text", "text": "Your name" },
                    "multiline": false
                },
                "label": { "type": "plain_text", "text": "Name", "emoji": true },
                "optional": false,
                "dispatch_action": false
            })
        );
    }

    #[test]
    fn text_input_dispatches_on_enter_when_asked() {
        let block = json_of(text(
            TextParams::new("Search", "Type and press enter")
                .block_id("search")
                .action_id("search.submit")
                .initial_value("rust")
                .min_length(2)
                .max_length(0)
                .multiline(true)
                .optional(true)
                .dispatch_action(true),
        ));

        assert_eq!(block["dispatch_action"], true);
        assert_eq!(block["optional"], true);
        assert_eq!(block["block_id"], "search");
        assert_eq!(
            block["element"]["dispatch_action_config"],
            json!({ "trigger_actions_on": ["on_enter_pressed"] })
        );
        assert_eq!(block["element"]["initial_value"], "rust");
        assert_eq!(block["element"]["min_length"], 2);
        assert!(block["element"].get("max_length").is_none());
        assert_eq!(block["element"]["multiline"], true);
    }

    #[test]
    fn conversation_select_field_name_follows_multi_flag() {
        let single = json_of(conversation_select(
            ConversationSelectParams::new("Channel", "Pick one").initial_conversations("C1"),
        ));
        assert_eq!(single["element"]["type"], "conversations_select");
        assert_eq!(single["element"]["initial_conversation"], "C1");
        assert!(single["element"].get("initial_conversations").is_none());
        assert_eq!(
            single["element"]["filter"],
            json!({
                "include": ["public", "private"],
                "exclude_bot_users": true,
                "exclude_external_shared_channels": true
            })
        );

        let multi = json_of(conversation_select(
            ConversationSelectParams::new("Channels", "Pick some")
                .multi(true)
                .initial_conversations(vec!["C1", "C2"])
                .filter(vec![ConversationType::Public])
                .exclude_external_shared_channels(false),
        ));
        assert_eq!(multi["element"]["type"], "multi_conversations_select");
        assert_eq!(multi["element"]["initial_conversations"], json!(["C1", "C2"]));
        assert!(multi["element"].get("initial_conversation").is_none());
        assert_eq!(multi["element"]["filter"]["exclude_external_shared_channels"], false);
    }

    #[test]
    fn static_select_resolves_single_initial_option() {
        let block = json_of(static_select(
            StaticSelectParams::new("Letter", "Choose", letters())
                .initial_options("2")
                .action_id("letter"),
        ));

        assert_eq!(block["element"]["type"], "static_select");
        assert_eq!(
            block["element"]["initial_option"],
            json!({ "text": { "type": "plain_text", "text": "B", "emoji": true }, "value": "2" })
        );
        assert!(block["element"].get("initial_options").is_none());
    }

    #[test]
    fn static_select_multi_resolves_subset_and_forwards_cap() {
        let block = json_of(static_select(
            StaticSelectParams::new("Letters", "Choose", letters())
                .multi(true)
                .initial_options(vec![json!(2), json!(1)])
                .max_selected_items(2),
        ));

        assert_eq!(block["element"]["type"], "multi_static_select");
        assert_eq!(block["element"]["max_selected_items"], 2);
        let values: Vec<&Value> = block["element"]["initial_options"]
            .as_array()
            .expect("initial options")
            .iter()
            .map(|option| &option["value"])
            .collect();
        assert_eq!(values, vec![&json!("1"), &json!("2")]);
    }

    #[test]
    fn static_select_with_groups_emits_option_groups() {
        let block = json_of(static_select(
            StaticSelectParams::new(
                "Letter",
                "Choose",
                vec![SelectOptionGroup::new("Early", letters())],
            )
            .initial_options("1"),
        ));

        assert!(block["element"].get("options").is_none());
        assert_eq!(block["element"]["option_groups"][0]["label"]["text"], "Early");
        assert_eq!(block["element"]["initial_option"]["value"], "1");
    }

    #[test]
    fn static_select_omits_unmatched_initial_option() {
        let block = json_of(static_select(
            StaticSelectParams::new("Letter", "Choose", letters()).initial_options("9"),
        ));
        assert!(block["element"].get("initial_option").is_none());
    }

    #[test]
    fn radio_select_matches_initial_value_exactly() {
        let options = vec![SelectOption::new("One", 1), SelectOption::new("Two", "2")];

        let exact = json_of(radio_select(
            RadioSelectParams::new("Pick", options.clone()).initial_option("2"),
        ));
        assert_eq!(exact["element"]["type"], "radio_buttons");
        assert_eq!(
            exact["element"]["initial_option"],
            json!({ "text": { "type": "plain_text", "text": "Two" }, "value": "2" })
        );
        // Radio options carry their caption under the platform's `text` key, never `label`.
        assert_eq!(
            exact["element"]["options"][0],
            json!({ "text": { "type": "plain_text", "text": "One" }, "value": 1 })
        );
        assert!(exact["element"]["options"][0].get("label").is_none());
        assert!(exact["element"]["initial_option"].get("label").is_none());

        // The static select family would coerce "1" to match 1; radio buttons do not.
        let coerced =
            json_of(radio_select(RadioSelectParams::new("Pick", options).initial_option("1")));
        assert!(coerced["element"].get("initial_option").is_none());
    }

    #[test]
    fn checkboxes_select_exact_initial_values_and_render_descriptions() {
        let options = vec![
            SelectOption::new("A", "1").description("first letter"),
            SelectOption::new("B", "2"),
        ];
        let result = checkboxes(
            CheckboxesParams::new(options).label("Letters").initial_options(["1"]).action_id("ltr"),
        );
        let Checkboxes::Input(block) = result else {
            panic!("checkboxes are input-wrapped by default");
        };
        let block = json_of(block);

        assert_eq!(block["label"]["text"], "Letters");
        assert_eq!(
            block["element"]["initial_options"],
            json!([{ "text": { "type": "mrkdwn", "text": "A" }, "value": "1" }])
        );
        assert_eq!(
            block["element"]["options"][0]["description"],
            json!({ "type": "mrkdwn", "text": "first letter" })
        );
        assert!(block["element"]["options"][1].get("description").is_none());
    }

    #[test]
    fn unlabeled_input_checkboxes_emit_label_without_text() {
        let Checkboxes::Input(block) = checkboxes(CheckboxesParams::new(letters())) else {
            panic!("checkboxes are input-wrapped by default");
        };
        let block = json_of(block);

        assert_eq!(block["label"], json!({ "type": "plain_text", "emoji": true }));
    }

    #[test]
    fn checkboxes_can_be_returned_bare() {
        let result = checkboxes(CheckboxesParams::new(letters()).as_input(false));
        assert!(matches!(result, Checkboxes::Element(Element::Checkboxes(_))));

        let value = serde_json::to_value(result).expect("serialize");
        assert_eq!(value["type"], "checkboxes");
        assert!(value.get("initial_options").is_none());
    }

    #[test]
    fn datepicker_keeps_explicit_date() {
        let block = json_of(datepicker(
            DatepickerParams::new("Due", "Pick a date").initial_date("2024-12-24").action_id("due"),
        ));
        assert_eq!(
            block["element"],
            json!({
                "type": "datepicker",
                "placeholder": { "type": "plain_text", "text": "Pick a date", "emoji": true },
                "action_id": "due",
                "initial_date": "2024-12-24"
            })
        );
    }

    #[test]
    fn datepicker_defaults_to_today_in_timezone() {
        let now = instant(23, 30);
        let tokyo = json_of(datepicker_at(
            DatepickerParams::new("Due", "Pick").timezone("Asia/Tokyo"),
            now,
        ));
        assert_eq!(tokyo["element"]["initial_date"], "2024-03-11");

        let local = json_of(datepicker_at(DatepickerParams::new("Due", "Pick"), now));
        assert_eq!(
            local["element"]["initial_date"],
            now.with_timezone(&Local).format("%Y-%m-%d").to_string()
        );
    }

    #[test]
    fn datepicker_without_date_or_timezone_uses_current_local_date() {
        let expected = Local::now().format("%Y-%m-%d").to_string();
        let block = json_of(datepicker(DatepickerParams::new("Due", "Pick")));
        assert_eq!(block["element"]["initial_date"], expected);
    }

    #[test]
    fn unknown_timezone_falls_back_to_local_time() {
        let now = instant(23, 30);
        let block = json_of(datepicker_at(
            DatepickerParams::new("Due", "Pick").timezone("Mars/Olympus_Mons"),
            now,
        ));
        assert_eq!(
            block["element"]["initial_date"],
            now.with_timezone(&Local).format("%Y-%m-%d").to_string()
        );
    }

    #[test]
    fn explicit_initial_time_is_reformatted_not_rounded() {
        let block = json_of(timepicker_at(
            TimepickerParams::new("At", "Pick a time").initial_time("02:07 pm"),
            instant(9, 0),
        ));
        assert_eq!(block["element"]["initial_time"], "14:07");
        assert_eq!(block["element"]["type"], "timepicker");

        assert_eq!(normalize_time("11:45 AM"), "11:45");
        assert_eq!(normalize_time("12:05 am"), "00:05");
        assert_eq!(normalize_time("18:20"), "18:20");
        assert_eq!(normalize_time("soon"), "soon");
    }

    #[test]
    fn default_time_advances_to_next_five_minute_mark() {
        let utc = |hour, minute| {
            json_of(timepicker_at(
                TimepickerParams::new("At", "Pick").timezone("UTC"),
                instant(hour, minute),
            ))
        };

        assert_eq!(utc(10, 7)["element"]["initial_time"], "10:10");
        assert_eq!(utc(10, 10)["element"]["initial_time"], "10:15");
        assert_eq!(utc(23, 58)["element"]["initial_time"], "00:00");

        let kolkata = json_of(timepicker_at(
            TimepickerParams::new("At", "Pick").timezone("Asia/Kolkata"),
            instant(10, 7),
        ));
        assert_eq!(kolkata["element"]["initial_time"], "15:40");
    }

    #[test]
    fn timezone_picker_groups_bundled_table_and_selects_initial_zone() {
        let block = json_of(timezone_picker(
            TimezonePickerParams::new("Timezone", "Pick a zone")
                .initial_timezone("Europe/Oslo")
                .action_id("tz"),
        ));

        assert_eq!(block["element"]["type"], "static_select");
        assert_eq!(block["element"]["action_id"], "tz");
        assert_eq!(block["element"]["initial_option"]["value"], "Europe/Oslo");

        let labels: Vec<&str> = block["element"]["option_groups"]
            .as_array()
            .expect("option groups")
            .iter()
            .filter_map(|group| group["label"]["text"].as_str())
            .collect();
        assert!(labels.contains(&"America-1"));
        assert!(labels.contains(&"America-2"));
        assert!(labels.contains(&"Europe"));
    }

    #[test]
    fn timezone_picker_accepts_custom_table() {
        let table = TimezoneTable::from_names(["Zone/A", "Zone/B", "Other/C"]);
        let block = json_of(timezone_picker(TimezonePickerParams::new("Tz", "Pick").table(table)));

        assert_eq!(
            block["element"]["option_groups"],
            json!([
                {
                    "label": { "type": "plain_text", "text": "Zone" },
                    "options": [
                        { "text": { "type": "plain_text", "text": "Zone/A" }, "value": "Zone/A" },
                        { "text": { "type": "plain_text", "text": "Zone/B" }, "value": "Zone/B" }
                    ]
                },
                {
                    "label": { "type": "plain_text", "text": "Other" },
                    "options": [
                        { "text": { "type": "plain_text", "text": "Other/C" }, "value": "Other/C" }
                    ]
                }
            ])
        );
        assert!(block["element"].get("initial_option").is_none());
    }

    #[test]
    fn external_select_forwards_settings_verbatim() {
        let block = json_of(external_select(
            ExternalSelectParams::new("Customer", "Search customers")
                .block_id("customer")
                .action_id("customer.lookup")
                .multi(true)
                .min_query_length(3)
                .max_selected_items(5)
                .initial_options(json!([{ "text": "Acme", "value": "c-1" }])),
        ));

        assert_eq!(
            block["element"],
            json!({
                "type": "multi_external_select",
                "placeholder": { "type": "plain_text", "text": "Search customers" },
                "min_query_length": 3,
                "initial_options": [{ "text": "Acme", "value": "c-1" }],
                "max_selected_items": 5,
                "action_id": "customer.lookup"
            })
        );
    }
}
