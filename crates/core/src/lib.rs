//! Block Kit model - typed payload records for the Block Kit builders
//!
//! This crate holds everything the builder namespaces share:
//! - **Domain** (`domain`) - text objects, options, elements, blocks, views, legacy attachments
//! - **Options** (`options`) - option rendering and initial-selection resolution
//! - **Timezones** (`timezones`) - reference timezone table and option-group bucketing
//! - **Config** (`config`) - TOML/env configuration for logging and the timezone table
//!
//! Every record serializes with `serde` to the platform's JSON shape. Optional
//! fields are `Option`s skipped when unset, so an absent key always means
//! "not supplied".

pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod options;
pub mod timezones;

pub use config::{BuilderConfig, ConfigError, LoadOptions, LogFormat, LoggingConfig};
pub use domain::attachment::{AttachmentField, LegacyAttachment};
pub use domain::block::{
    ActionsBlock, Block, ContextBlock, DividerBlock, HeaderBlock, ImageBlock, InputBlock,
    SectionBlock,
};
pub use domain::confirm::{confirm_for, Confirm, ConfirmDialog};
pub use domain::element::{
    ButtonElement, ButtonStyle, CheckboxesElement, ConversationFilter, ConversationType,
    ConversationsSelectElement, DatepickerElement, DispatchActionConfig, Element,
    ExternalSelectElement, ImageElement, OverflowElement, PlainTextInputElement,
    RadioButtonsElement, StaticSelectElement, TimepickerElement, TriggerAction,
    UsersSelectElement,
};
pub use domain::option::{
    InitialOptions, InitialSelection, OptionGroupObject, OptionList, OptionObject, OptionSet,
    SelectOption, SelectOptionGroup,
};
pub use domain::text::{supplied, value_text, OneOrMany, TextObject};
pub use domain::view::{HomeView, ModalView, View};
pub use errors::{LoggingError, TimezoneTableError};
pub use logging::init_logging;
pub use timezones::{group_timezones, TimezoneRecord, TimezoneTable, MAX_OPTION_GROUP_SIZE};
