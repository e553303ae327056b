//! Block Kit builders - semantic parameters in, platform JSON out
//!
//! Each namespace mirrors one family of payload pieces:
//! - **Accessory** (`accessory`) - elements attached to a section block
//! - **Blocks** (`blocks`) - actions, context, divider, fields, header, image, text sections
//! - **Button** (`button`) - primary, default and danger buttons
//! - **Input** (`input`) - form elements wrapped in `input` blocks
//! - **Select** (`select`) - standalone user and static selects
//! - **Attachment** (`attachment`) - legacy message attachments
//! - **View** (`view`) - modal and app-home surfaces
//!
//! Builders are pure functions over a parameter struct. The returned records
//! serialize with `serde_json` to exactly the keys the caller supplied;
//! optional keys never appear as `null`.
//!
//! ```
//! use blockkit_slack::{blocks, button, view};
//!
//! let modal = view::modal(
//!     view::ModalParams::new(
//!         "Approve quote",
//!         vec![
//!             blocks::markdown(blocks::MarkdownParams::new("*Q-1* needs review")),
//!             blocks::actions(blocks::ActionsParams::new(vec![button::primary(
//!                 button::ButtonParams::new("Approve", "Q-1").action_id("approve"),
//!             )])),
//!         ],
//!         "quote.approve.v1",
//!     )
//!     .submit_text("Done"),
//! );
//! let payload = serde_json::to_value(&modal).expect("views serialize");
//! assert_eq!(payload["type"], "modal");
//! ```

pub mod accessory;
pub mod attachment;
pub mod blocks;
pub mod button;
pub mod input;
pub mod select;
pub mod view;

pub use accessory::Accessory;
pub use blockkit_core::{
    Block, ButtonStyle, ConfirmDialog, ConversationType, Element, InitialOptions,
    LegacyAttachment, OneOrMany, OptionSet, SelectOption, SelectOptionGroup, TextObject,
    TimezoneTable, View,
};
pub use input::Checkboxes;
