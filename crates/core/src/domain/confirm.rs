use serde::Serialize;

use crate::domain::text::TextObject;

/// Caller-facing description of a confirmation prompt.
///
/// A dialog with every field unset is treated the same as no dialog at all.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfirmDialog {
    pub title: Option<String>,
    pub description: Option<String>,
    pub confirm_text: Option<String>,
    pub cancel_text: Option<String>,
}

impl ConfirmDialog {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        confirm_text: impl Into<String>,
        cancel_text: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
            confirm_text: Some(confirm_text.into()),
            cancel_text: Some(cancel_text.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.confirm_text.is_none()
            && self.cancel_text.is_none()
    }

    pub fn render(&self) -> Confirm {
        let plain = |value: &Option<String>| TextObject::plain(value.clone().unwrap_or_default());
        Confirm {
            title: plain(&self.title),
            text: plain(&self.description),
            confirm: plain(&self.confirm_text),
            deny: plain(&self.cancel_text),
        }
    }
}

/// Wire form of a confirmation prompt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Confirm {
    pub title: TextObject,
    pub text: TextObject,
    pub confirm: TextObject,
    pub deny: TextObject,
}

/// Renders the dialog only when one was supplied with at least one field set.
pub fn confirm_for(dialog: Option<&ConfirmDialog>) -> Option<Confirm> {
    dialog.filter(|dialog| !dialog.is_empty()).map(ConfirmDialog::render)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{confirm_for, ConfirmDialog};

    #[test]
    fn dialog_renders_as_four_plain_text_objects() {
        let dialog = ConfirmDialog::new("Delete?", "This cannot be undone.", "Delete", "Keep");
        let confirm = confirm_for(Some(&dialog)).expect("non-empty dialog renders");

        assert_eq!(
            serde_json::to_value(confirm).expect("serialize"),
            json!({
                "title": { "type": "plain_text", "text": "Delete?" },
                "text": { "type": "plain_text", "text": "This cannot be undone." },
                "confirm": { "type": "plain_text", "text": "Delete" },
                "deny": { "type": "plain_text", "text": "Keep" }
            })
        );
    }

    #[test]
    fn empty_dialog_is_equivalent_to_no_dialog() {
        assert!(ConfirmDialog::default().is_empty());
        assert_eq!(confirm_for(Some(&ConfirmDialog::default())), None);
        assert_eq!(confirm_for(None), None);
    }

    #[test]
    fn partially_filled_dialog_still_renders() {
        let dialog = ConfirmDialog { title: Some("Sure?".to_owned()), ..ConfirmDialog::default() };
        let confirm = confirm_for(Some(&dialog)).expect("one field is enough");
        assert_eq!(confirm.title.text(), "Sure?");
        assert_eq!(confirm.deny.text(), "");
        assert_eq!(
            serde_json::to_value(&confirm).expect("serialize")["deny"],
            json!({ "type": "plain_text" })
        );
    }
}
