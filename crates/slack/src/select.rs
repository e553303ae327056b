//! Standalone selects for actions blocks and accessories, outside any input wrapper.

use blockkit_core::options::{render_option_set, resolve_initial_options};
use blockkit_core::{
    confirm_for, supplied, ConfirmDialog, Element, InitialOptions, InitialSelection, OptionSet,
    StaticSelectElement, TextObject, UsersSelectElement,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserSelectParams {
    placeholder: String,
    action_id: Option<String>,
    initial_user: Option<String>,
    focus_on_load: bool,
    dialog: Option<ConfirmDialog>,
}

impl Default for UserSelectParams {
    fn default() -> Self {
        Self::new()
    }
}

impl UserSelectParams {
    pub fn new() -> Self {
        Self {
            placeholder: "Select an user".to_string(),
            action_id: None,
            initial_user: None,
            focus_on_load: false,
            dialog: None,
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = supplied(action_id);
        self
    }

    pub fn initial_user(mut self, user_id: impl Into<String>) -> Self {
        self.initial_user = supplied(user_id);
        self
    }

    pub fn focus_on_load(mut self, focus_on_load: bool) -> Self {
        self.focus_on_load = focus_on_load;
        self
    }

    pub fn dialog(mut self, dialog: ConfirmDialog) -> Self {
        self.dialog = Some(dialog);
        self
    }
}

pub fn user_select(params: UserSelectParams) -> Element {
    Element::UsersSelect(UsersSelectElement {
        placeholder: TextObject::plain(params.placeholder),
        action_id: params.action_id,
        initial_user: params.initial_user,
        focus_on_load: params.focus_on_load.then_some(true),
        confirm: confirm_for(params.dialog.as_ref()),
    })
}

#[derive(Clone, Debug, PartialEq)]
pub struct StaticSelectParams {
    placeholder: String,
    action_id: Option<String>,
    options: OptionSet,
    initial_option: Option<String>,
    focus_on_load: bool,
    dialog: Option<ConfirmDialog>,
}

impl StaticSelectParams {
    pub fn new(options: impl Into<OptionSet>) -> Self {
        Self {
            placeholder: "Select an user".to_string(),
            action_id: None,
            options: options.into(),
            initial_option: None,
            focus_on_load: false,
            dialog: None,
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = supplied(action_id);
        self
    }

    /// Matched against option values by text form, across groups when grouped.
    pub fn initial_option(mut self, value: impl Into<String>) -> Self {
        self.initial_option = supplied(value);
        self
    }

    pub fn focus_on_load(mut self, focus_on_load: bool) -> Self {
        self.focus_on_load = focus_on_load;
        self
    }

    pub fn dialog(mut self, dialog: ConfirmDialog) -> Self {
        self.dialog = Some(dialog);
        self
    }
}

pub fn static_select(params: StaticSelectParams) -> Element {
    let options = render_option_set(&params.options);
    let initial = params.initial_option.map(InitialOptions::Single);

    let mut select = StaticSelectElement::new(TextObject::plain(params.placeholder), options);
    if let Some(InitialSelection::One(option)) =
        resolve_initial_options(&select.options, initial.as_ref(), false)
    {
        select.initial_option = Some(option);
    }
    select.action_id = params.action_id;
    select.focus_on_load = params.focus_on_load.then_some(true);
    select.confirm = confirm_for(params.dialog.as_ref());

    Element::StaticSelect(select)
}
