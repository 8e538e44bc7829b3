// Form controller
// Owns the selected template, the values being entered, the submitted
// records and the edit cursor. Every change goes through `FormState::apply`.

mod store;
pub mod validation;

pub use store::{FormValues, SubmissionStore};
pub use validation::{validate, ValidationError};

use crate::domain::{FieldDescriptor, TemplateRegistry};
use std::fmt;
use thiserror::Error;

/// Identifies the stored record currently being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCursor {
    pub type_name: String,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectType(String),
    SetFieldValue { name: String, value: String },
    Submit,
    Edit { type_name: String, index: usize },
    Delete { type_name: String, index: usize },
    CancelEdit,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelectType(type_name) => write!(f, "SelectType({type_name:?})"),
            Self::SetFieldValue { name, .. } => write!(f, "SetFieldValue({name})"),
            Self::Submit => write!(f, "Submit"),
            Self::Edit { type_name, index } => write!(f, "Edit({type_name:?}, {index})"),
            Self::Delete { type_name, index } => write!(f, "Delete({type_name:?}, {index})"),
            Self::CancelEdit => write!(f, "CancelEdit"),
        }
    }
}

/// User-visible acknowledgement of a committed transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Submitted,
    Saved,
    Deleted,
}

impl Notice {
    pub const fn message(self) -> &'static str {
        match self {
            Self::Submitted => "Form submitted successfully!",
            Self::Saved => "Changes saved successfully!",
            Self::Deleted => "Entry deleted successfully!",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("no {type_name} entry at position {index}")]
    NoSuchRecord { type_name: String, index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: FormState,
    pub notice: Option<Notice>,
}

impl Transition {
    const fn quiet(state: FormState) -> Self {
        Self {
            state,
            notice: None,
        }
    }

    const fn with_notice(state: FormState, notice: Notice) -> Self {
        Self {
            state,
            notice: Some(notice),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub type_name: String,
    pub fields: Vec<FieldDescriptor>,
    pub values: FormValues,
    pub store: SubmissionStore,
    pub cursor: Option<EditCursor>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn is_editing(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map_or("", String::as_str)
    }

    /// Computes the state that follows `action`. Rejected actions leave
    /// `self` untouched.
    pub fn apply(
        &self,
        registry: &TemplateRegistry,
        action: Action,
    ) -> Result<Transition, FormError> {
        let mut next = self.clone();

        match action {
            Action::SelectType(type_name) => {
                next.fields = registry.fields_for(&type_name).to_vec();
                next.type_name = type_name;
                next.values.clear();
                next.cursor = None;
                Ok(Transition::quiet(next))
            }
            Action::SetFieldValue { name, value } => {
                next.values.insert(name, value);
                Ok(Transition::quiet(next))
            }
            Action::Submit => {
                let values = std::mem::take(&mut next.values);
                if let Some(cursor) = next.cursor.take() {
                    if !next.store.replace(&cursor.type_name, cursor.index, values) {
                        return Err(FormError::NoSuchRecord {
                            type_name: cursor.type_name,
                            index: cursor.index,
                        });
                    }
                    return Ok(Transition::with_notice(next, Notice::Saved));
                }

                if next.type_name.is_empty() {
                    return Ok(Transition::quiet(next));
                }

                next.store.push(&next.type_name, values);
                Ok(Transition::with_notice(next, Notice::Submitted))
            }
            Action::Edit { type_name, index } => {
                let record = next
                    .store
                    .get(&type_name, index)
                    .cloned()
                    .ok_or_else(|| FormError::NoSuchRecord {
                        type_name: type_name.clone(),
                        index,
                    })?;

                next.fields = registry.fields_for(&type_name).to_vec();
                next.values = record;
                next.cursor = Some(EditCursor {
                    type_name: type_name.clone(),
                    index,
                });
                next.type_name = type_name;
                Ok(Transition::quiet(next))
            }
            Action::Delete { type_name, index } => {
                if next.store.remove(&type_name, index).is_none() {
                    return Err(FormError::NoSuchRecord { type_name, index });
                }

                match next.cursor.take() {
                    Some(cursor) if cursor.type_name == type_name && cursor.index == index => {
                        next.values.clear();
                    }
                    Some(mut cursor) => {
                        if cursor.type_name == type_name && cursor.index > index {
                            cursor.index -= 1;
                        }
                        next.cursor = Some(cursor);
                    }
                    None => {}
                }

                Ok(Transition::with_notice(next, Notice::Deleted))
            }
            Action::CancelEdit => {
                if next.cursor.take().is_some() {
                    next.values.clear();
                }
                Ok(Transition::quiet(next))
            }
        }
    }
}

/// Owns the template registry and the current form state.
#[derive(Debug, Clone)]
pub struct FormController {
    registry: TemplateRegistry,
    state: FormState,
}

impl FormController {
    pub fn new(registry: TemplateRegistry) -> Self {
        Self {
            registry,
            state: FormState::new(),
        }
    }

    pub const fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    pub const fn state(&self) -> &FormState {
        &self.state
    }

    /// Applies `action` and commits the resulting state.
    pub fn dispatch(&mut self, action: Action) -> Result<Option<Notice>, FormError> {
        tracing::debug!(%action, "dispatching form action");
        let transition = self.state.apply(&self.registry, action)?;
        self.state = transition.state;
        if let Some(notice) = transition.notice {
            tracing::info!(notice = notice.message(), "form action committed");
        }
        Ok(transition.notice)
    }

    pub fn select_type(&mut self, type_name: &str) {
        self.dispatch_logged(Action::SelectType(type_name.to_string()));
    }

    pub fn set_field_value(&mut self, name: &str, value: &str) {
        self.dispatch_logged(Action::SetFieldValue {
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    pub fn submit(&mut self) -> Result<Option<Notice>, FormError> {
        self.dispatch(Action::Submit)
    }

    pub fn edit(&mut self, type_name: &str, index: usize) -> Result<(), FormError> {
        self.dispatch(Action::Edit {
            type_name: type_name.to_string(),
            index,
        })
        .map(|_| ())
    }

    pub fn delete(&mut self, type_name: &str, index: usize) -> Result<Option<Notice>, FormError> {
        self.dispatch(Action::Delete {
            type_name: type_name.to_string(),
            index,
        })
    }

    pub fn cancel_edit(&mut self) {
        self.dispatch_logged(Action::CancelEdit);
    }

    /// Dispatches an action that has no rejection case, logging one if it
    /// ever shows up.
    fn dispatch_logged(&mut self, action: Action) {
        if let Err(e) = self.dispatch(action) {
            tracing::warn!(error = %e, "form action rejected");
        }
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(TemplateRegistry::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER: &str = "User Information";
    const ADDRESS: &str = "Address Information";

    fn record(pairs: &[(&str, &str)]) -> FormValues {
        pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect()
    }

    fn submit_user(controller: &mut FormController, first: &str, last: &str) {
        controller.select_type(USER);
        controller.set_field_value("firstName", first);
        controller.set_field_value("lastName", last);
        assert_eq!(controller.submit(), Ok(Some(Notice::Submitted)));
    }

    fn controller_with_three_users() -> FormController {
        let mut controller = FormController::default();
        submit_user(&mut controller, "Ada", "Lovelace");
        submit_user(&mut controller, "Grace", "Hopper");
        submit_user(&mut controller, "Alan", "Turing");
        controller
    }

    #[test]
    fn initial_state_is_empty() {
        let controller = FormController::default();
        let state = controller.state();
        assert!(state.type_name.is_empty());
        assert!(state.fields.is_empty());
        assert!(state.values.is_empty());
        assert!(state.store.is_empty());
        assert!(!state.is_editing());
    }

    #[test]
    fn unknown_type_yields_empty_fields_and_values() {
        let mut controller = FormController::default();
        controller.select_type(USER);
        controller.set_field_value("firstName", "Ada");

        controller.select_type("Loyalty Programme");
        assert_eq!(controller.state().type_name, "Loyalty Programme");
        assert!(controller.state().fields.is_empty());
        assert!(controller.state().values.is_empty());
    }

    #[test]
    fn select_type_clears_values_and_edit_cursor() {
        let mut controller = controller_with_three_users();
        assert_eq!(controller.edit(USER, 1), Ok(()));
        assert!(controller.state().is_editing());

        controller.select_type(ADDRESS);
        assert!(!controller.state().is_editing());
        assert!(controller.state().values.is_empty());
        assert_eq!(controller.state().fields.len(), 4);
    }

    #[test]
    fn set_field_value_merges_without_touching_other_keys() {
        let mut controller = FormController::default();
        controller.select_type(USER);
        controller.set_field_value("firstName", "Ada");
        controller.set_field_value("age", "36");
        controller.set_field_value("firstName", "Augusta");

        assert_eq!(
            controller.state().values,
            record(&[("firstName", "Augusta"), ("age", "36")])
        );
    }

    #[test]
    fn submit_appends_exactly_one_record_equal_to_values() {
        let mut controller = controller_with_three_users();
        controller.set_field_value("firstName", "Edsger");
        let before = controller.state().values.clone();
        let len_before = controller.state().store.len(USER);

        assert_eq!(controller.submit(), Ok(Some(Notice::Submitted)));

        let store = &controller.state().store;
        assert_eq!(store.len(USER), len_before + 1);
        assert_eq!(store.get(USER, len_before), Some(&before));
        assert!(controller.state().values.is_empty());
    }

    #[test]
    fn submit_without_type_is_a_no_op() {
        let mut controller = FormController::default();
        controller.set_field_value("firstName", "Ada");

        assert_eq!(controller.submit(), Ok(None));
        assert!(controller.state().store.is_empty());
        assert!(controller.state().values.is_empty());
    }

    #[test]
    fn submit_while_editing_replaces_in_place() {
        let mut controller = controller_with_three_users();
        assert_eq!(controller.edit(USER, 1), Ok(()));
        controller.set_field_value("lastName", "Brewster");

        assert_eq!(controller.submit(), Ok(Some(Notice::Saved)));

        let store = &controller.state().store;
        assert_eq!(store.len(USER), 3);
        assert_eq!(
            store.get(USER, 1),
            Some(&record(&[("firstName", "Grace"), ("lastName", "Brewster")]))
        );
        assert!(!controller.state().is_editing());
        assert!(controller.state().values.is_empty());
    }

    #[test]
    fn edit_then_submit_restores_the_original_record() {
        let mut controller = controller_with_three_users();
        let original = controller.state().store.clone();

        assert_eq!(controller.edit(USER, 2), Ok(()));
        assert_eq!(controller.submit(), Ok(Some(Notice::Saved)));

        assert_eq!(controller.state().store, original);
    }

    #[test]
    fn edit_switches_type_and_loads_a_copy() {
        let mut controller = controller_with_three_users();
        controller.select_type(ADDRESS);

        assert_eq!(controller.edit(USER, 0), Ok(()));
        let state = controller.state();
        assert_eq!(state.type_name, USER);
        assert_eq!(state.fields.len(), 3);
        assert_eq!(state.value("firstName"), "Ada");
        assert_eq!(
            state.cursor,
            Some(EditCursor {
                type_name: USER.to_string(),
                index: 0
            })
        );
    }

    #[test]
    fn edit_with_stale_index_is_rejected() {
        let mut controller = controller_with_three_users();
        controller.set_field_value("firstName", "Draft");
        let before = controller.state().clone();

        assert_eq!(
            controller.edit(USER, 3),
            Err(FormError::NoSuchRecord {
                type_name: USER.to_string(),
                index: 3
            })
        );
        assert!(controller.edit(ADDRESS, 0).is_err());
        assert_eq!(controller.state(), &before);
    }

    #[test]
    fn delete_shifts_later_records_down() {
        let mut controller = controller_with_three_users();
        let before: Vec<_> = controller.state().store.records(USER).to_vec();

        assert_eq!(controller.delete(USER, 1), Ok(Some(Notice::Deleted)));

        let after = controller.state().store.records(USER);
        assert_eq!(after.len(), before.len() - 1);
        assert_eq!(after[0], before[0]);
        assert_eq!(after[1], before[2]);
    }

    #[test]
    fn delete_out_of_range_is_rejected() {
        let mut controller = controller_with_three_users();
        assert!(controller.delete(USER, 7).is_err());
        assert!(controller.delete(ADDRESS, 0).is_err());
        assert_eq!(controller.state().store.len(USER), 3);
    }

    #[test]
    fn deleting_the_record_under_edit_cancels_edit_mode() {
        let mut controller = controller_with_three_users();
        assert_eq!(controller.edit(USER, 1), Ok(()));

        assert_eq!(controller.delete(USER, 1), Ok(Some(Notice::Deleted)));

        let state = controller.state();
        assert!(!state.is_editing());
        assert!(state.values.is_empty());
        assert_eq!(state.type_name, USER);
    }

    #[test]
    fn deleting_an_earlier_record_keeps_the_cursor_on_the_same_record() {
        let mut controller = controller_with_three_users();
        assert_eq!(controller.edit(USER, 2), Ok(()));

        assert_eq!(controller.delete(USER, 0), Ok(Some(Notice::Deleted)));
        assert_eq!(
            controller.state().cursor.as_ref().map(|cursor| cursor.index),
            Some(1)
        );

        assert_eq!(controller.submit(), Ok(Some(Notice::Saved)));
        assert_eq!(
            controller.state().store.get(USER, 1),
            Some(&record(&[("firstName", "Alan"), ("lastName", "Turing")]))
        );
    }

    #[test]
    fn deleting_a_later_record_leaves_the_cursor_alone() {
        let mut controller = controller_with_three_users();
        assert_eq!(controller.edit(USER, 0), Ok(()));

        assert_eq!(controller.delete(USER, 2), Ok(Some(Notice::Deleted)));
        assert_eq!(
            controller.state().cursor.as_ref().map(|cursor| cursor.index),
            Some(0)
        );
        assert_eq!(controller.state().value("firstName"), "Ada");
    }

    #[test]
    fn cancel_edit_keeps_the_store() {
        let mut controller = controller_with_three_users();
        let store = controller.state().store.clone();
        assert_eq!(controller.edit(USER, 0), Ok(()));
        controller.set_field_value("firstName", "Changed");

        controller.cancel_edit();

        assert!(!controller.state().is_editing());
        assert!(controller.state().values.is_empty());
        assert_eq!(controller.state().store, store);
    }

    #[test]
    fn cancel_edit_without_cursor_keeps_draft_values() {
        let mut controller = FormController::default();
        controller.select_type(USER);
        controller.set_field_value("firstName", "Ada");

        controller.cancel_edit();
        assert_eq!(controller.state().value("firstName"), "Ada");
    }

    #[test]
    fn select_set_and_cancel_are_never_rejected() {
        let registry = TemplateRegistry::builtin();
        let mut state = FormState::new();
        state.cursor = Some(EditCursor {
            type_name: USER.to_string(),
            index: 7,
        });

        let actions = [
            Action::SelectType("Loyalty Programme".to_string()),
            Action::SelectType(String::new()),
            Action::SetFieldValue {
                name: "notAField".to_string(),
                value: "x".to_string(),
            },
            Action::CancelEdit,
        ];
        for action in actions {
            let label = action.to_string();
            assert!(state.apply(&registry, action).is_ok(), "{label} was rejected");
        }
    }

    #[test]
    fn apply_is_pure() {
        let registry = TemplateRegistry::builtin();
        let state = FormState::new();

        let transition = state.apply(&registry, Action::SelectType(USER.to_string()));

        assert_eq!(state, FormState::new());
        assert_eq!(
            transition.map(|transition| transition.state.fields.len()),
            Ok(3)
        );
    }
}
