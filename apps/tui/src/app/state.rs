use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use dynamic_form_tui::config::AppConfig;
use dynamic_form_tui::form::{validate, Action, FormController, FormState, Notice};
use std::time::{Duration, Instant};

/// Which part of the screen receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    TypeSelector,
    Field(usize),
    SubmitButton,
    Submissions,
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub controller: FormController,
    pub focus: Focus,
    pub status_message: String,
    pub notice: Option<Notice>,
    pub notice_until: Option<Instant>,
    pub notice_duration: Duration,
    pub show_help: bool,
    pub type_filter: String,
    pub selected_row: usize,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let mut app = Self {
            running: true,
            controller: FormController::default(),
            focus: Focus::TypeSelector,
            status_message: String::new(),
            notice: None,
            notice_until: None,
            notice_duration: config.notice_duration,
            show_help: false,
            type_filter: String::new(),
            selected_row: 0,
        };

        if let Some(type_name) = &config.initial_type {
            if app.controller.registry().lookup(type_name).is_none() {
                tracing::warn!(%type_name, "initial form type is not a known template");
            }
            app.select_type(type_name);
        }

        app
    }

    pub const fn form(&self) -> &FormState {
        self.controller.state()
    }

    /// Expires the transient notice once its time is up.
    pub fn update(&mut self) {
        if let Some(until) = self.notice_until {
            if until <= Instant::now() {
                self.notice_until = None;
                self.notice = None;
            }
        }
    }

    pub fn notice_visible(&self) -> bool {
        self.notice.is_some()
            && self
                .notice_until
                .is_some_and(|until| until > Instant::now())
    }

    /// `""` (nothing selected) followed by every template name.
    pub fn type_options(&self) -> Vec<String> {
        std::iter::once(String::new())
            .chain(self.controller.registry().type_names().map(ToString::to_string))
            .collect()
    }

    pub fn focus_order(&self) -> Vec<Focus> {
        let form = self.form();
        let mut order = vec![Focus::TypeSelector];
        order.extend((0..form.fields.len()).map(Focus::Field));
        if !form.fields.is_empty() {
            order.push(Focus::SubmitButton);
        }
        if !form.store.is_empty() {
            order.push(Focus::Submissions);
        }
        order
    }

    pub fn focus_next(&mut self) {
        let order = self.focus_order();
        let current = order.iter().position(|focus| *focus == self.focus).unwrap_or(0);
        self.focus = order[wrap_increment(current, order.len())];
        self.drop_filter_off_selector();
    }

    pub fn focus_prev(&mut self) {
        let order = self.focus_order();
        let current = order.iter().position(|focus| *focus == self.focus).unwrap_or(0);
        self.focus = order[wrap_decrement(current, order.len())];
        self.drop_filter_off_selector();
    }

    /// Commits `action`, turning notices into the popup and rejections into
    /// a status message.
    pub fn dispatch(&mut self, action: Action) -> bool {
        match self.controller.dispatch(action) {
            Ok(notice) => {
                if let Some(notice) = notice {
                    self.show_notice(notice);
                }
                self.ensure_valid_focus();
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "form action rejected");
                self.status_message = e.to_string();
                false
            }
        }
    }

    pub fn select_type(&mut self, type_name: &str) {
        self.type_filter.clear();
        self.select_filtered_type(type_name);
    }

    /// Selects `type_name` found by the selector search, keeping the search text.
    pub fn select_filtered_type(&mut self, type_name: &str) {
        self.dispatch(Action::SelectType(type_name.to_string()));
        self.status_message.clear();
    }

    pub fn set_field_value(&mut self, name: &str, value: String) {
        self.dispatch(Action::SetFieldValue {
            name: name.to_string(),
            value,
        });
    }

    /// Runs the input checks, then submits or saves the form.
    pub fn submit_form(&mut self) {
        let form = self.form();
        if form.type_name.is_empty() && !form.is_editing() {
            self.status_message = "Select a form type first.".to_string();
            return;
        }

        if let Err(e) = validate(&form.fields, &form.values) {
            let position = form
                .fields
                .iter()
                .position(|field| field.name == e.field());
            tracing::debug!(field = e.field(), "submission blocked by input check");
            self.status_message = e.to_string();
            if let Some(index) = position {
                self.focus = Focus::Field(index);
            }
            return;
        }

        if self.dispatch(Action::Submit) {
            self.status_message.clear();
            if !self.form().fields.is_empty() {
                self.focus = Focus::Field(0);
            }
        }
    }

    pub fn selected_record(&self) -> Option<(String, usize)> {
        self.form().store.rows().get(self.selected_row).cloned()
    }

    pub fn edit_selected(&mut self) {
        let Some((type_name, index)) = self.selected_record() else {
            return;
        };

        if self.dispatch(Action::Edit { type_name, index }) {
            self.status_message.clear();
            if !self.form().fields.is_empty() {
                self.focus = Focus::Field(0);
            }
        }
    }

    pub fn delete_selected(&mut self) {
        let Some((type_name, index)) = self.selected_record() else {
            return;
        };

        if self.dispatch(Action::Delete { type_name, index }) {
            self.status_message.clear();
        }
    }

    /// Leaves edit mode, returns to the type selector, or quits, in that
    /// order.
    pub fn back(&mut self) {
        if self.form().is_editing() {
            self.dispatch(Action::CancelEdit);
            self.status_message = "Edit cancelled".to_string();
        } else if self.focus == Focus::TypeSelector {
            self.running = false;
        } else {
            self.focus = Focus::TypeSelector;
        }
    }

    pub fn move_selection_up(&mut self) -> bool {
        if self.selected_row == 0 {
            return false;
        }
        self.selected_row -= 1;
        true
    }

    pub fn move_selection_down(&mut self) {
        let rows = self.form().store.total();
        if rows > 0 && self.selected_row < rows - 1 {
            self.selected_row += 1;
        }
    }

    fn show_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.notice_until = Some(Instant::now() + self.notice_duration);
    }

    /// The selector search only lives while the selector has focus.
    pub fn drop_filter_off_selector(&mut self) {
        if self.focus != Focus::TypeSelector {
            self.type_filter.clear();
        }
    }

    fn ensure_valid_focus(&mut self) {
        let rows = self.form().store.total();
        self.selected_row = self.selected_row.min(rows.saturating_sub(1));

        if !self.focus_order().contains(&self.focus) {
            self.focus = Focus::TypeSelector;
        }
    }
}
