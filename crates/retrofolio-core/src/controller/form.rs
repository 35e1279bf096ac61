#![forbid(unsafe_code)]

//! Contact form handling: validation display, live edits, and the simulated
//! submission sequence.

use std::time::Duration;

use tracing::{debug, info, trace};

use super::PageController;
use super::task::{SubmitPhase, Task};
use crate::markup;
use crate::page::{Page, Role};
use crate::validation::{
    self, ERROR_BORDER, ERROR_VISIBLE_CLASS, Field, FormInput, FormReport, NEUTRAL_BORDER,
};

const FOCUS_LIFT: &str = "translateY(-2px)";
const FOCUS_GLOW: &str = "0 0 0 3px var(--glow)";

impl<P: Page> PageController<P> {
    fn field_value(&self, field: Field) -> String {
        self.page
            .find(Role::FieldInput(field))
            .map(|input| self.page.value(&input))
            .unwrap_or_default()
    }

    fn form_input(&self) -> FormInput {
        FormInput {
            name: self.field_value(Field::Name),
            email: self.field_value(Field::Email),
            message: self.field_value(Field::Message),
        }
    }

    /// Validate the three fields and reflect the outcome on the page: error
    /// text, `show` class and border colour per field.
    pub fn validate_form(&mut self) -> FormReport {
        let report = validation::validate(&self.form_input());
        for check in report.checks {
            let input = self.page.find(Role::FieldInput(check.field));
            let label = self.page.find(Role::FieldError(check.field));
            if let Some(label) = label.as_ref() {
                self.page.remove_class(label, ERROR_VISIBLE_CLASS);
            }
            match check.error {
                Some(error) => {
                    if let Some(label) = label.as_ref() {
                        self.page.set_text(label, error.message());
                        self.page.add_class(label, ERROR_VISIBLE_CLASS);
                    }
                    if let Some(input) = input.as_ref() {
                        self.page.set_style(input, "border-color", ERROR_BORDER);
                    }
                }
                None => {
                    if let Some(input) = input.as_ref() {
                        self.page.set_style(input, "border-color", NEUTRAL_BORDER);
                    }
                }
            }
        }
        report
    }

    /// Live edit of `field`: a shown error clears once the value is non-blank.
    pub fn on_field_input(&mut self, field: Field) {
        if !self.active {
            return;
        }
        let Some(label) = self.page.find(Role::FieldError(field)) else {
            return;
        };
        if !self.page.has_class(&label, ERROR_VISIBLE_CLASS) {
            return;
        }
        if validation::clears_error(&self.field_value(field)) {
            self.page.remove_class(&label, ERROR_VISIBLE_CLASS);
            if let Some(input) = self.page.find(Role::FieldInput(field)) {
                self.page.set_style(&input, "border-color", NEUTRAL_BORDER);
            }
        }
    }

    pub fn on_field_focus(&mut self, field: Field) {
        if !self.active {
            return;
        }
        if let Some(input) = self.page.find(Role::FieldInput(field)) {
            self.page.set_style(&input, "transform", FOCUS_LIFT);
            self.page.set_style(&input, "box-shadow", FOCUS_GLOW);
        }
    }

    /// Lower the field; the glow stays while it holds any text.
    pub fn on_field_blur(&mut self, field: Field) {
        if !self.active {
            return;
        }
        let Some(input) = self.page.find(Role::FieldInput(field)) else {
            return;
        };
        self.page.set_style(&input, "transform", "translateY(0)");
        if self.page.value(&input).is_empty() {
            self.page.set_style(&input, "box-shadow", "none");
        }
    }

    /// Handle a submit event. Returns `true` when the submission sequence
    /// started; invalid forms and submits during a running sequence return
    /// `false`.
    pub fn submit_form(&mut self, now: Duration) -> bool {
        if self.submitting {
            debug!("submit ignored, sequence already running");
            return false;
        }
        let report = self.validate_form();
        if !report.is_valid() {
            debug!("submit rejected by validation");
            return false;
        }
        self.submitting = true;
        match self.page.find(Role::SubmitButton) {
            Some(button) => {
                self.submit_label = Some(self.page.html(&button));
                self.page.set_html(&button, markup::SUBMIT_SENDING_HTML);
                self.page.set_disabled(&button, true);
            }
            None => trace!("submit button missing"),
        }
        for (phase, at) in self.submit_schedule.offsets_from(now) {
            self.timers.schedule(at, Task::Submit(phase));
        }
        info!("contact form submitted");
        true
    }

    pub(super) fn submit_phase(&mut self, phase: SubmitPhase, now: Duration) {
        let button = self.page.find(Role::SubmitButton);
        match phase {
            SubmitPhase::Sent => {
                if let Some(button) = button.as_ref() {
                    self.page.set_html(button, markup::SUBMIT_SENT_HTML);
                }
            }
            SubmitPhase::Restore => {
                let label = self.submit_label.take();
                if let Some(button) = button.as_ref() {
                    if let Some(label) = label.as_deref() {
                        self.page.set_html(button, label);
                    }
                    self.page.set_disabled(button, false);
                }
                if let Some(form) = self.page.find(Role::ContactForm) {
                    self.page.reset_form(&form);
                }
                self.submitting = false;
                self.show_success_banner(now);
            }
        }
    }
}
