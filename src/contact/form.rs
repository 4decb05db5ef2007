use std::rc::Rc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use yew::Reducible;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("email pattern compiles")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

/// Raw values as typed into the form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

/// A form that passed validation, ready to hand to a submitter.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub subject: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.subject.is_none() && self.message.is_none()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Subject => self.subject,
            Field::Message => self.message,
            Field::Phone => None,
        }
    }
}

fn required(value: &str, message: &'static str) -> Option<&'static str> {
    value.is_empty().then_some(message)
}

pub fn email_error(email: &str) -> Option<&'static str> {
    if email.is_empty() {
        Some("Email is required")
    } else if !EMAIL_PATTERN.is_match(email) {
        Some("Invalid email address")
    } else {
        None
    }
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn errors(&self) -> FormErrors {
        FormErrors {
            name: required(&self.name, "Name is required"),
            email: email_error(&self.email),
            subject: required(&self.subject, "Subject is required"),
            message: required(&self.message, "Message is required"),
        }
    }

    pub fn validate(&self) -> Result<ContactSubmission, FormErrors> {
        let errors = self.errors();
        if !errors.is_empty() {
            return Err(errors);
        }
        let phone = self.phone.trim();
        Ok(ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            subject: self.subject.clone(),
            message: self.message.clone(),
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success,
    Error,
}

/// Everything the contact form renders from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactState {
    pub form: ContactForm,
    pub errors: FormErrors,
    /// Set after the first submit attempt. From then on errors track edits live.
    pub attempted: bool,
    pub submitting: bool,
    pub status: SubmitStatus,
}

pub enum ContactAction {
    Edit(Field, String),
    /// Validation failed on submit.
    Rejected(FormErrors),
    Started,
    Succeeded,
    Failed,
    /// The success banner timed out.
    ClearStatus,
}

impl Reducible for ContactState {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::Edit(field, value) => {
                next.form.set(field, value);
                if next.attempted {
                    next.errors = next.form.errors();
                }
            }
            ContactAction::Rejected(errors) => {
                next.attempted = true;
                next.errors = errors;
            }
            ContactAction::Started => {
                next.submitting = true;
                next.errors = FormErrors::default();
            }
            ContactAction::Succeeded => {
                next.submitting = false;
                next.status = SubmitStatus::Success;
                next.form = ContactForm::default();
                next.attempted = false;
            }
            ContactAction::Failed => {
                next.submitting = false;
                next.status = SubmitStatus::Error;
            }
            ContactAction::ClearStatus => {
                if next.status == SubmitStatus::Success {
                    next.status = SubmitStatus::Idle;
                }
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Asha Patel".into(),
            email: "asha@example.com".into(),
            phone: String::new(),
            subject: "Project Inquiry".into(),
            message: "We need a new storefront.".into(),
        }
    }

    fn apply(state: ContactState, action: ContactAction) -> ContactState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn complete_form_validates() {
        let submission = filled().validate().unwrap();
        assert_eq!(submission.name, "Asha Patel");
        assert_eq!(submission.phone, None);
    }

    #[test]
    fn phone_is_optional_but_kept_when_given() {
        let mut form = filled();
        form.phone = " +91 12345 45676 ".into();
        assert_eq!(form.validate().unwrap().phone.as_deref(), Some("+91 12345 45676"));
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut form = filled();
        form.name.clear();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.name, Some("Name is required"));
        assert_eq!(errors.get(Field::Email), None);
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = ContactForm::default().errors();
        assert_eq!(errors.name, Some("Name is required"));
        assert_eq!(errors.email, Some("Email is required"));
        assert_eq!(errors.subject, Some("Subject is required"));
        assert_eq!(errors.message, Some("Message is required"));
        assert_eq!(errors.get(Field::Phone), None);
    }

    #[test]
    fn email_pattern() {
        assert_eq!(email_error("john@example.com"), None);
        assert_eq!(email_error("John.Doe+tag@Mail.Example.IO"), None);
        assert_eq!(email_error("john@example"), Some("Invalid email address"));
        assert_eq!(email_error("john@example.c"), Some("Invalid email address"));
        assert_eq!(email_error("not an email"), Some("Invalid email address"));
        assert_eq!(email_error(""), Some("Email is required"));
    }

    #[test]
    fn errors_only_update_live_after_first_attempt() {
        let state = apply(ContactState::default(), ContactAction::Edit(Field::Email, "bad".into()));
        assert!(state.errors.is_empty());

        let rejected = apply(state, ContactAction::Rejected(ContactForm::default().errors()));
        assert!(rejected.attempted);
        let fixed = apply(rejected, ContactAction::Edit(Field::Name, "Asha".into()));
        assert_eq!(fixed.errors.name, None);
        assert_eq!(fixed.errors.email, Some("Invalid email address"));
    }

    #[test]
    fn success_clears_fields_then_status_times_out() {
        let state = ContactState { form: filled(), ..Default::default() };
        let sending = apply(state, ContactAction::Started);
        assert!(sending.submitting);

        let done = apply(sending, ContactAction::Succeeded);
        assert!(!done.submitting);
        assert_eq!(done.status, SubmitStatus::Success);
        assert_eq!(done.form, ContactForm::default());

        let cleared = apply(done, ContactAction::ClearStatus);
        assert_eq!(cleared.status, SubmitStatus::Idle);
    }

    #[test]
    fn failure_keeps_fields_for_resubmit() {
        let state = ContactState { form: filled(), ..Default::default() };
        let failed = apply(apply(state, ContactAction::Started), ContactAction::Failed);
        assert_eq!(failed.status, SubmitStatus::Error);
        assert_eq!(failed.form, filled());

        // The success timer never clears an error banner.
        assert_eq!(apply(failed, ContactAction::ClearStatus).status, SubmitStatus::Error);
    }
}
