use std::future::Future;
use std::rc::Rc;

use log::info;
use serde::Serialize;
use yew::prelude::*;

use super::relay::SubmitError;
use super::whatsapp;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    /// `name`/`id` attribute of the input, which is also the relay's JSON key.
    pub fn input_name(self) -> &'static str {
        match self {
            Field::Name => "nombre",
            Field::Email => "email",
            Field::Phone => "numero",
            Field::Message => "mensaje",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactFields {
    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Message => self.message = value,
        }
    }
}

/// JSON body sent to the form relay.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactPayload {
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: String,
    #[serde(rename = "numero")]
    pub phone: String,
    #[serde(rename = "mensaje")]
    pub message: String,
}

impl From<&ContactFields> for ContactPayload {
    fn from(fields: &ContactFields) -> Self {
        Self {
            name: fields.name.clone(),
            email: fields.email.clone(),
            phone: fields.phone.clone(),
            message: fields.message.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
    Error,
}

impl SubmissionStatus {
    pub fn is_submitting(self) -> bool {
        self == SubmissionStatus::Submitting
    }

    pub fn is_submitted(self) -> bool {
        self == SubmissionStatus::Submitted
    }

    pub fn is_error(self) -> bool {
        self == SubmissionStatus::Error
    }
}

pub enum ContactAction {
    Edit(Field, String),
    SubmitStarted,
    Settled(Result<(), SubmitError>),
}

/// Field values plus submission status of the contact form.
///
/// Editing a field after a settled submission keeps the Submitted/Error
/// status; only a new submission moves it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub fields: ContactFields,
    pub status: SubmissionStatus,
}

impl ContactForm {
    /// Payload for a new relay call, or `None` while one is in flight.
    pub fn submission(&self) -> Option<ContactPayload> {
        if self.status.is_submitting() {
            None
        } else {
            Some(ContactPayload::from(&self.fields))
        }
    }

    pub fn whatsapp_link(&self) -> String {
        whatsapp::prefilled_link(&self.fields.name, &self.fields.message)
    }

    pub fn submit_label(&self) -> &'static str {
        if self.status.is_submitting() {
            "Enviando..."
        } else if self.status.is_submitted() {
            "¡Enviado!"
        } else {
            "Enviar por Email"
        }
    }
}

impl Reducible for ContactForm {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ContactAction::Edit(field, value) => {
                let mut next = (*self).clone();
                next.fields.set(field, value);
                next.into()
            }
            ContactAction::SubmitStarted => {
                if self.status.is_submitting() {
                    return self;
                }
                Rc::new(ContactForm {
                    fields: self.fields.clone(),
                    status: SubmissionStatus::Submitting,
                })
            }
            ContactAction::Settled(Ok(())) => Rc::new(ContactForm {
                fields: ContactFields::default(),
                status: SubmissionStatus::Submitted,
            }),
            ContactAction::Settled(Err(_)) => Rc::new(ContactForm {
                fields: self.fields.clone(),
                status: SubmissionStatus::Error,
            }),
        }
    }
}

/// Runs one submission against `form`: marks it Submitting, hands the
/// payload to `send`, then settles with the outcome. Returns `None` without
/// calling `send` when a submission is already in flight.
pub async fn submit_with<D, S, Fut>(
    form: &ContactForm,
    dispatch: D,
    send: S,
) -> Option<Result<(), SubmitError>>
where
    D: Fn(ContactAction),
    S: FnOnce(ContactPayload) -> Fut,
    Fut: Future<Output = Result<(), SubmitError>>,
{
    let payload = form.submission()?;
    dispatch(ContactAction::SubmitStarted);
    info!("Submitting contact form");

    let outcome = send(payload).await;
    dispatch(ContactAction::Settled(outcome.clone()));
    Some(outcome)
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use futures::executor::block_on;

    use super::*;

    fn filled() -> Rc<ContactForm> {
        let form = Rc::new(ContactForm::default());
        form.reduce(ContactAction::Edit(Field::Name, "Ana".into()))
            .reduce(ContactAction::Edit(Field::Email, "ana@example.com".into()))
            .reduce(ContactAction::Edit(Field::Phone, "+54 9 11 5555-0000".into()))
            .reduce(ContactAction::Edit(Field::Message, "Quiero una tienda".into()))
    }

    #[test]
    fn edit_merges_single_field() {
        let form = filled().reduce(ContactAction::Edit(Field::Email, "otra@example.com".into()));
        assert_eq!(form.fields.email, "otra@example.com");
        assert_eq!(form.fields.name, "Ana");
        assert_eq!(form.fields.message, "Quiero una tienda");
        assert_eq!(form.status, SubmissionStatus::Idle);
    }

    #[test]
    fn successful_submit_clears_fields() {
        let form = filled()
            .reduce(ContactAction::SubmitStarted)
            .reduce(ContactAction::Settled(Ok(())));
        assert_eq!(form.fields, ContactFields::default());
        assert!(form.status.is_submitted());
        assert!(!form.status.is_submitting());
        assert!(!form.status.is_error());
    }

    #[test]
    fn rejected_submit_keeps_fields() {
        let before = filled();
        let form = before
            .clone()
            .reduce(ContactAction::SubmitStarted)
            .reduce(ContactAction::Settled(Err(SubmitError::Rejected { status: 500 })));
        assert_eq!(form.fields, before.fields);
        assert!(form.status.is_error());
        assert!(!form.status.is_submitting());
        assert!(!form.status.is_submitted());
    }

    #[test]
    fn transport_failure_keeps_fields() {
        let before = filled();
        let form = before
            .clone()
            .reduce(ContactAction::SubmitStarted)
            .reduce(ContactAction::Settled(Err(SubmitError::Transport(
                "Failed to fetch".into(),
            ))));
        assert_eq!(form.fields, before.fields);
        assert_eq!(form.status, SubmissionStatus::Error);
    }

    #[test]
    fn submit_is_single_flight() {
        let submitting = filled().reduce(ContactAction::SubmitStarted);
        assert!(submitting.submission().is_none());

        let again = submitting.clone().reduce(ContactAction::SubmitStarted);
        assert!(Rc::ptr_eq(&submitting, &again));
        assert!(again.status.is_submitting());
    }

    #[test]
    fn submission_payload_carries_all_fields() {
        let payload = filled().submission().expect("idle form yields a payload");
        assert_eq!(payload.name, "Ana");
        assert_eq!(payload.email, "ana@example.com");
        assert_eq!(payload.phone, "+54 9 11 5555-0000");
        assert_eq!(payload.message, "Quiero una tienda");
    }

    #[test]
    fn payload_uses_relay_field_names() {
        let payload = filled().submission().expect("payload");
        let json = serde_json::to_value(&payload).expect("serializes");
        assert_eq!(
            json,
            serde_json::json!({
                "nombre": "Ana",
                "email": "ana@example.com",
                "numero": "+54 9 11 5555-0000",
                "mensaje": "Quiero una tienda",
            })
        );
        for field in [Field::Name, Field::Email, Field::Phone, Field::Message] {
            assert!(json.get(field.input_name()).is_some());
        }
    }

    #[test]
    fn retry_after_error_goes_straight_to_submitting() {
        let form = filled()
            .reduce(ContactAction::SubmitStarted)
            .reduce(ContactAction::Settled(Err(SubmitError::Rejected { status: 422 })));
        assert!(form.submission().is_some());
        let retry = form.reduce(ContactAction::SubmitStarted);
        assert!(retry.status.is_submitting());
    }

    #[test]
    fn editing_after_settle_keeps_status() {
        let form = filled()
            .reduce(ContactAction::SubmitStarted)
            .reduce(ContactAction::Settled(Err(SubmitError::Rejected { status: 500 })))
            .reduce(ContactAction::Edit(Field::Message, "Otro mensaje".into()));
        assert!(form.status.is_error());

        let form = form
            .reduce(ContactAction::SubmitStarted)
            .reduce(ContactAction::Settled(Ok(())))
            .reduce(ContactAction::Edit(Field::Name, "Bruno".into()));
        assert!(form.status.is_submitted());
    }

    #[test]
    fn whatsapp_link_leaves_state_alone() {
        let form = filled();
        let before = (*form).clone();
        let link = form.whatsapp_link();
        assert!(link.starts_with("https://wa.me/5491144081542?text="));
        assert_eq!(*form, before);
    }

    #[test]
    fn submit_label_follows_status() {
        let form = filled();
        assert_eq!(form.submit_label(), "Enviar por Email");
        let form = form.reduce(ContactAction::SubmitStarted);
        assert_eq!(form.submit_label(), "Enviando...");
        let form = form.reduce(ContactAction::Settled(Ok(())));
        assert_eq!(form.submit_label(), "¡Enviado!");
    }

    fn apply(state: &RefCell<Rc<ContactForm>>, action: ContactAction) {
        let next = state.borrow().clone().reduce(action);
        *state.borrow_mut() = next;
    }

    /// Submits the current state with a sender that answers `outcome`.
    fn submit_answering(
        state: &RefCell<Rc<ContactForm>>,
        calls: &Cell<u32>,
        outcome: Result<(), SubmitError>,
    ) -> Option<Result<(), SubmitError>> {
        let snapshot = state.borrow().clone();
        block_on(submit_with(
            &snapshot,
            |action| apply(state, action),
            |_payload| {
                calls.set(calls.get() + 1);
                async move { outcome }
            },
        ))
    }

    #[test]
    fn submit_with_success_clears_fields() {
        let state = RefCell::new(filled());
        let calls = Cell::new(0);

        let outcome = submit_answering(&state, &calls, Ok(()));

        assert_eq!(outcome, Some(Ok(())));
        assert_eq!(calls.get(), 1);
        let form = state.borrow();
        assert_eq!(form.fields, ContactFields::default());
        assert!(form.status.is_submitted());
        assert!(!form.status.is_submitting());
    }

    #[test]
    fn submit_with_rejection_keeps_fields() {
        let state = RefCell::new(filled());
        let before = state.borrow().fields.clone();
        let calls = Cell::new(0);

        let outcome = submit_answering(&state, &calls, Err(SubmitError::Rejected { status: 500 }));

        assert_eq!(outcome, Some(Err(SubmitError::Rejected { status: 500 })));
        assert_eq!(calls.get(), 1);
        let form = state.borrow();
        assert_eq!(form.fields, before);
        assert!(form.status.is_error());
        assert!(!form.status.is_submitting());
    }

    #[test]
    fn submit_with_transport_error_settles_as_error() {
        let state = RefCell::new(filled());
        let before = state.borrow().fields.clone();
        let calls = Cell::new(0);

        let error = SubmitError::Transport("Failed to fetch".into());
        let outcome = submit_answering(&state, &calls, Err(error.clone()));

        assert_eq!(outcome, Some(Err(error)));
        let form = state.borrow();
        assert_eq!(form.fields, before);
        assert_eq!(form.status, SubmissionStatus::Error);
    }

    #[test]
    fn submit_with_skips_sender_while_submitting() {
        let state = RefCell::new(filled().reduce(ContactAction::SubmitStarted));
        let calls = Cell::new(0);

        let outcome = submit_answering(&state, &calls, Ok(()));

        assert_eq!(outcome, None);
        assert_eq!(calls.get(), 0);
        let form = state.borrow();
        assert!(form.status.is_submitting());
        assert_eq!(form.fields.name, "Ana");
    }

    #[test]
    fn submit_with_marks_submitting_before_sending() {
        let state = RefCell::new(filled());
        let snapshot = state.borrow().clone();
        let seen = Cell::new(None);

        let outcome = block_on(submit_with(
            &snapshot,
            |action| apply(&state, action),
            |payload| {
                seen.set(Some(state.borrow().status));
                assert_eq!(payload.message, "Quiero una tienda");
                async { Ok(()) }
            },
        ));

        assert_eq!(outcome, Some(Ok(())));
        assert_eq!(seen.get(), Some(SubmissionStatus::Submitting));
    }

    #[test]
    fn retry_after_error_calls_sender_again() {
        let state = RefCell::new(filled());
        let calls = Cell::new(0);

        submit_answering(&state, &calls, Err(SubmitError::Rejected { status: 503 }));
        assert!(state.borrow().status.is_error());

        submit_answering(&state, &calls, Ok(()));
        assert_eq!(calls.get(), 2);
        assert!(state.borrow().status.is_submitted());
    }
}
