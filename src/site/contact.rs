//! Contact form draft and its single-shot submission to the forms endpoint.

use std::{cell::RefCell, fmt, rc::Rc};
use url::form_urlencoded;

pub const CONTACT_ENDPOINT: &str = "/";
pub const CONTACT_FORM_NAME: &str = "contact";
pub const FORM_NAME_FIELD: &str = "form-name";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

pub const SENT_MESSAGE: &str = "Message sent successfully! We'll get back to you soon.";
pub const REJECTED_MESSAGE: &str = "Failed to send message. Please try again.";
pub const FAILED_MESSAGE: &str = "An error occurred. Please try again later.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Self::Name, Self::Email, Self::Message];

    /// Form field name, shared by the `<input name>` and the encoded body.
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Email Address",
            Self::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "John Doe",
            Self::Email => "john@example.com",
            Self::Message => "Tell us about your project...",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Same rule as the inputs' `required` attribute: any non-empty value
    /// counts, whitespace included.
    pub fn is_complete(&self) -> bool {
        Field::ALL
            .into_iter()
            .all(|field| !self.get(field).is_empty())
    }

    pub fn encode(&self, form_name: &str) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer.append_pair(FORM_NAME_FIELD, form_name);
        for field in Field::ALL {
            serializer.append_pair(field.name(), self.get(field));
        }
        serializer.finish()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportError(pub String);

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transport failure: {}", self.0)
    }
}

impl std::error::Error for TransportError {}

/// The forms endpoint. Implementations send exactly one request per call and
/// report the HTTP status; they never retry.
#[allow(async_fn_in_trait)]
pub trait ContactTransport {
    async fn post_form(&self, body: &str) -> Result<u16, TransportError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Rejected(u16),
    Failed,
}

impl SubmitOutcome {
    pub fn from_response(response: Result<u16, TransportError>) -> Self {
        match response {
            Ok(status) if (200..300).contains(&status) => Self::Sent,
            Ok(status) => Self::Rejected(status),
            Err(_) => Self::Failed,
        }
    }

    pub fn notice(self) -> Notice {
        match self {
            Self::Sent => Notice::success(SENT_MESSAGE),
            Self::Rejected(_) => Notice::error(REJECTED_MESSAGE),
            Self::Failed => Notice::error(FAILED_MESSAGE),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: &'static str,
}

impl Notice {
    pub fn success(message: &'static str) -> Self {
        Self {
            kind: NoticeKind::Success,
            message,
        }
    }

    pub fn error(message: &'static str) -> Self {
        Self {
            kind: NoticeKind::Error,
            message,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    draft: ContactDraft,
    submitting: bool,
}

impl ContactForm {
    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn on_change(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    fn finish(&mut self, outcome: SubmitOutcome) -> Notice {
        self.submitting = false;
        if outcome == SubmitOutcome::Sent {
            self.draft = ContactDraft::default();
        }
        outcome.notice()
    }
}

/// A submission that has claimed the form's in-flight flag. The flag is
/// released when this value is consumed by [`InFlight::deliver`] or dropped,
/// whichever comes first.
pub struct InFlight {
    form: Rc<RefCell<ContactForm>>,
    body: String,
}

impl InFlight {
    /// Claims the form for one submission. `None` while another submission is
    /// in flight or when a field is empty.
    pub fn begin(form: &Rc<RefCell<ContactForm>>) -> Option<Self> {
        let body = {
            let mut state = form.try_borrow_mut().ok()?;
            if state.submitting || !state.draft.is_complete() {
                return None;
            }
            state.submitting = true;
            state.draft.encode(CONTACT_FORM_NAME)
        };

        Some(Self {
            form: Rc::clone(form),
            body,
        })
    }

    pub async fn deliver<T: ContactTransport>(self, transport: &T) -> (SubmitOutcome, Notice) {
        let outcome = SubmitOutcome::from_response(transport.post_form(&self.body).await);
        let notice = match self.form.try_borrow_mut() {
            Ok(mut state) => state.finish(outcome),
            Err(_) => outcome.notice(),
        };
        (outcome, notice)
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if let Ok(mut state) = self.form.try_borrow_mut() {
            state.submitting = false;
        }
    }
}
