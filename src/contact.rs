// Contact form submission. Fields are posted as multipart form data to a
// hosted form endpoint (Formspree style); anything short of a 2xx is a failure.

use std::fmt;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{console, FormData, Request, RequestInit, Response};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    MissingField(&'static str),
    InvalidEmail,
    /// Network error or non-success response; the two are not told apart.
    Failed,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::MissingField(field) => write!(f, "{} is required", field),
            SubmitError::InvalidEmail => write!(f, "email address is not valid"),
            SubmitError::Failed => write!(f, "message could not be sent"),
        }
    }
}

impl std::error::Error for SubmitError {}

impl From<SubmitError> for JsValue {
    fn from(err: SubmitError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn new(name: &str, email: &str, message: &str) -> ContactMessage {
        ContactMessage {
            name: name.trim().to_owned(),
            email: email.trim().to_owned(),
            message: message.trim().to_owned(),
        }
    }

    pub fn validate(&self) -> Result<(), SubmitError> {
        if self.name.is_empty() {
            return Err(SubmitError::MissingField("name"));
        }
        if self.email.is_empty() {
            return Err(SubmitError::MissingField("email"));
        }
        if !looks_like_email(&self.email) {
            return Err(SubmitError::InvalidEmail);
        }
        if self.message.is_empty() {
            return Err(SubmitError::MissingField("message"));
        }
        Ok(())
    }

    // Field order matches what the form posts; `to` only when a recipient is set
    pub fn form_fields<'a>(&'a self, recipient: Option<&'a str>) -> Vec<(&'static str, &'a str)> {
        let mut fields = vec![
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("message", self.message.as_str()),
        ];
        if let Some(to) = recipient {
            fields.push(("to", to));
        }
        fields
    }
}

// Same bar as an <input type="email">: one '@' with text on both sides and
// no whitespace
fn looks_like_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && !domain.is_empty() && !email.chars().any(char::is_whitespace)
        }
        _ => false,
    }
}

async fn post_form(endpoint: &str, fields: &[(&str, &str)]) -> Result<Response, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let form = FormData::new()?;
    for (key, value) in fields {
        form.append_with_str(key, value)?;
    }

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&form);
    let request = Request::new_with_str_and_init(endpoint, &init)?;
    request.headers().set("Accept", "application/json")?;

    let response = JsFuture::from(window.fetch_with_request(&request)).await?;
    response.dyn_into::<Response>()
}

// Any 2xx is a success; every other status reads the same to the caller
fn check_status(status: u16) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmitError::Failed)
    }
}

/// Validates and posts a contact message. Resolves on a 2xx response and
/// rejects with a readable message otherwise.
#[wasm_bindgen(js_name = submitContact)]
pub async fn submit_contact(
    endpoint: String,
    name: String,
    email: String,
    message: String,
    recipient: Option<String>,
) -> Result<(), JsValue> {
    let message = ContactMessage::new(&name, &email, &message);
    message.validate()?;
    let fields = message.form_fields(recipient.as_deref());

    let result = post_form(&endpoint, &fields).await;
    match result {
        Ok(response) => check_status(response.status()).map_err(|err| {
            let status = response.status();
            console::warn_1(&format!("contact form: endpoint answered {}", status).into());
            JsValue::from(err)
        }),
        Err(err) => {
            console::warn_2(&"contact form: request failed".into(), &err);
            Err(SubmitError::Failed.into())
        }
    }
}
