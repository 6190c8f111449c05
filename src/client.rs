//! Client-side model of the contact form: the three field values plus
//! the submission status shown next to the submit control.

use serde_json::{json, Value};

const DEFAULT_API_URL: &str = "http://localhost:3001";

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Base URL from `POSTBOX_API_URL`, falling back to the local default.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("POSTBOX_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error(String),
    Unreachable,
}

impl FormStatus {
    /// User-facing status line.
    pub fn message(&self) -> String {
        match self {
            FormStatus::Idle => String::new(),
            FormStatus::Sending => "Sending...".to_string(),
            FormStatus::Success => "Message sent successfully!".to_string(),
            FormStatus::Error(e) => format!("Error: {e}"),
            FormStatus::Unreachable => {
                "Failed to send message. Server not responding.".to_string()
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    status: FormStatus,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            status: FormStatus::Idle,
        }
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// The submit control stays disabled while a request is in flight.
    pub fn is_sending(&self) -> bool {
        self.status == FormStatus::Sending
    }

    /// One POST per submission. A 2xx clears the fields; an HTTP error
    /// keeps them and surfaces the server's error text; a transport
    /// failure is reported as the server not responding.
    pub async fn submit(&mut self, api: &ApiClient) {
        self.status = FormStatus::Sending;

        let payload = json!({
            "name": self.name,
            "email": self.email,
            "message": self.message,
        });

        let result = api
            .http
            .post(format!("{}/contact", api.base_url))
            .json(&payload)
            .send()
            .await;

        self.status = match result {
            Ok(resp) if resp.status().is_success() => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                FormStatus::Success
            }
            Ok(resp) => {
                let body: Value = resp.json().await.unwrap_or(json!(null));
                let error = body["error"]
                    .as_str()
                    .unwrap_or("Failed to send message.")
                    .to_string();
                FormStatus::Error(error)
            }
            Err(_) => FormStatus::Unreachable,
        };
    }
}
