pub mod templates;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpConfig;
use crate::models::Contact;

pub const NOTIFICATION_SUBJECT: &str = "New Contact Form Submission";

/// Outbound notification transport for new contact submissions.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify_contact(&self, contact: &Contact) -> Result<(), String>;
}

pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    receiver: String,
}

impl SmtpNotifier {
    pub fn new(config: &SmtpConfig) -> Result<Self, String> {
        let creds = Credentials::new(config.user.clone(), config.pass.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| format!("SMTP transport error: {e}"))?
            .port(config.port)
            .credentials(creds)
            .build();

        Ok(Self {
            transport,
            receiver: config.receiver.clone(),
        })
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn notify_contact(&self, contact: &Contact) -> Result<(), String> {
        let from = format!("\"Contact Form\" <{}>", contact.email);
        let body =
            templates::render_contact_notification(&contact.name, &contact.email, &contact.message);

        let message = Message::builder()
            .from(
                from.parse()
                    .map_err(|e| format!("Invalid from address: {e}"))?,
            )
            .to(self
                .receiver
                .parse()
                .map_err(|e| format!("Invalid to address: {e}"))?)
            .subject(NOTIFICATION_SUBJECT)
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| format!("Failed to build email: {e}"))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| format!("Failed to send email: {e}"))?;

        Ok(())
    }
}

/// Stand-in when no SMTP relay is configured. Submissions still
/// persist; the notification step reports failure.
pub struct DisabledNotifier;

#[async_trait]
impl Notifier for DisabledNotifier {
    async fn notify_contact(&self, _contact: &Contact) -> Result<(), String> {
        Err("SMTP is not configured".to_string())
    }
}
