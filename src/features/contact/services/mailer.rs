use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::core::config::SmtpConfig;
use crate::core::error::{AppError, Result};
use crate::features::contact::models::Contact;

/// Outbound email relay for contact submissions.
///
/// A thin wrapper over an SMTP transport. When SMTP is not configured the
/// mailer is disabled: sends become no-ops so the contact endpoint keeps
/// working in environments without a relay.
pub struct Mailer {
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
    from_email: String,
    to_email: String,
}

impl Mailer {
    pub fn from_config(config: &SmtpConfig) -> Result<Self> {
        let transport = match &config.host {
            Some(host) => {
                let mut builder = if config.port == 465 {
                    AsyncSmtpTransport::<Tokio1Executor>::relay(host)
                } else {
                    AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
                }
                .map_err(|e| AppError::Internal(format!("Invalid SMTP relay '{}': {}", host, e)))?
                .port(config.port);

                if let (Some(user), Some(pass)) = (&config.username, &config.password) {
                    builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
                }

                Some(builder.build())
            }
            None => {
                tracing::warn!("SMTP not configured; contact emails will not be sent");
                None
            }
        };

        let to_email = config
            .to_email
            .clone()
            .unwrap_or_else(|| config.from_email.clone());

        Ok(Self {
            transport,
            from_email: config.from_email.clone(),
            to_email,
        })
    }

    pub fn enabled(&self) -> bool {
        self.transport.is_some()
    }

    /// Relay one submission. Reply-To is set to the submitter so replies go
    /// straight back to them.
    pub async fn send_contact(&self, contact: &Contact) -> Result<()> {
        let Some(transport) = &self.transport else {
            tracing::debug!("Mailer disabled; skipping contact email for {}", contact.id);
            return Ok(());
        };

        let subject = match &contact.subject {
            Some(subject) => format!("[Contact] {}", subject),
            None => format!("[Contact] New message from {}", contact.name),
        };
        let body = format!(
            "From: {} <{}>\nCategory: {}\n\n{}",
            contact.name,
            contact.email,
            contact.category.as_deref().unwrap_or("-"),
            contact.message
        );

        let from: Mailbox = self
            .from_email
            .parse()
            .map_err(|e| AppError::Internal(format!("Invalid FROM_EMAIL: {}", e)))?;
        let to: Mailbox = self
            .to_email
            .parse()
            .map_err(|e| AppError::Internal(format!("Invalid TO_EMAIL: {}", e)))?;
        let reply_to: Mailbox = format!("{} <{}>", contact.name, contact.email)
            .parse()
            .or_else(|_| contact.email.parse())
            .map_err(|e| AppError::BadRequest(format!("Invalid reply address: {}", e)))?;

        let message = Message::builder()
            .from(from)
            .to(to)
            .reply_to(reply_to)
            .subject(subject)
            .body(body)
            .map_err(|e| AppError::Internal(format!("Failed to build email: {}", e)))?;

        transport
            .send(message)
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Email relay failed: {}", e)))?;

        tracing::info!("Contact email relayed for submission {}", contact.id);
        Ok(())
    }
}
