//! SMTP mail transport.
//!
//! Sends verification codes over an authenticated SMTP relay. Message
//! content is selected by purpose; the code itself is the only dynamic
//! part of the body.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{debug, info};

use sn_core::services::verification::{MailTransport, Purpose};
use sn_shared::config::MailConfig;
use sn_shared::utils::validation::mask_email;

use crate::InfrastructureError;

/// SMTP-backed mail transport
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Create a new mailer from the SMTP configuration
    pub fn new(config: &MailConfig) -> Result<Self, InfrastructureError> {
        let from: Mailbox = config
            .from
            .parse()
            .map_err(|e| InfrastructureError::Config(format!("SMTP_FROM is invalid: {}", e)))?;

        let credentials = Credentials::new(config.username.clone(), config.password.clone());
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
            .map_err(|e| InfrastructureError::Mail(format!("SMTP relay setup failed: {}", e)))?
            .port(config.port)
            .credentials(credentials)
            .build();

        info!(host = %config.host, port = config.port, "SMTP mailer initialized");

        Ok(Self { transport, from })
    }

    fn subject(purpose: Purpose) -> &'static str {
        match purpose {
            Purpose::Registration => "SoftNav verification code",
            Purpose::PasswordReset => "SoftNav password reset code",
        }
    }

    fn body(purpose: Purpose, code: &str) -> String {
        match purpose {
            Purpose::Registration => format!(
                "Your SoftNav registration code is {}. It expires in 5 minutes.\n\n\
                 If you did not request this code, you can safely ignore this message.",
                code
            ),
            Purpose::PasswordReset => format!(
                "Your SoftNav password reset code is {}. It expires in 5 minutes.\n\n\
                 If you did not request a password reset, you can safely ignore this message.",
                code
            ),
        }
    }
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn send_verification_code(
        &self,
        to: &str,
        code: &str,
        purpose: Purpose,
    ) -> Result<String, String> {
        let recipient: Mailbox = to
            .parse()
            .map_err(|e| format!("invalid recipient address: {}", e))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(recipient)
            .subject(Self::subject(purpose))
            .header(ContentType::TEXT_PLAIN)
            .body(Self::body(purpose, code))
            .map_err(|e| format!("failed to build message: {}", e))?;

        debug!(to = %mask_email(to), purpose = %purpose, "Sending verification mail");

        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| format!("smtp send failed: {}", e))?;

        info!(
            to = %mask_email(to),
            event = "mail_sent",
            "Verification mail accepted by relay"
        );

        Ok(response.code().to_string())
    }
}
