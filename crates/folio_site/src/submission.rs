//! Contact form submission
//!
//! One POST per submission, no retry. Whatever goes wrong, the user gets a
//! status telling them where to write instead.

use crate::config::ContactSection;
use crate::error::ContactError;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

/// What the visitor typed
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
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
        }
    }

    /// Required fields present and the email looks like one
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::Invalid {
                field: "name",
                reason: "required",
            });
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactError::Invalid {
                field: "email",
                reason: "required",
            });
        }
        let well_formed = email
            .split_once('@')
            .is_some_and(|(user, domain)| !user.is_empty() && domain.contains('.'));
        if !well_formed {
            return Err(ContactError::Invalid {
                field: "email",
                reason: "not an email address",
            });
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::Invalid {
                field: "message",
                reason: "required",
            });
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct Payload<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
    source: &'a str,
}

/// Outcome shown under the form
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionStatus {
    Sent,
    Failed { message: String },
}

impl SubmissionStatus {
    pub fn is_sent(&self) -> bool {
        matches!(self, SubmissionStatus::Sent)
    }
}

pub struct ContactClient {
    http: Client,
    endpoint: Option<String>,
    fallback_email: String,
    source: String,
}

impl ContactClient {
    pub fn new(config: &ContactSection) -> Result<Self, ContactError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            fallback_email: config.fallback_email.clone(),
            source: config.source.clone(),
        })
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// Validate and send, folding every failure into a user-facing status
    pub async fn submit(&self, form: &ContactForm) -> SubmissionStatus {
        match self.send(form).await {
            Ok(()) => {
                tracing::debug!("ContactClient: message from {} sent", form.email);
                SubmissionStatus::Sent
            }
            Err(ContactError::Invalid { field, reason }) => SubmissionStatus::Failed {
                message: format!("Please check the {field} field: {reason}."),
            },
            Err(err) => {
                tracing::warn!("ContactClient: submission failed: {}", err);
                SubmissionStatus::Failed {
                    message: self.fallback_message(),
                }
            }
        }
    }

    /// Validate and POST once; success is any 2xx
    pub async fn send(&self, form: &ContactForm) -> Result<(), ContactError> {
        form.validate()?;
        let Some(endpoint) = self.endpoint.as_deref() else {
            return Err(ContactError::NoEndpoint);
        };

        let payload = Payload {
            name: form.name.trim(),
            email: form.email.trim(),
            message: form.message.trim(),
            source: &self.source,
        };
        let response = self.http.post(endpoint).json(&payload).send().await?;
        if !response.status().is_success() {
            return Err(ContactError::Status(response.status()));
        }
        Ok(())
    }

    fn fallback_message(&self) -> String {
        format!(
            "Message could not be sent. Please email {} directly.",
            self.fallback_email
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm::new("Ada", "ada@example.com", "Hello there")
    }

    #[test]
    fn test_validate() {
        assert!(form().validate().is_ok());

        let missing_name = ContactForm { name: "  ".into(), ..form() };
        assert!(matches!(
            missing_name.validate(),
            Err(ContactError::Invalid { field: "name", .. })
        ));

        let bad_email = ContactForm { email: "ada.example.com".into(), ..form() };
        assert!(matches!(
            bad_email.validate(),
            Err(ContactError::Invalid { field: "email", .. })
        ));

        let empty_message = ContactForm { message: String::new(), ..form() };
        assert!(matches!(
            empty_message.validate(),
            Err(ContactError::Invalid { field: "message", .. })
        ));
    }

    #[tokio::test]
    async fn test_no_endpoint_points_to_email() {
        let client = ContactClient::new(&ContactSection::default()).unwrap();
        let status = client.submit(&form()).await;
        match status {
            SubmissionStatus::Failed { message } => {
                assert!(message.contains("hemanthh@umich.edu"))
            }
            SubmissionStatus::Sent => panic!("sent without an endpoint"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_endpoint() {
        let config = ContactSection {
            endpoint: Some("http://127.0.0.1:1/contact".into()),
            timeout_secs: 2,
            ..ContactSection::default()
        };
        let client = ContactClient::new(&config).unwrap();
        assert!(matches!(
            client.send(&form()).await,
            Err(ContactError::Http(_))
        ));
        assert!(!client.submit(&form()).await.is_sent());
    }

    #[tokio::test]
    async fn test_invalid_form_is_not_sent() {
        let config = ContactSection {
            endpoint: Some("http://127.0.0.1:1/contact".into()),
            ..ContactSection::default()
        };
        let client = ContactClient::new(&config).unwrap();
        let status = client.submit(&ContactForm::default()).await;
        assert_eq!(
            status,
            SubmissionStatus::Failed {
                message: "Please check the name field: required.".into()
            }
        );
    }
}
