use std::future::Future;

use http::StatusCode;
use serde::Serialize;

use crate::config::EmailConfig;
use crate::contact::{ContactError, ContactForm, EmailPayload};

/// Something that can deliver one contact message. One attempt per call.
pub trait EmailSender: Send + Sync {
    fn send(&self, payload: &EmailPayload)
        -> impl Future<Output = Result<(), ContactError>> + Send;
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a EmailPayload,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
}

/// Delivers through the EmailJS REST API.
#[derive(Debug, Clone)]
pub struct EmailJsSender {
    client: reqwest::Client,
    config: EmailConfig,
}

impl EmailJsSender {
    pub fn new(config: EmailConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

impl EmailSender for EmailJsSender {
    async fn send(&self, payload: &EmailPayload) -> Result<(), ContactError> {
        let body = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: payload,
            access_token: self.config.private_key.as_deref(),
        };
        let res = self
            .client
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "email transport error");
                ContactError::Delivery(e.to_string())
            })?;

        let status = res.status();
        if status == StatusCode::OK {
            tracing::info!(subject = %payload.subject, "contact message sent");
            Ok(())
        } else {
            let text = res.text().await.unwrap_or_default();
            tracing::warn!(%status, body = %text, "email service rejected message");
            Err(ContactError::Delivery(format!("status {status}")))
        }
    }
}

/// Validate on the server and hand off to `sender`.
pub async fn deliver<S: EmailSender>(
    sender: &S,
    form: &ContactForm,
) -> Result<(), ContactError> {
    let payload = form.validate()?;
    sender.send(&payload).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::State, routing::post, Json, Router};
    use std::net::SocketAddr;
    use std::sync::{Arc, Mutex};

    type Seen = Arc<Mutex<Vec<serde_json::Value>>>;

    async fn spawn_stub(status: StatusCode) -> (SocketAddr, Seen) {
        let seen = Seen::default();
        let app = Router::new()
            .route(
                "/send",
                post(
                    move |State(seen): State<Seen>, Json(body): Json<serde_json::Value>| async move {
                        seen.lock().unwrap().push(body);
                        (status, "OK")
                    },
                ),
            )
            .with_state(seen.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (addr, seen)
    }

    fn sender_for(addr: SocketAddr) -> EmailJsSender {
        EmailJsSender::new(EmailConfig {
            endpoint: format!("http://{addr}/send"),
            ..EmailConfig::default()
        })
    }

    fn form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[tokio::test]
    async fn test_ok_status_is_success() {
        let (addr, seen) = spawn_stub(StatusCode::OK).await;
        deliver(&sender_for(addr), &form()).await.unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        let body = &seen[0];
        assert_eq!(body["service_id"], EmailConfig::default().service_id);
        assert_eq!(body["user_id"], EmailConfig::default().public_key);
        assert_eq!(body["template_params"]["reply_to"], "ada@example.com");
        assert_eq!(body["template_params"]["subject"], "Hi");
        assert!(body.get("accessToken").is_none());
    }

    #[tokio::test]
    async fn test_private_key_sent_as_access_token() {
        let (addr, seen) = spawn_stub(StatusCode::OK).await;
        let sender = EmailJsSender::new(EmailConfig {
            endpoint: format!("http://{addr}/send"),
            private_key: Some("secret".to_string()),
            ..EmailConfig::default()
        });
        deliver(&sender, &form()).await.unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0]["accessToken"], "secret");
        assert_eq!(seen[0]["user_id"], EmailConfig::default().public_key);
    }

    #[tokio::test]
    async fn test_non_ok_status_is_delivery_error() {
        let (addr, seen) = spawn_stub(StatusCode::BAD_REQUEST).await;
        let err = deliver(&sender_for(addr), &form()).await.unwrap_err();
        assert_eq!(err, ContactError::Delivery("status 400 Bad Request".to_string()));
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_transport_error_is_delivery_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let err = deliver(&sender_for(addr), &form()).await.unwrap_err();
        assert!(matches!(err, ContactError::Delivery(_)));
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_service() {
        let (addr, seen) = spawn_stub(StatusCode::OK).await;
        let mut incomplete = form();
        incomplete.message.clear();
        let err = deliver(&sender_for(addr), &incomplete).await.unwrap_err();
        assert_eq!(err, ContactError::MissingFields);
        assert!(seen.lock().unwrap().is_empty());
    }
}
