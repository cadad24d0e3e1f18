use reqwest::Client;
use serde::Serialize;

use crate::domain::{
    common::{NotificationConfig, entities::app_errors::CoreError},
    notification::{entities::TemplateMessage, ports::Notifier},
};

const GRAPH_API_BASE: &str = "https://graph.facebook.com";

/// WhatsApp Cloud API client sending pre-approved templates.
#[derive(Debug, Clone)]
pub struct WhatsAppClient {
    base_url: String,
    api_version: String,
    phone_number_id: Option<String>,
    access_token: Option<String>,
    client: Client,
}

#[derive(Debug, Serialize)]
struct TemplateRequest<'a> {
    messaging_product: &'static str,
    #[serde(rename = "type")]
    kind: &'static str,
    to: &'a str,
    template: Template<'a>,
}

#[derive(Debug, Serialize)]
struct Template<'a> {
    name: &'a str,
    language: Language<'a>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    components: Vec<Component<'a>>,
}

#[derive(Debug, Serialize)]
struct Language<'a> {
    code: &'a str,
}

#[derive(Debug, Serialize)]
struct Component<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    parameters: Vec<Parameter<'a>>,
}

#[derive(Debug, Serialize)]
struct Parameter<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    text: &'a str,
}

fn component<'a>(kind: &'static str, vars: &'a [String]) -> Option<Component<'a>> {
    if vars.is_empty() {
        return None;
    }

    Some(Component {
        kind,
        parameters: vars
            .iter()
            .map(|text| Parameter { kind: "text", text })
            .collect(),
    })
}

fn template_request<'a>(to: &'a str, message: &'a TemplateMessage) -> TemplateRequest<'a> {
    let components = [
        component("header", &message.header_vars),
        component("body", &message.body_vars),
    ]
    .into_iter()
    .flatten()
    .collect();

    TemplateRequest {
        messaging_product: "whatsapp",
        kind: "template",
        to,
        template: Template {
            name: &message.name,
            language: Language {
                code: &message.language,
            },
            components,
        },
    }
}

impl WhatsAppClient {
    pub fn new(config: &NotificationConfig) -> Self {
        Self::with_base_url(GRAPH_API_BASE.to_string(), config)
    }

    pub fn with_base_url(base_url: String, config: &NotificationConfig) -> Self {
        Self {
            base_url,
            api_version: config.api_version.clone(),
            phone_number_id: config.phone_number_id.clone(),
            access_token: config.access_token.clone(),
            client: Client::new(),
        }
    }

    fn messages_url(&self, phone_number_id: &str) -> String {
        format!(
            "{}/{}/{}/messages",
            self.base_url.trim_end_matches('/'),
            self.api_version,
            phone_number_id
        )
    }
}

impl Notifier for WhatsAppClient {
    async fn send_template(&self, to: String, message: TemplateMessage) -> Result<(), CoreError> {
        let (Some(phone_number_id), Some(access_token)) =
            (&self.phone_number_id, &self.access_token)
        else {
            tracing::error!("WhatsApp credentials are not configured");
            return Err(CoreError::ExternalServiceError(
                "WhatsApp credentials are not configured".to_string(),
            ));
        };

        let response = self
            .client
            .post(self.messages_url(phone_number_id))
            .bearer_auth(access_token)
            .json(&template_request(&to, &message))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("WhatsApp API request failed: {}", e);
                CoreError::ExternalServiceError(format!("WhatsApp API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("WhatsApp API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "WhatsApp API returned error: {} - {}",
                status, error_text
            )));
        }

        tracing::info!(template = %message.name, "WhatsApp template sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(with_credentials: bool) -> NotificationConfig {
        NotificationConfig {
            notification_phone: Some("5218110000000".to_string()),
            phone_number_id: with_credentials.then(|| "1234567890".to_string()),
            access_token: with_credentials.then(|| "token".to_string()),
            api_version: "v22.0".to_string(),
        }
    }

    #[test]
    fn test_payload_shape() {
        let message = TemplateMessage::new("conqs_quote_request", "es").with_body(vec![
            "Ana".to_string(),
            "8110001122".to_string(),
            "fin de semana".to_string(),
        ]);

        let payload = serde_json::to_value(template_request("5218110000000", &message)).unwrap();
        assert_eq!(payload["messaging_product"], "whatsapp");
        assert_eq!(payload["type"], "template");
        assert_eq!(payload["template"]["language"]["code"], "es");

        let components = payload["template"]["components"].as_array().unwrap();
        assert_eq!(components.len(), 1);
        assert_eq!(components[0]["type"], "body");
        assert_eq!(components[0]["parameters"][2]["text"], "fin de semana");
    }

    #[test]
    fn test_messages_url() {
        let client = WhatsAppClient::new(&config(true));

        assert_eq!(
            client.messages_url("1234567890"),
            "https://graph.facebook.com/v22.0/1234567890/messages"
        );
    }

    #[tokio::test]
    async fn test_missing_credentials() {
        let client = WhatsAppClient::new(&config(false));

        let result = client
            .send_template("5218110000000".to_string(), TemplateMessage::new("info_request", "es"))
            .await;
        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
    }
}
