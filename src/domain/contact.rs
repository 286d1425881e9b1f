//! Contact - Submission payloads for the two delivery collaborators

use serde::{Deserialize, Serialize};

/// Values read from the contact form at submit time
///
/// Fields are kept verbatim; the form's required-field validation is the
/// only check applied before sending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Template parameters expected by the email relay
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayParams {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
    pub reply_to: String,
}

impl From<&ContactSubmission> for RelayParams {
    fn from(submission: &ContactSubmission) -> Self {
        Self {
            from_name: submission.name.clone(),
            from_email: submission.email.clone(),
            message: submission.message.clone(),
            reply_to: submission.email.clone(),
        }
    }
}

/// Body of a relay send request
#[derive(Debug, Clone, Serialize)]
pub struct RelayRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: RelayParams,
}

/// Status/text pair the relay resolves with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayResponse {
    pub status: u16,
    pub text: String,
}

/// JSON reply of the contact backend
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BackendReply {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Ayşe".to_string(),
            email: "ayse@example.com".to_string(),
            message: " hi ".to_string(),
        }
    }

    #[test]
    fn relay_params_map_fields_and_reply_to() {
        let params = RelayParams::from(&submission());
        assert_eq!(params.from_name, "Ayşe");
        assert_eq!(params.from_email, "ayse@example.com");
        assert_eq!(params.reply_to, "ayse@example.com");
        assert_eq!(params.message, " hi ");
    }

    #[test]
    fn backend_body_is_name_email_message() {
        let value = serde_json::to_value(submission()).expect("serialize");
        assert_eq!(
            value,
            serde_json::json!({"name": "Ayşe", "email": "ayse@example.com", "message": " hi "})
        );
    }

    #[test]
    fn backend_reply_error_is_optional() {
        let ok: BackendReply = serde_json::from_str(r#"{"success":true}"#).expect("decode");
        assert_eq!(ok, BackendReply { success: true, error: None });

        let failed: BackendReply =
            serde_json::from_str(r#"{"success":false,"error":"quota"}"#).expect("decode");
        assert_eq!(failed.error.as_deref(), Some("quota"));
    }
}
