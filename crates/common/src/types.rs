use serde::{Deserialize, Serialize};

/// JSON body returned by every successful endpoint.
///
/// `status` is carried in the body for clients that read it there. It is
/// set by each handler on its own and is not derived from the status line
/// of the HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub message: String,
    pub status: u16,
}

impl ApiResponse {
    /// Creates a response body with the given message and status code.
    pub fn new(message: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_response_serializes_message_before_status() {
        let response = ApiResponse::new("Hello from Beam!", 200);
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"message":"Hello from Beam!","status":200}"#);
    }

    #[test]
    fn api_response_deserializes_from_wire_shape() {
        let response: ApiResponse =
            serde_json::from_str(r#"{"message":"Server is healthy","status":200}"#).unwrap();
        assert_eq!(response, ApiResponse::new("Server is healthy", 200));
    }

    #[test]
    fn api_response_status_is_independent_of_message() {
        let response = ApiResponse::new(String::from("anything"), 503);
        assert_eq!(response.message, "anything");
        assert_eq!(response.status, 503);
    }
}
