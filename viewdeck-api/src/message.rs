//! The subject document bound to views - a four-part HTTP message.

use std::sync::{Arc, Mutex};

/// An HTTP message under inspection.
///
/// The controller treats the message as opaque data: it never parses or
/// validates it, only hands it to view predicates and content models. Views
/// read and edit the four parts as text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpMessage {
    /// Request line and headers.
    pub request_header: String,
    /// Request body.
    pub request_body: String,
    /// Status line and headers.
    pub response_header: String,
    /// Response body.
    pub response_body: String,
}

impl HttpMessage {
    /// Create a message with only the request parts populated.
    pub fn request(header: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            request_header: header.into(),
            request_body: body.into(),
            ..Self::default()
        }
    }

    /// Create a message with request and response parts populated.
    pub fn exchange(
        request_header: impl Into<String>,
        request_body: impl Into<String>,
        response_header: impl Into<String>,
        response_body: impl Into<String>,
    ) -> Self {
        Self {
            request_header: request_header.into(),
            request_body: request_body.into(),
            response_header: response_header.into(),
            response_body: response_body.into(),
        }
    }

    /// Whether a response has been received for this message.
    pub fn has_response(&self) -> bool {
        !self.response_header.is_empty() || !self.response_body.is_empty()
    }
}

/// Shared, mutable handle to the subject message.
///
/// The controller passes clones of this handle to every bound content model;
/// editing views persist pending changes back into the subject through it.
pub type SharedMessage = Arc<Mutex<HttpMessage>>;

/// Wrap a message into a [`SharedMessage`] handle.
pub fn shared(message: HttpMessage) -> SharedMessage {
    Arc::new(Mutex::new(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_constructor_leaves_response_empty() {
        let msg = HttpMessage::request("GET / HTTP/1.1", "");
        assert_eq!(msg.request_header, "GET / HTTP/1.1");
        assert!(!msg.has_response());
    }

    #[test]
    fn exchange_constructor_populates_all_parts() {
        let msg = HttpMessage::exchange("GET / HTTP/1.1", "", "HTTP/1.1 200 OK", "hello");
        assert_eq!(msg.response_body, "hello");
        assert!(msg.has_response());
    }

    #[test]
    fn has_response_true_with_header_only() {
        let msg = HttpMessage::exchange("GET / HTTP/1.1", "", "HTTP/1.1 204 No Content", "");
        assert!(msg.has_response());
    }

    #[test]
    fn shared_handle_edits_are_visible_to_clones() {
        let handle = shared(HttpMessage::request("GET / HTTP/1.1", ""));
        let editor = handle.clone();

        editor.lock().unwrap().request_body = "edited".to_string();

        assert_eq!(handle.lock().unwrap().request_body, "edited");
    }
}
