//! HTTP seam between the clients and the network.
//!
//! Clients only build an [`HttpRequest`] and read an [`HttpResponse`]; the
//! [`Transport`] implementation owns the actual I/O. Error statuses come back
//! as responses so the service's own error text can be read from the body.

use std::time::Duration;
use thiserror::Error;

const USER_AGENT: &str = "yageo/0.3 (geolocation client)";

/// Opaque network failure (connect error, timeout, unreadable body).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// An outbound request. `query` goes into the URL, `form` into an
/// `application/x-www-form-urlencoded` body.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub form: Vec<(String, String)>,
    pub timeout: Duration,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            query: Vec::new(),
            form: Vec::new(),
            timeout,
        }
    }

    pub fn post_form(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            method: Method::Post,
            ..Self::get(url, timeout)
        }
    }

    pub fn query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_string(), value.into()));
        self
    }

    pub fn form(mut self, key: &str, value: impl Into<String>) -> Self {
        self.form.push((key.to_string(), value.into()));
        self
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        lookup(&self.query, key)
    }

    pub fn form_value(&self, key: &str) -> Option<&str> {
        lookup(&self.form, key)
    }

    /// Human-readable rendering of the parameters, attached to service errors.
    pub fn describe(&self) -> String {
        let pairs = match self.method {
            Method::Get => &self.query,
            Method::Post => &self.form,
        };
        pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn lookup<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs exactly one request-response exchange. No retries.
pub trait Transport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request)
    }
}

/// Default transport backed by `ureq`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UreqTransport;

impl Transport for UreqTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut req = match request.method {
            Method::Get => ureq::get(&request.url),
            Method::Post => ureq::post(&request.url),
        }
        .set("User-Agent", USER_AGENT)
        .set("Accept", "*/*")
        .timeout(request.timeout);

        for (key, value) in &request.query {
            req = req.query(key, value);
        }

        let result = match request.method {
            Method::Get => req.call(),
            Method::Post => {
                let form: Vec<(&str, &str)> = request
                    .form
                    .iter()
                    .map(|(k, v)| (k.as_str(), v.as_str()))
                    .collect();
                req.send_form(&form)
            }
        };

        let response = match result {
            Ok(response) => response,
            Err(ureq::Error::Status(_, response)) => response,
            Err(e) => return Err(TransportError::new(e.to_string())),
        };

        let status = response.status();
        let body = response
            .into_string()
            .map_err(|e| TransportError::new(e.to_string()))?;

        Ok(HttpResponse {
            status,
            body: body.trim().to_string(),
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder_collects_pairs() {
        let req = HttpRequest::get("http://example.test/", Duration::from_secs(5))
            .query("geocode", "Moscow")
            .query("results", "1");
        assert_eq!(req.method, Method::Get);
        assert_eq!(req.query_value("geocode"), Some("Moscow"));
        assert_eq!(req.query_value("missing"), None);
        assert_eq!(req.describe(), "geocode=Moscow&results=1");
    }

    #[test]
    fn test_post_describe_uses_form() {
        let req = HttpRequest::post_form("http://example.test/", Duration::from_secs(5))
            .form("json", "{}");
        assert_eq!(req.method, Method::Post);
        assert!(req.query.is_empty());
        assert_eq!(req.describe(), "json={}");
    }

    #[test]
    fn test_response_success_range() {
        let ok = HttpResponse { status: 200, body: String::new() };
        let denied = HttpResponse { status: 403, body: String::new() };
        assert!(ok.is_success());
        assert!(!denied.is_success());
    }

    #[test]
    fn test_fake_transport_replays_in_order() {
        use testing::FakeTransport;
        let fake = FakeTransport::replying(200, "first");
        fake.push(Err(TransportError::new("down")));
        let req = HttpRequest::get("http://example.test/", Duration::from_secs(1));

        assert_eq!(fake.send(&req).unwrap().body, "first");
        assert_eq!(fake.send(&req).unwrap_err().message, "down");
        assert!(fake.send(&req).is_err());
        assert_eq!(fake.sent_count(), 3);
    }
}
