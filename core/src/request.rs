use std::fmt::Write;
use std::str::FromStr;

use bytes::Bytes;
use http::uri::Scheme;
use http::HeaderMap;
use http::Method;
use http::Uri;

use crate::{Error, Result};

/// Body of a request to be signed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Body {
    /// No body at all.
    #[default]
    Empty,
    /// Raw bytes.
    Bytes(Bytes),
    /// UTF-8 text, hashed as its encoded bytes.
    Text(String),
    /// A body whose content is not available up front, e.g. a byte stream.
    Streaming,
}

impl Body {
    /// Returns the body content, or `None` for [`Body::Streaming`].
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Body::Empty => Some(&[][..]),
            Body::Bytes(bs) => Some(&bs[..]),
            Body::Text(s) => Some(s.as_bytes()),
            Body::Streaming => None,
        }
    }

    /// Returns true if the body is known to carry no content.
    pub fn is_empty(&self) -> bool {
        matches!(self.as_bytes(), Some(bs) if bs.is_empty())
    }
}

impl From<&'static str> for Body {
    fn from(s: &'static str) -> Self {
        Body::Text(s.to_string())
    }
}

impl From<String> for Body {
    fn from(s: String) -> Self {
        Body::Text(s)
    }
}

impl From<Vec<u8>> for Body {
    fn from(bs: Vec<u8>) -> Self {
        Body::Bytes(Bytes::from(bs))
    }
}

impl From<Bytes> for Body {
    fn from(bs: Bytes) -> Self {
        Body::Bytes(bs)
    }
}

impl<T: Into<Body>> From<Option<T>> for Body {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or_default()
    }
}

/// SigningRequest is the canonical request descriptor handed to a signer.
#[derive(Debug, Clone)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP scheme.
    pub scheme: Scheme,
    /// Host name without port.
    pub hostname: String,
    /// Explicit port, if the url carried one.
    pub port: Option<u16>,
    /// Path and query, always starting with `/`.
    pub path: String,
    /// HTTP headers.
    pub headers: HeaderMap,
    /// Request body.
    pub body: Body,
}

impl SigningRequest {
    /// Build a signing request from an absolute url.
    ///
    /// The url must already be a valid URI: callers are responsible for any
    /// percent-encoding they want applied.
    pub fn build(method: Method, url: &str, headers: HeaderMap, body: Body) -> Result<Self> {
        let uri = Uri::from_str(url)?;

        let scheme = uri
            .scheme()
            .cloned()
            .ok_or_else(|| Error::request_invalid(format!("url {url} has no scheme")))?;
        let hostname = uri
            .host()
            .ok_or_else(|| Error::request_invalid(format!("url {url} has no host")))?
            .to_string();

        let mut path = uri.path().to_string();
        if path.is_empty() {
            path.push('/');
        }
        if let Some(query) = uri.query() {
            path.push('?');
            path.push_str(query);
        }

        Ok(SigningRequest {
            method,
            scheme,
            hostname,
            port: uri.port_u16(),
            path,
            headers,
            body,
        })
    }

    /// Rebuild the absolute url this request targets.
    pub fn url(&self) -> String {
        let mut s = String::with_capacity(
            self.scheme.as_str().len() + self.hostname.len() + self.path.len() + 9,
        );
        // Writing into a String never fails.
        let _ = write!(s, "{}://{}", self.scheme, self.hostname);
        if let Some(port) = self.port {
            let _ = write!(s, ":{port}");
        }
        s.push_str(&self.path);
        s
    }
}
