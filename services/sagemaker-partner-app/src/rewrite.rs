//! The partner app header policy applied around a SigV4 signer.

use http::header::{self, HeaderValue};
use http::{HeaderMap, Method};
use log::debug;
use partnersign_core::hash::hex_sha256;
use partnersign_core::{Body, Context, Error, Result, SignRequest, SigningRequest};

use crate::constants::*;
use crate::{AppArn, StreamingPayload};

/// A request as seen by a generic http client before it is sent.
#[derive(Debug, Clone)]
pub struct RequestConfig {
    /// Absolute url of the request.
    pub url: String,
    /// HTTP method.
    pub method: Method,
    /// HTTP headers.
    pub headers: HeaderMap,
    /// Request body.
    pub data: Body,
}

impl RequestConfig {
    /// Create a request config without headers or body.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method,
            headers: HeaderMap::new(),
            data: Body::Empty,
        }
    }
}

/// The url and headers to send after signing.
#[derive(Debug, Clone, PartialEq)]
pub struct SignedRequest {
    /// Url with literal spaces encoded as `%20`.
    pub url: String,
    /// Caller headers plus the partner app and signature headers.
    pub headers: HeaderMap,
}

/// Compute the `x-amz-content-sha256` value for a body.
///
/// Empty bodies hash to [`EMPTY_SHA256_HASH`]. Streamed bodies follow `policy`.
pub fn body_hash(body: &Body, policy: StreamingPayload) -> Result<String> {
    match body.as_bytes() {
        Some([]) => Ok(EMPTY_SHA256_HASH.to_string()),
        Some(bs) => Ok(hex_sha256(bs)),
        None => match policy {
            StreamingPayload::Reject => Err(Error::body_unsupported(
                "streamed bodies can't be hashed, buffer the body or opt in to unsigned payloads",
            )),
            StreamingPayload::Unsigned => Ok(UNSIGNED_PAYLOAD.to_string()),
        },
    }
}

/// Rewrite `req` with the partner app headers and sign it with `signer`.
///
/// The caller's headers are never modified. `Connection` is hidden from the
/// signer and restored on the result. The caller's `Authorization` is copied
/// to `x-amz-partner-app-authorization`; the signer is expected to replace the
/// original with its own signature.
pub async fn sign_request(
    ctx: &Context,
    signer: &dyn SignRequest,
    app_arn: &AppArn,
    policy: StreamingPayload,
    req: RequestConfig,
) -> Result<SignedRequest> {
    let RequestConfig {
        url,
        method,
        mut headers,
        data,
    } = req;

    if let Some(mut auth) = headers.get(header::AUTHORIZATION).cloned() {
        auth.set_sensitive(true);
        headers.insert(X_AMZ_PARTNER_APP_AUTHORIZATION, auth);
    }
    headers.insert(
        X_SAGEMAKER_PARTNER_APP_SERVER_ARN,
        HeaderValue::from_str(app_arn.as_str())?,
    );
    headers.insert(
        X_AMZ_TARGET,
        HeaderValue::from_static(CALL_PARTNER_APP_API_ACTION),
    );
    headers.insert(
        X_AMZ_CONTENT_SHA_256,
        HeaderValue::from_str(&body_hash(&data, policy)?)?,
    );

    let connection: Vec<HeaderValue> = headers
        .get_all(header::CONNECTION)
        .iter()
        .cloned()
        .collect();
    headers.remove(header::CONNECTION);

    let url = url.replace(' ', "%20");
    debug!("signing partner app request: {method} {url}");

    let mut signing_req = SigningRequest::build(method, &url, headers, data)?;
    signer.sign_request(ctx, &mut signing_req).await?;

    let mut headers = signing_req.headers;
    for value in connection {
        headers.append(header::CONNECTION, value);
    }

    Ok(SignedRequest { url, headers })
}
