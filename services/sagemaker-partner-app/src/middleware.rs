use async_trait::async_trait;
use bytes::Bytes;
use http::Extensions;
use partnersign_core::{Body, Error};
use reqwest::{Request, Response, Url};
use reqwest_middleware::{Middleware, Next};

use crate::PartnerAppInterceptor;

/// Convert a reqwest body into a signable body.
///
/// Bodies backed by a stream have no bytes up front and become [`Body::Streaming`].
fn signable_body(body: Option<&reqwest::Body>) -> Body {
    match body {
        None => Body::Empty,
        Some(body) => match body.as_bytes() {
            Some(bs) => Body::Bytes(Bytes::copy_from_slice(bs)),
            None => Body::Streaming,
        },
    }
}

#[async_trait]
impl Middleware for PartnerAppInterceptor {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let signed = self
            .provider
            .get_signed_request(
                req.url().as_str(),
                req.method().clone(),
                req.headers(),
                signable_body(req.body()),
            )
            .await
            .map_err(reqwest_middleware::Error::middleware)?;

        let url = Url::parse(&signed.url).map_err(|e| {
            reqwest_middleware::Error::middleware(
                Error::request_invalid(format!("signed url {} is invalid", signed.url))
                    .with_source(e),
            )
        })?;
        *req.url_mut() = url;
        *req.headers_mut() = signed.headers;

        next.run(req, extensions).await
    }
}
