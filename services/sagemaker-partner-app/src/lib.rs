//! Sign requests to Amazon SageMaker Partner Apps.
//!
//! Partner app requests carry a few extra headers and are then signed with
//! AWS SigV4 for the `sagemaker` service in the app's region:
//!
//! - `x-sagemaker-partner-app-server-arn`: the app arn
//! - `x-amz-target`: `SageMaker.CallPartnerAppApi`
//! - `x-amz-content-sha256`: the payload hash
//! - `x-amz-partner-app-authorization`: the caller's own `Authorization`, if any
//!
//! [`PartnerAppAuthProvider`] is the entry point. Use
//! [`PartnerAppAuthProvider::get_signed_request`] directly, or plug
//! [`PartnerAppAuthProvider::auth`] into a `reqwest_middleware` client.

#![warn(missing_docs)]

mod constants;

mod arn;
pub use arn::AppArn;

mod config;
pub use config::{Config, StreamingPayload};

mod credential;
pub use credential::Credential;

mod provide_credential;
pub use provide_credential::*;

mod sign_request;
pub use sign_request::RequestSigner;

pub mod rewrite;
pub use rewrite::{body_hash, RequestConfig, SignedRequest};

mod provider;
pub use provider::{PartnerAppAuthProvider, PartnerAppInterceptor};

mod middleware;

pub use constants::{EMPTY_SHA256_HASH, UNSIGNED_PAYLOAD};
