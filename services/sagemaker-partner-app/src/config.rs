use std::fmt::{Debug, Formatter};

use partnersign_core::utils::Redact;
use partnersign_core::Context;

use crate::constants::AWS_PARTNER_APP_ARN;

/// How a body whose bytes are not available up front is signed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StreamingPayload {
    /// Fail the signing call with `BodyUnsupported`.
    #[default]
    Reject,
    /// Sign with the `UNSIGNED-PAYLOAD` sentinel as the payload hash.
    Unsigned,
}

/// Config for the partner app auth provider.
#[derive(Clone, Default)]
pub struct Config {
    /// The partner app arn, read from `AWS_PARTNER_APP_ARN` by [`Config::from_env`].
    pub app_arn: Option<String>,
    /// Explicit access key id. Together with `secret_access_key` it bypasses
    /// credential discovery.
    pub access_key_id: Option<String>,
    /// Explicit secret access key.
    pub secret_access_key: Option<String>,
    /// Explicit session token, only used with the explicit key pair.
    pub session_token: Option<String>,
    /// Policy for streamed bodies.
    pub streaming_payload: StreamingPayload,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("app_arn", &self.app_arn)
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .field("session_token", &Redact::from(&self.session_token))
            .field("streaming_payload", &self.streaming_payload)
            .finish()
    }
}

impl Config {
    /// Load the app arn from env. A value already set in the config wins.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if self.app_arn.is_none() {
            self.app_arn = ctx.env_var(AWS_PARTNER_APP_ARN);
        }
        self
    }

    /// Set the app arn.
    pub fn with_app_arn(mut self, arn: impl Into<String>) -> Self {
        self.app_arn = Some(arn.into());
        self
    }

    /// Set an explicit identity, skipping credential discovery.
    pub fn with_credential(
        mut self,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
    ) -> Self {
        self.access_key_id = Some(access_key_id.into());
        self.secret_access_key = Some(secret_access_key.into());
        self
    }

    /// Set the session token for the explicit identity.
    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    /// Set the policy for streamed bodies.
    pub fn with_streaming_payload(mut self, policy: StreamingPayload) -> Self {
        self.streaming_payload = policy;
        self
    }
}
