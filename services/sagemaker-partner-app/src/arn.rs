use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use partnersign_core::{Error, Result};
use regex::Regex;

use crate::constants::AWS_PARTNER_APP_ARN;

static APP_ARN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^arn:aws[a-z-]*:sagemaker:[a-z0-9-]+:[0-9]{12}:partner-app/.+$")
        .expect("app arn regex must be valid")
});

/// AppArn identifies the SageMaker Partner App a request is sent to.
///
/// The value must look like
/// `arn:aws<partition-suffix>:sagemaker:<region>:<12-digit-account>:partner-app/<name>`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct AppArn {
    arn: String,
    region: String,
}

impl AppArn {
    /// Parse and validate an app arn.
    pub fn parse(arn: &str) -> Result<Self> {
        if !APP_ARN_REGEX.is_match(arn) {
            return Err(Error::config_invalid(format!(
                "app arn {arn:?} is invalid, {AWS_PARTNER_APP_ARN} must look like \
                 arn:aws:sagemaker:<region>:<account>:partner-app/<name>"
            )));
        }

        // The 4th field is guaranteed by the regex above.
        let region = arn
            .split(':')
            .nth(3)
            .ok_or_else(|| Error::config_invalid(format!("app arn {arn:?} has no region")))?
            .to_string();

        Ok(Self {
            arn: arn.to_string(),
            region,
        })
    }

    /// The region encoded in this arn.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// The full arn.
    pub fn as_str(&self) -> &str {
        &self.arn
    }
}

impl FromStr for AppArn {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl AsRef<str> for AppArn {
    fn as_ref(&self) -> &str {
        &self.arn
    }
}

impl fmt::Display for AppArn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.arn)
    }
}

impl fmt::Debug for AppArn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AppArn").field(&self.arn).finish()
    }
}
