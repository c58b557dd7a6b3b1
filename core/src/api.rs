use crate::{Context, Result, SigningRequest};
use std::fmt::Debug;

/// SigningCredential is the trait used by signers to check the loaded credential.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is valid.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(cred) = self else {
            return false;
        };

        cred.is_valid()
    }
}

/// ProvideCredential is the trait used by signers to load the credential from the environment.
///
/// Implementations return `Ok(None)` when their source holds no credential, so that
/// chains can fall through to the next provider.
#[async_trait::async_trait]
pub trait ProvideCredential: Debug + Send + Sync + Unpin + 'static {
    /// Credential returned by this loader.
    type Credential: Send + Sync + Unpin + 'static;

    /// Load signing credential from current env.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}

/// SignRequest is the signer capability: it adds authentication headers to a
/// canonical request descriptor.
///
/// The descriptor is mutated in place; implementations add their signature
/// headers to [`SigningRequest::headers`] and must leave the rest untouched.
#[async_trait::async_trait]
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Sign the request.
    async fn sign_request(&self, ctx: &Context, req: &mut SigningRequest) -> Result<()>;
}
