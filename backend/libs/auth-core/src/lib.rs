//! Authorization core for the casting agency backend.
//!
//! Protected operations are guarded by a chain of three checks, composed
//! by [`AuthGate`]:
//! - `extractor`: pulls the bearer token out of the `Authorization` header
//! - `verifier`: validates the token signature and standard claims against
//!   the issuer's published key set
//! - `permissions`: checks the decoded claims for a required capability
//!   string such as `"post:actors"`
//!
//! Every failure maps to a stable machine-readable code and an HTTP status
//! via [`AuthError`]. The gate never retries: a denial is terminal for the
//! request.

pub mod error;
pub mod extractor;
pub mod gate;
pub mod jwks;
pub mod permissions;
pub mod verifier;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::AuthError;
pub use extractor::extract_bearer_token;
pub use gate::AuthGate;
pub use jwks::{Jwk, JwkSet, JwksCache};
pub use permissions::check_permissions;
pub use verifier::{Audience, ClaimSet, TokenVerifier};
