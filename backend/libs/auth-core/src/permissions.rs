use crate::error::AuthError;
use crate::verifier::ClaimSet;

/// Check a decoded claim set for a required permission string.
///
/// A claim set without a `permissions` collection at all is malformed
/// (`MissingPermissionsClaim`); a present-but-empty collection simply
/// fails the membership check. Membership is an exact, case-sensitive
/// string match. Pure, no side effects.
pub fn check_permissions(claims: &ClaimSet, required: &str) -> Result<(), AuthError> {
    let permissions = claims
        .permissions
        .as_ref()
        .ok_or(AuthError::MissingPermissionsClaim)?;

    if permissions.iter().any(|permission| permission == required) {
        Ok(())
    } else {
        Err(AuthError::PermissionDenied)
    }
}
