use crate::error::AuthError;

/// Pull the bearer token out of an `Authorization` header value.
///
/// The value must split into exactly two whitespace-separated parts with
/// a case-insensitive `Bearer` scheme. Pure function of the header value,
/// no side effects.
pub fn extract_bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    let value = header.ok_or(AuthError::MissingAuthorization)?;

    let mut parts = value.split_whitespace();
    let scheme = parts.next().ok_or(AuthError::MalformedHeader)?;
    let token = parts.next().ok_or(AuthError::MalformedHeader)?;
    if parts.next().is_some() {
        return Err(AuthError::MalformedHeader);
    }

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::InvalidScheme);
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_header_is_rejected() {
        assert_eq!(
            extract_bearer_token(None),
            Err(AuthError::MissingAuthorization)
        );
    }

    #[test]
    fn empty_value_is_malformed() {
        assert_eq!(extract_bearer_token(Some("")), Err(AuthError::MalformedHeader));
    }

    #[test]
    fn scheme_without_token_is_malformed() {
        assert_eq!(
            extract_bearer_token(Some("Bearer")),
            Err(AuthError::MalformedHeader)
        );
    }

    #[test]
    fn extra_segments_are_malformed() {
        assert_eq!(
            extract_bearer_token(Some("Bearer abc def")),
            Err(AuthError::MalformedHeader)
        );
    }

    #[test]
    fn wrong_scheme_is_rejected() {
        assert_eq!(
            extract_bearer_token(Some("Token abc")),
            Err(AuthError::InvalidScheme)
        );
        assert_eq!(
            extract_bearer_token(Some("Basic abc")),
            Err(AuthError::InvalidScheme)
        );
    }

    #[test]
    fn scheme_match_is_case_insensitive() {
        assert_eq!(extract_bearer_token(Some("bearer abc")), Ok("abc"));
        assert_eq!(extract_bearer_token(Some("BEARER abc")), Ok("abc"));
        assert_eq!(extract_bearer_token(Some("Bearer abc")), Ok("abc"));
    }
}
