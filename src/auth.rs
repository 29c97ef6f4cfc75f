//! Authorization boundary.
//!
//! The scheduler consumes an OAuth access token opaquely; obtaining one is a
//! single implicit-flow redirect against Google's authorization endpoint,
//! with the token delivered back in the redirect URL's fragment.

use crate::url::build_url;

/// Google OAuth2 authorization endpoint used for the implicit flow.
const AUTH_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";

/// The OAuth client ID for this application.
pub const OAUTH_CLIENT_ID: &str =
    "602354871220-qv3fd0kt7h3kg3kcs2brmp3uvlmkq9ad.apps.googleusercontent.com";

/// Scope required to read and reschedule the channel's videos.
const SCOPE: &str = "https://www.googleapis.com/auth/youtube";

/// Builds the implicit-flow authorization URL that redirects back to
/// `redirect_uri` with an access token in the URL fragment.
pub fn authorization_url(redirect_uri: &str) -> String {
    build_url(
        AUTH_ENDPOINT,
        [
            ("client_id", Some(OAUTH_CLIENT_ID)),
            ("redirect_uri", Some(redirect_uri)),
            ("response_type", Some("token")),
            ("scope", Some(SCOPE)),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_an_implicit_flow_token() {
        let url = authorization_url("http://localhost:8080/scheduler");
        assert!(url.starts_with("https://accounts.google.com/o/oauth2/v2/auth?"));
        assert!(url.contains("response_type=token"));
        assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A8080%2Fscheduler"));
        assert!(url.contains("scope=https%3A%2F%2Fwww.googleapis.com%2Fauth%2Fyoutube"));
    }
}
