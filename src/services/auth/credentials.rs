//! `Authorization: Basic <base64(user:pass)>` parsing.
//!
//! Every way the header can be unusable (missing, wrong scheme, bad base64, no colon)
//! collapses into `None`; callers must not be able to tell them apart.

use std::fmt;

use axum::http::HeaderValue;
use base64::{Engine, engine::general_purpose::STANDARD};

const SCHEME: &str = "basic";

/// Username/password pair taken from one request.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    pub fn from_authorization(header: Option<&HeaderValue>) -> Option<Self> {
        let value = header?.to_str().ok()?;

        let (scheme, token) = value.trim_start().split_once(' ')?;
        if !scheme.eq_ignore_ascii_case(SCHEME) {
            return None;
        }

        let decoded = STANDARD.decode(token.trim()).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;

        // user-id cannot contain ':' (RFC 7617), the password can
        let (username, password) = decoded.split_once(':')?;

        Some(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Option<Credentials> {
        let header = HeaderValue::from_str(raw).unwrap();
        Credentials::from_authorization(Some(&header))
    }

    fn basic(pair: &str) -> String {
        format!("Basic {}", STANDARD.encode(pair))
    }

    #[test]
    fn parses_basic_header() {
        let creds = parse("Basic am9lQGV4YW1wbGUuY29tOnNlY3JldA==").unwrap();
        assert_eq!(creds.username, "joe@example.com");
        assert_eq!(creds.password, "secret");
    }

    #[test]
    fn scheme_is_case_insensitive() {
        assert!(parse(&basic("joe:pw").replace("Basic", "basic")).is_some());
        assert!(parse(&basic("joe:pw").replace("Basic", "BASIC")).is_some());
    }

    #[test]
    fn password_may_contain_colons_and_be_empty() {
        let creds = parse(&basic("joe:a:b:c")).unwrap();
        assert_eq!(creds.username, "joe");
        assert_eq!(creds.password, "a:b:c");

        let creds = parse(&basic("joe:")).unwrap();
        assert_eq!(creds.password, "");
    }

    #[test]
    fn unusable_headers_are_absent() {
        assert_eq!(Credentials::from_authorization(None), None);
        assert_eq!(parse("Bearer am9lQGV4YW1wbGUuY29tOnNlY3JldA=="), None);
        assert_eq!(parse("Basic"), None);
        assert_eq!(parse("Basic !!!not-base64!!!"), None);
        assert_eq!(parse(&basic("no-colon-here")), None);
        assert_eq!(parse(&format!("Basic {}", STANDARD.encode([0xff, 0xfe, b':']))), None);
    }

    #[test]
    fn debug_redacts_password() {
        let creds = parse(&basic("joe:hunter2")).unwrap();
        let shown = format!("{creds:?}");
        assert!(shown.contains("joe"));
        assert!(!shown.contains("hunter2"));
    }
}
