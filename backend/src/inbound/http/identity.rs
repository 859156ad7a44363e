//! Caller identity resolution for guarded endpoints.
//!
//! Authentication is out of scope: the identity arrives pre-resolved in the
//! `x-user-id` header and is trusted verbatim. Some operations also accept a
//! body-supplied `ownerId` fallback; the header wins when both are present.
//! Handlers for ungated operations simply never extract an identity.

use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::{Ready, ready};

use crate::domain::{Error, UserId};

/// Header carrying the pre-resolved caller identity.
pub const USER_ID_HEADER: &str = "x-user-id";

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Caller identity as supplied by the transport, possibly absent.
///
/// Guarded handlers call [`CallerIdentity::resolve`] with their body
/// fallback; the error for a fully absent identity is `identity_required`
/// (HTTP 400), raised before any aggregate is loaded.
#[derive(Debug, Clone, Default)]
pub struct CallerIdentity(Option<String>);

impl CallerIdentity {
    /// Read the identity header from a request.
    pub fn from_header(req: &HttpRequest) -> Self {
        let raw = req
            .headers()
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(non_blank);
        Self(raw)
    }

    /// Resolve the identity, preferring the header over the body fallback.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::ErrorCode;
    /// use backend::inbound::http::identity::CallerIdentity;
    ///
    /// let absent = CallerIdentity::default();
    /// let err = absent.resolve(None).expect_err("no identity supplied");
    /// assert_eq!(err.code(), ErrorCode::IdentityRequired);
    /// ```
    pub fn resolve(self, body_fallback: Option<String>) -> Result<UserId, Error> {
        let raw = self
            .0
            .or_else(|| body_fallback.as_deref().and_then(non_blank))
            .ok_or_else(|| Error::identity_required("caller identity is required"))?;
        UserId::new(raw).map_err(|err| Error::identity_required(err.to_string()))
    }
}

impl FromRequest for CallerIdentity {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(Self::from_header(req)))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use actix_web::test::TestRequest;
    use rstest::rstest;

    use super::*;
    use crate::domain::ErrorCode;

    fn identity_with_header(value: &str) -> CallerIdentity {
        let req = TestRequest::default()
            .insert_header((USER_ID_HEADER, value))
            .to_http_request();
        CallerIdentity::from_header(&req)
    }

    #[test]
    fn header_identity_wins_over_body_fallback() {
        let identity = identity_with_header("user-1");
        let resolved = identity
            .resolve(Some("user-2".to_owned()))
            .expect("resolves");
        assert_eq!(resolved.as_str(), "user-1");
    }

    #[test]
    fn body_fallback_applies_when_the_header_is_absent() {
        let req = TestRequest::default().to_http_request();
        let identity = CallerIdentity::from_header(&req);
        let resolved = identity
            .resolve(Some("user-2".to_owned()))
            .expect("resolves");
        assert_eq!(resolved.as_str(), "user-2");
    }

    #[rstest]
    #[case(None)]
    #[case(Some(String::new()))]
    #[case(Some("   ".to_owned()))]
    fn absent_identity_is_rejected_before_any_load(#[case] fallback: Option<String>) {
        let req = TestRequest::default().to_http_request();
        let identity = CallerIdentity::from_header(&req);
        let err = identity.resolve(fallback).expect_err("nothing supplied");
        assert_eq!(err.code(), ErrorCode::IdentityRequired);
    }

    #[test]
    fn blank_header_counts_as_absent() {
        let identity = identity_with_header("   ");
        let resolved = identity
            .resolve(Some("user-2".to_owned()))
            .expect("falls back to body");
        assert_eq!(resolved.as_str(), "user-2");
    }

    #[test]
    fn header_identity_is_trimmed() {
        let identity = identity_with_header(" user-1 ");
        let resolved = identity.resolve(None).expect("resolves");
        assert_eq!(resolved.as_str(), "user-1");
    }
}
