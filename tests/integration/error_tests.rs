//! Error handling integration tests
//!
//! Verifies HTTP status mapping, the response envelope, and which
//! error details are masked before they reach a client.

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;
    use actix_web::ResponseError;
    use serde_json::Value;
    use workbench_rs::PortalError;

    async fn body_of(err: PortalError) -> Value {
        let resp = err.error_response();
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn jwt_error() -> PortalError {
        PortalError::from(jsonwebtoken::errors::Error::from(
            jsonwebtoken::errors::ErrorKind::InvalidToken,
        ))
    }

    // ==================== Status Mapping ====================

    /// Test the HTTP status for every client-visible variant
    #[test]
    fn test_status_mapping() {
        let cases = [
            (PortalError::validation("bad input"), 400),
            (PortalError::bad_request("bad shape"), 400),
            (PortalError::unauthorized("who are you"), 401),
            (jwt_error(), 401),
            (PortalError::forbidden("not yours"), 403),
            (PortalError::not_found("gone"), 404),
            (PortalError::conflict("already there"), 409),
            (PortalError::completion("provider down"), 502),
            (PortalError::config("bad setting"), 500),
            (PortalError::internal("boom"), 500),
        ];

        for (err, expected) in cases {
            let status = err.error_response().status().as_u16();
            assert_eq!(status, expected, "wrong status for {}", err);
        }
    }

    /// Test that wrapped library errors map to 500
    #[test]
    fn test_wrapped_library_errors_are_internal() {
        let json_err = serde_json::from_str::<Value>("{").unwrap_err();
        let err = PortalError::from(json_err);
        assert_eq!(err.error_response().status().as_u16(), 500);

        let io_err = std::io::Error::other("disk fell out");
        let err = PortalError::from(io_err);
        assert_eq!(err.error_response().status().as_u16(), 500);
    }

    // ==================== Response Envelope ====================

    /// Test the envelope shape: code, message, timestamp
    #[tokio::test]
    async fn test_envelope_shape() {
        let body = body_of(PortalError::not_found("User not found")).await;

        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert_eq!(body["error"]["message"], "Not found: User not found");
        assert!(body["error"]["timestamp"].as_i64().unwrap() > 0);
    }

    /// Test the error code for each variant
    #[tokio::test]
    async fn test_error_codes() {
        let cases = [
            (PortalError::validation("x"), "VALIDATION_ERROR"),
            (PortalError::bad_request("x"), "BAD_REQUEST"),
            (PortalError::unauthorized("x"), "UNAUTHORIZED"),
            (PortalError::forbidden("x"), "FORBIDDEN"),
            (PortalError::conflict("x"), "CONFLICT"),
            (PortalError::completion("x"), "COMPLETION_ERROR"),
            (PortalError::config("x"), "CONFIG_ERROR"),
            (PortalError::internal("x"), "INTERNAL_ERROR"),
        ];

        for (err, code) in cases {
            let body = body_of(err).await;
            assert_eq!(body["error"]["code"], code);
        }
    }

    // ==================== Masking ====================

    /// Test that token errors never leak their detail
    #[tokio::test]
    async fn test_jwt_detail_is_masked() {
        let body = body_of(jwt_error()).await;

        assert_eq!(body["error"]["code"], "UNAUTHORIZED");
        assert_eq!(body["error"]["message"], "Invalid or expired token");
    }

    /// Test that internal errors never leak their detail
    #[tokio::test]
    async fn test_internal_detail_is_masked() {
        let body = body_of(PortalError::internal("connection string leaked")).await;

        assert_eq!(body["error"]["message"], "An internal error occurred");
    }

    // ==================== Display ====================

    /// Test the display prefixes used in logs
    #[test]
    fn test_display_prefixes() {
        assert_eq!(
            PortalError::validation("name required").to_string(),
            "Validation error: name required"
        );
        assert_eq!(
            PortalError::forbidden("admins only").to_string(),
            "Forbidden: admins only"
        );
        assert_eq!(
            PortalError::conflict("duplicate member").to_string(),
            "Conflict: duplicate member"
        );
        assert_eq!(
            PortalError::completion("upstream 500").to_string(),
            "Completion error: upstream 500"
        );
        assert_eq!(
            PortalError::config("missing key").to_string(),
            "Configuration error: missing key"
        );
    }

    /// Test that helper constructors build the matching variants
    #[test]
    fn test_helpers_build_matching_variants() {
        assert!(matches!(
            PortalError::validation("x"),
            PortalError::Validation(_)
        ));
        assert!(matches!(
            PortalError::bad_request("x"),
            PortalError::BadRequest(_)
        ));
        assert!(matches!(
            PortalError::unauthorized("x"),
            PortalError::Unauthorized(_)
        ));
        assert!(matches!(
            PortalError::forbidden("x"),
            PortalError::Forbidden(_)
        ));
        assert!(matches!(
            PortalError::not_found("x"),
            PortalError::NotFound(_)
        ));
        assert!(matches!(PortalError::conflict("x"), PortalError::Conflict(_)));
        assert!(matches!(
            PortalError::completion("x"),
            PortalError::Completion(_)
        ));
        assert!(matches!(PortalError::internal("x"), PortalError::Internal(_)));
    }
}
