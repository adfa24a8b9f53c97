//! Unified error handling for specdeck.
//!
//! - **Error Categories**: coarse classification for handling decisions
//! - **Domain-specific Errors**: document, assistant, and system errors
//! - **Unified Error Type**: `StudioError` consolidates all of them
//! - **Result Type Aliases**: `StudioResult<T>` and `DocumentResult<T>`
//!
//! | Category | Raised by | Retryable |
//! |----------|-----------|-----------|
//! | User | bad YAML/JSON, shape rejection | No |
//! | Auth | missing or rejected API key | No |
//! | Network | connect failure, timeout | Yes |
//! | Server | provider 4xx/5xx, malformed reply | Yes |
//! | Client | serialization of an in-memory value | No |
//! | System | log directory, terminal, socket | No |
//! | Configuration | bad `SPECDECK_*` value or CLI flag | No |

mod assistant;
mod category;
mod document;
mod result;
mod studio_error;
mod system;

pub use assistant::{
    AssistantError, CREDENTIAL_MESSAGE, GENERIC_MESSAGE, MISSING_CREDENTIAL_MESSAGE,
};
pub use category::ErrorCategory;
pub use document::{DocumentError, ShapeViolation};
pub use result::{DocumentResult, StudioResult};
pub use studio_error::StudioError;
pub use system::SystemError;

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::spec::SpecFormat;

    #[test]
    fn test_error_unification() {
        let doc_err: StudioError = DocumentError::parse(SpecFormat::Yaml, "bad indent").into();
        let shape_err: StudioError = DocumentError::Shape(ShapeViolation::Info).into();
        let auth_err: StudioError = AssistantError::Unauthorized("401".to_string()).into();
        let net_err: StudioError = AssistantError::Timeout("60s".to_string()).into();
        let srv_err: StudioError = AssistantError::Server {
            status: 503,
            message: "unavailable".to_string(),
        }
        .into();
        let sys_err: StudioError = SystemError::NoDataDirectory.into();
        let cfg_err = StudioError::config("SPECDECK_PREVIEW_PORT", "not a number");

        assert_eq!(doc_err.category(), ErrorCategory::User);
        assert_eq!(shape_err.category(), ErrorCategory::User);
        assert_eq!(auth_err.category(), ErrorCategory::Auth);
        assert_eq!(net_err.category(), ErrorCategory::Network);
        assert_eq!(srv_err.category(), ErrorCategory::Server);
        assert_eq!(sys_err.category(), ErrorCategory::System);
        assert_eq!(cfg_err.category(), ErrorCategory::Configuration);

        for err in [&doc_err, &shape_err, &auth_err, &net_err, &srv_err, &sys_err, &cfg_err] {
            assert!(!err.error_code().is_empty());
            assert!(!err.user_message().is_empty());
        }
    }

    #[test]
    fn test_retry_logic() {
        let net_err: StudioError = AssistantError::Connection("refused".to_string()).into();
        assert!(net_err.is_retryable());

        let doc_err: StudioError = DocumentError::Shape(ShapeViolation::Paths).into();
        assert!(!doc_err.is_retryable());

        let auth_err: StudioError = AssistantError::MissingCredential.into();
        assert!(!auth_err.is_retryable());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: StudioError = io_err.into();
        assert!(matches!(err, StudioError::System(_)));
        assert_eq!(err.category(), ErrorCategory::System);
    }
}
