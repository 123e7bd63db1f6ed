// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use expense_tracker_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn network() {
        let err = CoreError::Network("connection refused".into());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn backend_carries_status_and_body() {
        let err = CoreError::Backend {
            status: 400,
            message: "Amount must be greater than zero".into(),
        };
        assert_eq!(
            err.to_string(),
            "Backend returned status 400: Amount must be greater than zero"
        );
    }

    #[test]
    fn backend_with_empty_body() {
        let err = CoreError::Backend {
            status: 500,
            message: String::new(),
        };
        assert_eq!(err.to_string(), "Backend returned status 500: ");
    }

    #[test]
    fn deserialization() {
        let err = CoreError::Deserialization("missing field `amount`".into());
        assert_eq!(
            err.to_string(),
            "Deserialization error: missing field `amount`"
        );
    }

    #[test]
    fn validation() {
        let err = CoreError::Validation("Please fill in all fields".into());
        assert_eq!(
            err.to_string(),
            "Validation failed: Please fill in all fields"
        );
    }
}

// ── From conversions ────────────────────────────────────────────────

mod from_impls {
    use super::*;

    #[test]
    fn serde_json_errors_become_deserialization() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<CoreError>();
    }
}
