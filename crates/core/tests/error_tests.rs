// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use fx_viewer_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn upstream_error() {
        let err = CoreError::Upstream {
            provider: "Alpha Vantage".into(),
            message: "No time series data for DIA".into(),
        };
        assert_eq!(
            err.to_string(),
            "Upstream error (Alpha Vantage): No time series data for DIA"
        );
    }

    #[test]
    fn upstream_helper_matches_struct_variant() {
        let err = CoreError::upstream("Frankfurter", "boom");
        match err {
            CoreError::Upstream { provider, message } => {
                assert_eq!(provider, "Frankfurter");
                assert_eq!(message, "boom");
            }
            other => panic!("Expected Upstream, got {:?}", other),
        }
    }

    #[test]
    fn network() {
        let err = CoreError::Network("connection refused".into());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn deserialization() {
        let err = CoreError::Deserialization("unexpected EOF".into());
        assert_eq!(err.to_string(), "Deserialization error: unexpected EOF");
    }

    #[test]
    fn empty_upstream_names_the_side() {
        let err = CoreError::EmptyUpstream("prices".into());
        assert_eq!(err.to_string(), "No data fetched for prices");
    }

    #[test]
    fn no_overlap_points_at_the_date_range() {
        let msg = CoreError::NoOverlap.to_string();
        assert!(msg.contains("do not overlap"));
        assert!(msg.contains("date range"));
    }

    #[test]
    fn empty_upstream_and_no_overlap_read_differently() {
        let empty = CoreError::EmptyUpstream("prices".into()).to_string();
        let overlap = CoreError::NoOverlap.to_string();
        assert_ne!(empty, overlap);
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(
            CoreError::DivisionByZero.to_string(),
            "Percentage change is undefined: division by zero"
        );
    }

    #[test]
    fn non_finite() {
        assert_eq!(
            CoreError::NonFinite.to_string(),
            "Percentage change is undefined: result is not a finite number"
        );
    }

    #[test]
    fn validation() {
        let err = CoreError::Validation("Symbol must not be empty".into());
        assert_eq!(err.to_string(), "Validation failed: Symbol must not be empty");
    }
}

// ── Classification ──────────────────────────────────────────────────

mod classification {
    use super::*;

    #[test]
    fn upstream_kinds() {
        assert!(CoreError::upstream("p", "m").is_upstream());
        assert!(CoreError::Network("x".into()).is_upstream());
        assert!(CoreError::Deserialization("x".into()).is_upstream());
    }

    #[test]
    fn core_kinds_are_not_upstream() {
        assert!(!CoreError::EmptyUpstream("prices".into()).is_upstream());
        assert!(!CoreError::NoOverlap.is_upstream());
        assert!(!CoreError::DivisionByZero.is_upstream());
        assert!(!CoreError::NonFinite.is_upstream());
        assert!(!CoreError::Validation("x".into()).is_upstream());
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod from_impls {
    use super::*;

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let core_err: CoreError = json_err.into();
        match &core_err {
            CoreError::Deserialization(msg) => assert!(!msg.is_empty()),
            other => panic!("Expected Deserialization, got {:?}", other),
        }
    }

    #[test]
    fn question_mark_converts_serde_json_error() {
        fn parse() -> Result<serde_json::Value, CoreError> {
            Ok(serde_json::from_str("[1, 2,")?)
        }
        assert!(matches!(parse(), Err(CoreError::Deserialization(_))));
    }

    #[tokio::test]
    async fn from_reqwest_error_redacts_query() {
        // Port 9 (discard) on localhost is refused immediately.
        let err = reqwest::Client::new()
            .get("http://127.0.0.1:9/query?apikey=SECRET123")
            .send()
            .await
            .unwrap_err();
        let core_err: CoreError = err.into();
        match &core_err {
            CoreError::Network(msg) => assert!(!msg.contains("SECRET123")),
            other => panic!("Expected Network, got {:?}", other),
        }
    }
}

// ── Trait bounds ────────────────────────────────────────────────────

mod trait_bounds {
    use super::*;

    #[test]
    fn is_std_error_send_sync() {
        fn assert_bounds<T: std::error::Error + Send + Sync + 'static>() {}
        assert_bounds::<CoreError>();
    }

    #[test]
    fn all_variants_are_debug() {
        let variants = vec![
            CoreError::upstream("p", "m"),
            CoreError::Network("n".into()),
            CoreError::Deserialization("d".into()),
            CoreError::EmptyUpstream("prices".into()),
            CoreError::NoOverlap,
            CoreError::DivisionByZero,
            CoreError::NonFinite,
            CoreError::Validation("v".into()),
        ];
        for variant in &variants {
            assert!(!format!("{:?}", variant).is_empty());
        }
    }
}
