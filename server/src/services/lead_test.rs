use std::sync::Arc;
use std::time::Duration;

use super::*;
use crate::rate_limit::RateLimitConfig;
use crate::state::test_helpers::{MockNotifier, test_app_state, test_app_state_with_notifier};

fn lead(note: Option<&str>, label: Option<&str>) -> Lead {
    Lead {
        full_name: "Aliyev Ali".into(),
        phone: "+998 90 123 45 67".into(),
        note: note.map(str::to_owned),
        product_label: label.map(str::to_owned),
    }
}

fn request(name: &str, phone: &str) -> LeadRequest {
    LeadRequest { full_name: name.into(), phone: phone.into(), note: None, product_label: None }
}

fn roomy_limits() -> RateLimitConfig {
    RateLimitConfig {
        per_client_limit: 2,
        per_client_window: Duration::from_secs(60),
        global_limit: 10,
        global_window: Duration::from_secs(60),
        trusted_proxy_hops: 0,
    }
}

// =========================================================================
// format_lead_message
// =========================================================================

#[test]
fn format_full_lead() {
    let text = format_lead_message(&lead(Some("Kechqurun"), Some("Tandir 70 sm — 2 500 000 so'm")));
    assert_eq!(
        text,
        "🆕 Yangi buyurtma\n\
         📦 Mahsulot: Tandir 70 sm — 2 500 000 so'm\n\
         👤 Ism familiya: Aliyev Ali\n\
         📞 Telefon: +998 90 123 45 67\n\
         📝 Izoh: Kechqurun"
    );
}

#[test]
fn format_omits_absent_optional_lines() {
    let text = format_lead_message(&lead(None, None));
    assert_eq!(text, "🆕 Yangi buyurtma\n👤 Ism familiya: Aliyev Ali\n📞 Telefon: +998 90 123 45 67");
    assert!(!text.contains("Mahsulot"));
    assert!(!text.contains("Izoh"));
}

// =========================================================================
// submit
// =========================================================================

#[tokio::test]
async fn submit_delivers_formatted_message() {
    let mock = Arc::new(MockNotifier::default());
    let state = test_app_state_with_notifier(mock.clone(), roomy_limits());

    let mut req = request("  Ali  ", " +998 ");
    req.note = Some("   ".into());
    submit(&state, "1.2.3.4", &req).await.unwrap();

    assert_eq!(mock.sent(), vec!["🆕 Yangi buyurtma\n👤 Ism familiya: Ali\n📞 Telefon: +998".to_owned()]);
}

#[tokio::test]
async fn submit_invalid_lead_never_notifies() {
    let mock = Arc::new(MockNotifier::default());
    let state = test_app_state_with_notifier(mock.clone(), roomy_limits());

    let err = submit(&state, "1.2.3.4", &request("Ali", "  ")).await.unwrap_err();
    assert!(matches!(err, LeadServiceError::Invalid(LeadError::MissingContact)));
    assert_eq!(err.code(), ERR_INVALID_LEAD);
    assert!(mock.sent().is_empty());
}

#[tokio::test]
async fn submit_without_notifier_is_not_configured() {
    let state = test_app_state();
    let err = submit(&state, "1.2.3.4", &request("Ali", "+998")).await.unwrap_err();
    assert!(matches!(err, LeadServiceError::NotConfigured));
    assert_eq!(err.code(), ERR_NOT_CONFIGURED);
}

#[tokio::test]
async fn submit_rate_limits_per_client() {
    let mock = Arc::new(MockNotifier::default());
    let state = test_app_state_with_notifier(mock.clone(), roomy_limits());
    let req = request("Ali", "+998");

    submit(&state, "9.9.9.9", &req).await.unwrap();
    submit(&state, "9.9.9.9", &req).await.unwrap();
    let err = submit(&state, "9.9.9.9", &req).await.unwrap_err();
    assert_eq!(err.code(), ERR_RATE_LIMITED);
    assert_eq!(mock.sent().len(), 2);

    submit(&state, "8.8.8.8", &req).await.unwrap();
    assert_eq!(mock.sent().len(), 3);
}

#[tokio::test]
async fn submit_notifier_failure_is_delivery_error() {
    let mock = Arc::new(MockNotifier::failing());
    let state = test_app_state_with_notifier(mock.clone(), roomy_limits());

    let err = submit(&state, "1.2.3.4", &request("Ali", "+998")).await.unwrap_err();
    assert!(matches!(err, LeadServiceError::Delivery(_)));
    assert_eq!(err.code(), ERR_DELIVERY_FAILED);
    assert_eq!(mock.sent().len(), 1);
}

#[tokio::test]
async fn failed_deliveries_do_not_use_up_client_quota() {
    let failing = Arc::new(MockNotifier::failing());
    let state = test_app_state_with_notifier(failing.clone(), roomy_limits());
    let req = request("Ali", "+998");

    for _ in 0..6 {
        let err = submit(&state, "5.5.5.5", &req).await.unwrap_err();
        assert_eq!(err.code(), ERR_DELIVERY_FAILED);
    }
    assert_eq!(failing.sent().len(), 6);

    // Telegram back up: the same limiter still has the full quota for this client.
    let recovered = Arc::new(MockNotifier::default());
    let state = AppState::new(Some(recovered.clone() as Arc<dyn crate::telegram::LeadNotifier>), state.rate_limiter);
    submit(&state, "5.5.5.5", &req).await.unwrap();
    submit(&state, "5.5.5.5", &req).await.unwrap();
    assert_eq!(submit(&state, "5.5.5.5", &req).await.unwrap_err().code(), ERR_RATE_LIMITED);
    assert_eq!(recovered.sent().len(), 2);
}
