use super::*;
use crate::net::types::LeadError;

fn filled() -> OrderForm {
    OrderForm {
        draft: OrderDraft {
            full_name: "Aliyev Ali".to_owned(),
            phone: "+998 90 123 45 67".to_owned(),
            note: "Kechqurun qo'ng'iroq qiling".to_owned(),
        },
        status: SubmitStatus::Idle,
    }
}

// =============================================================
// begin_submit
// =============================================================

#[test]
fn empty_phone_is_rejected_locally_without_request() {
    let mut form = filled();
    form.draft.phone = "  ".to_owned();
    assert_eq!(form.begin_submit(None), None);
    assert_eq!(form.error_message(), Some(LeadError::MissingContact.message()));
    assert!(!form.is_submitting());
}

#[test]
fn valid_draft_enters_submitting_and_yields_request() {
    let mut form = filled();
    let req = form.begin_submit(Some("Tandir 60 sm — 500 000 so'm")).unwrap();
    assert!(form.is_submitting());
    assert_eq!(req.full_name, "Aliyev Ali");
    assert_eq!(req.product_label.as_deref(), Some("Tandir 60 sm — 500 000 so'm"));
    assert_eq!(req.note.as_deref(), Some("Kechqurun qo'ng'iroq qiling"));
}

#[test]
fn blank_note_is_not_sent() {
    let mut form = filled();
    form.draft.note = "   ".to_owned();
    let req = form.begin_submit(None).unwrap();
    assert_eq!(req.note, None);
    assert_eq!(req.product_label, None);
}

#[test]
fn double_submit_is_ignored_while_in_flight() {
    let mut form = filled();
    assert!(form.begin_submit(None).is_some());
    assert!(form.begin_submit(None).is_none());
    assert!(form.is_submitting());
}

#[test]
fn retry_after_validation_error_clears_message() {
    let mut form = filled();
    form.draft.full_name.clear();
    assert!(form.begin_submit(None).is_none());
    form.draft.full_name = "Ali".to_owned();
    assert!(form.begin_submit(None).is_some());
    assert_eq!(form.error_message(), None);
}

// =============================================================
// finish
// =============================================================

#[test]
fn success_clears_fields_and_shows_message() {
    let mut form = filled();
    form.begin_submit(None);
    form.finish(Ok(()));
    assert_eq!(form.draft, OrderDraft::default());
    assert_eq!(form.success_message(), Some(SUCCESS_MESSAGE));
    assert_eq!(form.error_message(), None);
}

#[test]
fn unreachable_endpoint_keeps_fields_and_shows_generic_message() {
    let mut form = filled();
    let before = form.draft.clone();
    form.begin_submit(None);
    form.finish(Err(SubmitError::Network("failed to fetch".into())));
    assert_eq!(form.draft, before);
    assert_eq!(form.error_message(), Some(SubmitError::Network(String::new()).message()));
    assert!(!form.is_submitting());
}

#[test]
fn missing_server_secrets_show_admin_message() {
    let mut form = filled();
    form.begin_submit(None);
    form.finish(Err(SubmitError::NotConfigured));
    assert_eq!(form.error_message(), Some(SubmitError::NotConfigured.message()));
}

// =============================================================
// request_close
// =============================================================

#[test]
fn close_is_blocked_while_submitting() {
    let mut form = filled();
    form.begin_submit(None);
    assert!(!form.request_close());
    assert!(form.is_submitting());
}

#[test]
fn close_clears_messages_but_keeps_draft() {
    let mut form = filled();
    form.draft.phone.clear();
    form.begin_submit(None);
    assert!(form.request_close());
    assert_eq!(form.status, SubmitStatus::Idle);
    assert_eq!(form.draft.full_name, "Aliyev Ali");
}
