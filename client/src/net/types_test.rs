use super::*;

fn request(name: &str, phone: &str) -> LeadRequest {
    LeadRequest { full_name: name.to_owned(), phone: phone.to_owned(), note: None, product_label: None }
}

// =============================================================
// validate
// =============================================================

#[test]
fn validate_trims_required_fields() {
    let lead = request("  Aliyev Ali ", " +998 90 123 45 67 ").validate().unwrap();
    assert_eq!(lead.full_name, "Aliyev Ali");
    assert_eq!(lead.phone, "+998 90 123 45 67");
    assert_eq!(lead.note, None);
    assert_eq!(lead.product_label, None);
}

#[test]
fn validate_rejects_blank_phone() {
    assert_eq!(request("Aliyev Ali", "   ").validate(), Err(LeadError::MissingContact));
}

#[test]
fn validate_rejects_blank_name() {
    assert_eq!(request("", "+998901234567").validate(), Err(LeadError::MissingContact));
}

#[test]
fn validate_drops_blank_optionals() {
    let mut req = request("Ali", "+998");
    req.note = Some("   ".to_owned());
    req.product_label = Some(String::new());
    let lead = req.validate().unwrap();
    assert_eq!(lead.note, None);
    assert_eq!(lead.product_label, None);
}

#[test]
fn validate_keeps_trimmed_optionals() {
    let mut req = request("Ali", "+998");
    req.note = Some("  Yetkazib berish bormi?  ".to_owned());
    req.product_label = Some("Tandir 70 sm — 2 500 000 so'm".to_owned());
    let lead = req.validate().unwrap();
    assert_eq!(lead.note.as_deref(), Some("Yetkazib berish bormi?"));
    assert_eq!(lead.product_label.as_deref(), Some("Tandir 70 sm — 2 500 000 so'm"));
}

#[test]
fn validate_counts_characters_not_bytes() {
    let name = "ў".repeat(MAX_NAME_CHARS);
    assert!(name.len() > MAX_NAME_CHARS);
    assert!(request(&name, "+998").validate().is_ok());
}

#[test]
fn validate_rejects_overlong_fields() {
    let long_phone = "9".repeat(MAX_PHONE_CHARS + 1);
    assert_eq!(request("Ali", &long_phone).validate(), Err(LeadError::TooLong(LeadField::Phone)));

    let mut req = request("Ali", "+998");
    req.note = Some("x".repeat(MAX_NOTE_CHARS + 1));
    assert_eq!(req.validate(), Err(LeadError::TooLong(LeadField::Note)));
}

#[test]
fn missing_contact_message_matches_form_copy() {
    assert_eq!(
        LeadError::MissingContact.message(),
        "Iltimos, ism familiya va telefon raqamingizni kiriting."
    );
}

// =============================================================
// Serde
// =============================================================

#[test]
fn lead_request_omits_absent_optionals() {
    let json = serde_json::to_value(request("Ali", "+998")).unwrap();
    assert_eq!(json, serde_json::json!({ "full_name": "Ali", "phone": "+998" }));
}

#[test]
fn lead_request_accepts_missing_optionals() {
    let req: LeadRequest = serde_json::from_str(r#"{"full_name":"Ali","phone":"+998"}"#).unwrap();
    assert_eq!(req, request("Ali", "+998"));
}

#[test]
fn lead_response_shapes() {
    assert_eq!(serde_json::to_value(LeadResponse::accepted()).unwrap(), serde_json::json!({ "ok": true }));
    assert_eq!(
        serde_json::to_value(LeadResponse::rejected(ERR_NOT_CONFIGURED)).unwrap(),
        serde_json::json!({ "ok": false, "error": "not_configured" })
    );
}
