use serde_json::json;

use valygo_admin::domain::user::User;
use valygo_admin::models::envelope::{DataEnvelope, ListEnvelope, MaybeEnvelope};

fn user_json(id: &str, first: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "firstName": first,
        "lastName": "Doe",
        "email": format!("{}@example.com", first.to_lowercase()),
        "status": "active",
        "accountType": "individual",
        "kycStatus": "approved",
        "createdAt": "2026-01-15T10:30:00Z"
    })
}

#[test]
fn structured_envelope_normalizes_from_its_pagination_block() {
    let body = json!({
        "data": [user_json("u1", "Alice"), user_json("u2", "Bob")],
        "pagination": { "total": 23, "page": 2, "limit": 10, "pages": 3 }
    });

    let envelope: ListEnvelope<User> = serde_json::from_value(body).expect("valid envelope");
    let page = envelope.into_page(1, 50);

    assert_eq!(page.rows().len(), 2);
    assert_eq!(page.total(), 23);
    // The envelope's own pagination block wins over the requested values.
    assert_eq!(page.page(), 2);
    assert_eq!(page.page_size(), 10);
    assert_eq!(page.page_count(), 3);
}

#[test]
fn structured_envelope_accepts_users_as_row_key() {
    let body = json!({
        "users": [user_json("u1", "Alice")],
        "pagination": { "total": 1, "page": 1, "limit": 10, "pages": 1 }
    });

    let envelope: ListEnvelope<User> = serde_json::from_value(body).expect("valid envelope");
    let page = envelope.into_page(1, 10);

    assert_eq!(page.rows().len(), 1);
    assert_eq!(page.total(), 1);
    assert_eq!(page.page_count(), 1);
}

#[test]
fn legacy_envelope_uses_total_when_present() {
    let body = json!({
        "users": [user_json("u1", "Alice")],
        "totalPages": 3,
        "total": 27
    });

    let envelope: ListEnvelope<User> = serde_json::from_value(body).expect("valid envelope");
    let page = envelope.into_page(1, 10);

    assert_eq!(page.total(), 27);
    assert_eq!(page.page_count(), 3);
}

#[test]
fn legacy_envelope_reconstructs_total_on_the_last_page() {
    let body = json!({
        "users": [
            user_json("u1", "Alice"),
            user_json("u2", "Bob"),
            user_json("u3", "Carol"),
            user_json("u4", "Dave"),
        ],
        "totalPages": 3
    });

    let envelope: ListEnvelope<User> = serde_json::from_value(body).expect("valid envelope");
    let page = envelope.into_page(3, 10);

    // Two full pages plus the four rows on this one.
    assert_eq!(page.total(), 24);
    assert_eq!(page.page_count(), 3);
}

#[test]
fn legacy_envelope_bounds_total_before_the_last_page() {
    let body = json!({
        "users": (0..10).map(|i| user_json(&format!("u{i}"), "Alice")).collect::<Vec<_>>(),
        "totalPages": 3
    });

    let envelope: ListEnvelope<User> = serde_json::from_value(body).expect("valid envelope");
    let page = envelope.into_page(1, 10);

    assert_eq!(page.total(), 30);
    assert_eq!(page.page_count(), 3);
}

#[test]
fn empty_result_sets_normalize_to_zero_pages() {
    let structured = json!({
        "data": [],
        "pagination": { "total": 0, "page": 1, "limit": 10, "pages": 1 }
    });
    let envelope: ListEnvelope<User> = serde_json::from_value(structured).expect("valid envelope");
    let page = envelope.into_page(1, 10);
    assert_eq!(page.total(), 0);
    // A zero total always means zero pages, whatever the envelope claimed.
    assert_eq!(page.page_count(), 0);

    let legacy = json!({ "users": [], "totalPages": 0 });
    let envelope: ListEnvelope<User> = serde_json::from_value(legacy).expect("valid envelope");
    let page = envelope.into_page(1, 10);
    assert_eq!(page.total(), 0);
    assert_eq!(page.page_count(), 0);
}

#[test]
fn data_envelope_unwraps_team_rows() {
    let body = json!({
        "success": true,
        "data": [{
            "_id": "m1",
            "name": "Sales One",
            "email": "one@example.com",
            "referralCode": "REF-1",
            "status": "active",
            "onboardedUsers": 12,
            "createdAt": "2026-02-01T00:00:00Z"
        }]
    });

    let envelope: DataEnvelope<Vec<valygo_admin::domain::team::TeamMember>> =
        serde_json::from_value(body).expect("valid envelope");
    assert_eq!(envelope.success, Some(true));
    assert_eq!(envelope.data.len(), 1);
    assert_eq!(envelope.data[0].referral_code, "REF-1");
}

#[test]
fn maybe_envelope_handles_wrapped_and_bare_payloads() {
    let wrapped = json!({ "data": { "name": "Admin", "email": "admin@example.com" } });
    let bare = json!({ "name": "Admin", "email": "admin@example.com" });

    let from_wrapped: MaybeEnvelope<valygo_admin::domain::profile::AdminProfile> =
        serde_json::from_value(wrapped).expect("valid payload");
    let from_bare: MaybeEnvelope<valygo_admin::domain::profile::AdminProfile> =
        serde_json::from_value(bare).expect("valid payload");

    assert_eq!(
        from_wrapped.into_inner().name.as_deref(),
        Some("Admin")
    );
    assert_eq!(from_bare.into_inner().name.as_deref(), Some("Admin"));
}
