use super::*;

#[test]
fn payload_serializes_to_the_wire_shape() {
    let payload = ContactPayload {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        message: "Hello".to_owned(),
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Hello",
        })
    );
}

#[test]
fn submit_failed_message_carries_the_status() {
    assert_eq!(submit_failed_message(500), "contact submit failed: 500");
    assert_eq!(submit_failed_message(422), "contact submit failed: 422");
}

#[test]
fn endpoint_is_https() {
    assert!(CONTACT_ENDPOINT.starts_with("https://"));
}
