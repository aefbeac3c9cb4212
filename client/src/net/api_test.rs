use super::*;

#[test]
fn request_failed_message_names_fixture_and_status() {
    assert_eq!(request_failed_message(Fixture::Planets, 404), "data/planets.json request failed: 404");
    assert_eq!(request_failed_message(Fixture::Markers, 500), "data/markers.json request failed: 500");
}

#[test]
fn transport_failed_message_includes_cause() {
    assert_eq!(
        transport_failed_message(Fixture::Markers, &"connection refused"),
        "data/markers.json request failed: connection refused"
    );
}
