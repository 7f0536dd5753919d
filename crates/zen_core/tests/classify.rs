use zen_core::{
    classify, Classified, ErrorKind, BAD_REQUEST_TEXT, FALLBACK_ERROR_TEXT, NETWORK_ERROR_TEXT,
    REQUEST_TIMEOUT_TEXT, SERVER_ERROR_TEXT, TRANSPORT_TIMEOUT_TEXT,
};

#[test]
fn server_message_wins_over_status_default() {
    let classified = classify(Some(500), Some("X"), None);
    assert_eq!(
        classified,
        Classified {
            kind: ErrorKind::ServerFault,
            message: "X".to_string(),
        }
    );
}

#[test]
fn server_message_with_unmapped_status_is_unrecognized() {
    let classified = classify(Some(404), Some("no such video"), None);
    assert_eq!(classified.kind, ErrorKind::Unrecognized);
    assert_eq!(classified.message, "no such video");
}

#[test]
fn empty_server_message_falls_back_to_status_text() {
    let classified = classify(Some(500), Some(""), None);
    assert_eq!(classified.kind, ErrorKind::ServerFault);
    assert_eq!(classified.message, SERVER_ERROR_TEXT);
}

#[test]
fn five_hundreds_map_to_server_fault() {
    for status in [500, 502, 503, 599] {
        let classified = classify(Some(status), None, None);
        assert_eq!(classified.kind, ErrorKind::ServerFault, "status {status}");
        assert_eq!(classified.message, SERVER_ERROR_TEXT);
    }
}

#[test]
fn four_oh_eight_maps_to_timeout() {
    let classified = classify(Some(408), None, None);
    assert_eq!(classified.kind, ErrorKind::Timeout);
    assert_eq!(classified.message, REQUEST_TIMEOUT_TEXT);
}

#[test]
fn four_hundred_maps_to_client_rejected() {
    let classified = classify(Some(400), None, None);
    assert_eq!(classified.kind, ErrorKind::ClientRejected);
    assert_eq!(classified.message, BAD_REQUEST_TEXT);
}

#[test]
fn other_statuses_fall_back_to_generic_text() {
    for status in [401, 403, 404, 429] {
        let classified = classify(Some(status), None, None);
        assert_eq!(classified.kind, ErrorKind::Unrecognized, "status {status}");
        assert_eq!(classified.message, FALLBACK_ERROR_TEXT);
    }
}

#[test]
fn transport_timeout_markers_map_to_timeout() {
    for error in ["operation timed out", "Connection Timeout", "request timed out (os error 110)"] {
        let classified = classify(None, None, Some(error));
        assert_eq!(classified.kind, ErrorKind::Timeout, "error {error:?}");
        assert_eq!(classified.message, TRANSPORT_TIMEOUT_TEXT);
    }
}

#[test]
fn connectivity_markers_map_to_transport_failure() {
    for error in [
        "tcp connect error: Connection refused (os error 111)",
        "dns error: failed to lookup address",
        "Network unreachable",
    ] {
        let classified = classify(None, None, Some(error));
        assert_eq!(classified.kind, ErrorKind::TransportFailure, "error {error:?}");
        assert_eq!(classified.message, NETWORK_ERROR_TEXT);
    }
}

#[test]
fn timeout_marker_outranks_connectivity_marker() {
    let classified = classify(None, None, Some("network timeout while connecting"));
    assert_eq!(classified.kind, ErrorKind::Timeout);
}

#[test]
fn status_outranks_transport_text() {
    let classified = classify(Some(502), None, Some("timed out"));
    assert_eq!(classified.kind, ErrorKind::ServerFault);
    assert_eq!(classified.message, SERVER_ERROR_TEXT);
}

#[test]
fn no_signal_at_all_is_unrecognized() {
    let classified = classify(None, None, None);
    assert_eq!(classified.kind, ErrorKind::Unrecognized);
    assert_eq!(classified.message, FALLBACK_ERROR_TEXT);
}

#[test]
fn unmarked_transport_text_is_unrecognized() {
    let classified = classify(None, None, Some("something odd happened"));
    assert_eq!(classified.kind, ErrorKind::Unrecognized);
    assert_eq!(classified.message, FALLBACK_ERROR_TEXT);
}
