use agent_manager::agents::schema::example_payload;
use agent_manager::agents::{PayloadCodec, PayloadError};
use agent_manager::config::DecoderSettings;

#[test]
fn test_encode_then_decode_with_strict_settings() {
    let codec = PayloadCodec::new(DecoderSettings {
        deny_unknown_fields: true,
        ..Default::default()
    });

    let payload = example_payload();
    let encoded = codec.encode(&payload).unwrap();
    let decoded = codec.decode_str(&encoded).unwrap();

    assert_eq!(decoded, payload);
}

#[test]
fn test_normalize_drops_nulls() {
    let codec = PayloadCodec::new(DecoderSettings {
        pretty: false,
        ..Default::default()
    });

    let payload = codec
        .decode_str(r#"{"sort": 2, "agentName": null, "language": "English"}"#)
        .unwrap();

    assert_eq!(
        codec.encode(&payload).unwrap(),
        r#"{"language":"English","sort":2}"#
    );
}

#[test]
fn test_missing_plugin_id_is_a_decode_error() {
    let result = PayloadCodec::default().decode_str(r#"{"functions": [{"paramInfo": {}}]}"#);

    match result {
        Err(PayloadError::Decode(e)) => assert!(e.to_string().contains("pluginId")),
        other => panic!("expected decode error, got {:?}", other),
    }
}

#[test]
fn test_context_provider_must_be_object() {
    let result = PayloadCodec::default().decode_str(r#"{"contextProviders": ["cache"]}"#);
    assert!(matches!(result, Err(PayloadError::Decode(_))));
}

#[test]
fn test_limit_applies_to_raw_body() {
    let codec = PayloadCodec::new(DecoderSettings {
        max_payload_bytes: 16,
        ..Default::default()
    });

    let body = format!(r#"{{"systemPrompt": "{}"}}"#, "x".repeat(64));
    match codec.decode_str(&body) {
        Err(PayloadError::TooLarge { size, limit }) => {
            assert_eq!(size, body.len());
            assert_eq!(limit, 16);
        }
        other => panic!("expected size rejection, got {:?}", other),
    }
}

#[test]
fn test_malformed_json_is_a_decode_error() {
    let codec = PayloadCodec::default();
    let err = codec.decode_str("not json").unwrap_err();
    assert!(matches!(err, PayloadError::Decode(_)));
    assert!(err.to_string().starts_with("Decode error"));
}

#[test]
fn test_repeated_plugin_bindings_are_accepted() {
    let codec = PayloadCodec::default();

    let payload = codec
        .decode_str(
            r#"{"functions":[{"pluginId":"p","paramInfo":{"a":1}},{"pluginId":"p","paramInfo":{"a":2}}]}"#,
        )
        .unwrap();
    let functions = payload.functions.unwrap();
    assert_eq!(functions.len(), 2);
    assert_eq!(functions[1].param("a"), Some(&serde_json::json!(2)));

    let payload = codec.decode_str(r#"{"functions":[{"pluginId":""}]}"#).unwrap();
    assert_eq!(payload.functions.unwrap()[0].plugin_id, "");
}

#[test]
fn test_duplicate_top_level_key_is_rejected() {
    match PayloadCodec::default().decode_str(r#"{"sort":1,"sort":2}"#) {
        Err(PayloadError::Decode(e)) => assert!(e.to_string().contains("duplicate field")),
        other => panic!("expected decode error, got {:?}", other),
    }
}
