use serde::de::DeserializeSeed;

use crate::Buffer;

#[test]
fn serializes_as_bytes() {
    let buffer = Buffer::from_bytes(b"hi");
    assert_eq!(serde_json::to_string(&buffer).unwrap(), "[104,105]");

    let mut storage = *b"view";
    let view = Buffer::view(&mut storage);
    assert_eq!(serde_json::to_string(&view).unwrap(), "[118,105,101,119]");
}

#[test]
fn deserializes_from_strings_and_arrays() {
    let buffer: Buffer = serde_json::from_str(r#""hello""#).unwrap();
    assert_eq!(buffer, "hello");

    let buffer: Buffer = serde_json::from_str("[104,105]").unwrap();
    assert_eq!(buffer, "hi");

    let buffer: Buffer = serde_json::from_str("[]").unwrap();
    assert!(buffer.is_empty());

    assert!(serde_json::from_str::<Buffer>("[256]").is_err());
    assert!(serde_json::from_str::<Buffer>("42").is_err());
}

#[test]
fn seed_appends() {
    let mut buffer = Buffer::from_bytes(b"hello");

    let mut deserializer = serde_json::Deserializer::from_str(r#"", world""#);
    (&mut buffer).deserialize(&mut deserializer).unwrap();
    assert_eq!(buffer, "hello, world");

    let mut deserializer = serde_json::Deserializer::from_str("[33]");
    (&mut buffer).deserialize(&mut deserializer).unwrap();
    assert_eq!(buffer, "hello, world!");
}

#[test]
fn seed_fails_past_view_extent() {
    let mut storage = *b"abc";
    let mut view = Buffer::view(&mut storage);
    view.clear();

    let mut deserializer = serde_json::Deserializer::from_str(r#""abcd""#);
    let error = (&mut view).deserialize(&mut deserializer).unwrap_err();
    assert!(error.to_string().contains("allocation failed"));
    assert!(view.is_empty());
}
