#![cfg(all(feature = "std", feature = "panic-on-alloc"))]

use expect_test::expect;

use textbuf::Buffer;

#[test]
fn debug_output() {
    let buffer = Buffer::from_bytes(b"tab\there, quote\" and \xff");
    expect![[r#"b"tab\there, quote\" and \xff""#]].assert_eq(&format!("{buffer:?}"));

    let empty = Buffer::new();
    expect![[r#"b"""#]].assert_eq(&format!("{empty:?}"));
}

#[test]
fn split_output() {
    let text = Buffer::from_bytes(b"GET /index.html HTTP/1.1");
    let parts = text.split_whitespace();
    expect![[r#"[b"GET", b"/index.html", b"HTTP/1.1"]"#]].assert_eq(&format!("{parts:?}"));

    let mut header = Buffer::from_bytes(b"Content-Type: text/plain");
    let value = header.partition(": ");
    expect![[r#"(b"Content-Type", b"text/plain")"#]].assert_eq(&format!("{:?}", (&header, &value)));
}

#[test]
fn replace_output() {
    let mut text = Buffer::from_bytes(b"\tif x:\n\t\treturn y\n");
    text.expand_tabs(4);
    text.replace("return", "yield", 0);
    text.rstrip(None);
    expect![[r#"b"    if x:\n        yield y""#]].assert_eq(&format!("{text:?}"));
}
