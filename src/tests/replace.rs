use std::vec::Vec;

use crate::{Buffer, ErrorBehavior};

use super::{either_way, ok};

either_way! {
    replace_matches_model
    replace_grows_once
    replace_shrinks_in_place
    replace_self_overlapping
    replace_long_self_overlapping_run
    replace_in_view
}

fn model(haystack: &[u8], old: &[u8], new: &[u8], limit: usize) -> (Vec<u8>, usize) {
    let mut out = Vec::new();
    let mut replaced = 0;
    let mut i = 0;

    while i < haystack.len() {
        let can_replace = limit == 0 || replaced < limit;

        if can_replace && !old.is_empty() && haystack[i..].starts_with(old) {
            out.extend_from_slice(new);
            replaced += 1;
            i += old.len();
        } else {
            out.push(haystack[i]);
            i += 1;
        }
    }

    (out, replaced)
}

fn replace_matches_model<B: ErrorBehavior>() {
    let haystacks: &[&[u8]] = &[b"", b"a", b"aaaaa", b"path/to/file", b"abcabcab", b"abababa", b"xx yy xx"];
    let olds: &[&[u8]] = &[b"", b"a", b"aa", b"/", b"ab", b"aba", b"xx", b"nope", b"abcabcabc"];
    let news: &[&[u8]] = &[b"", b"-", b"ab", b"XYZ", b" / ", b"aaaa"];

    for &haystack in haystacks {
        for &old in olds {
            for &new in news {
                for limit in 0..4 {
                    let (expected, expected_count) = model(haystack, old, new, limit);

                    let mut buffer = Buffer::from_bytes(haystack);
                    let count = ok(buffer.generic_replace::<B>(old, new, limit));

                    assert_eq!(
                        buffer.as_bytes(),
                        expected,
                        "replace {old:?} with {new:?} in {haystack:?}, limit {limit}"
                    );
                    assert_eq!(count, expected_count);
                }
            }
        }
    }
}

fn replace_grows_once<B: ErrorBehavior>() {
    let mut buffer = Buffer::from_bytes(b"a/b/c/d");
    assert_eq!(ok(buffer.generic_replace::<B>("/", " / ", 0)), 3);
    assert_eq!(buffer, "a / b / c / d");
    assert_eq!(buffer.capacity(), buffer.len());

    let mut buffer = Buffer::from_bytes(b"a/b/c/d");
    assert_eq!(ok(buffer.generic_replace::<B>("/", "//", 2)), 2);
    assert_eq!(buffer, "a//b//c/d");
    assert_eq!(buffer.capacity(), 9);
}

fn replace_shrinks_in_place<B: ErrorBehavior>() {
    let mut buffer = Buffer::from_bytes(b"one, two, three");
    let capacity = buffer.capacity();

    assert_eq!(ok(buffer.generic_replace::<B>(", ", ",", 0)), 2);
    assert_eq!(buffer, "one,two,three");
    assert_eq!(buffer.capacity(), capacity);

    assert_eq!(ok(buffer.generic_replace::<B>("two", "2", 0)), 1);
    assert_eq!(buffer, "one,2,three");

    assert_eq!(ok(buffer.generic_replace::<B>("missing", "", 0)), 0);
    assert_eq!(buffer, "one,2,three");
}

fn replace_self_overlapping<B: ErrorBehavior>() {
    let mut buffer = Buffer::from_bytes(b"aaaaa");
    assert_eq!(ok(buffer.generic_replace::<B>("aa", "XYZ", 1)), 1);
    assert_eq!(buffer, "XYZaaa");

    let mut buffer = Buffer::from_bytes(b"aaaaa");
    assert_eq!(ok(buffer.generic_replace::<B>("aa", "XYZ", 0)), 2);
    assert_eq!(buffer, "XYZXYZa");

    let mut buffer = Buffer::from_bytes(b"abababa");
    assert_eq!(ok(buffer.generic_replace::<B>("aba", "<aba>", 0)), 2);
    assert_eq!(buffer, "<aba>b<aba>");
}

fn replace_long_self_overlapping_run<B: ErrorBehavior>() {
    let haystack: Vec<u8> = (0..1 << 16).map(|i| if i % 1000 == 999 { b'b' } else { b'a' }).collect();

    for (old, new, limit) in [("aa", "aaa", 0), ("aa", "aaa", 1000), ("aba", "<aba>", 0), ("aaa", "ab", 0)] {
        let (expected, expected_count) = model(&haystack, old.as_bytes(), new.as_bytes(), limit);

        let mut buffer = Buffer::from_bytes(&haystack);
        assert_eq!(ok(buffer.generic_replace::<B>(old, new, limit)), expected_count);
        assert!(buffer.as_bytes() == expected, "replace {old:?} with {new:?}, limit {limit}");
    }
}

fn replace_in_view<B: ErrorBehavior>() {
    let mut storage = *b"a--b--c";
    let mut view = Buffer::view(&mut storage);

    assert_eq!(ok(view.generic_replace::<B>("--", "-", 0)), 2);
    assert_eq!(view, "a-b-c");

    // grows back into the extent
    assert_eq!(ok(view.generic_replace::<B>("-", "=>", 1)), 1);
    assert_eq!(view, "a=>b-c");
    assert!(view.is_view());
}

#[test]
fn replace_fails_past_view_extent() {
    let mut storage = *b"a-b";
    let mut view = Buffer::view(&mut storage);

    assert!(view.try_replace("-", "==", 0).is_err());
    assert_eq!(view, "a-b");
}

#[test]
fn replace_with_buffers() {
    let mut text = Buffer::from_bytes(b"hello world");
    let old = Buffer::from_bytes(b"world");
    let new = Buffer::from_bytes(b"there");

    assert_eq!(text.replace(&old, &new, 0), 1);
    assert_eq!(text, "hello there");
}
