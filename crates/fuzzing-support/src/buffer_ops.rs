use std::rc::Rc;

use arbitrary::Arbitrary;
use log::debug;
use textbuf::{Bounds, Buffer, Global};

use crate::{MaybeFailingAllocator, RcAllocator, debug_dbg, model};

type A = RcAllocator<MaybeFailingAllocator<Global>>;

#[derive(Debug, Arbitrary)]
pub struct Fuzz {
    initial: Vec<u8>,

    /// If set, the buffer is a view with this many bytes of room past the initial content.
    view_room: Option<u8>,

    operations: Vec<Operation>,
}

#[derive(Debug, Clone, Arbitrary)]
enum Operation {
    SetFailing(bool),
    Append(u8),
    Extend(Vec<u8>),
    Init(Option<Vec<u8>>, u8),
    Resize(u8),
    Reserve(u8),
    Truncate(u8),
    Set(i8, u8),
    Replace { old: Vec<u8>, new: Vec<u8>, limit: u8 },
    ExpandTabs(u8),
    Strip,
    Slice(i8, i8, i8),
    Partition(Vec<u8>),
    Rpartition(Vec<u8>),
    SplitJoin(Vec<u8>),
    SplitWhitespace,
    ToCStr,
}

impl Fuzz {
    pub fn run(self) {
        let allocator = RcAllocator::new(Rc::new(MaybeFailingAllocator::new(Global)));

        match self.view_room {
            Some(room) => {
                let mut storage = self.initial.clone();
                storage.resize(self.initial.len() + usize::from(room), 0);

                let mut buffer: Buffer<A> = Buffer::view_in(&mut storage, allocator.clone());
                buffer.truncate(self.initial.len());
                run_operations(&mut buffer, &allocator, self.initial, &self.operations);
            }
            None => {
                let mut buffer: Buffer<A> = Buffer::try_from_bytes_in(&self.initial, allocator.clone()).unwrap();
                run_operations(&mut buffer, &allocator, self.initial, &self.operations);
            }
        }
    }
}

fn run_operations(buffer: &mut Buffer<A>, allocator: &A, mut model: Vec<u8>, operations: &[Operation]) {
    for (operation_i, operation) in operations.iter().enumerate() {
        debug!("======================================");
        debug!("OPERATION {operation_i}");
        debug_dbg!(&operation);
        debug_dbg!(&buffer);

        // without failing allocations only a view may run out of space
        let may_fail = allocator.fails.get() || buffer.is_view();

        match operation {
            Operation::SetFailing(fails) => allocator.fails.set(*fails),
            Operation::Append(byte) => {
                if check(buffer.try_append(*byte), may_fail) {
                    model.push(*byte);
                }
            }
            Operation::Extend(bytes) => {
                if check(buffer.try_extend(bytes), may_fail) {
                    model.extend_from_slice(bytes);
                }
            }
            Operation::Init(source, capacity) => {
                let capacity = usize::from(*capacity);

                if check(buffer.try_init(source.as_deref(), capacity), may_fail) {
                    model = source.clone().unwrap_or_default();

                    if source.is_none() {
                        assert_eq!(buffer.capacity(), capacity);
                    }
                } else {
                    model.clear();
                    assert_eq!(buffer.capacity(), 0);
                }
            }
            Operation::Resize(capacity) => {
                let capacity = usize::from(*capacity);

                if check(buffer.try_resize(capacity), may_fail) {
                    model.truncate(capacity);
                    assert_eq!(buffer.capacity(), capacity);
                }
            }
            Operation::Reserve(additional) => {
                let additional = usize::from(*additional);

                if check(buffer.try_reserve(additional), may_fail) {
                    assert!(buffer.capacity() >= model.len() + additional);
                }
            }
            Operation::Truncate(len) => {
                buffer.truncate(usize::from(*len));
                model.truncate(usize::from(*len));
            }
            Operation::Set(index, byte) => {
                let index = isize::from(*index);
                let expected = match model::index(index, model.len()) {
                    Some(i) => std::mem::replace(&mut model[i], *byte),
                    None => 0,
                };

                assert_eq!(buffer.get(index), expected);
                assert_eq!(buffer.set(index, *byte), expected);
            }
            Operation::Replace { old, new, limit } => {
                let (expected, expected_count) = model::replace(&model, old, new, usize::from(*limit));

                if let Some(count) = check_value(buffer.try_replace(old, new, usize::from(*limit)), may_fail) {
                    assert_eq!(count, expected_count);
                    model = expected;
                }
            }
            Operation::ExpandTabs(tab_width) => {
                let tab_width = usize::from(tab_width % 9);
                let tabs = model.iter().filter(|&&b| b == b'\t').count();

                if let Some(count) = check_value(buffer.try_expand_tabs(tab_width), may_fail) {
                    assert_eq!(count, tabs);
                    model = model::expand_tabs(&model, tab_width);
                }
            }
            Operation::Strip => {
                buffer.strip(None);
                model = model::strip(&model).to_vec();
            }
            Operation::Slice(start, end, step) => {
                let (start, end, step) = (isize::from(*start), isize::from(*end), isize::from(*step));

                if let Some(slice) = check_value(buffer.try_slice(start, end, step), may_fail) {
                    let expected = model::slice(&model, start, end, step);
                    assert_eq!(slice.as_bytes(), expected);
                    assert_eq!(slice.capacity(), expected.len());
                }
            }
            Operation::Partition(separator) => {
                if let Some(rest) = check_value(buffer.try_partition(separator), may_fail) {
                    if let Some(pos) = model::find(&model, separator, 0..model.len()) {
                        assert_eq!(rest.as_bytes(), &model[pos + separator.len()..]);
                        model.truncate(pos);
                    } else {
                        assert!(rest.is_empty());
                    }
                }
            }
            Operation::Rpartition(separator) => {
                if let Some(rest) = check_value(buffer.try_rpartition(separator), may_fail) {
                    if let Some(pos) = model::rfind(&model, separator, 0..model.len()) {
                        assert_eq!(rest.as_bytes(), &model[pos + separator.len()..]);
                        model.truncate(pos);
                    } else {
                        assert!(rest.is_empty());
                    }
                }
            }
            Operation::SplitJoin(separator) => {
                if let Some(parts) = check_value(buffer.try_split_all(separator), may_fail) {
                    let expected = model::split(&model, separator);
                    assert_eq!(parts.len(), expected.len());

                    for (part, expected) in parts.iter().zip(&expected) {
                        assert_eq!(part.as_bytes(), expected.as_slice());
                    }

                    let mut joined: Buffer<A> = Buffer::new_in(allocator.clone());

                    if check(joined.try_join(separator, &parts), allocator.fails.get()) {
                        assert_eq!(joined.as_bytes(), model.as_slice());
                    }
                }
            }
            Operation::SplitWhitespace => {
                if let Some(parts) = check_value(buffer.try_split_whitespace(), may_fail) {
                    let expected: Vec<&[u8]> = model
                        .split(|b| model::WHITESPACE.contains(b))
                        .filter(|s| !s.is_empty())
                        .collect();

                    assert_eq!(parts.len(), expected.len());

                    for (part, expected) in parts.iter().zip(&expected) {
                        assert_eq!(part.as_bytes(), *expected);
                    }
                }
            }
            Operation::ToCStr => {
                if let Some(c_str) = check_value(buffer.try_to_c_str(), may_fail) {
                    let expected = model.split(|&b| b == 0).next().unwrap_or_default();
                    assert_eq!(c_str.to_bytes(), expected);
                }
            }
        }

        assert_eq!(buffer.as_bytes(), model.as_slice());
        assert!(buffer.len() <= buffer.capacity());

        // read-only operations can't fail
        check_searches(buffer, &model, operation);
    }
}

fn check_searches(buffer: &Buffer<A>, model: &[u8], operation: &Operation) {
    let needle: &[u8] = match operation {
        Operation::Replace { old, .. } => old,
        Operation::Partition(separator) | Operation::Rpartition(separator) | Operation::SplitJoin(separator) => separator,
        Operation::Extend(bytes) => bytes,
        _ => return,
    };

    for (start, end) in [(0, 0), (1, 0), (-3, 0), (0, -1), (2, 5)] {
        let range = model::resolve(start, end, model.len());
        let bounds = Bounds::new(start, end);

        assert_eq!(buffer.find(needle, bounds), model::find(model, needle, range.clone()));
        assert_eq!(buffer.rfind(needle, bounds), model::rfind(model, needle, range.clone()));
        assert_eq!(buffer.count(needle, bounds), model::occurrences(model, needle, range).len());
    }
}

#[track_caller]
fn check<E>(result: Result<(), E>, may_fail: bool) -> bool {
    check_value(result, may_fail).is_some()
}

#[track_caller]
fn check_value<T, E>(result: Result<T, E>, may_fail: bool) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(_) => {
            assert!(may_fail, "operation failed without a reason to");
            None
        }
    }
}
