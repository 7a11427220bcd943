use arbitrary::Arbitrary;
use textbuf::{Bounds, normalize_index};

use crate::model;

#[derive(Debug, Arbitrary)]
pub struct Fuzz {
    len: u16,
    start: isize,
    end: isize,
}

impl Fuzz {
    pub fn run(self) {
        let Self { len, start, end } = self;
        let len = usize::from(len);

        let range = Bounds::new(start, end).resolve(len);
        let expected = model::resolve(start, end, len);

        match range {
            Some(range) => {
                assert_eq!(range, expected);
                assert!(range.start < range.end && range.end <= len);
            }
            None => assert!(expected.is_empty()),
        }

        assert_eq!(normalize_index(start, len), model::index(start, len));
    }
}
