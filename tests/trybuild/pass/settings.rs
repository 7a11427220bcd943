use textbuf::{Buffer, Global, settings::BufferSettings};

fn main() {
    let mut buffer = Buffer::<Global, BufferSettings<3, 1, true>>::new_in(Global);
    buffer.append(b'x');
    assert_eq!(buffer.capacity(), 1);
}
