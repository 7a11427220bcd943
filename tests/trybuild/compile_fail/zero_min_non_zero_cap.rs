use textbuf::{Buffer, Global, settings::BufferSettings};

fn main() {
    let mut buffer = Buffer::<Global, BufferSettings<2, 0>>::new_in(Global);
    buffer.append(b'x');
}
