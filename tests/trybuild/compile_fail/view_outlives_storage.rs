use textbuf::Buffer;

fn main() {
    let view;

    {
        let mut storage = *b"short lived";
        view = Buffer::view(&mut storage);
    }

    dbg!(view.len());
}
