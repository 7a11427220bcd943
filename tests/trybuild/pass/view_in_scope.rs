use textbuf::Buffer;

fn main() {
    let mut storage = *b"key=value";

    let value = {
        let mut view = Buffer::view(&mut storage);
        view.partition("=")
    };

    assert_eq!(value, "value");
    assert_eq!(&storage, b"key=value");
}
