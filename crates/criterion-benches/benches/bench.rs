use std::hint::black_box;

use criterion::*;

use textbuf::Buffer;

trait Text {
    fn from_bytes(bytes: &[u8]) -> Self;
    fn append(&mut self, byte: u8);
    fn find(&self, needle: &[u8]) -> Option<usize>;
    fn replace_all(&mut self, old: &[u8], new: &[u8]);
    fn split_all(&self, separator: &[u8]) -> usize;
}

impl Text for Buffer<'static> {
    fn from_bytes(bytes: &[u8]) -> Self {
        Buffer::from_bytes(bytes)
    }

    fn append(&mut self, byte: u8) {
        Buffer::append(self, byte);
    }

    fn find(&self, needle: &[u8]) -> Option<usize> {
        Buffer::find(self, needle, ..)
    }

    fn replace_all(&mut self, old: &[u8], new: &[u8]) {
        Buffer::replace(self, old, new, 0);
    }

    fn split_all(&self, separator: &[u8]) -> usize {
        Buffer::split_all(self, separator).len()
    }
}

impl Text for String {
    fn from_bytes(bytes: &[u8]) -> Self {
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn append(&mut self, byte: u8) {
        self.push(char::from(byte));
    }

    fn find(&self, needle: &[u8]) -> Option<usize> {
        str::find(self, std::str::from_utf8(needle).unwrap())
    }

    fn replace_all(&mut self, old: &[u8], new: &[u8]) {
        *self = str::replace(self, std::str::from_utf8(old).unwrap(), std::str::from_utf8(new).unwrap());
    }

    fn split_all(&self, separator: &[u8]) -> usize {
        let parts: Vec<String> = str::split(self, std::str::from_utf8(separator).unwrap())
            .map(String::from)
            .collect();

        parts.len()
    }
}

const BYTES: usize = 5_000;

fn haystack() -> Vec<u8> {
    b"the quick brown fox jumps over the lazy dog\n".iter().copied().cycle().take(BYTES).collect()
}

fn append<T: Text>(n: usize) {
    let mut text = T::from_bytes(b"");

    for i in 0..n {
        text.append(black_box(b'a' + (i % 26) as u8));
    }

    black_box(text);
}

fn find<T: Text>(text: &T) {
    black_box(text.find(black_box(b"lazy cat")));
}

fn replace<T: Text>(old: &[u8], new: &[u8]) -> impl Fn() {
    let bytes = haystack();
    let (old, new) = (old.to_vec(), new.to_vec());

    move || {
        let mut text = T::from_bytes(&bytes);
        text.replace_all(black_box(&old), black_box(&new));
        black_box(text);
    }
}

fn split<T: Text>(text: &T) {
    black_box(text.split_all(black_box(b" ")));
}

#[rustfmt::skip]
fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");
    group.throughput(Throughput::Bytes(BYTES as u64));
    group.bench_function("textbuf", |b| b.iter(|| append::<Buffer>(BYTES)));
    group.bench_function("std", |b| b.iter(|| append::<String>(BYTES)));
}

#[rustfmt::skip]
fn bench_find(c: &mut Criterion) {
    let bytes = haystack();
    let buffer = Buffer::from_bytes(&bytes);
    let string = String::from_bytes(&bytes);

    let mut group = c.benchmark_group("find");
    group.throughput(Throughput::Bytes(BYTES as u64));
    group.bench_function("textbuf", |b| b.iter(|| find(&buffer)));
    group.bench_function("std", |b| b.iter(|| find(&string)));
}

#[rustfmt::skip]
fn bench_replace(c: &mut Criterion, name: &str, old: &[u8], new: &[u8]) {
    let mut group = c.benchmark_group(name);
    group.throughput(Throughput::Bytes(BYTES as u64));
    group.bench_function("textbuf", |b| b.iter(replace::<Buffer>(old, new)));
    group.bench_function("std", |b| b.iter(replace::<String>(old, new)));
}

fn bench_replace_grow(c: &mut Criterion) {
    bench_replace(c, "replace_grow", b" ", b" - ");
}

fn bench_replace_shrink(c: &mut Criterion) {
    bench_replace(c, "replace_shrink", b"the ", b"");
}

#[rustfmt::skip]
fn bench_split(c: &mut Criterion) {
    let bytes = haystack();
    let buffer = Buffer::from_bytes(&bytes);
    let string = String::from_bytes(&bytes);

    let mut group = c.benchmark_group("split");
    group.throughput(Throughput::Bytes(BYTES as u64));
    group.bench_function("textbuf", |b| b.iter(|| split(&buffer)));
    group.bench_function("std", |b| b.iter(|| split(&string)));
}

criterion_group!(
    benches,
    bench_append,
    bench_find,
    bench_replace_grow,
    bench_replace_shrink,
    bench_split,
);

criterion_main!(benches);
