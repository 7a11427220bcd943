use std::{
    string::{String, ToString},
    sync::Mutex,
    thread::{self, ThreadId},
    vec::Vec,
};

use log::{LevelFilter, Log, Metadata, Record};

use crate::{Buffer, Global, settings::BufferSettings};

/// Keeps the messages of the `textbuf` target together with the thread that logged them.
struct Recorder {
    messages: Mutex<Vec<(ThreadId, String)>>,
}

impl Log for Recorder {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target() == "textbuf"
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = (thread::current().id(), record.args().to_string());
            self.messages.lock().unwrap().push(message);
        }
    }

    fn flush(&self) {}
}

static RECORDER: Recorder = Recorder {
    messages: Mutex::new(Vec::new()),
};

fn messages_of_this_thread() -> Vec<String> {
    let id = thread::current().id();
    let messages = RECORDER.messages.lock().unwrap();
    messages.iter().filter(|(thread, _)| *thread == id).map(|(_, message)| message.clone()).collect()
}

fn record<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
    _ = log::set_logger(&RECORDER);
    log::set_max_level(LevelFilter::Debug);

    let value = f();
    (value, messages_of_this_thread())
}

#[test]
fn verbose_buffers_log_growth_resize_and_destroy() {
    let ((), messages) = record(|| {
        let mut buffer = Buffer::<Global, BufferSettings<2, 8, true>>::new_in(Global);
        buffer.extend(b"hello");
        buffer.append(b'!');
        buffer.resize(2);
        buffer.destroy();
    });

    assert_eq!(
        messages,
        [
            "reallocated buffer from 0 to 5 bytes",
            "reallocated buffer from 5 to 10 bytes",
            "reallocated buffer from 10 to 2 bytes",
            "destroy buffer of capacity 2 (view: false)",
        ]
    );
}

#[test]
fn quiet_buffers_log_nothing() {
    let ((), messages) = record(|| {
        let mut buffer = Buffer::new();
        buffer.extend(b"hello");
        buffer.resize(2);
        buffer.destroy();
    });

    assert!(messages.is_empty());
}
