//! Parsing and emission from many threads at once.

use std::thread;

use cjkvo::prelude::*;

const WORDS: &[&str] = &["quyển", "nghiêm", "gì", "muốn", "đâu", "người", "khuya", "hoằng"];

#[test]
fn test_parallel_round_trips() {
    let handles: Vec<_> = (0..8)
        .map(|offset| {
            thread::spawn(move || {
                for i in 0..200 {
                    let word = WORDS[(i + offset) % WORDS.len()];
                    let parsed = parse_vietnamese(word).unwrap();
                    assert_eq!(emit_vietnamese(&parsed).unwrap(), word);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_types_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Syllable>();
    assert_send_sync::<SyllableError>();
    #[cfg(feature = "japanese")]
    assert_send_sync::<JapaneseSyllable>();
}
