//! Concurrent writers
//!
//! Several threads register session ids in one shared set while a reader
//! polls its size.

use std::sync::Arc;
use std::thread;

use kindset::prelude::*;

const WRITERS: u64 = 8;
const SESSIONS_PER_WRITER: u64 = 1_000;

fn main() -> Result<(), SetError> {
    let sessions = Arc::new(Set::<u64>::typed());

    let writers: Vec<_> = (0..WRITERS)
        .map(|writer| {
            let sessions = Arc::clone(&sessions);
            thread::spawn(move || -> Result<(), SetError> {
                let first = writer * SESSIONS_PER_WRITER;
                for id in first..first + SESSIONS_PER_WRITER {
                    sessions.add([id])?;
                }
                Ok(())
            })
        })
        .collect();

    let reader = {
        let sessions = Arc::clone(&sessions);
        thread::spawn(move || {
            let mut last = 0;
            while last < (WRITERS * SESSIONS_PER_WRITER) as usize {
                let seen = sessions.len();
                if seen != last {
                    println!("reader sees {seen} sessions");
                    last = seen;
                }
                thread::yield_now();
            }
        })
    };

    for writer in writers {
        match writer.join() {
            Ok(result) => result?,
            Err(_) => eprintln!("writer thread panicked"),
        }
    }
    if reader.join().is_err() {
        eprintln!("reader thread panicked");
    }

    println!("registered {} sessions", sessions.len());
    Ok(())
}
