#![cfg(feature = "std")]

//! Reads the file given as first argument (defaults to `Cargo.toml`)
//! through a deferred file-read primitive and prints it, recovering
//! at the suspension point when the read fails.
//!
//! ```sh
//! cargo run --example read-file --features std -- ./Cargo.toml
//! ```

use std::{env, fs, mem, thread};

use trampoline::{adapt, drivers::std::run, Complete, Outcome, Sequence, Step};

fn read_file(path: String, complete: Complete<Vec<u8>, String>) {
    thread::spawn(move || complete(fs::read(&path).map_err(|err| err.to_string())));
}

enum State {
    Start,
    Reading(String),
    Finished,
}

struct PrintFile {
    state: State,
}

impl Sequence for PrintFile {
    type Value = Vec<u8>;
    type Output = ();
    type Error = String;

    fn resume(
        &mut self,
        outcome: Option<Outcome<Vec<u8>, String>>,
    ) -> Step<Vec<u8>, (), String> {
        match mem::replace(&mut self.state, State::Finished) {
            State::Start => {
                let read = adapt(read_file);
                let path = env::args().nth(1).unwrap_or_else(|| "Cargo.toml".into());
                self.state = State::Reading(path.clone());
                Step::Pending(Box::new(read(path)))
            }
            State::Reading(path) => match outcome {
                Some(Ok(bytes)) => {
                    println!("{}", String::from_utf8_lossy(&bytes));
                    Step::Done(())
                }
                Some(Err(err)) => {
                    // guarded suspension point: report and finish
                    eprintln!("cannot read {path}: {err}");
                    Step::Done(())
                }
                None => Step::Failed("resumed without outcome".into()),
            },
            State::Finished => Step::Done(()),
        }
    }
}

fn main() {
    env_logger::init();

    run(|| PrintFile {
        state: State::Start,
    })
    .unwrap();
}
