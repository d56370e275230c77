use memtarget::cmd::{Event, Runtime};

/// Feeds one line to the runtime and flattens the resulting event to the
/// text a user would see. Errors get the trailing newline the terminal
/// layer adds when reporting them.
pub fn exec(runtime: &mut Runtime, line: &str) -> String {
    match runtime.enter(line) {
        Event::Ready => String::new(),
        Event::Print(s) => s,
        Event::Error(error) => format!("{}\n", error),
        Event::Exited => String::new(),
    }
}
