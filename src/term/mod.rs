extern crate ansi_term;
extern crate linefeed;
use crate::cmd::{Event, Runtime};
use ansi_term::Style;
use linefeed::{Interface, ReadResult, Signal};

pub fn main() {
    if let Err(error) = main_loop() {
        eprintln!("{}", error);
    }
}

fn main_loop() -> std::io::Result<()> {
    let mut runtime = Runtime::new();
    let command = Interface::new("memtarget")?;
    command.set_prompt("> ")?;
    command.set_report_signal(Signal::Interrupt, true);

    command.write_fmt(format_args!(
        "Welcome! Type \"help\" to see the available options.\n\
         NOTE: This is a CASE-SENSITIVE prompt.\n"
    ))?;

    loop {
        let string = match command.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(Signal::Interrupt) => {
                // An attached inspector must not be able to kill the
                // target by accident; only `exit` or EOF ends the process.
                command.set_buffer("")?;
                continue;
            }
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        match runtime.enter(&string) {
            Event::Ready => {}
            Event::Print(s) => command.write_fmt(format_args!("{}", s))?,
            Event::Error(error) => {
                eprintln!("{}", Style::new().bold().paint(error.to_string()))
            }
            Event::Exited => break,
        }
        if !string.trim().is_empty() {
            command.add_history_unique(string);
        }
    }
    Ok(())
}
