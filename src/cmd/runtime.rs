use super::{Error, Kind, Vars};

/// What the terminal layer should do after a line of input.
#[derive(Debug)]
pub enum Event {
    /// Nothing to report; prompt for the next line.
    Ready,
    /// Write this to standard output.
    Print(String),
    /// Report this to standard error and continue.
    Error(Error),
    /// The user asked to leave; terminate with success.
    Exited,
}

/// The command interpreter. One state, no history: each line is
/// tokenized, dispatched, and forgotten. The variable table is the only
/// thing that persists across lines.
#[derive(Debug, Default)]
pub struct Runtime {
    vars: Vars,
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    pub fn vars(&self) -> &Vars {
        &self.vars
    }

    pub fn enter(&mut self, line: &str) -> Event {
        let args: Vec<&str> = line.split_whitespace().collect();
        let command = match args.first() {
            Some(command) => *command,
            None => return Event::Ready,
        };
        match command {
            "help" => Event::Print(help_text()),
            "print" => Event::Print(self.table()),
            "set" => self.set(&args),
            "setTestValues" => {
                self.vars.set_test_values();
                Event::Print("Test values have been set on program's variables.\n".to_string())
            }
            "exit" => Event::Exited,
            _ => Event::Error(Error::UnknownCommand(command.to_string())),
        }
    }

    fn set(&mut self, args: &[&str]) -> Event {
        if args.len() != 3 {
            return Event::Error(Error::BadArgumentCount);
        }
        let kind = match Kind::from_name(args[1]) {
            Some(kind) => kind,
            None => return Event::Error(Error::UnknownVariable),
        };
        match kind.parse(args[2]) {
            Ok(value) => {
                self.vars.store(value);
                Event::Ready
            }
            Err(error) => Event::Error(error),
        }
    }

    fn table(&self) -> String {
        let mut out = String::new();
        out.push_str("[VARIABLE]         [VALUE]                [ADDRESS]\n");
        for kind in Kind::ALL.iter() {
            let label = match kind {
                Kind::IntPtr => format!("IntPtr ({}-bits)", std::mem::size_of::<usize>() * 8),
                _ => kind.to_string(),
            };
            out.push_str(&format!(
                "{:<19}{:<20}   {:#x}\n",
                label,
                self.vars.fetch(*kind).to_string(),
                self.vars.address(*kind)
            ));
        }
        out
    }
}

fn help_text() -> String {
    "\
Available options:
print
   Prints all the available variables (type, address and value).
set {vartype} {value}
   Modify the value of a variable.
   {vartype}: The type of variable you want to set.
              Can be: Byte, Int16, Int32, Int64, UInt16, UInt32,
                      UInt64, Single, Double, IntPtr.
   {value}: The new value for the variable.
setTestValues
   Modifies the values of all variables of the application to a
   predefined set of test values. This makes it easy to exercise
   the reading side of an attached memory inspector.
exit
   Terminates the application.
"
    .to_string()
}
