// SPDX-License-Identifier: LGPL-3.0-or-later

use std::io::{self, Write};

use lawtscript_core::prolog::*;

/// The environment scripts act upon.
///
/// Scene operations never fail as far as scripts are concerned. Console output
/// goes to the process's standard streams unless overridden.
pub trait HostEnvironment {
    fn create_window(&mut self, width: IntegerValue, height: IntegerValue, title: &str);

    /// Creates a circle entity in the default entity colour.
    fn create_circle(&mut self, x: FloatValue, y: FloatValue, radius: FloatValue);

    fn print(&mut self, message: &str) -> io::Result<()> {
        writeln!(io::stdout().lock(), "{message}")
    }

    fn print_err(&mut self, message: &str) -> io::Result<()> {
        writeln!(io::stderr().lock(), "{message}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    CreateWindow { width: IntegerValue, height: IntegerValue, title: String },
    CreateCircle { x: FloatValue, y: FloatValue, radius: FloatValue },
    Print(String),
    PrintErr(String),
}

impl std::fmt::Display for HostCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HostCall::CreateWindow { width, height, title } => {
                write!(f, "createWindow({width}, {height}, \"{title}\")")
            },
            HostCall::CreateCircle { x, y, radius } => write!(f, "createCircle({x}, {y}, {radius})"),
            HostCall::Print(message) => write!(f, "print(\"{message}\")"),
            HostCall::PrintErr(message) => write!(f, "printErr(\"{message}\")"),
        }
    }
}

/// A host which records every scene operation in order.
///
/// Console output is written through to the standard streams, unless the host
/// was made with [`RecordingHost::capturing`], in which case it is recorded too.
#[derive(Debug, Default)]
pub struct RecordingHost {
    calls: Vec<HostCall>,
    capture_console: bool,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn capturing() -> Self {
        Self { calls: Vec::new(), capture_console: true }
    }

    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<HostCall> {
        self.calls
    }

    /// Recorded standard output lines, in order.
    pub fn output(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::Print(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Recorded error output lines, in order.
    pub fn error_output(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::PrintErr(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl HostEnvironment for RecordingHost {
    fn create_window(&mut self, width: IntegerValue, height: IntegerValue, title: &str) {
        self.calls.push(HostCall::CreateWindow { width, height, title: title.to_owned() });
    }

    fn create_circle(&mut self, x: FloatValue, y: FloatValue, radius: FloatValue) {
        self.calls.push(HostCall::CreateCircle { x, y, radius });
    }

    fn print(&mut self, message: &str) -> io::Result<()> {
        match self.capture_console {
            true => {
                self.calls.push(HostCall::Print(message.to_owned()));
                Ok(())
            },
            false => writeln!(io::stdout().lock(), "{message}"),
        }
    }

    fn print_err(&mut self, message: &str) -> io::Result<()> {
        match self.capture_console {
            true => {
                self.calls.push(HostCall::PrintErr(message.to_owned()));
                Ok(())
            },
            false => writeln!(io::stderr().lock(), "{message}"),
        }
    }
}
