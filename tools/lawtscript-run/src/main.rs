// SPDX-License-Identifier: LGPL-3.0-or-later

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use lawtscript::parse::reporting::files::SimpleFile;
use lawtscript::parse::reporting::term::termcolor::{ColorChoice, StandardStream};
use lawtscript::parse::reporting::term::{self, Chars};
use lawtscript::prolog::*;
use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Runs a LawtScript file against a console host.
#[derive(Debug, clap::Parser)]
struct Arguments {
    /// The script to run.
    path: PathBuf,

    /// Treat any argument text containing a digit as a numeral.
    #[arg(long)]
    legacy_numerals: bool,

    /// The maximum level of log messages to show.
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,

    /// Print each window and circle the script creates.
    #[arg(long)]
    trace_host: bool,
}

/// A host with no scene of its own.
struct ConsoleHost {
    trace: bool,
}

impl HostEnvironment for ConsoleHost {
    fn create_window(&mut self, width: IntegerValue, height: IntegerValue, title: &str) {
        if self.trace {
            println!("window {width}x{height} \"{title}\"");
        }
    }

    fn create_circle(&mut self, x: FloatValue, y: FloatValue, radius: FloatValue) {
        if self.trace {
            println!("circle ({x}, {y}) r={radius}");
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Arguments::parse();

    SimpleLogger::new().with_level(args.log_level).init()?;

    let options = ParseOptions {
        numerals: match args.legacy_numerals {
            true => NumeralRule::Legacy,
            false => NumeralRule::Strict,
        },
    };

    let host = ConsoleHost { trace: args.trace_host };
    let mut interpreter = Interpreter::from_path(host, &options, &args.path);
    let result = interpreter.execute();

    // Reports point into the source, which the interpreter does not keep
    if interpreter.is_runnable() {
        match std::fs::read_to_string(&args.path) {
            Ok(text) => write_diagnostics(&interpreter, &args.path, &text),
            Err(error) => log::warn!("couldn't re-read script for diagnostics: {error}"),
        }
    }

    result.context("script execution failed")
}

fn write_diagnostics(interpreter: &Interpreter<ConsoleHost>, path: &std::path::Path, text: &str) {
    let writer = StandardStream::stderr(ColorChoice::Auto);
    let config = term::Config { chars: Chars::ascii(), ..Default::default() };

    let file = SimpleFile::new(path.to_string_lossy(), text);
    for warning in interpreter.program().warnings() {
        _ = term::emit(&mut writer.lock(), &config, &file, &warning.to_codespan(()));
    }
    for diagnostic in interpreter.context().diagnostics() {
        _ = term::emit(&mut writer.lock(), &config, &file, &diagnostic.to_codespan(()));
    }
}
