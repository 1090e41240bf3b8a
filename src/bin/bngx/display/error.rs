use std::io::{self, Write};

use anyhow::Error;
use bngl_bridge::EngineError;
use bngl_bridge::io::Error as IoError;

use crate::util::text::wrap;

const WIDTH: usize = 62;

pub fn print_error(err: &Error) {
    let mut out = io::stderr().lock();

    let _ = writeln!(out);
    let _ = writeln!(out, "   ╔{}╗", "═".repeat(WIDTH));
    boxed(&mut out, 2, "✗ Error");
    divider(&mut out);
    for line in wrap(&err.to_string(), WIDTH - 3) {
        boxed(&mut out, 2, &line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        divider(&mut out);
        boxed(&mut out, 2, "Caused by:");
        for line in wrap(&cause.to_string(), WIDTH - 5) {
            boxed(&mut out, 4, &line);
        }
        source = cause.source();
    }

    if let Some(hints) = HintCollector::collect(err) {
        divider(&mut out);
        boxed(&mut out, 2, "Hints:");
        for hint in hints {
            for (i, line) in wrap(&hint, WIDTH - 7).iter().enumerate() {
                let bullet = if i == 0 { "• " } else { "  " };
                boxed(&mut out, 4, &format!("{bullet}{line}"));
            }
        }
    }

    let _ = writeln!(out, "   ╚{}╝", "═".repeat(WIDTH));
    let _ = writeln!(out);
}

fn divider(out: &mut impl Write) {
    let _ = writeln!(out, "   ╟{}╢", "─".repeat(WIDTH));
}

fn boxed(out: &mut impl Write, indent: usize, text: &str) {
    let inner = WIDTH - indent - 1;
    let _ = writeln!(
        out,
        "   ║{:indent$}{:<inner$} ║",
        "",
        text,
        indent = indent,
        inner = inner
    );
}

/// Prints the rules that were exported as comments.
#[rustfmt::skip]
pub fn print_diagnostics(diagnostics: &str) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr, "   ┌─ \x1b[33m!\x1b[0m Rules without a BNGL equivalent ─┐");
    for entry in diagnostics.lines().filter(|l| !l.trim().is_empty()) {
        let wrapped = wrap(entry, 57);
        if let Some((first, rest)) = wrapped.split_first() {
            let _ = writeln!(stderr, "     • {}", first);
            for line in rest {
                let _ = writeln!(stderr, "       {}", line);
            }
        }
    }
    let _ = writeln!(stderr, "     \x1b[2mThese rules were written as comments; use --strict to fail instead.\x1b[0m");
    let _ = writeln!(stderr);
}

struct HintCollector {
    hints: Vec<String>,
    has_typed_hints: bool,
}

impl HintCollector {
    fn new() -> Self {
        Self {
            hints: Vec::new(),
            has_typed_hints: false,
        }
    }

    fn collect(err: &Error) -> Option<Vec<String>> {
        let mut collector = Self::new();

        for cause in err.chain() {
            if let Some(io_err) = cause.downcast_ref::<IoError>() {
                collector.collect_io_hints(io_err);
                break;
            }
            if let Some(engine_err) = cause.downcast_ref::<EngineError>() {
                if collector.collect_engine_hints(engine_err) {
                    break;
                }
            }
        }

        if !collector.has_typed_hints {
            collector.collect_fallback_hints(err);
        }

        if collector.hints.is_empty() {
            None
        } else {
            Some(collector.hints)
        }
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn mark_typed(&mut self) {
        self.has_typed_hints = true;
    }

    fn collect_io_hints(&mut self, io_err: &IoError) {
        self.mark_typed();

        match io_err {
            IoError::Io { source } => self.collect_std_io_hints(source),

            IoError::Parse { line, .. } => {
                self.add(format!(
                    "The model description is not valid TOML near line {}",
                    line
                ));
                self.add("Tables are [[molecule_type]], [[compartment]], [[rule]] and [[species]]");
                self.add("Unknown keys are rejected; check for typos in field names");
            }

            IoError::Model(_) => {
                self.add("The model description is well-formed but inconsistent");
                self.add("Compartment dimensions must be 2 or 3 and sizes non-negative");
                self.add("Names of molecule types and compartments must be unique");
            }

            IoError::UnknownCompartment(_)
            | IoError::InconsistentCompartmentLink { .. }
            | IoError::MalformedCompartmentTree { .. } => {
                self.add("The compartment hierarchy is not a forest");
                self.add("Every compartment needs at most one parent and no cycles");
                self.add("Check the 'parent' entries of the [[compartment]] tables");
            }
        }
    }

    fn collect_engine_hints(&mut self, engine_err: &EngineError) -> bool {
        match engine_err {
            EngineError::NotInitialized | EngineError::AlreadyInitialized => {
                self.mark_typed();
                self.add("Reaction rules must be registered exactly once before export");
                true
            }

            EngineError::UnknownSpecies(id) => {
                self.mark_typed();
                self.add(format!("Species {} is not registered", id));
                true
            }

            EngineError::Export(_) => false,
        }
    }

    fn collect_std_io_hints(&mut self, source: &std::io::Error) {
        use std::io::ErrorKind;

        match source.kind() {
            ErrorKind::NotFound => {
                self.add("File or directory not found");
                self.add("Check the path spelling and ensure the file exists");
            }

            ErrorKind::PermissionDenied => {
                self.add("Permission denied accessing the file");
                self.add("Ensure you have read/write access as needed");
            }

            ErrorKind::InvalidData => {
                self.add("The model description is not valid UTF-8");
            }

            ErrorKind::BrokenPipe => {
                self.add("Broken pipe: the output consumer terminated early");
            }

            _ => {
                self.add("I/O operation failed");
                self.add("Check file path, permissions, and disk space");
            }
        }
    }

    fn collect_fallback_hints(&mut self, err: &Error) {
        let msg = error_chain_text(err);

        if msg.contains("terminal") || msg.contains("stdin") {
            self.add("Provide input via -i/--input or pipe data to stdin");
            return;
        }

        if msg.contains("no such file") || msg.contains("not found") {
            self.add("Check that the file path is correct");
            return;
        }

        if msg.contains("cannot be expressed") {
            self.add("Run without --strict to export the remaining rules");
            return;
        }

        if msg.contains("volume") || msg.contains("area") {
            self.add("NFSim rates need a positive --volume (µm³) and --area (µm²)");
        }
    }
}

fn error_chain_text(err: &Error) -> String {
    let mut text = String::new();

    text.push_str(&err.to_string());

    let mut source = err.source();
    while let Some(cause) = source {
        text.push('\n');
        text.push_str(&cause.to_string());
        source = cause.source();
    }

    text.to_lowercase()
}
