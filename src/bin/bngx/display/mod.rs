mod error;
mod progress;
mod tables;

pub use error::{print_diagnostics, print_error};
pub use progress::Progress;
pub use tables::{print_model_summary, print_stats};

#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub interactive: bool,
}

impl Context {
    pub fn detect() -> Self {
        Self {
            interactive: crate::io::stderr_is_tty(),
        }
    }

    pub fn with_quiet(self, quiet: bool) -> Self {
        if quiet {
            Self { interactive: false }
        } else {
            self
        }
    }
}
