use std::io::{self, Write};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

const TICK_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";
const FOOTER_RULE_WIDTH: usize = 56;

/// Numbered export steps on stderr, or nothing at all when not interactive.
pub struct Progress {
    steps: Option<Steps>,
}

struct Steps {
    bar: Option<ProgressBar>,
    started: Instant,
    step_started: Instant,
    current: u8,
    total: u8,
}

impl Steps {
    fn clear_bar(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

impl Progress {
    pub fn new(interactive: bool, total_steps: u8) -> Self {
        let now = Instant::now();
        Self {
            steps: interactive.then_some(Steps {
                bar: None,
                started: now,
                step_started: now,
                current: 0,
                total: total_steps,
            }),
        }
    }

    pub fn step(&mut self, description: &str) {
        let Some(steps) = self.steps.as_mut() else {
            return;
        };
        steps.clear_bar();
        steps.current += 1;
        steps.step_started = Instant::now();

        let style = ProgressStyle::default_spinner()
            .template("  {spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars(TICK_CHARS);
        let bar = ProgressBar::new_spinner().with_style(style).with_message(format!(
            "[{}/{}] {description}...",
            steps.current, steps.total
        ));
        bar.enable_steady_tick(Duration::from_millis(80));
        steps.bar = Some(bar);
    }

    pub fn complete_step(&mut self, description: &str, substeps: &[&str]) {
        let Some(steps) = self.steps.as_mut() else {
            return;
        };
        steps.clear_bar();

        let mut err = io::stderr().lock();
        let secs = steps.step_started.elapsed().as_secs_f64();
        let _ = writeln!(err, "  \x1b[32m✓\x1b[0m {description:<44} {secs:>5.1}s");
        for substep in substeps {
            let _ = writeln!(err, "      \x1b[2m·\x1b[0m {substep}");
        }
    }

    /// Clears the running step and prints the total time.
    pub fn finish(self) {
        self.end(true);
    }

    /// Clears the running step without reporting completion.
    pub fn abandon(self) {
        self.end(false);
    }

    fn end(mut self, completed: bool) {
        let Some(steps) = self.steps.as_mut() else {
            return;
        };
        steps.clear_bar();
        if !completed {
            return;
        }

        let total = format!("Total: {:.2}s", steps.started.elapsed().as_secs_f64());
        let mut err = io::stderr().lock();
        let _ = writeln!(err);
        let _ = writeln!(
            err,
            "  \x1b[2m╺{}╸\x1b[0m",
            "━".repeat(FOOTER_RULE_WIDTH)
        );
        let _ = writeln!(err);
        let _ = writeln!(err, "  \x1b[32m✓\x1b[0m Export complete {total:>34}");
        let _ = writeln!(err);
    }
}
