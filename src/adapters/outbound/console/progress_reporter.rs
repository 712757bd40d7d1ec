use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::sync::Mutex;
use std::time::Duration;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Keeps stdout free for the document itself. Messages ending in `...`
/// start an indicatif spinner that is cleared by the next message.
/// Warnings are printed in yellow when stderr is a terminal.
pub struct StderrProgressReporter {
    active: Mutex<Option<ProgressBar>>,
    colored: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            active: Mutex::new(None),
            colored: std::io::stderr().is_terminal(),
        }
    }

    fn clear_active(&self) {
        if let Ok(mut active) = self.active.lock() {
            if let Some(pb) = active.take() {
                pb.finish_and_clear();
            }
        }
    }

    fn start_spinner(&self, message: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        if let Ok(mut active) = self.active.lock() {
            *active = Some(pb);
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

// A phase that fails leaves its spinner running until the reporter goes away
impl Drop for StderrProgressReporter {
    fn drop(&mut self) {
        self.clear_active();
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        self.clear_active();
        if message.ends_with("...") && self.colored {
            self.start_spinner(message);
        } else {
            eprintln!("{}", message);
        }
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        self.clear_active();
        let suffix = message.map(|m| format!(" {}", m)).unwrap_or_default();
        eprintln!("   {}/{}{}", current, total, suffix);
    }

    fn report_warning(&self, message: &str) {
        self.clear_active();
        if self.colored {
            eprintln!("{}", message.yellow());
        } else {
            eprintln!("{}", message);
        }
    }

    fn report_completion(&self, message: &str) {
        self.clear_active();
        if self.colored {
            eprintln!("{}", message.green());
        } else {
            eprintln!("{}", message);
        }
    }
}
