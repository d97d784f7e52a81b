use crate::ports::outbound::Notifier;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::cell::RefCell;
use std::time::Duration;

/// StderrNotifier adapter for user feedback on stderr
///
/// Keeps stdout free for command output. Loading indicators are indicatif
/// spinners; alerts are printed once in red and forgotten.
pub struct StderrNotifier {
    spinner: RefCell<Option<ProgressBar>>,
    quiet: bool,
}

impl StderrNotifier {
    pub fn new() -> Self {
        Self {
            spinner: RefCell::new(None),
            quiet: false,
        }
    }

    /// A notifier that shows alerts but no status lines or spinners
    pub fn quiet() -> Self {
        Self {
            spinner: RefCell::new(None),
            quiet: true,
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("   {spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for StderrNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for StderrNotifier {
    fn report(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    fn start_loading(&self, message: &str) {
        if self.quiet {
            return;
        }
        let mut slot = self.spinner.borrow_mut();
        if let Some(previous) = slot.take() {
            previous.finish_and_clear();
        }
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(Self::spinner_style());
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        *slot = Some(spinner);
    }

    fn finish_loading(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }

    fn alert(&self, message: &str) {
        self.finish_loading();
        eprintln!("{} {}", "✖".red().bold(), message.red());
    }
}
