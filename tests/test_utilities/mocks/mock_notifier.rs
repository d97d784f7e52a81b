use shelfwise::prelude::*;
use std::sync::{Arc, Mutex};

/// Notifier that captures messages, prefixed by kind
#[derive(Default, Clone)]
pub struct RecordingNotifier {
    pub messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.with_prefix("Alert: ")
    }

    pub fn reports(&self) -> Vec<String> {
        self.with_prefix("Report: ")
    }

    fn with_prefix(&self, prefix: &str) -> Vec<String> {
        self.get_messages()
            .iter()
            .filter_map(|m| m.strip_prefix(prefix).map(str::to_string))
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn report(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Report: {}", message));
    }

    fn start_loading(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Loading: {}", message));
    }

    fn finish_loading(&self) {
        self.messages.lock().unwrap().push("Loaded".to_string());
    }

    fn alert(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Alert: {}", message));
    }
}
