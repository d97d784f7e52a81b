use shelfwise::prelude::*;
use std::sync::{Arc, Mutex};

/// Navigator that records every view it is sent to
#[derive(Default, Clone)]
pub struct RecordingNavigator {
    pub views: Arc<Mutex<Vec<View>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn views(&self) -> Vec<View> {
        self.views.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<View> {
        self.views.lock().unwrap().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, view: View) {
        self.views.lock().unwrap().push(view);
    }
}
