use crate::ports::outbound::{Navigator, View};
use std::cell::RefCell;

/// ConsoleNavigator adapter for a one-shot command line
///
/// There is no router to follow a navigation signal, so the latest one is
/// kept for the command to act on (e.g. show the book a redirect points
/// at) and mentioned on stderr.
#[derive(Default)]
pub struct ConsoleNavigator {
    last: RefCell<Option<View>>,
}

impl ConsoleNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent navigation signal, if any
    pub fn last_view(&self) -> Option<View> {
        self.last.borrow().clone()
    }
}

impl Navigator for ConsoleNavigator {
    fn navigate(&self, view: View) {
        tracing::debug!(%view, "navigate");
        *self.last.borrow_mut() = Some(view);
    }
}
