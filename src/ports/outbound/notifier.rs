/// Notifier port for user-visible feedback
///
/// This port abstracts how status lines, loading indicators and one-shot
/// alerts reach the user (e.g., stderr with a spinner).
pub trait Notifier {
    /// Reports a status message
    fn report(&self, message: &str);

    /// Shows a loading indicator until `finish_loading` is called
    ///
    /// # Arguments
    /// * `message` - What is being loaded
    fn start_loading(&self, message: &str);

    /// Removes the loading indicator, if any
    fn finish_loading(&self);

    /// Shows a one-shot alert for a failed user action
    ///
    /// Alerts are not remembered; the next action starts clean.
    fn alert(&self, message: &str);
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn report(&self, message: &str) {
        (**self).report(message)
    }

    fn start_loading(&self, message: &str) {
        (**self).start_loading(message)
    }

    fn finish_loading(&self) {
        (**self).finish_loading()
    }

    fn alert(&self, message: &str) {
        (**self).alert(message)
    }
}
