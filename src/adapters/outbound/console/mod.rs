/// Console adapters: feedback on stderr, navigation and text rendering
mod console_navigator;
mod stderr_notifier;
mod terminal_renderer;

pub use console_navigator::ConsoleNavigator;
pub use stderr_notifier::StderrNotifier;
pub use terminal_renderer::TerminalRenderer;
