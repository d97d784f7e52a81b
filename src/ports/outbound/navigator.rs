use std::fmt;

/// Views the client can send the user to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Login,
    Dashboard,
    Book { id: String },
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Login => write!(f, "/login"),
            View::Dashboard => write!(f, "/dashboard"),
            View::Book { id } => write!(f, "/books/{}", urlencoding::encode(id)),
        }
    }
}

/// Navigator port for signalling a change of view
///
/// Session transitions and redirects only emit the signal; whoever drives
/// the interface decides how to follow it.
pub trait Navigator {
    fn navigate(&self, view: View);
}

impl<T: Navigator + ?Sized> Navigator for &T {
    fn navigate(&self, view: View) {
        (**self).navigate(view)
    }
}
