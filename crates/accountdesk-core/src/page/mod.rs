//! Page workflow.
//!
//! [`PageState`] holds the account list, the selection and the form, and is
//! changed only through its transition methods. Transitions that need the
//! network return an [`Effect`]; running it yields an [`Outcome`] which is fed
//! back through [`PageState::apply`]. [`PageController`] drives that loop to
//! completion for headless callers; the desktop app runs effects as tasks.

mod controller;
mod effect;
mod state;

pub use controller::PageController;
pub use effect::{Effect, Outcome, execute};
pub use state::{PageMode, PageState};
