//! Speech dispatch through external OS utilities

pub mod backends;
pub mod dispatcher;
pub mod escape;
pub mod invocation;

pub use dispatcher::{create_dispatcher, Dispatcher};
pub use escape::escape_text;
pub use invocation::{FailureHints, Invocation};
