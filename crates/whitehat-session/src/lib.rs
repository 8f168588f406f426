//! Text front end for the whitehat rules engine.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, Setting, parse_command};
pub use error::{ArgumentError, SessionError};
pub use session::{Flow, RejectedLine, ReplayReport, Session, SessionConfig};
