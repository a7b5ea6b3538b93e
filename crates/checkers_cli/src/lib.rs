//! Line-oriented front end for a checkers match.
//!
//! Reads text commands or JSON messages (see [`protocol`]), drives a
//! [`GameController`](checkers_core::GameController) through a [`Session`],
//! and draws the board with a [`TextRenderer`].

pub mod protocol;
pub mod render;
pub mod session;

pub use protocol::{parse_line, Command, ProtocolError, WireMessage};
pub use render::{render_view, TextRenderer};
pub use session::{Opponent, Session};
