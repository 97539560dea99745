//! Editor core for Stylus
//!
//! A code editor built from two layers: a native text input the user types
//! into, and a highlighted overlay drawn behind it. This crate owns everything
//! between the two. [`Session`] holds the committed [`EditorState`], routes
//! keys through [`SmartEdit`], and re-renders overlay markup with
//! [`stylus_text`] whenever the text changes.
//!
//! [`input_simulator`] drives a session headlessly for tests and the CLI.

pub mod cli;
pub mod config;
pub mod input_simulator;
pub mod keymap;
pub mod protocol;
pub mod scroll;
pub mod session;
pub mod smart_edit;
pub mod state;

pub use config::Config;
pub use input_simulator::{parse_input_sequence, InputSimulator};
pub use keymap::{Key, KeyEvent};
pub use protocol::{AnalyzeRequest, SummarizeRequest, SummaryResponse, Target};
pub use scroll::{sync_scroll, ScrollPosition, Scrollable};
pub use session::{EditSurface, Session, DEFAULT_DOCUMENT};
pub use smart_edit::{KeyOutcome, SmartEdit, SmartEditConfig};
pub use state::{Edit, EditorState, Selection, SelectionParseError};
