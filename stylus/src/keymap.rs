//! Key types shared by the engine, the simulator and the CLI.

pub mod key;

pub use key::{Key, KeyEvent};
