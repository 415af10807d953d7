//! # TUI Components
//!
//! This module contains all UI components for the terminal host.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `StatusBar`: key hints and history position
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `InputBox`: the input widget itself (scrolling, send button hit testing)
//! - `Transcript`: scrollable list of values emitted to the host
//!
//! Stateful components split persistent state (`InputBox`, `TranscriptState`)
//! from a per-frame view that borrows it together with that frame's props.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── status_bar.rs    (Bottom hint bar)
//! ├── transcript.rs    (Emitted values)
//! └── input_box/       (Input widget + viewport scrolling)
//! ```

pub mod input_box;
pub mod status_bar;
pub mod transcript;

pub use input_box::InputBox;
pub use status_bar::StatusBar;
pub use transcript::{Transcript, TranscriptState};
