//! # Core Widget Logic
//!
//! This module contains the input widget's behavior.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • InputState           │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • derive() (styling)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                ┌───────────────┴───────────────┐
//!                ▼                               ▼
//!         ┌────────────┐                  ┌────────────┐
//!         │    TUI     │                  │   Value    │
//!         │  Adapter   │                  │   Sink     │
//!         │ (ratatui)  │                  │  (host)    │
//!         └────────────┘                  └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `InputState`, all widget state in one place
//! - [`action`]: `Action` / `Effect` and the `update()` reducer
//! - [`history`]: submitted-value log and the browse cursor
//! - [`indent`]: Tab / Shift+Tab transforms
//! - [`presentation`]: box height and colors derived from state + theme
//! - [`config`]: config file, env vars and host args

pub mod action;
pub mod config;
pub mod history;
pub mod indent;
pub mod presentation;
pub mod state;
pub mod submission;
pub mod text;
pub mod theme;
