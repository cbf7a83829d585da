//! # Hanoi TUI
//!
//! An animated Tower of Hanoi solver with a terminal UI built with Ratatui.
//! The recursive solver produces the canonical `2^n − 1` move sequence and
//! the UI draws the full board after every single-disk move, paced by fixed
//! real-time delays.
//!
//! ## Modules
//!
//! - [`puzzle`] — Core puzzle logic: board, disks, recursive solver
//! - [`ui`] — Terminal UI: application loop and animated board view
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod puzzle;
pub mod ui;
