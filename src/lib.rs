//! # Connect Four Engine
//!
//! A Connect Four game engine: board representation, legal-move
//! enumeration, win/draw detection, and move-selection agents backed by
//! exhaustive minimax search, a heuristic evaluator, or uniform random
//! choice.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, win detection, state machine
//! - [`ai`] — Agent trait, minimax search, heuristic evaluator, random baseline
//! - [`render`] — Plain-text board rendering
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod render;
