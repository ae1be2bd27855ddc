//! Doro - a small voice assistant
//!
//! Doro takes a recognized (or typed) phrase, matches it against an ordered
//! list of keyword rules and answers with a reply plus at most one action:
//! dial a number, look up a contact and dial, or open an app or settings.
//!
//! ## Layers
//!
//! 1. **Interpreter**: a pure function from utterance to reply and action.
//!    First matching rule wins, unmatched input gets a fixed fallback.
//!
//! 2. **Session**: runs one listen/interpret/act/speak cycle at a time
//!    against the platform collaborators and turns their failures into
//!    follow-up replies.

pub mod config;
pub mod interpreter;
pub mod platform;
pub mod session;

pub use interpreter::{Action, DialTarget, Interpreter, Outcome, Resource};
