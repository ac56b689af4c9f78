//! LeitnerLang terminal client.
//!
//! A front-end for a language-flashcard ledger: the spaced-repetition rules
//! (level transitions, intervals, queue rotation) live in a remote contract;
//! this crate holds the client-side review session state machine, the ledger
//! client, and a terminal presentation layer on top of them.

pub mod config;
pub mod ledger;
pub mod models;
pub mod profile;
pub mod selection;
pub mod session;
pub mod ui;
