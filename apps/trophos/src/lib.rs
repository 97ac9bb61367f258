//! # Trophos - Food Web Analyzer
//!
//! The main binary for the trophos food-web engine.
//!
//! This application provides:
//! - Interactive session driver (build, relate, modify, report)
//! - CLI flag handling (clap)
//! - Text and JSON report rendering
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                apps/trophos (THE BINARY)                │
//! │                                                         │
//! │  ┌──────────┐     ┌───────────┐     ┌───────────────┐  │
//! │  │   CLI    │     │  Session  │     │   Rendering   │  │
//! │  │  (clap)  │     │  (repl)   │     │  (text/json)  │  │
//! │  └────┬─────┘     └─────┬─────┘     └──────┬────────┘  │
//! │       │                 │                  │           │
//! │       └─────────────────┼──────────────────┘           │
//! │                         ▼                              │
//! │                ┌─────────────────┐                     │
//! │                │  trophos-core   │                     │
//! │                │   (THE LOGIC)   │                     │
//! │                └─────────────────┘                     │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Full interactive session
//! trophos
//!
//! # Read-only: build the web, print the report, exit
//! trophos --basic
//!
//! # Scripted runs: suppress prompts, keep program output
//! trophos --quiet < session.txt
//!
//! # Machine-readable report
//! trophos --quiet --basic --json < session.txt
//! ```

pub mod cli;
pub mod render;
pub mod repl;
