#![forbid(unsafe_code)]

//! Browser runner for the folio site.
//!
//! This crate provides [`RunnerCore`], which wraps
//! `folio_runtime::StepProgram<PortfolioApp>` together with the hero
//! background, and on `wasm32` a `wasm-bindgen`-exported `PortfolioRunner`
//! that exposes it to the page script for host-driven execution.
//!
//! The page script owns the event loop: it forwards DOM events as JSON
//! (see [`input`]), advances time, calls `step()` and swaps in the markup
//! the runner hands back.

pub mod input;
pub mod runner_core;

#[cfg(target_arch = "wasm32")]
mod wasm;

pub use input::{HostInput, InputParseError, parse_encoded_input};
pub use runner_core::{RunnerCore, StepReport};

#[cfg(target_arch = "wasm32")]
pub use wasm::PortfolioRunner;
