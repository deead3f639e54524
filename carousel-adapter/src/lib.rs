//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on the state machine and geometry. This crate
//! provides the pieces every adapter needs around it:
//!
//! - Markup conventions (selectors, classes, inline style values)
//! - Mounting and discovery of carousel roots, leaving malformed roots inert
//! - A [`Controller`] that tracks outstanding frame callbacks and resize timers
//!
//! With `feature = "web"`, [`web`] binds all of this to the browser DOM through
//! `wasm-bindgen`/`web-sys`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
pub mod markup;
mod mount;

#[cfg(feature = "web")]
pub mod web;


pub use controller::Controller;
pub use mount::{MountError, Mounted, RootParts, Wiring, attach_all};
