//! Debounced push-button reading for mechanical switches.
//!
//! A mechanical switch does not produce a clean edge: the contacts bounce for
//! a few milliseconds on every press and release. This crate turns that raw
//! signal into a single confirmed press event per press/release cycle, in two
//! scheduling flavours:
//!
//! - [`DebouncedSwitch::poll`] — non-blocking, meant to be called on every
//!   iteration of a control loop.
//! - [`DebouncedSwitch::read_blocking`] — suspends the caller until the
//!   current press (if any) has fully resolved.
//!
//! The hardware is injected through two small traits, [`InputSignal`] for the
//! digital sample and [`Clock`] for millisecond timing, so the state machine
//! runs unchanged on real GPIO or on fakes in host tests.

#![cfg_attr(not(test), no_std)]

mod circuit;
mod debounce;

pub use circuit::{DebounceConfig, Level, PullMode, SwitchCircuit};
pub use debounce::{Clock, DebouncedSwitch, InputSignal};
