//! Disappear - A window close animation effect for compositors.
//!
//! When a window closes, the effect keeps it on screen for a short moment and
//! shrinks it away while fading it out, instead of letting it vanish at once.
//!
//! The library is host agnostic: a compositor plugs in through the
//! [`host::EffectsHost`] trait, feeds window signals into
//! [`effect::DisappearEffect`] and asks it for per-frame transforms. The
//! `disappear` binary drives the same controller against an in-memory host.

// Core modules
pub mod config;
pub mod constants;
pub mod effect;
pub mod error;
pub mod host;
pub mod schema;

// Command-line interface
pub mod cli;
