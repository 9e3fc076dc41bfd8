#![allow(clippy::multiple_crate_versions)]

//! Disappear - window close animation effect.
//!
//! The binary exposes the effect's tooling: replaying close animations on a
//! simulated compositor, checking window eligibility, and managing the
//! configuration file.

fn main() {
    if let Err(err) = disappear_lib::cli::run() {
        eprintln!("disappear: {err}");
        std::process::exit(1);
    }
}
