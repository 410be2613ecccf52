#![allow(clippy::multiple_crate_versions)]

//! uibot - runs the demo scenario and configuration helpers.

fn main() {
    if let Err(err) = uibot_lib::cli::run() {
        eprintln!("uibot: {err}");
        std::process::exit(1);
    }
}
