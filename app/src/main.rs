//! FILENAME: app/src/main.rs
//! PURPOSE: Binary entry point; all logic lives in the library crate.

fn main() {
    kabuscreen::run();
}
