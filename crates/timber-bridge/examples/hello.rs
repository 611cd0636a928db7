//! Logs a few lines through the `log` facade with timber's default
//! stdout dispatcher.

use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    timber_bridge::install()?;

    log::debug!(target: "ABC", "Hello, world!");
    let error = io::Error::new(io::ErrorKind::InvalidInput, "psych");
    log::debug!(target: "ABC", error:err = error; "Goodbye, world!");
    log::debug!(target: "ABC", "{}, {}!", "Hello again", "world");

    Ok(())
}
