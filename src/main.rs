//! rust-template: command-line entry point

use anyhow::Result;

fn main() -> Result<()> {
    rust_template::cli::run()
}
