//! Celsius command implementation

use anyhow::{Context, Result};
use clap::Args;

use crate::temperature::Celsius;

#[derive(Args)]
pub struct CelsiusArgs {
    /// Temperature in degrees Celsius
    #[arg(value_name = "VALUE", default_value_t = -30.0, allow_negative_numbers = true)]
    pub value: f64,
}

pub fn run(args: CelsiusArgs) -> Result<()> {
    println!("Test entry point");
    let mut temp = Celsius::new(37.0)?;
    temp.set_temperature(args.value)
        .with_context(|| format!("Cannot convert {} °C", args.value))?;
    println!("{}", temp.to_fahrenheit());
    Ok(())
}
