//! Run command implementation

use anyhow::{Context, Result};
use clap::Args;

use super::config_name_parser;
use crate::config::ConfigCatalog;
use crate::temperature::Celsius;

#[derive(Args)]
pub struct RunArgs {
    /// String parameter, logged as-is
    #[arg(long, alias = "str_param", value_name = "TEXT")]
    pub str_param: String,

    /// Boolean switch, logged as-is
    #[arg(long, alias = "bool_param")]
    pub bool_param: bool,

    /// Integer parameter
    #[arg(
        long,
        alias = "int_param",
        value_name = "N",
        default_value_t = 5,
        allow_negative_numbers = true
    )]
    pub int_param: i64,

    /// Float parameter
    #[arg(
        long,
        alias = "float_param",
        value_name = "X",
        default_value_t = 2.5,
        allow_negative_numbers = true
    )]
    pub float_param: f64,

    /// Camera configuration name (see `configs`)
    #[arg(long, value_name = "NAME", value_parser = config_name_parser())]
    pub config: String,
}

pub fn run(args: RunArgs, verbose: bool) -> Result<()> {
    tracing::info!("str param: {}", args.str_param);
    tracing::info!("bool param: {}", args.bool_param);
    tracing::info!("int param: {}", args.int_param);
    tracing::info!("float param: {}", args.float_param);
    tracing::error!("verbose: {}", verbose);
    tracing::warn!("this is a warning");

    let mut temp = Celsius::new(37.0)?;
    temp.set_temperature(-30.0)?;
    let fahrenheit = temp.to_fahrenheit();
    tracing::info!("{}", fahrenheit);
    println!("Temperature: {} ({} °F)", temp, fahrenheit);

    let cam_config = ConfigCatalog::bundled()
        .load(&args.config)
        .with_context(|| format!("Failed loading camera config '{}'", args.config))?;
    let description = cam_config.describe();
    tracing::info!("{}", description);
    print!("{}", description);

    Ok(())
}
