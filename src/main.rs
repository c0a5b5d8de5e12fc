use anyhow::{Context, Result};
use cm1_sounding::{run, Cli};
use log::LevelFilter;

fn main() -> Result<()> {
    let cli = Cli::parse_normalized();
    init_logging(cli.verbose);

    let config = cli.into_config()?;
    let input = config.input.display().to_string();

    let snd = run(&config).with_context(|| format!("generating sounding from {}", input))?;
    log::info!("done, {} levels", snd.num_levels());

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
