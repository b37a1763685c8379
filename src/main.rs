use clap::Parser;
use relm4::prelude::*;
use ringdial::config;
use ringdial::gui::app::AppModel;
use ringdial::sys::runtime;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ringdial", about = "Circular slider demo", version)]
struct Cli {
    /// Path to a config file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial slider value, overriding the config file
    #[arg(long)]
    value: Option<f64>,

    /// Write a commented default config file and exit
    #[arg(long)]
    write_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.write_config {
        let path = config::write_default_config()?;
        println!("{}", path.display());
        return Ok(());
    }

    let mut slider_config = config::load_or_setup(cli.config.as_deref());
    if let Some(value) = cli.value {
        slider_config.initial_value = value;
    }

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx, cli.config.clone());

    let app = RelmApp::new("org.ringdial.ringdial").with_args(Vec::new());

    app.run::<AppModel>((slider_config, cli.config, rx));
    Ok(())
}
