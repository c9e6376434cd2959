use clap::Parser;
use infocircle::config::{self, Config};
use infocircle::gui::app::AppModel;
use infocircle::gui::circle::Scene;
use infocircle::sys::runtime;
use relm4::prelude::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "infocircle", version, about, long_about = None)]
struct Cli {
    /// Config file to load and watch (defaults to the user config directory)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Write the default config file if none exists, print its path and exit
    #[arg(long)]
    write_default_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };

    if cli.write_default_config {
        config::write_default_config(&config_path)?;
        println!("{}", config_path.display());
        return Ok(());
    }

    let config = config::load_or_setup(&config_path);
    let scene = Scene::from_config(&config).or_else(|e| {
        log::error!("Invalid configuration, falling back to setup: {}", e);
        Scene::from_config(&Config::setup())
    })?;

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(config_path.clone(), tx);

    // GTK must not see our own command line flags
    let app = RelmApp::new("org.troia.infocircle").with_args(Vec::new());

    app.run::<AppModel>((scene, config_path, rx));
    Ok(())
}
