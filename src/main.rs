use anyhow::{anyhow, Context};
use env_logger::Env;
use log::{debug, info};

use clap::Parser;

use crate::{model::Model, settings::Cli, ui::WINDOW_SIZE};

mod installation;
mod model;
mod notifications;
mod settings;
mod ui;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(&cli.log_level))
        .filter_module("egui_glow", log::LevelFilter::Warn)
        .filter_module("egui_winit", log::LevelFilter::Warn)
        .filter_module("eframe", log::LevelFilter::Warn)
        .init();

    debug!("Started with settings: {:?}", cli);

    let model = Model::new(&cli);

    if cli.headless_mode {
        info!("Running in headless mode; printing starting state");
        let json = serde_json::to_string_pretty(&model.installation)
            .context("failed to serialize installation")?;
        println!("{}", json);
        return Ok(());
    }

    info!("Running graphics mode; close the window to quit");
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_title("Sacrarium LED"),
        ..Default::default()
    };
    eframe::run_native(
        "Sacrarium LED",
        options,
        Box::new(|_cc| Box::<Model>::new(model)),
    )
    .map_err(|e| anyhow!("failed to launch GUI: {}", e))?;
    info!("GUI ended; exit now...");

    Ok(())
}
