mod app;
mod config;
mod context;
mod controller;
mod demo;
mod error;
mod logging;
mod mesh;
mod opengl;
mod renderer;
mod shaders;
mod viewport;

use config::Config;
use logging::init_logging;

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::from_env()?;
    log::info!("starting '{}' demo", config.demo.name());

    app::run(config)
}
