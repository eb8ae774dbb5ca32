pub mod app;
pub mod cli;
pub mod domain;
pub mod infra;

pub use app::bundle::{Bundler, run};
pub use domain::errors::BundleError;

use infra::config::Config;

pub fn init() -> anyhow::Result<()> {
    let config = Config::load();
    infra::logging::init(&config)
}
