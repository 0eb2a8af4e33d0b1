mod adapters;
mod cli;
mod config;
mod dashboard;
mod gateways;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    cli::run()
}
