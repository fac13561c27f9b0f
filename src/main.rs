use clap::Parser;
use env_logger::Env;
use serpscope::{
    configuration::get_configuration_from,
    startup::{run, Cli},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let configuration = get_configuration_from(cli.config)?;

    run(cli.command, configuration).await
}
