use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    commands::{
        audit_domains, check_search_volume, commercialize, expand, fetch_forecast, fetch_serp,
        scan_unknown_domains,
        scan_unknowns_command::{DEFAULT_END, DEFAULT_START},
        site_structure,
    },
    configuration::Settings,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Expand the seed phrase into related keywords with base volume
    Expand,
    /// Fetch exact-match volumes into the keyword table
    FetchForecast,
    /// Check which keywords have any search volume, per device type
    CheckSearchVolume,
    /// Fetch top search results for every keyword
    FetchSerp,
    /// Score keywords by how commercial their results are
    Commercialize,
    /// Rank result domains by adjusted search volume
    AuditDomains,
    /// Report unclassified domains for a volume-ranked slice of keywords
    ScanUnknowns {
        #[arg(default_value_t = DEFAULT_START)]
        start: usize,
        #[arg(default_value_t = DEFAULT_END)]
        end: usize,
    },
    /// Build sitemap rows from hub-labelled keywords
    SiteStructure,
}

pub async fn run(command: Command, settings: Settings) -> anyhow::Result<()> {
    log::info!("Running {:?}", command);

    match command {
        Command::Expand => expand(&settings).await,
        Command::FetchForecast => fetch_forecast(&settings).await,
        Command::CheckSearchVolume => check_search_volume(&settings).await,
        Command::FetchSerp => fetch_serp(&settings).await,
        Command::Commercialize => commercialize(&settings).await,
        Command::AuditDomains => audit_domains(&settings).await,
        Command::ScanUnknowns { start, end } => scan_unknown_domains(&settings, start, end).await,
        Command::SiteStructure => site_structure(&settings).await,
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Command};

    #[test]
    fn scan_unknowns_range_defaults() {
        let cli = Cli::parse_from(["serpscope", "scan-unknowns"]);
        assert_eq!(cli.command, Command::ScanUnknowns { start: 301, end: 2000 });

        let cli = Cli::parse_from(["serpscope", "scan-unknowns", "1", "300"]);
        assert_eq!(cli.command, Command::ScanUnknowns { start: 1, end: 300 });
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::parse_from(["serpscope", "fetch-serp", "--config", "custom.yaml"]);
        assert_eq!(cli.command, Command::FetchSerp);
        assert_eq!(cli.config.unwrap().to_str(), Some("custom.yaml"));
    }

    #[test]
    fn search_volume_check_is_a_subcommand() {
        let cli = Cli::parse_from(["serpscope", "check-search-volume"]);
        assert_eq!(cli.command, Command::CheckSearchVolume);
    }

    #[test]
    fn command_is_required() {
        assert!(Cli::try_parse_from(["serpscope"]).is_err());
    }
}
