//! CLI argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::widget::EndpointVariant;

#[derive(Parser, Debug)]
#[command(name = "chatline")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Chat server base URL (e.g., http://127.0.0.1:5000)
    #[arg(short, long, global = true)]
    pub url: Option<String>,

    /// Request shape of the chat endpoint
    #[arg(long, value_enum, global = true)]
    pub variant: Option<EndpointVariant>,

    /// Override the endpoint path (e.g., /api/prompt)
    #[arg(long, global = true)]
    pub path: Option<String>,

    /// Label shown next to replies
    #[arg(short, long, global = true)]
    pub name: Option<String>,

    /// Seconds between connectivity probes
    #[arg(long, global = true)]
    pub probe_interval: Option<u64>,

    /// Connectivity probe timeout in milliseconds (at least 100)
    #[arg(long, global = true)]
    pub probe_timeout: Option<u64>,

    /// Write JSON logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send one message and print the exchange
    Send {
        /// Message text; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Check whether the server is reachable
    Probe,
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigSubcommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommands {
    /// Initialize a new config file
    Init,
    /// Print config file location
    Where,
    /// Print the effective configuration
    Show,
}

impl Cli {
    /// Command-line flags take precedence over file and environment.
    #[must_use]
    pub fn apply_to(&self, mut config: AppConfig) -> AppConfig {
        if let Some(url) = &self.url {
            config.base_url.clone_from(url);
        }
        if let Some(variant) = self.variant {
            config.variant = variant;
        }
        if let Some(path) = &self.path {
            config.path = Some(path.clone());
        }
        if let Some(name) = &self.name {
            config.assistant_name.clone_from(name);
        }
        if let Some(secs) = self.probe_interval {
            config.probe_interval_secs = secs;
        }
        if let Some(ms) = self.probe_timeout {
            config.probe_timeout_ms = ms;
        }
        if let Some(log_file) = &self.log_file {
            config.log_file = Some(log_file.clone());
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "chatline",
            "--url",
            "http://other:9000",
            "--variant",
            "chat",
            "--probe-interval",
            "30",
        ]);
        let config = cli.apply_to(AppConfig::default());

        assert_eq!(config.base_url, "http://other:9000");
        assert_eq!(config.variant, EndpointVariant::Chat);
        assert_eq!(config.probe_interval_secs, 30);
        assert_eq!(config.probe_timeout_ms, 2000);
    }

    #[test]
    fn send_joins_words() {
        let cli = Cli::parse_from(["chatline", "send", "hello", "there"]);
        match cli.command {
            Some(Commands::Send { text }) => assert_eq!(text.join(" "), "hello there"),
            other => panic!("Expected Send, got {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["chatline", "probe", "--url", "http://x:1"]);
        assert!(matches!(cli.command, Some(Commands::Probe)));
        assert_eq!(cli.url.as_deref(), Some("http://x:1"));
    }
}
