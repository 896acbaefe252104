use anyhow::Result;
use clap::{Parser, Subcommand};
use common::service::DEFAULT_API_BASE;
use std::path::PathBuf;

pub mod commands;

use commands::serve;

#[derive(Parser)]
#[command(name = "profit-predictor")]
#[command(about = "Host for the startup profit predictor page")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the frontend bundle and the settings it reads at startup
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = "127.0.0.1:8080")]
        bind_address: String,

        /// Directory with the built frontend (output of `trunk build`)
        #[arg(short, long, env = "FRONTEND_DIST", default_value = "workspace/frontend/dist")]
        dist_dir: PathBuf,

        /// Base URL of the prediction service the page talks to
        ///
        /// The service must answer `POST /predict` and `GET /model-info`.
        #[arg(short, long, env = "PREDICTION_API_BASE", default_value = DEFAULT_API_BASE)]
        api_base: String,

        /// Browser console log level: error, warn, info, debug or trace
        #[arg(long, env = "FRONTEND_LOG_LEVEL", default_value = "info")]
        frontend_log_level: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve {
                bind_address,
                dist_dir,
                api_base,
                frontend_log_level,
            } => {
                serve(&bind_address, dist_dir, &api_base, &frontend_log_level).await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_defaults() {
        let cli = Cli::try_parse_from(["profit-predictor", "serve"]).unwrap();
        let Commands::Serve { bind_address, dist_dir, api_base, frontend_log_level } = cli.command;

        // Environment may override defaults on a developer machine
        if std::env::var_os("BIND_ADDRESS").is_none() {
            assert_eq!(bind_address, "127.0.0.1:8080");
        }
        if std::env::var_os("FRONTEND_DIST").is_none() {
            assert_eq!(dist_dir, PathBuf::from("workspace/frontend/dist"));
        }
        if std::env::var_os("PREDICTION_API_BASE").is_none() {
            assert_eq!(api_base, "http://localhost:5001");
        }
        if std::env::var_os("FRONTEND_LOG_LEVEL").is_none() {
            assert_eq!(frontend_log_level, "info");
        }
    }

    #[test]
    fn serve_flags() {
        let cli = Cli::try_parse_from([
            "profit-predictor",
            "serve",
            "--bind-address",
            "0.0.0.0:9000",
            "--api-base",
            "https://predict.example.com",
            "--frontend-log-level",
            "debug",
        ])
        .unwrap();
        let Commands::Serve { bind_address, api_base, frontend_log_level, .. } = cli.command;

        assert_eq!(bind_address, "0.0.0.0:9000");
        assert_eq!(api_base, "https://predict.example.com");
        assert_eq!(frontend_log_level, "debug");
    }
}
