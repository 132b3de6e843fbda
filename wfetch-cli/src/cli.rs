use anyhow::Result;
use clap::{Parser, Subcommand};

use wfetch_core::{Config, FetchError, WeatherClient};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "wfetch", version, about = "OpenWeather fetch CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key in the config file.
    Configure,

    /// Fetch current weather for a location and print the raw JSON payload.
    Fetch {
        /// Location name, passed to the API verbatim (e.g. "London").
        location: String,

        /// API key to use for this call instead of the configured one.
        #[arg(long)]
        api_key: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Fetch { location, api_key } => fetch(&location, api_key).await,
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()?;

    config.set_api_key(api_key);
    config.save()?;

    println!("API key saved to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn fetch(location: &str, api_key: Option<String>) -> Result<()> {
    let api_key = match api_key {
        Some(key) => key,
        None => Config::load()?.require_api_key()?.to_owned(),
    };

    let client = WeatherClient::new(api_key);

    match client.fetch_weather_data(location).await {
        Ok(payload) => {
            println!("{}", serde_json::to_string_pretty(&payload)?);
            Ok(())
        }
        Err(FetchError::UpstreamStatus { code }) => {
            // Diagnostic goes to stdout; the exit code carries the failure.
            println!("{}", failure_line(code));
            std::process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}

/// Console diagnostic for a non-200 answer.
fn failure_line(code: u16) -> String {
    format!("Failed to fetch data: {code}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_line_carries_exact_status_code() {
        assert_eq!(failure_line(404), "Failed to fetch data: 404");
        assert_eq!(failure_line(500), "Failed to fetch data: 500");
    }
}
