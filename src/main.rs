mod api;
mod aqi;
mod cli_messages;
mod config;
mod consts;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod models;
mod render;
mod runtime;
mod session;
mod ui;
mod workers;

use crate::api::{AirQualityApi, ApiClient};
use crate::aqi::classify_aqi;
use crate::config::{Config, get_config_path};
use crate::consts::cli_consts::FORECAST_HOURS;
use crate::environment::Environment;
use crate::models::{CityAqi, HealthStatus, ModelPerformance};
use crate::render::round_half_up;
use crate::session::{SessionOptions, run_headless_mode, run_tui_mode, setup_session};
use crate::ui::UIConfig;
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

/// Environment variable naming the API base URL.
const API_URL_ENV: &str = "AQI_API_URL";

#[derive(Parser)]
#[command(author, version, about = "Terminal air quality dashboard", long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the dashboard
    Start {
        /// City to select on startup, if the API lists it
        #[arg(long, value_name = "CITY")]
        city: Option<String>,

        /// Base URL of the air quality API
        #[arg(long, value_name = "URL", value_parser = parse_api_url)]
        api_url: Option<String>,

        /// Print results to the console instead of drawing the dashboard
        #[arg(long, default_value_t = false)]
        headless: bool,

        /// Fill the dashboard background
        #[arg(long = "with-background", default_value_t = false)]
        with_background: bool,

        /// Give up on any request after this many seconds
        #[arg(long, value_name = "SECONDS")]
        timeout_secs: Option<u64>,
    },
    /// List the cities the API knows about
    Cities {
        /// Base URL of the air quality API
        #[arg(long, value_name = "URL", value_parser = parse_api_url)]
        api_url: Option<String>,
    },
    /// Rank cities by their latest AQI
    Compare {
        /// Base URL of the air quality API
        #[arg(long, value_name = "URL", value_parser = parse_api_url)]
        api_url: Option<String>,
    },
    /// Check that the API server is up
    Status {
        /// Base URL of the air quality API
        #[arg(long, value_name = "URL", value_parser = parse_api_url)]
        api_url: Option<String>,
    },
    /// Show validation scores of the forecasting models
    ModelPerformance {
        /// Base URL of the air quality API
        #[arg(long, value_name = "URL", value_parser = parse_api_url)]
        api_url: Option<String>,
    },
    /// Show or change the saved configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the configuration file
    Show,
    /// Save the city to select on startup
    SetCity {
        #[arg(value_name = "CITY")]
        city: String,
    },
    /// Save the API base URL
    SetApiUrl {
        #[arg(value_name = "URL", value_parser = parse_api_url)]
        url: String,
    },
    /// Delete the configuration file
    Clear,
}

fn parse_api_url(s: &str) -> Result<String, String> {
    s.parse::<Environment>()
        .map(|_| s.trim().to_string())
        .map_err(|_| format!("expected `local` or an http(s) URL, got `{}`", s))
}

/// Loads the config file, falling back to defaults when it is unreadable.
fn load_config(path: &Path) -> Config {
    Config::load_or_default(path).unwrap_or_else(|e| {
        print_cmd_warn!(
            "Ignoring config file",
            "{}: {}",
            path.display(),
            e
        );
        Config::default()
    })
}

fn resolve_environment(cli_url: Option<&str>, config: &Config) -> Environment {
    let env_url = std::env::var(API_URL_ENV).ok();
    Environment::resolve(cli_url, env_url.as_deref(), config.api_url.as_deref())
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init_max_level();
    let args = Args::parse();

    match run(args.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_cmd_error!("Command failed", &e.to_string());
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command) -> Result<(), Box<dyn Error>> {
    let config_path = get_config_path()?;

    match command {
        Command::Start {
            city,
            api_url,
            headless,
            with_background,
            timeout_secs,
        } => {
            let config = load_config(&config_path);
            let options = SessionOptions {
                environment: resolve_environment(api_url.as_deref(), &config),
                preferred_city: city.or(config.default_city),
                timeout: timeout_secs.or(config.timeout_secs).map(Duration::from_secs),
            };
            let session = setup_session(options);
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session, UIConfig::new(with_background, FORECAST_HOURS)).await
            }
        }
        Command::Cities { api_url } => {
            let config = load_config(&config_path);
            let client = ApiClient::new(resolve_environment(api_url.as_deref(), &config));
            let list = client.get_cities().await?;
            print_cmd_info!("Cities", "{} available", list.cities.len());
            for city in list.cities {
                println!("{}", city);
            }
            Ok(())
        }
        Command::Compare { api_url } => {
            let config = load_config(&config_path);
            let client = ApiClient::new(resolve_environment(api_url.as_deref(), &config));
            let comparison = client.get_city_comparison().await?;
            for line in comparison_table(comparison.cities) {
                println!("{}", line);
            }
            Ok(())
        }
        Command::Status { api_url } => {
            let config = load_config(&config_path);
            let client = ApiClient::new(resolve_environment(api_url.as_deref(), &config));
            let health = client.get_health().await?;
            if !health.is_running() {
                return Err(format!("API reports status `{}`", health.status).into());
            }
            print_cmd_success!("API running", "{}", health_details(&health));
            Ok(())
        }
        Command::ModelPerformance { api_url } => {
            let config = load_config(&config_path);
            let client = ApiClient::new(resolve_environment(api_url.as_deref(), &config));
            let performance = client.get_model_performance().await?;
            for line in performance_table(&performance) {
                println!("{}", line);
            }
            Ok(())
        }
        Command::Config { action } => run_config(action, &config_path),
    }
}

/// Cities worst first, one line each with the category of their AQI.
fn comparison_table(mut cities: Vec<CityAqi>) -> Vec<String> {
    cities.sort_by(|a, b| b.aqi.total_cmp(&a.aqi));
    cities
        .iter()
        .enumerate()
        .map(|(i, row)| {
            format!(
                "{:>2}. {:<16} AQI {:>4}  {}",
                i + 1,
                row.city,
                round_half_up(row.aqi),
                classify_aqi(row.aqi).label
            )
        })
        .collect()
}

fn health_details(health: &HealthStatus) -> String {
    format!(
        "version {} at {}",
        health.version.as_deref().unwrap_or("unknown"),
        health.timestamp.as_deref().unwrap_or("unknown time")
    )
}

/// One row per model, best model marked with `*`.
fn performance_table(performance: &ModelPerformance) -> Vec<String> {
    let mut lines = vec![format!(
        "  {:<20} {:>7} {:>8} {:>8}",
        "MODEL", "R2", "RMSE", "MAE"
    )];
    lines.extend(performance.models.iter().map(|(name, metrics)| {
        let marker = if *name == performance.best_model.name {
            '*'
        } else {
            ' '
        };
        format!(
            "{} {:<20} {:>7.4} {:>8.2} {:>8.2}",
            marker, name, metrics.r2, metrics.rmse, metrics.mae
        )
    }));
    lines
}

fn run_config(action: ConfigAction, config_path: &Path) -> Result<(), Box<dyn Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load_or_default(config_path)?;
            print_cmd_info!("Config file", "{}", config_path.display());
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::SetCity { city } => {
            let mut config = Config::load_or_default(config_path)?;
            config.default_city = Some(city.trim().to_string());
            config.save(config_path)?;
            print_cmd_success!("Default city saved", "{}", city.trim());
        }
        ConfigAction::SetApiUrl { url } => {
            let mut config = Config::load_or_default(config_path)?;
            config.api_url = Some(url.clone());
            config.save(config_path)?;
            print_cmd_success!("API URL saved", "{}", url);
        }
        ConfigAction::Clear => {
            Config::clear(config_path)?;
            print_cmd_success!("Config cleared", "{}", config_path.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparison_is_sorted_worst_first_and_classified() {
        let rows = vec![
            CityAqi {
                city: "Pune".to_string(),
                aqi: 42.4,
                health_level: None,
            },
            CityAqi {
                city: "Delhi".to_string(),
                aqi: 312.5,
                health_level: None,
            },
        ];
        let table = comparison_table(rows);
        assert!(table[0].contains("Delhi") && table[0].contains("313") && table[0].ends_with("Hazardous"));
        assert!(table[1].contains("Pune") && table[1].ends_with("Good"));
    }

    #[test]
    fn performance_table_marks_best_model() {
        let json = r#"{
            "models": {
                "LSTM": {"r2": 0.8, "rmse": 15.0, "mae": 10.0},
                "XGBoost": {"r2": 0.93, "rmse": 11.25, "mae": 7.5}
            },
            "best_model": {"name": "XGBoost", "metrics": {"r2": 0.93, "rmse": 11.25, "mae": 7.5}}
        }"#;
        let performance: ModelPerformance = serde_json::from_str(json).unwrap();
        let table = performance_table(&performance);
        assert_eq!(table.len(), 3);
        assert!(table[1].starts_with("  LSTM"));
        assert!(table[2].starts_with("* XGBoost"));
        assert!(table[2].contains("0.9300"));
    }

    #[test]
    fn health_details_fall_back_when_fields_are_missing() {
        let health = HealthStatus {
            status: "running".to_string(),
            timestamp: None,
            version: Some("1.0".to_string()),
        };
        assert_eq!(health_details(&health), "version 1.0 at unknown time");
    }

    #[test]
    fn api_url_argument_is_validated() {
        assert_eq!(
            parse_api_url(" https://aq.example.org/api "),
            Ok("https://aq.example.org/api".to_string())
        );
        assert!(parse_api_url("ftp://nope").is_err());
        assert!(Args::try_parse_from(["aqi-dashboard", "cities", "--api-url", "nope"]).is_err());
    }
}
