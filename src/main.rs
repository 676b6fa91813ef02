//! routier CLI - inspect the dashboard data layer from a terminal.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use routier::{
    fixtures, Config, FetchRequest, FixtureFallback, HttpTransport, Loader, Notifier,
    OfflineTransport, RouteTable, Transport,
};
use routier::notify::TracingSink;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "routier")]
#[command(version)]
#[command(about = "Data-access core for the road-traffic-control dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "routier.toml")]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one loader cycle for a resource and print the terminal state
    Fetch {
        resource: Resource,

        /// Entity id for a detail fetch (omit for the listing)
        #[arg(short, long)]
        id: Option<String>,
    },

    /// Emit fixture records as JSON lines
    Fixtures {
        resource: Resource,

        /// Number of records to emit
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },

    /// Resolve a path against the route table, or list it
    Routes {
        /// Path to resolve (e.g., "/vehicules/42")
        path: Option<String>,
    },

    /// Probe the configured API
    Ping,

    /// Validate the configuration file
    Validate,

    /// Show example configuration
    Example,
}

/// Dashboard resources addressable from the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Resource {
    Vehicules,
    Conducteurs,
    Infractions,
    Controles,
    Equipements,
    Permis,
    Provinces,
    Rapport,
}

impl Resource {
    fn endpoint(self, id: Option<&str>) -> String {
        let base = match self {
            Self::Vehicules => "/api/vehicules",
            Self::Conducteurs => "/api/conducteurs",
            Self::Infractions => "/api/infractions",
            Self::Controles => "/api/controles",
            Self::Equipements => "/api/equipements",
            Self::Permis => "/api/permis",
            Self::Provinces => "/api/provinces",
            Self::Rapport => "/api/rapports/activite",
        };
        match id {
            Some(id) => format!("{base}/full/{id}"),
            None => base.to_string(),
        }
    }

    /// Fixture payload for this resource: one record when an id is given,
    /// a listing otherwise.
    fn fixture_value(self, id: Option<&str>, count: usize) -> serde_json::Value {
        fn json<T: serde::Serialize>(value: T) -> serde_json::Value {
            serde_json::to_value(value).unwrap_or(serde_json::Value::Null)
        }

        match (self, id) {
            (Self::Vehicules, Some(id)) => json(fixtures::vehicle(id)),
            (Self::Vehicules, None) => json(fixtures::vehicles(count)),
            (Self::Conducteurs, Some(id)) => json(fixtures::driver(id)),
            (Self::Conducteurs, None) => json(fixtures::drivers(count)),
            (Self::Infractions, Some(id)) => json(fixtures::infraction(id)),
            (Self::Infractions, None) => json(fixtures::infractions(count)),
            (Self::Controles, Some(id)) => json(fixtures::road_control(id)),
            (Self::Controles, None) => json(fixtures::road_controls(count)),
            (Self::Equipements, Some(id)) => json(fixtures::equipment(id)),
            (Self::Equipements, None) => json(fixtures::equipment_batch(count)),
            (Self::Permis, Some(id)) => json(fixtures::license(id)),
            (Self::Permis, None) => json(fixtures::licenses(count)),
            (Self::Provinces, _) => json(fixtures::provinces()),
            (Self::Rapport, Some(period)) => json(fixtures::activity_report(period)),
            (Self::Rapport, None) => json(fixtures::activity_report("2026-01")),
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");
}

fn print_example_config() {
    let example = r#"# routier configuration file

[api]
# Base URL of the agency API. Leave unset to run fully offline on fixtures.
# base_url = "https://api.controle-routier.example"
# Bearer token (can also use the ROUTIER_API_TOKEN env var)
# auth_token = "..."
timeout_secs = 30

# Default headers; values may reference env vars as ${VAR}
# [api.headers]
# "X-Agence" = "${AGENCE_ID}"

[fallback]
# prefer-fixtures: transport failures resolve to fixture data (default)
# surface-errors: transport failures surface as error states
policy = "prefer-fixtures"
simulated_latency_ms = 150
default_id = "1"
"#;
    println!("{example}");
}

/// Load config, tolerating an absent file by falling back to defaults.
fn load_config(path: &PathBuf) -> Result<Config> {
    if path.exists() {
        Config::from_file(path)
            .with_context(|| format!("Failed to load config from {path:?}"))
    } else {
        Ok(Config::default())
    }
}

fn transport_for(config: &Config) -> Result<Arc<dyn Transport>> {
    if config.is_offline() {
        Ok(Arc::new(OfflineTransport))
    } else {
        let transport =
            HttpTransport::from_config(config).context("Failed to build HTTP transport")?;
        Ok(Arc::new(transport))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Example => {
            print_example_config();
        }

        Commands::Validate => {
            let config = Config::from_file(&cli.config)
                .with_context(|| format!("Failed to load config from {:?}", cli.config))?;
            config.validate().context("Invalid configuration")?;
            config
                .resolve_auth_token()
                .context("Failed to resolve auth token")?;

            info!("Configuration is valid");
            info!(
                "  Mode: {}",
                if config.is_offline() { "offline (fixtures)" } else { "remote API" }
            );
            info!("  Fallback policy: {:?}", config.fallback.policy);
        }

        Commands::Routes { path } => {
            let table = RouteTable::dashboard();
            match path {
                Some(path) => {
                    let matched = table.resolve(&path);
                    println!("{}", serde_json::to_string_pretty(&matched.page)?);
                    for (key, value) in &matched.params {
                        println!("  {key} = {value}");
                    }
                }
                None => {
                    for route in table.routes() {
                        println!("{:<24} {:?}", route.pattern, route.page);
                    }
                }
            }
        }

        Commands::Fixtures { resource, count } => {
            let value = resource.fixture_value(None, count);
            match value {
                serde_json::Value::Array(items) => {
                    for item in items {
                        println!("{}", serde_json::to_string(&item)?);
                    }
                }
                other => println!("{}", serde_json::to_string(&other)?),
            }
        }

        Commands::Ping => {
            let config = load_config(&cli.config)?;
            if config.is_offline() {
                info!("No API configured; running offline on fixtures");
                return Ok(());
            }
            let transport =
                HttpTransport::from_config(&config).context("Failed to build HTTP transport")?;
            let result = transport.health_check().await;
            match result.latency_ms {
                Some(latency) => info!(
                    status = %result.status,
                    latency_ms = latency,
                    "API probed"
                ),
                None => info!(
                    status = %result.status,
                    error = result.error.as_deref().unwrap_or("unknown"),
                    "API probed"
                ),
            }
        }

        Commands::Fetch { resource, id } => {
            let config = load_config(&cli.config)?;
            let transport = transport_for(&config)?;
            let notifier = Notifier::new(Arc::new(TracingSink));

            let id = id.map(|raw| fixtures::normalize_id_or(&raw, &config.fallback.default_id));
            let endpoint = resource.endpoint(id.as_deref());
            let fallback_id = id.clone();
            let latency = config.fallback.simulated_latency();
            let fallback = FixtureFallback::new(move |req_id: Option<&str>| {
                let effective = req_id.or(fallback_id.as_deref());
                resource.fixture_value(effective, 10)
            })
            .with_latency(latency);

            let loader: Loader<serde_json::Value> = Loader::new(transport)
                .with_fallback(fallback)
                .with_policy(config.fallback.policy);

            let mut request = FetchRequest::new(&endpoint);
            if let Some(id) = id {
                request = request.with_id(id);
            }

            let state = loader.load(request).await;
            if state.is_success() {
                notifier.success("Données chargées");
            } else {
                notifier.error("Erreur de chargement");
            }
            println!("{}", serde_json::to_string_pretty(&state)?);
        }
    }

    Ok(())
}
