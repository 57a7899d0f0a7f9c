use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use searoute_lib::{
    load_chart, plan_voyage, resolve_data_dir, resolve_port, Error as LibError, Port, PortId,
    SeaChart, VoyagePlan, VoyageRenderMode, VoyageRequest, VoyageSummary,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Sea-route voyage planning utilities")]
struct Cli {
    /// Override the dataset directory.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Output format for command results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// Output format for rendered results.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
enum OutputFormat {
    /// Human-friendly voyage view.
    #[default]
    Text,
    /// Minimal line-per-port view.
    Basic,
    /// Machine-readable JSON.
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan a voyage between two ports within a per-leg range ceiling.
    Route {
        /// Port of departure (id or name).
        #[arg(long = "from")]
        from: String,
        /// Port of arrival (id or name).
        #[arg(long = "to")]
        to: String,
        /// Range ceiling applied to every leg, in kilometres.
        #[arg(long = "max-leg")]
        max_leg_km: f64,
    },
    /// List the ports in the charted directory.
    Ports,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Route {
            ref from,
            ref to,
            max_leg_km,
        } => handle_route(cli.data_dir.as_deref(), cli.format, from, to, max_leg_km),
        Command::Ports => handle_ports(cli.data_dir.as_deref(), cli.format),
    }
}

fn handle_route(
    target: Option<&Path>,
    format: OutputFormat,
    from: &str,
    to: &str,
    max_leg_km: f64,
) -> Result<()> {
    let chart = load_voyage_chart(target)?;

    let start = resolve_port(&chart.ports, from).map_err(friendly_port_error)?;
    let goal = resolve_port(&chart.ports, to).map_err(friendly_port_error)?;

    let request = VoyageRequest::new(start, goal, max_leg_km);
    let plan = match plan_voyage(&chart, &request) {
        Ok(plan) => plan,
        Err(err) => return Err(handle_voyage_failure(&chart, max_leg_km, err)),
    };

    match format {
        OutputFormat::Text => {
            let summary = VoyageSummary::from_plan(&chart.ports, &plan)
                .context("failed to build voyage summary for display")?;
            print!("{}", summary.render(VoyageRenderMode::PlainText));
        }
        OutputFormat::Basic => {
            let summary = VoyageSummary::from_plan(&chart.ports, &plan)
                .context("failed to build voyage summary for display")?;
            print!("{}", summary.render(VoyageRenderMode::Basic));
        }
        OutputFormat::Json => render_json(&plan)?,
    }

    Ok(())
}

fn handle_ports(target: Option<&Path>, format: OutputFormat) -> Result<()> {
    let chart = load_voyage_chart(target)?;

    let mut ports: Vec<&Port> = chart.ports.iter().collect();
    ports.sort_by_key(|port| port.id);

    match format {
        OutputFormat::Text => {
            println!("{} charted ports:", ports.len());
            for port in ports {
                println!(
                    "{:>6}  {}  ({:.4}, {:.4})",
                    port.id, port.name, port.coordinate.latitude, port.coordinate.longitude
                );
            }
        }
        OutputFormat::Basic => {
            for port in ports {
                println!("{}", port.name);
            }
        }
        OutputFormat::Json => {
            let mut stdout = io::stdout();
            serde_json::to_writer_pretty(&mut stdout, &ports).map_err(io::Error::other)?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}

fn load_voyage_chart(target: Option<&Path>) -> Result<SeaChart> {
    let data_dir =
        resolve_data_dir(target).context("failed to locate the sea-route dataset directory")?;
    load_chart(&data_dir)
        .with_context(|| format!("failed to load sea chart from {}", data_dir.display()))
}

fn render_json(plan: &VoyagePlan) -> Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, plan).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}

fn friendly_port_error(err: LibError) -> anyhow::Error {
    match err {
        LibError::UnknownPortName { name, suggestions } => {
            anyhow::anyhow!(format_unknown_port_message(&name, &suggestions))
        }
        other => anyhow::Error::new(other),
    }
}

fn handle_voyage_failure(chart: &SeaChart, max_leg_km: f64, err: LibError) -> anyhow::Error {
    match err {
        LibError::UnknownPort { port } => {
            anyhow::anyhow!("Port {} is not on the route network.", port)
        }
        LibError::NoAdmissiblePath { start, goal } => {
            anyhow::anyhow!(format_no_route_message(chart, start, goal, max_leg_km))
        }
        other => anyhow::Error::new(other),
    }
}

fn format_unknown_port_message(name: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown port '{}'.", name);
    if !suggestions.is_empty() {
        let formatted = if suggestions.len() == 1 {
            let suggestion = suggestions.first().expect("len checked above");
            format!("Did you mean '{suggestion}'?")
        } else {
            let joined = suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ");
            format!("Did you mean one of: {}?", joined)
        };
        message.push(' ');
        message.push_str(&formatted);
    }
    message
}

fn format_no_route_message(
    chart: &SeaChart,
    start: PortId,
    goal: PortId,
    max_leg_km: f64,
) -> String {
    let mut message = format!(
        "No admissible route between {} and {}.",
        port_label(chart, start),
        port_label(chart, goal)
    );
    let mut tips = Vec::new();
    if max_leg_km.is_finite() {
        tips.push(format!("raising --max-leg (currently {} km)", max_leg_km));
    }
    let storm_count = chart.storms.len();
    if storm_count > 0 {
        let label = if storm_count == 1 {
            "advisory"
        } else {
            "advisories"
        };
        tips.push(format!(
            "waiting for the {} active storm {} to clear",
            storm_count, label
        ));
    }
    if tips.is_empty() {
        message.push_str(" No charted lane connects these ports.");
    } else {
        message.push(' ');
        message.push_str(&format!("Try {}.", tips.join(" or ")));
    }
    message
}

fn port_label(chart: &SeaChart, id: PortId) -> String {
    match chart.ports.port_name(id) {
        Some(name) => format!("{} ({})", name, id),
        None => format!("port {}", id),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .compact()
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
