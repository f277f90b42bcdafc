use std::ffi::OsString;

use anyhow::bail;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser};
use log::{debug, info};

use celestial_calculator::physics_system::units::require_non_negative;
use celestial_calculator::*;

#[derive(Parser, Debug)]
#[command(version, about = "Surface gravity and escape velocity of celestial bodies", long_about = None)]
struct Args {
    /// Custom body, may be repeated
    #[arg(short, long = "body",
        num_args = 3,
        value_names = ["NAME", "MASS_KG", "RADIUS_KM"],
        allow_negative_numbers = true,
    )]
    bodies: Vec<String>,

    /// Catalog body to include, may be repeated
    #[arg(short, long = "select", value_name = "NAME")]
    select: Vec<String>,

    /// Hohmann transfer phase angle between two catalog bodies
    #[arg(short, long, num_args = 2, value_names = ["FROM", "TO"])]
    transfer: Option<Vec<String>>,

    #[arg(long, default_value_t = DEFAULT_ORBIT_ALTITUDE_KM, value_name = "KM",
        allow_negative_numbers = true)]
    orbit_altitude: f64,

    #[arg(long, default_value_t = false)]
    no_color: bool,

    #[arg(
        long,
        default_value = "WARN",
        value_name = "TRACE|DEBUG|INFO|WARN|ERROR"
    )]
    log_level: String,
}

/// One `--select` or `--body` occurrence, kept in command-line order.
#[derive(Debug, PartialEq)]
enum BodyRequest {
    Catalog(String),
    Custom {
        name: String,
        mass_kg: String,
        radius_km: String,
    },
}

fn parse_args<I, T>(argv: I) -> std::result::Result<(Args, Vec<BodyRequest>), clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = Args::command().try_get_matches_from(argv)?;
    let args = Args::from_arg_matches(&matches)?;
    let requests = body_requests(&args, &matches);
    Ok((args, requests))
}

fn body_requests(args: &Args, matches: &ArgMatches) -> Vec<BodyRequest> {
    let mut ordered: Vec<(usize, BodyRequest)> = Vec::new();

    if let Some(indices) = matches.indices_of("select") {
        ordered.extend(
            indices
                .zip(&args.select)
                .map(|(index, name)| (index, BodyRequest::Catalog(name.clone()))),
        );
    }

    if let Some(indices) = matches.indices_of("bodies") {
        let indices: Vec<usize> = indices.collect();
        for (index, values) in indices.chunks_exact(3).zip(args.bodies.chunks_exact(3)) {
            ordered.push((
                index[0],
                BodyRequest::Custom {
                    name: values[0].clone(),
                    mass_kg: values[1].clone(),
                    radius_km: values[2].clone(),
                },
            ));
        }
    }

    ordered.sort_by_key(|(index, _)| *index);
    ordered.into_iter().map(|(_, request)| request).collect()
}

fn collect_bodies(
    requests: &[BodyRequest],
) -> anyhow::Result<(Vec<CelestialBody>, Vec<CalculatorError>)> {
    if requests.is_empty() {
        info!("No bodies given, using the built-in catalog");
        return Ok((catalog::solar_system()?, Vec::new()));
    }

    let mut bodies = Vec::new();
    let mut failures = Vec::new();

    for request in requests {
        let body = match request {
            BodyRequest::Catalog(name) => catalog::find(name),
            BodyRequest::Custom {
                name,
                mass_kg,
                radius_km,
            } => CelestialBody::parse(name, mass_kg, radius_km),
        };
        match body {
            Ok(body) => bodies.push(body),
            Err(err) => failures.push(err),
        }
    }

    Ok((bodies, failures))
}

fn build_report(
    calculator: &PhysicsCalculator,
    requests: &[BodyRequest],
    orbit_altitude_km: f64,
) -> anyhow::Result<(Report, Vec<CalculatorError>)> {
    let (bodies, mut failures) = collect_bodies(requests)?;
    info!("Evaluating {} bodies", bodies.len());

    let results = calculator.evaluate_all(&bodies, orbit_altitude_km);
    let (report, errors) = Report::from_results(results, orbit_altitude_km);
    failures.extend(errors);

    Ok((report, failures))
}

fn transfer_summary(
    calculator: &PhysicsCalculator,
    from: &str,
    to: &str,
) -> anyhow::Result<TransferSummary> {
    let from = catalog::find(from)?;
    let to = catalog::find(to)?;
    let phase_angle = calculator.hohmann_phase_angle(&from, &to)?;
    Ok(TransferSummary::new(from.name(), to.name(), phase_angle))
}

fn failure_message(failure: &CalculatorError) -> String {
    match failure {
        CalculatorError::UnknownBody(_) => format!(
            "Error: {}\nKnown bodies: {}",
            failure,
            catalog::names().collect::<Vec<_>>().join(", ")
        ),
        _ => format!("Error: {}", failure),
    }
}

fn ensure_rendered(report: &Report) -> anyhow::Result<()> {
    if report.is_empty() {
        bail!("No body could be reported");
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let (args, requests) = match parse_args(std::env::args_os()) {
        Ok(parsed) => parsed,
        Err(err) => err.exit(),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level.as_str()),
    )
    .init();

    let orbit_altitude = require_non_negative("orbit_altitude_km", args.orbit_altitude)?;
    let calculator = PhysicsCalculator::default();

    let (report, failures) = build_report(&calculator, &requests, orbit_altitude)?;

    if !report.is_empty() {
        report.display(&RenderOptions {
            color: !args.no_color,
        });
    }

    for failure in &failures {
        debug!("Skipping body: {:?}", failure);
        eprintln!("{}", failure_message(failure));
    }

    if let Some([from, to]) = args.transfer.as_deref() {
        let summary = transfer_summary(&calculator, from, to)?;
        print!("\n{}", summary);
    }

    ensure_rendered(&report)
}
