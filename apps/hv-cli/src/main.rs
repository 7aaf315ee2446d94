use chrono::Local;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};

use hv_app::{
    compare_engines, distance_sweep, evaluate_voyage, load_scenario, sweep_distances, AppError,
    AppResult, EngineComparison, EnginePricing, SweepPoint, VoyageAssessment,
};
use hv_results::report::{flatten_outcome, outcome_to_json, ReportRow};
use hv_results::DieselBaseline;
use hv_scenario::{validate_scenario, EngineType};

#[derive(Parser)]
#[command(name = "hv-cli")]
#[command(about = "Hydrovoyage CLI - hydrogen voyage techno-economic calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Diesel baseline emission factor, kg CO2e per km
    #[arg(long, global = true, default_value_t = 70.0)]
    baseline_emission_factor: f64,

    /// Diesel price, USD per liter
    #[arg(long, global = true, default_value_t = 0.8)]
    diesel_price: f64,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate scenario file syntax and values
    Validate {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
    },
    /// Evaluate a single voyage
    Evaluate {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
        /// Override the scenario's engine type (PEMFC or H2-ICE)
        #[arg(long)]
        engine: Option<String>,
        /// Print the full outcome tree as JSON instead of the summary
        #[arg(long)]
        json: bool,
    },
    /// Evaluate both engine variants over one scenario
    Compare {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
        /// Hydrogen price for the fuel-cell variant, USD/kg
        #[arg(long)]
        fuel_cell_price: Option<f64>,
        /// Hydrogen price for the H2-ICE variant, USD/kg
        #[arg(long)]
        h2_ice_price: Option<f64>,
        /// Output CSV file path
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Write a timestamped CSV in the current directory
        #[arg(long)]
        export: bool,
    },
    /// Evaluate a scenario across a range of route distances
    Sweep {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
        /// First distance, km
        #[arg(long, default_value_t = 200.0)]
        from: f64,
        /// Last distance, km (inclusive)
        #[arg(long, default_value_t = 2000.0)]
        to: f64,
        /// Step between distances, km
        #[arg(long, default_value_t = 200.0)]
        step: f64,
        /// Output CSV file path
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Write a timestamped CSV in the current directory
        #[arg(long)]
        export: bool,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let baseline = DieselBaseline {
        emission_factor_kg_co2e_per_km: cli.baseline_emission_factor,
        price_usd_per_liter: cli.diesel_price,
    };

    match cli.command {
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Evaluate {
            scenario_path,
            engine,
            json,
        } => cmd_evaluate(&scenario_path, engine.as_deref(), json, &baseline),
        Commands::Compare {
            scenario_path,
            fuel_cell_price,
            h2_ice_price,
            output,
            export,
        } => cmd_compare(
            &scenario_path,
            fuel_cell_price,
            h2_ice_price,
            output.as_deref(),
            export,
            &baseline,
        ),
        Commands::Sweep {
            scenario_path,
            from,
            to,
            step,
            output,
            export,
        } => cmd_sweep(&scenario_path, from, to, step, output.as_deref(), export, &baseline),
    }
}

fn cmd_validate(scenario_path: &Path) -> AppResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    let scenario = load_scenario(scenario_path)?;
    validate_scenario(&scenario).map_err(|e| AppError::Validation(e.to_string()))?;
    println!("✓ Scenario is valid");
    println!(
        "  {} | {} km | load {:.2} | {} t cargo",
        scenario.engine_type, scenario.route_km, scenario.load_factor, scenario.cargo_mass_tons
    );
    Ok(())
}

fn cmd_evaluate(
    scenario_path: &Path,
    engine: Option<&str>,
    json: bool,
    baseline: &DieselBaseline,
) -> AppResult<()> {
    let mut scenario = load_scenario(scenario_path)?;
    if let Some(tag) = engine {
        let engine_type: EngineType = tag
            .parse()
            .map_err(|e: hv_scenario::ValidationError| AppError::Validation(e.to_string()))?;
        scenario = scenario.with_engine(engine_type);
    }

    let assessment = evaluate_voyage(&scenario, baseline)?;

    if json {
        println!("{}", outcome_to_json(&assessment.outcome)?);
        return Ok(());
    }

    print_assessment(&assessment);
    Ok(())
}

fn cmd_compare(
    scenario_path: &Path,
    fuel_cell_price: Option<f64>,
    h2_ice_price: Option<f64>,
    output: Option<&Path>,
    export: bool,
    baseline: &DieselBaseline,
) -> AppResult<()> {
    let scenario = load_scenario(scenario_path)?;

    let pricing = match (fuel_cell_price, h2_ice_price) {
        (None, None) => None,
        (fc, ice) => Some(EnginePricing {
            fuel_cell_usd_per_kg: fc.unwrap_or(scenario.fuel_cost_usd_per_kg),
            hydrogen_ice_usd_per_kg: ice.unwrap_or(scenario.fuel_cost_usd_per_kg),
        }),
    };

    let comparison = compare_engines(&scenario, pricing, baseline)?;
    print_comparison(&comparison);

    let rows = vec![
        flatten_outcome(&comparison.fuel_cell.outcome),
        flatten_outcome(&comparison.hydrogen_ice.outcome),
    ];
    if let Some(path) = csv_target(output, export, "comparison")? {
        write_csv(&path, &rows)?;
        println!("✓ Comparison CSV saved: {}", path.display());
    }
    Ok(())
}

fn cmd_sweep(
    scenario_path: &Path,
    from: f64,
    to: f64,
    step: f64,
    output: Option<&Path>,
    export: bool,
    baseline: &DieselBaseline,
) -> AppResult<()> {
    let scenario = load_scenario(scenario_path)?;
    let distances = sweep_distances(from, to, step)?;
    let points = distance_sweep(&scenario, &distances, baseline)?;

    println!(
        "Distance sweep for {} ({} points):",
        scenario.engine_type,
        points.len()
    );
    println!("  {:>10} {:>14} {:>20}", "km", "USD/km", "kg CO2e/km");
    for point in &points {
        println!(
            "  {:>10.0} {:>14.2} {:>20.3}",
            point.distance_km, point.cost_per_km_usd, point.emissions_per_km_kg_co2e
        );
    }

    if let Some(path) = csv_target(output, export, "sweep")? {
        write_sweep_csv(&path, scenario.engine_type, &points)?;
        println!("✓ Sweep CSV saved: {}", path.display());
    }
    Ok(())
}

fn print_assessment(assessment: &VoyageAssessment) {
    let outcome = &assessment.outcome;
    println!("Voyage assessment ({})", outcome.hydrogen.engine_type);
    println!(
        "  Mission:   {:.0} km, {:.1} h at load {:.2}",
        outcome.mission.distance_km, outcome.mission.duration_hours, outcome.mission.load_factor
    );
    println!(
        "  Energy:    {:.0} kWh at {:.0} kW ({:.0}% efficient)",
        outcome.hydrogen.energy_required_kwh,
        outcome.hydrogen.adjusted_power_kw,
        outcome.hydrogen.efficiency * 100.0
    );
    println!("  Hydrogen:  {:.1} kg", outcome.energy.hydrogen_used_kg);
    println!(
        "  Cost:      ${:.2} total (${:.2} fuel + ${:.2} carbon), ${:.2}/km",
        outcome.cost.total_cost_usd,
        outcome.cost.fuel_cost_usd,
        outcome.cost.carbon_cost_usd,
        outcome.cost.cost_per_km_usd
    );
    println!(
        "  Emissions: {:.0} kg CO2e ({:.2} kg/km)",
        outcome.emissions.total_emissions_kg_co2e, outcome.emissions.emissions_per_km_kg_co2e
    );
    println!(
        "  Baseline:  {:.0} kg CO2e diesel, savings {:.0} kg CO2e / ${:.2} fuel",
        assessment.baseline.baseline_emissions_total_kg_co2e,
        assessment.baseline.carbon_savings_kg_co2e,
        assessment.baseline.fuel_savings_usd
    );
}

fn print_comparison(comparison: &EngineComparison) {
    println!("Engine comparison:");
    for assessment in [&comparison.fuel_cell, &comparison.hydrogen_ice] {
        let outcome = &assessment.outcome;
        println!(
            "  {:>7}: {:>9.1} kg H2, ${:>10.2} total, {:>9.0} kg CO2e",
            outcome.hydrogen.engine_type.label(),
            outcome.energy.hydrogen_used_kg,
            outcome.cost.total_cost_usd,
            outcome.emissions.total_emissions_kg_co2e
        );
    }
    println!(
        "  ICE hydrogen penalty: {:.1} kg",
        comparison.hydrogen_penalty_kg()
    );
}

/// Resolve the CSV destination: explicit path wins, `--export` falls back to
/// a timestamped file in the working directory.
fn csv_target(
    output: Option<&Path>,
    export: bool,
    prefix: &str,
) -> AppResult<Option<PathBuf>> {
    if let Some(path) = output {
        return Ok(Some(path.to_path_buf()));
    }
    if export {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        return Ok(Some(PathBuf::from(format!("{prefix}_{timestamp}.csv"))));
    }
    Ok(None)
}

fn write_csv(path: &Path, rows: &[ReportRow]) -> AppResult<()> {
    let mut file = std::fs::File::create(path)?;
    if let Some(first) = rows.first() {
        let mut header = vec!["engine"];
        header.extend(first.header());
        writeln!(file, "{}", header.join(","))?;
    }
    for row in rows {
        let mut fields = vec![row.engine.clone()];
        fields.extend(row.columns.iter().map(|(_, value)| value.to_string()));
        writeln!(file, "{}", fields.join(","))?;
    }
    Ok(())
}

fn write_sweep_csv(path: &Path, engine: EngineType, points: &[SweepPoint]) -> AppResult<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(
        file,
        "engine,distance_km,cost_per_km_usd,emissions_per_km_kg_co2e,total_cost_usd,total_emissions_kg_co2e"
    )?;
    for point in points {
        writeln!(
            file,
            "{},{},{},{},{},{}",
            engine,
            point.distance_km,
            point.cost_per_km_usd,
            point.emissions_per_km_kg_co2e,
            point.total_cost_usd,
            point.total_emissions_kg_co2e
        )?;
    }
    Ok(())
}
