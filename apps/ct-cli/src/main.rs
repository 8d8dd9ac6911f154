mod error;
mod report;
mod run_service;

use clap::{ArgGroup, Parser, Subcommand};
use ct_core::units::{inch, kgps, m};
use ct_fluids::{TableUnits, load_table, sample_table_rows, write_csv};
use ct_results::{SeriesAxis, SeriesVariable, extract_series, series_csv};
use ct_solver::{RunParameters, march};
use error::{CliError, CliResult};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ct-cli")]
#[command(about = "capflow - capillary tube sizing by temperature marching", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate project file syntax and values
    Validate {
        /// Path to the project YAML or JSON file
        project_path: PathBuf,
    },
    /// Size the capillary tube of a project
    Run {
        /// Path to the project YAML or JSON file
        project_path: PathBuf,
        /// Skip cache and force re-run
        #[arg(long)]
        no_cache: bool,
    },
    /// Size a tube directly from a table file, without a project
    #[command(group(ArgGroup::new("diameter").required(true).args(["diameter_in", "diameter_m"])))]
    Quick {
        /// Saturation table (CSV, JSON or YAML)
        #[arg(long)]
        table: PathBuf,
        /// Condensing temperature [°C]
        #[arg(long, allow_negative_numbers = true)]
        tc: i32,
        /// Evaporating temperature [°C]
        #[arg(long, allow_negative_numbers = true)]
        te: i32,
        /// Mass flow rate [kg/s]
        #[arg(long)]
        mass_flow: f64,
        /// Internal diameter [in]
        #[arg(long)]
        diameter_in: Option<f64>,
        /// Internal diameter [m]
        #[arg(long)]
        diameter_m: Option<f64>,
    },
    /// Write the synthetic sample saturation table as CSV
    SampleTable {
        /// Output CSV path
        output: PathBuf,
    },
    /// List cached runs for a project
    Runs {
        /// Path to the project YAML or JSON file
        project_path: PathBuf,
    },
    /// Export one per-step series from a cached run
    ExportSeries {
        /// Path to the project YAML or JSON file
        project_path: PathBuf,
        /// Run ID
        run_id: String,
        /// Variable name (e.g., length, velocity, pressure, quality)
        variable: String,
        /// Independent axis: temperature or length
        #[arg(long, default_value = "temperature")]
        against: String,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Validate { project_path } => cmd_validate(&project_path),
        Commands::Run {
            project_path,
            no_cache,
        } => cmd_run(&project_path, !no_cache),
        Commands::Quick {
            table,
            tc,
            te,
            mass_flow,
            diameter_in,
            diameter_m,
        } => cmd_quick(&table, tc, te, mass_flow, diameter_in, diameter_m),
        Commands::SampleTable { output } => cmd_sample_table(&output),
        Commands::Runs { project_path } => cmd_runs(&project_path),
        Commands::ExportSeries {
            project_path,
            run_id,
            variable,
            against,
            output,
        } => cmd_export_series(&project_path, &run_id, &variable, &against, output.as_deref()),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn cmd_validate(project_path: &Path) -> CliResult<()> {
    println!("Validating project: {}", project_path.display());
    let project = ct_project::load_project(project_path)?;
    let table = ct_project::load_project_table(project_path, &project)?;

    let missing = table.missing_in(project.run.evaporating_c, project.run.condensing_c);
    if !missing.is_empty() {
        println!("  Table has no rows for: {:?}", missing);
    }
    if !table.is_monotonic() {
        println!("  Saturation pressure is not monotonic across the table");
    }
    let non_physical = table.non_physical_rows();
    if !non_physical.is_empty() {
        println!("  Rows with vg < vf or hg < hf: {:?}", non_physical);
    }

    println!("✓ Project is valid");
    Ok(())
}

fn cmd_run(project_path: &Path, use_cache: bool) -> CliResult<()> {
    let response = run_service::run_project(project_path, use_cache)?;

    if response.loaded_from_cache {
        println!("✓ Loaded from cache: {}", response.manifest.run_id);
    } else {
        println!("✓ Sizing completed: {}", response.manifest.run_id);
    }

    report::print_length(&response.result);
    report::print_steps(&response.result);
    Ok(())
}

fn cmd_quick(
    table_path: &Path,
    tc: i32,
    te: i32,
    mass_flow: f64,
    diameter_in: Option<f64>,
    diameter_m: Option<f64>,
) -> CliResult<()> {
    let diameter = match (diameter_in, diameter_m) {
        (Some(d), None) => inch(d),
        (None, Some(d)) => m(d),
        _ => {
            return Err(CliError::InvalidArg(
                "give exactly one of --diameter-in or --diameter-m".to_string(),
            ));
        }
    };

    let table = load_table(table_path, TableUnits::default())?;
    let params = RunParameters::new(tc, te, kgps(mass_flow), diameter);
    let result = march(&table, params)?;

    report::print_length(&result);
    report::print_steps(&result);
    Ok(())
}

fn cmd_sample_table(output: &Path) -> CliResult<()> {
    let rows = sample_table_rows();
    std::fs::write(output, write_csv(&rows)).map_err(|source| CliError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    println!("✓ Wrote {} rows to {}", rows.len(), output.display());
    Ok(())
}

fn cmd_runs(project_path: &Path) -> CliResult<()> {
    let runs = run_service::list_runs(project_path)?;

    if runs.is_empty() {
        println!("No cached runs found");
    } else {
        println!("Cached runs:");
        for manifest in runs {
            println!(
                "  {} ({}) {}: {:.4} m over {} steps",
                manifest.run_id,
                manifest.timestamp,
                manifest.project_name,
                manifest.total_length_m,
                manifest.step_count
            );
        }
    }
    Ok(())
}

fn cmd_export_series(
    project_path: &Path,
    run_id: &str,
    variable: &str,
    against: &str,
    output: Option<&Path>,
) -> CliResult<()> {
    let variable: SeriesVariable = variable.parse()?;
    let axis: SeriesAxis = against.parse()?;

    let (_manifest, result) = run_service::load_run(project_path, run_id)?;
    let series = extract_series(&result, variable, axis);
    let csv = series_csv(&series, variable, axis)?;

    if let Some(path) = output {
        std::fs::write(path, csv).map_err(|source| CliError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        println!(
            "✓ Exported {} data points to {}",
            series.len(),
            path.display()
        );
    } else {
        print!("{}", csv);
    }

    Ok(())
}
