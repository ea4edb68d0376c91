use clap::{Parser, Subcommand};
use sg_plant::{
    Anchor, OverrideEdit, PlantOutputs, PlantError, PlantResult, StageStreams, project_service,
};
use sg_species::{Species, Stream};
use sg_stages::StageId;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sg-cli")]
#[command(about = "Syngas balance CLI - ammonia plant stoichiometric mass balance", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a project file with factory defaults
    Init {
        /// Path to the new project file (.yaml, .yml or .json)
        project_path: PathBuf,
        /// Project name
        #[arg(long, default_value = "Ammonia Plant")]
        name: String,
    },
    /// Validate project file syntax, structure and values
    Validate {
        /// Path to the project file
        project_path: PathBuf,
    },
    /// Evaluate the plant and print KPIs and stream tables
    Run {
        /// Path to the project file
        project_path: PathBuf,
        /// Only print this stage (primary, secondary, hts, lts, methanator, ammonia-reactor)
        #[arg(long)]
        stage: Option<String>,
        /// Print the full outputs as JSON
        #[arg(long)]
        json: bool,
    },
    /// Edit or clear a stage inlet override
    #[command(subcommand)]
    Override(OverrideCommands),
}

#[derive(Subcommand)]
enum OverrideCommands {
    /// Set one species of an anchor and save the project
    Set {
        /// Path to the project file
        project_path: PathBuf,
        /// Anchor: methanator or ammonia-reactor
        anchor: String,
        /// Species key (e.g. CH4, H2, AR)
        species: String,
        /// New value, in --unit
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// moles (kgmol/hr), volume (Nm³/hr), wet (% of total) or dry (% of dry total)
        #[arg(long, default_value = "moles")]
        unit: String,
    },
    /// Remove an anchor and save the project
    Clear {
        /// Path to the project file
        project_path: PathBuf,
        /// Anchor: methanator or ammonia-reactor
        anchor: String,
    },
}

fn main() -> PlantResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { project_path, name } => cmd_init(&project_path, &name),
        Commands::Validate { project_path } => cmd_validate(&project_path),
        Commands::Run {
            project_path,
            stage,
            json,
        } => cmd_run(&project_path, stage.as_deref(), json),
        Commands::Override(cmd) => match cmd {
            OverrideCommands::Set {
                project_path,
                anchor,
                species,
                value,
                unit,
            } => cmd_override_set(&project_path, &anchor, &species, value, &unit),
            OverrideCommands::Clear {
                project_path,
                anchor,
            } => cmd_override_clear(&project_path, &anchor),
        },
    }
}

fn cmd_init(project_path: &Path, name: &str) -> PlantResult<()> {
    project_service::init_project(project_path, name)?;
    println!("✓ Wrote default project: {}", project_path.display());
    Ok(())
}

fn cmd_validate(project_path: &Path) -> PlantResult<()> {
    println!("Validating project: {}", project_path.display());
    let project = project_service::load_project(project_path)?;
    let findings = project_service::validate_project(&project)?;
    if findings.is_empty() {
        println!("✓ Project is valid");
    } else {
        println!("✓ Project structure is valid, with {} value warning(s):", findings.len());
        for finding in findings {
            println!("  ! {}", finding);
        }
    }
    Ok(())
}

fn cmd_run(project_path: &Path, stage: Option<&str>, json: bool) -> PlantResult<()> {
    let project = project_service::load_project(project_path)?;
    let outputs = project_service::evaluate_project(&project)?;
    info!(project = %project.name, "evaluated");

    if json {
        println!("{}", serde_json::to_string_pretty(&outputs)?);
        return Ok(());
    }

    let selected = match stage {
        Some(key) => Some(key.parse::<StageId>().map_err(PlantError::InvalidInput)?),
        None => None,
    };

    if selected.is_none() {
        print_kpis(&outputs);
    }
    for streams in &outputs.stages {
        if selected.is_none_or(|id| id == streams.stage) {
            print_stage(streams);
        }
    }
    if selected.is_none() {
        print_separation(&outputs);
        print_diagnostics(&outputs);
    }
    Ok(())
}

fn cmd_override_set(
    project_path: &Path,
    anchor: &str,
    species: &str,
    value: f64,
    unit: &str,
) -> PlantResult<()> {
    let anchor: Anchor = anchor.parse()?;
    let species: Species = species.parse()?;
    let edit = OverrideEdit::parse(unit, value)?;

    let mut project = project_service::load_project(project_path)?;
    let stored = project_service::edit_project_override(&mut project, anchor, species, edit)?;
    project_service::save_project(project_path, &project)?;

    println!(
        "✓ {} override: {} = {:.4} kgmol/hr",
        anchor,
        species.key(),
        stored[species]
    );
    Ok(())
}

fn cmd_override_clear(project_path: &Path, anchor: &str) -> PlantResult<()> {
    let anchor: Anchor = anchor.parse()?;
    let mut project = project_service::load_project(project_path)?;
    if project_service::clear_project_override(&mut project, anchor) {
        project_service::save_project(project_path, &project)?;
        println!("✓ Cleared {} override", anchor);
    } else {
        println!("No {} override set", anchor);
    }
    Ok(())
}

fn print_kpis(outputs: &PlantOutputs) {
    let k = &outputs.kpis;
    println!("KPIs:");
    println!("  Process gas carbon number: {:.4}", k.process_gas_carbon_number);
    println!("  Feed carbon number (dry):  {:.4}", k.feed_carbon_number);
    println!("  Steam / carbon:            {:.3}", k.steam_to_carbon);
    println!("  Front end load:            {:.2} %", k.front_end_load * 100.0);
    println!("  H/N ratio:                 {:.3}", k.h_to_n);
    println!("  Gas / air:                 {:.3}", k.gas_to_air);
    println!(
        "  Ammonia:                   {:.2} kgmol/hr ({:.1} t/day)",
        k.ammonia_kgmol_per_hr, k.ammonia_t_per_day
    );
    println!("  Stage ΔT / ΔP:");
    for delta in &k.stage_deltas {
        println!(
            "    {:<20} {:>8.1} °C  {:>7.2} kg/cm²",
            delta.stage.display_name(),
            delta.delta_t_c,
            delta.delta_p_kgf_cm2
        );
    }
    println!();
}

fn print_stream_table(title: &str, stream: &Stream) {
    println!("  {}", title);
    println!(
        "    {:<6} {:>14} {:>14} {:>9} {:>9}",
        "", "kgmol/hr", "Nm³/hr", "wet %", "dry %"
    );
    for species in Species::ALL {
        println!(
            "    {:<6} {:>14.3} {:>14.1} {:>9.3} {:>9.3}",
            species.key(),
            stream.moles()[species],
            stream.volume(species),
            stream.mole_fraction(species) * 100.0,
            stream.dry_fraction(species) * 100.0
        );
    }
    println!(
        "    {:<6} {:>14.3} {:>14.1}",
        "Total",
        stream.total_moles(),
        stream.total_volume()
    );
}

fn print_stage(streams: &StageStreams) {
    let marker = if streams.overridden { " (inlet overridden)" } else { "" };
    println!("{}{}", streams.stage.display_name(), marker);
    print_stream_table("Inlet", &streams.inlet);
    print_stream_table("Outlet", &streams.outlet);
    println!();
}

fn print_separation(outputs: &PlantOutputs) {
    if let Some(sep) = &outputs.separation {
        println!("Separation (LTS outlet side branch)");
        print_stream_table("Condensate outlet", &sep.condensate_outlet);
        print_stream_table("Absorber top", &sep.absorber_top);
        print_stream_table("Absorber bottom", &sep.absorber_bottom);
        print_stream_table("Stripper outlet", &sep.stripper_outlet);
        println!();
    }
}

fn print_diagnostics(outputs: &PlantOutputs) {
    let d = &outputs.diagnostics;
    println!("Secondary reformer combustion:");
    println!(
        "  O2 requested {:.3}, burned {:.3}; H2 burned {:.3}{}",
        d.combustion.requested_o2,
        d.combustion.burned_o2,
        d.combustion.burned_h2,
        if d.combustion.h2_limited {
            " (limited by H2)"
        } else {
            ""
        }
    );
    if !d.negative_flows.is_empty() {
        println!("Negative flows:");
        for n in &d.negative_flows {
            println!(
                "  ! {} {}: {:.4} kgmol/hr",
                n.stage.display_name(),
                n.species.key(),
                n.value
            );
        }
    }
}
