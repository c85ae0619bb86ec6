mod report;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rollcall_core::{
    analyze_week, check_structure, diff_structures, load_workbook, FileWeekStore, RegistryError,
    WeekEntry, WeekRegistry,
};

#[derive(Parser)]
#[command(name = "rollcall")]
#[command(about = "Weekly attendance analysis over group sheets", long_about = None)]
struct Cli {
    /// Directory holding the week registry (defaults to ~/.rollcall)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Register a new week in the registry
    Register {
        /// Unique week identifier (e.g. week_31Aug-4Sep)
        week_id: String,
        /// Start date label (e.g. 31-Aug)
        #[arg(long)]
        start: String,
        /// End date label (e.g. 4-Sep)
        #[arg(long)]
        end: String,
        /// Workbook holding this week's group sheets
        #[arg(long)]
        file: PathBuf,
        #[arg(long, default_value = "")]
        description: String,
        /// Replace the entry if the week is already registered
        #[arg(long)]
        force: bool,
    },
    /// Analyze a registered week's workbook and cache its summary
    Analyze {
        week_id: String,
        /// Override the workbook path stored in the registry
        #[arg(long)]
        file: Option<PathBuf>,
        /// Also print the per-student tables
        #[arg(long)]
        students: bool,
    },
    /// List all registered weeks with their cached summaries
    Weeks,
    /// Inspect the group structure of a workbook before analyzing it
    Check {
        file: PathBuf,
        /// Baseline workbook to compare against
        #[arg(long)]
        against: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let store = FileWeekStore::new(cli.data_dir.clone())?;
    let mut registry = WeekRegistry::load_from(&store)?;

    match cli.command {
        Commands::Register {
            week_id,
            start,
            end,
            file,
            description,
            force,
        } => {
            let entry = WeekEntry::new(
                &week_id,
                &start,
                &end,
                file.to_string_lossy(),
                &description,
            );
            if force && registry.get(&week_id).is_some() {
                registry.update(entry)?;
                println!("Replaced week: {} ({} - {})", week_id, start, end);
            } else {
                registry.register(entry)?;
                println!("Registered week: {} ({} - {})", week_id, start, end);
            }
            registry.save_to(&store)?;
        }
        Commands::Analyze {
            week_id,
            file,
            students,
        } => {
            let entry = registry
                .get(&week_id)
                .ok_or_else(|| RegistryError::UnknownWeek(week_id.clone()))?
                .clone();
            let path = file.unwrap_or_else(|| PathBuf::from(&entry.source_file));

            let sheets = load_workbook(&path)?;
            println!("Found {} group sheets", sheets.len());

            let analysis = analyze_week(&sheets)?;
            report::print_week_analysis(&entry, &analysis);
            if students {
                report::print_students(&analysis);
            }

            registry.attach_summary(&week_id, analysis.summary.clone())?;
            registry.save_to(&store)?;
        }
        Commands::Weeks => {
            report::print_weeks(registry.entries());
        }
        Commands::Check { file, against } => {
            let structure = check_structure(&load_workbook(&file)?);
            report::print_structure(&structure);

            if let Some(baseline_path) = against {
                let baseline = check_structure(&load_workbook(&baseline_path)?);
                let diff = diff_structures(&baseline, &structure);
                report::print_structure_diff(&diff);
            }
        }
    }

    Ok(())
}
