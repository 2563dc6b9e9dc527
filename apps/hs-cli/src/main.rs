mod error;

use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use error::{CliError, CliResult};
use hs_model::{DegeneracyPolicy, HeatModelParams, SimOptions, simulate_room_temperature};
use hs_project::{InputTable, load_with_inputs, read_input_csv_path, validate_table};
use hs_results::{ResultFrame, write_csv, write_json};

#[derive(Parser)]
#[command(name = "hs-cli")]
#[command(about = "HeatStep CLI - building room temperature simulation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a scenario file and its inputs
    Validate {
        /// Path to the scenario YAML/JSON file
        scenario_path: PathBuf,
    },
    /// Run a scenario file
    Run {
        /// Path to the scenario YAML/JSON file
        scenario_path: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Simulate directly from a CSV table with `t_out` and `heat_gain` columns
    Simulate {
        /// Input CSV file
        #[arg(short, long)]
        input: PathBuf,
        /// Room temperature at the first row
        #[arg(long, allow_hyphen_values = true)]
        init_t_room: f64,
        /// Heat loss coefficient of the building
        #[arg(long, allow_hyphen_values = true)]
        hloss: f64,
        /// Specific heat of the building
        #[arg(long, allow_hyphen_values = true)]
        sheat: f64,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(clap::Args)]
struct OutputArgs {
    /// Also output `heat_loss` and `heat_content`
    #[arg(long)]
    expand: bool,
    /// Output `t_room` only, even if the scenario asks for expanded output
    #[arg(long, conflicts_with = "expand")]
    no_expand: bool,
    /// Handling of steps where the post-gain temperature equals the outdoor temperature
    #[arg(long, value_enum)]
    policy: Option<PolicyArg>,
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,
    /// Output file path (optional, defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl OutputArgs {
    /// Flags given on the command line win over `opts`; absent flags keep it.
    fn apply(&self, mut opts: SimOptions) -> SimOptions {
        if self.expand {
            opts.expand = true;
        } else if self.no_expand {
            opts.expand = false;
        }
        if let Some(policy) = self.policy {
            opts.policy = policy.into();
        }
        opts
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    Fallback,
    Error,
}

impl From<PolicyArg> for DegeneracyPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Fallback => DegeneracyPolicy::Fallback,
            PolicyArg::Error => DegeneracyPolicy::Error,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Csv,
    Json,
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Run {
            scenario_path,
            output,
        } => cmd_run(&scenario_path, &output),
        Commands::Simulate {
            input,
            init_t_room,
            hloss,
            sheat,
            output,
        } => cmd_simulate(&input, init_t_room, HeatModelParams::new(hloss, sheat), &output),
    }
}

fn cmd_validate(scenario_path: &Path) -> CliResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    let (scenario, table) = load_with_inputs(scenario_path)?;
    scenario.params().validate()?;
    println!("✓ Scenario '{}' is valid ({} rows)", scenario.name, table.len());
    Ok(())
}

fn cmd_run(scenario_path: &Path, args: &OutputArgs) -> CliResult<()> {
    let (scenario, table) = load_with_inputs(scenario_path)?;
    let opts = args.apply(scenario.sim_options());
    tracing::info!(name = %scenario.name, rows = table.len(), "running scenario");
    run_and_emit(
        &table,
        scenario.initial.init_t_room,
        scenario.params(),
        &opts,
        args,
    )
}

fn cmd_simulate(
    input: &Path,
    init_t_room: f64,
    params: HeatModelParams,
    args: &OutputArgs,
) -> CliResult<()> {
    let table = read_input_csv_path(input)?;
    validate_table(&table).map_err(hs_project::ProjectError::from)?;
    let opts = args.apply(SimOptions::default());
    run_and_emit(&table, init_t_room, params, &opts, args)
}

fn run_and_emit(
    table: &InputTable,
    init_t_room: f64,
    params: HeatModelParams,
    opts: &SimOptions,
    args: &OutputArgs,
) -> CliResult<()> {
    let output = simulate_room_temperature(
        &table.t_out,
        &table.heat_gain,
        init_t_room,
        params,
        opts,
    )?;
    let frame = ResultFrame::from_output(&output);

    match &args.output {
        Some(path) => {
            let file = std::fs::File::create(path).map_err(|source| CliError::OutputWrite {
                path: path.clone(),
                source,
            })?;
            emit(&frame, args.format, io::BufWriter::new(file))?;
            if let Some(s) = frame.summary() {
                println!(
                    "✓ Wrote {} rows to {} (t_room min={:.3} max={:.3} final={:.3})",
                    s.n_rows,
                    path.display(),
                    s.t_room_min,
                    s.t_room_max,
                    s.t_room_final
                );
            }
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            emit(&frame, args.format, &mut lock)?;
            if matches!(args.format, Format::Json) {
                writeln!(lock).map_err(hs_results::ResultsError::from)?;
            }
        }
    }
    Ok(())
}

fn emit<W: Write>(frame: &ResultFrame, format: Format, mut writer: W) -> CliResult<()> {
    match format {
        Format::Csv => write_csv(frame, &mut writer)?,
        Format::Json => write_json(frame, &mut writer)?,
    }
    writer.flush().map_err(hs_results::ResultsError::from)?;
    Ok(())
}
