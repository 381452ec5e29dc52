/*!
 * Command Line Front End
 * Argument model, configuration precedence, output selection and the run driver
 */

use crate::core::errors::{AppError, ConfigError, ReportError};
use crate::core::limits::DEFAULT_TRACE_FILE;
use crate::loader::load_records;
use crate::reporting::{JsonLinesWriter, OutputMode, Reporter, TeeReporter, TraceFormat, TraceWriter};
use crate::scheduler::{SchedulerConfig, Simulation, SimulationSummary};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufWriter, IsTerminal, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Round-robin scheduling simulation with priority-gated admission
#[derive(Debug, Clone, Parser)]
#[command(name = "admission-scheduler", version, about)]
pub struct Cli {
    /// Process record file, one `name totalService arrival` per line
    pub input: PathBuf,

    /// Priority gained per tick in the New queue
    #[arg(short = 'n', long, env = "SCHED_NEW_INCREMENT")]
    pub new_increment: Option<u64>,

    /// Priority gained per tick in the Accepted queue
    #[arg(short = 'a', long, env = "SCHED_ACCEPTED_INCREMENT")]
    pub accepted_increment: Option<u64>,

    /// Shared quantum in ticks
    #[arg(short = 'q', long, env = "SCHED_QUANTUM")]
    pub quantum: Option<u64>,

    /// TOML file with scheduler settings; flags override it
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Abort if the run has not finished after this many ticks
    #[arg(long)]
    pub max_ticks: Option<u64>,

    /// Trace destination; prompts when omitted on a terminal
    #[arg(short = 'o', long, value_enum)]
    pub output: Option<OutputMode>,

    /// Trace file used by `file` and `both` output
    #[arg(long, default_value = DEFAULT_TRACE_FILE)]
    pub output_file: PathBuf,

    /// Trace encoding
    #[arg(long, value_enum, default_value_t = TraceFormat::Text)]
    pub format: TraceFormat,

    /// Print run statistics as JSON to stderr
    #[arg(long)]
    pub summary: bool,
}

impl Cli {
    /// Defaults, then the config file, then flags/environment
    pub fn scheduler_config(&self) -> Result<SchedulerConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => SchedulerConfig::from_toml_file(path)?,
            None => SchedulerConfig::default(),
        };
        if let Some(increment) = self.new_increment {
            config = config.with_new_increment(increment);
        }
        if let Some(increment) = self.accepted_increment {
            config = config.with_accepted_increment(increment);
        }
        if let Some(quantum) = self.quantum {
            config = config.with_quantum(quantum);
        }
        if let Some(max_ticks) = self.max_ticks {
            config = config.with_max_ticks(max_ticks);
        }
        config.validate()
    }

    /// Explicit flag, else ask on a terminal, else console
    pub fn output_mode(&self) -> Result<OutputMode, AppError> {
        match self.output {
            Some(mode) => Ok(mode),
            None if io::stdin().is_terminal() => {
                prompt_output_mode(&mut io::stdin().lock(), &mut io::stderr())
            }
            None => Ok(OutputMode::Console),
        }
    }
}

/// Ask where the trace should go
pub fn prompt_output_mode<R: BufRead, W: Write>(
    input: &mut R,
    prompt: &mut W,
) -> Result<OutputMode, AppError> {
    write!(prompt, "Output to (c)onsole, (f)ile or (b)oth? [c] ")?;
    prompt.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    OutputMode::from_answer(&answer).ok_or_else(|| AppError::InvalidOutputMode(answer.trim().to_string()))
}

fn sink<W: Write + 'static>(out: W, format: TraceFormat) -> Box<dyn Reporter> {
    match format {
        TraceFormat::Text => Box::new(TraceWriter::new(out)),
        TraceFormat::Json => Box::new(JsonLinesWriter::new(out)),
    }
}

/// Build the reporter for `mode`; file output truncates `path`
pub fn build_reporter(
    mode: OutputMode,
    format: TraceFormat,
    path: &Path,
) -> Result<Box<dyn Reporter>, ReportError> {
    let open = || -> Result<BufWriter<File>, ReportError> { Ok(BufWriter::new(File::create(path)?)) };

    let reporter = match mode {
        OutputMode::Console => sink(io::stdout(), format),
        OutputMode::File => sink(open()?, format),
        OutputMode::Both => Box::new(TeeReporter::new(
            sink(io::stdout(), format),
            sink(open()?, format),
        )),
    };
    if mode.writes_file() {
        info!(path = %path.display(), "writing trace file");
    }
    Ok(reporter)
}

/// Load, simulate and report according to `cli`
pub fn run(cli: &Cli) -> Result<SimulationSummary, AppError> {
    let config = cli.scheduler_config()?;
    let records = load_records(&cli.input)?;
    let mode = cli.output_mode()?;

    let mut reporter = build_reporter(mode, cli.format, &cli.output_file)?;
    let summary = Simulation::new(records, config).run(&mut reporter)?;

    if cli.summary {
        let json = serde_json::to_string_pretty(&summary).map_err(ReportError::from)?;
        eprintln!("{}", json);
    }
    Ok(summary)
}
