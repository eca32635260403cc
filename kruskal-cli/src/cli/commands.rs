//! Command implementations and argument parsing for the `kruskal` CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use kruskal_core::{
    KruskalBuilder, KruskalError, KruskalStepper, SpanningForest, StepOutcome, StepRecord,
    matrix,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "kruskal",
    about = "Step through Kruskal's minimum spanning tree algorithm."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute the minimum spanning forest of a weight matrix.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Matrix file, one `[a, b, ...]` row per line. Reads stdin when omitted.
    pub path: Option<PathBuf>,

    /// Print every step, or only the finished forest.
    #[arg(long, value_enum, default_value_t = OutputMode::Trace)]
    pub mode: OutputMode,

    /// Pause between traced steps, in milliseconds.
    #[arg(long = "delay-ms", default_value_t = 0)]
    pub delay_ms: u64,

    /// Stop once every node is connected instead of visiting every edge.
    #[arg(long = "stop-when-spanning")]
    pub stop_when_spanning: bool,

    /// Fail on a matrix with no rows.
    #[arg(long = "reject-empty")]
    pub reject_empty: bool,
}

/// How much of the run is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// One line per visited edge, then the summary.
    #[default]
    Trace,
    /// Only the summary.
    Summary,
}

impl OutputMode {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Summary => "summary",
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The matrix file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Reading matrix text failed part way through.
    #[error("failed to read matrix: {0}")]
    Read(#[source] io::Error),
    /// Writing a traced step failed.
    #[error("failed to write step: {0}")]
    Output(#[source] io::Error),
    /// A matrix line was malformed.
    #[error("line {line}: {reason}")]
    Parse {
        /// One-based line number in the input.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },
    /// The core rejected the matrix or a transition.
    #[error(transparent)]
    Core(#[from] KruskalError),
}

/// Outcome of a `run` command.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionSummary {
    /// Every step taken, in order.
    pub steps: Vec<StepRecord>,
    /// The finished spanning forest.
    pub forest: SpanningForest,
}

/// Executes the CLI command represented by `cli`, writing traced steps to
/// `out` as they happen.
///
/// # Errors
/// Returns [`CliError`] when reading, parsing, stepping or writing fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kruskal_cli::cli::{Cli, Command, OutputMode, RunCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "[0, 1, 1]\n[1, 0, 1]\n[1, 1, 0]\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path: Some(file.path().to_path_buf()),
///         mode: OutputMode::Summary,
///         delay_ms: 0,
///         stop_when_spanning: false,
///         reject_empty: false,
///     }),
/// };
/// let summary = run_cli(cli, &mut std::io::sink())?;
/// assert_eq!(summary.forest.edge_count(), 2);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli, out), fields(command = field::Empty))]
pub fn run_cli(cli: Cli, out: &mut impl Write) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run, out)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command, out),
    fields(mode = command.mode.as_str(), delay_ms = command.delay_ms, nodes = field::Empty),
)]
pub(super) fn run_command(
    command: RunCommand,
    out: &mut impl Write,
) -> Result<ExecutionSummary, CliError> {
    let matrix = match &command.path {
        Some(path) => super::parse_matrix(open_matrix_reader(path)?)?,
        None => super::parse_matrix(io::stdin().lock())?,
    };
    Span::current().record("nodes", matrix.len());

    let edges = matrix::extract_edges(&matrix)?;
    let mut stepper = KruskalBuilder::new()
        .with_empty_graphs(!command.reject_empty)
        .with_stop_when_spanning(command.stop_when_spanning)
        .build();
    stepper.start(edges, matrix::node_ids(&matrix))?;

    match command.mode {
        OutputMode::Summary => {
            stepper.run_to_completion()?;
        }
        OutputMode::Trace => trace_steps(&mut stepper, command.delay_ms, out)?,
    }

    let summary = ExecutionSummary {
        steps: stepper.trace().to_vec(),
        forest: stepper.into_forest(),
    };
    info!(
        steps = summary.steps.len(),
        edges = summary.forest.edge_count(),
        total_weight = summary.forest.total_weight(),
        components = summary.forest.component_count(),
        "command completed"
    );
    Ok(summary)
}

fn trace_steps(
    stepper: &mut KruskalStepper,
    delay_ms: u64,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let delay = Duration::from_millis(delay_ms);
    while let StepOutcome::Visited(record) = stepper.step()? {
        render_step(&record, &mut *out).map_err(CliError::Output)?;
        out.flush().map_err(CliError::Output)?;
        if !delay.is_zero() && stepper.remaining() > 0 {
            thread::sleep(delay);
        }
    }
    Ok(())
}

#[instrument(name = "cli.open_matrix_reader", err, fields(path = field::Empty))]
pub(super) fn open_matrix_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Writes one traced step as a tab separated line.
///
/// # Errors
/// Returns [`io::Error`] if writing fails.
///
/// # Examples
/// ```
/// # use kruskal_cli::cli::render_step;
/// # use kruskal_core::{Edge, KruskalStepper};
/// let mut stepper = KruskalStepper::new();
/// stepper.start([Edge::new(1, 0, 2.5, 0)], 0..2)?;
/// let record = stepper.step()?.record().expect("one edge");
/// let mut line = Vec::new();
/// render_step(&record, &mut line)?;
/// assert_eq!(line, b"step 0\t1-0\tweight=2.5\taccepted\ttotal=2.5\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_step(record: &StepRecord, mut writer: impl Write) -> io::Result<()> {
    let edge = record.edge();
    writeln!(
        writer,
        "step {}\t{}-{}\tweight={}\t{}\ttotal={}",
        record.index(),
        edge.source(),
        edge.target(),
        edge.weight(),
        record.decision(),
        record.total_weight(),
    )
}

/// Renders the finished forest of `summary` to `writer`.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let forest = &summary.forest;
    writeln!(writer, "edges: {}", forest.edge_count())?;
    writeln!(writer, "total weight: {}", forest.total_weight())?;
    writeln!(writer, "components: {}", forest.component_count())?;
    for edge in forest.edges() {
        writeln!(writer, "{}-{}\t{}", edge.source(), edge.target(), edge.weight())?;
    }
    Ok(())
}
