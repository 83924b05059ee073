use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use edgecubes::{report, rotation::RotationGroup};
use indicatif::{ProgressBar, ProgressStyle};

mod enumerate;
use enumerate::enumerate;

fn finish_bar(bar: &ProgressBar, duration: Duration, solutions: usize) {
    let time = duration.as_micros();
    let secs = time / 1_000_000;
    let micros = time % 1_000_000;

    bar.finish_with_message(format!(
        "Done! Found {solutions} distinct skeletons in {secs}.{micros:06} s"
    ));
}

pub fn make_bar(len: u64, hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(len);

    let pos_width = format!("{len}").len();

    let template = format!(
        "[{{elapsed_precise}}] {{bar:40.cyan/blue}} {{pos:>{pos_width}}}/{{len}} {{msg}}"
    );

    if let Ok(style) = ProgressStyle::with_template(&template) {
        bar.set_style(style.progress_chars("#>-"));
    }

    bar
}

#[derive(Clone, Parser)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub enumerate: EnumerateOpts,
}

#[derive(Clone, Subcommand)]
pub enum Commands {
    /// Enumerate all rotationally distinct cube skeletons
    Enumerate(EnumerateOpts),
    /// Print the rotations of the cube as corner permutations
    Rotations,
}

#[derive(Clone, Args)]
pub struct EnumerateOpts {
    /// Disable parallelism.
    #[clap(long, short = 'p')]
    pub no_parallelism: bool,

    /// The amount of threads to use when running in parallel.
    ///
    /// Defaults to one thread per CPU.
    #[clap(long, short = 't')]
    pub threads: Option<usize>,

    /// Only print the totals, not every skeleton.
    #[clap(long, short = 's')]
    pub summary_only: bool,

    /// Don't show a progress bar.
    #[clap(long, short = 'q')]
    pub no_progress: bool,
}

fn build_group() -> RotationGroup {
    match RotationGroup::build() {
        Ok(group) => group,
        Err(e) => {
            println!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn rotations() {
    let group = build_group();
    let mut stdout = std::io::stdout().lock();

    let written = report::write_group(&mut stdout, &group)
        .and_then(|_| report::write_rotations(&mut stdout, &group));

    if let Err(e) = written {
        println!("Failed to write rotations. Error: {e}");
        std::process::exit(1);
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Enumerate(opts)) => enumerate(&opts),
        Some(Commands::Rotations) => rotations(),
        None => enumerate(&cli.enumerate),
    }
}
