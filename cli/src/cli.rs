//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use clap::builder::PossibleValuesParser;
use clap::{Args, Parser, Subcommand, ValueEnum};
use spanbench::bench::target::{
    DEFAULT_ITERATIONS, DEFAULT_LENGTH, DEFAULT_LOOPS, DEFAULT_WARMUP,
};
use spanbench::{CASES, Case, Target, TargetId};

/// spanbench - time indexed access through array, segment, text and span views
#[derive(Parser, Debug)]
#[command(name = "spanbench", version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Arguments for the implicit `run` when no subcommand is given
    #[command(flatten)]
    pub run: RunArgs,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the case table under each target and print the results (default)
    Run(RunArgs),

    /// List the available cases and targets
    List,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `run` command.
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Target to run under; repeat for several. Defaults to every target
    #[arg(long = "target", value_name = "TARGET")]
    pub targets: Vec<TargetArg>,

    /// Only run the named case; repeat for several. Defaults to every case
    #[arg(
        long = "case",
        value_name = "CASE",
        value_parser = PossibleValuesParser::new(CASES.iter().map(|case| case.name)),
    )]
    pub cases: Vec<String>,

    /// Number of elements in the buffer
    #[arg(long, default_value_t = DEFAULT_LENGTH)]
    pub length: usize,

    /// Passes over the buffer per invocation
    #[arg(long, default_value_t = DEFAULT_LOOPS)]
    pub loops: usize,

    /// Timed invocations per case
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: u32,

    /// Untimed invocations before timing starts
    #[arg(long, default_value_t = DEFAULT_WARMUP)]
    pub warmup: u32,
}

impl RunArgs {
    /// The configured targets, in the order given (or all of them).
    pub fn targets(&self) -> Vec<Target> {
        let ids: Vec<TargetId> = if self.targets.is_empty() {
            TargetId::ALL.to_vec()
        } else {
            self.targets.iter().map(|&t| t.into()).collect()
        };
        ids.into_iter()
            .map(|id| {
                Target::new(id)
                    .with_length(self.length)
                    .with_loops(self.loops)
                    .with_iterations(self.iterations)
                    .with_warmup(self.warmup)
            })
            .collect()
    }

    /// The selected cases, in table order.
    pub fn cases(&self) -> Vec<Case> {
        CASES
            .iter()
            .filter(|case| self.cases.is_empty() || self.cases.iter().any(|c| c == case.name))
            .copied()
            .collect()
    }
}

/// Arguments for the `completions` command.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

/// Configuration the case table is replayed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TargetArg {
    /// Every index and value goes through `black_box`
    Opaque,
    /// No optimisation barrier inside the loop
    Transparent,
}

impl From<TargetArg> for TargetId {
    fn from(arg: TargetArg) -> Self {
        match arg {
            TargetArg::Opaque => TargetId::Opaque,
            TargetArg::Transparent => TargetId::Transparent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_runs_everything() {
        let cli = Cli::try_parse_from(["spanbench"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.run.targets().len(), TargetId::ALL.len());
        assert_eq!(cli.run.cases().len(), CASES.len());
        assert_eq!(cli.run.targets()[0].length, DEFAULT_LENGTH);
    }

    #[test]
    fn targets_and_cases_keep_order() {
        let cli = Cli::try_parse_from([
            "spanbench",
            "run",
            "--target",
            "transparent",
            "--target",
            "opaque",
            "--case",
            "text_set",
            "--case",
            "array_get",
            "--length",
            "7",
        ])
        .unwrap();
        let Some(Command::Run(args)) = cli.command else {
            panic!("expected run");
        };
        let ids: Vec<_> = args.targets().iter().map(|t| t.id).collect();
        assert_eq!(ids, [TargetId::Transparent, TargetId::Opaque]);
        assert!(args.targets().iter().all(|t| t.length == 7));
        // Table order, not argument order.
        let names: Vec<_> = args.cases().iter().map(|c| c.name).collect();
        assert_eq!(names, ["array_get", "text_set"]);
    }

    #[test]
    fn unknown_case_rejected() {
        assert!(Cli::try_parse_from(["spanbench", "--case", "vec_get"]).is_err());
    }
}
