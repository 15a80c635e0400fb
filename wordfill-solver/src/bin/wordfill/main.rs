mod os_signal_termination;
mod result;

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::error;
use log::info;
use log::warn;
use log::LevelFilter;
use os_signal_termination::OsSignal;
use result::WordfillError;
use result::WordfillResult;
use wordfill_solver::core::branching::branchers::DynamicBrancher;
use wordfill_solver::core::convert_case::Case;
use wordfill_solver::core::options::SolverOptions;
use wordfill_solver::core::options::ValueSelectionStrategy;
use wordfill_solver::core::options::VariableSelectionStrategy;
use wordfill_solver::core::rand::rngs::SmallRng;
use wordfill_solver::core::rand::SeedableRng;
use wordfill_solver::core::results::SatisfactionResult;
use wordfill_solver::core::statistics::configure_statistic_logging;
use wordfill_solver::core::termination::Combinator;
use wordfill_solver::core::termination::TimeBudget;
use wordfill_solver::core::Random;
use wordfill_solver::core::Solver;
use wordfill_solver::parsers::parse_crossword;
use wordfill_solver::rendering::render;

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    version,
    about,
    arg_required_else_help = true
)]
struct Args {
    /// The structure of the grid: one line per row, where '_' marks a cell which has to be filled
    /// and any other character a blocked cell.
    #[arg(verbatim_doc_comment)]
    structure_path: PathBuf,

    /// The words which may be placed in the grid, one per line.
    words_path: PathBuf,

    /// A file to which the filled grid is written, next to printing it.
    ///
    /// Nothing is written if the grid cannot be filled.
    #[arg(short = 'o', long = "output", verbatim_doc_comment)]
    output_path: Option<PathBuf>,

    /// The time budget for the solver, given in milliseconds.
    ///
    /// Possible values: u64 (Optional)
    #[arg(short = 't', long = "time-limit", verbatim_doc_comment)]
    time_limit: Option<u64>,

    /// The random seed to use for the Pseudo Random Number Generator.
    ///
    /// Randomisation is only used by "--value-selection in-domain-random" and
    /// "--random-tie-breaking".
    ///
    /// Possible values: u64
    #[arg(
        short = 'r',
        long = "random-seed",
        default_value_t = 42,
        verbatim_doc_comment
    )]
    random_seed: u64,

    /// Enables log message output from the solver.
    ///
    /// For printing statistics see the option "--log-statistics".
    ///
    /// Possible values: bool
    #[arg(short = 'v', long = "verbose", verbatim_doc_comment)]
    verbose: bool,

    /// Enables logging of statistics from the solver.
    ///
    /// Possible values: bool
    #[arg(short = 's', long = "log-statistics", verbatim_doc_comment)]
    log_statistics: bool,

    /// Determines which empty slot is filled next.
    #[arg(long, value_enum, default_value_t)]
    variable_selection: VariableSelectionStrategy,

    /// Determines the order in which the words of a slot are tried.
    #[arg(long, value_enum, default_value_t)]
    value_selection: ValueSelectionStrategy,

    /// Breaks ties between equally constrained slots randomly instead of in grid order.
    ///
    /// Possible values: bool
    #[arg(long = "random-tie-breaking", verbatim_doc_comment)]
    random_tie_breaking: bool,

    /// Restores arc consistency after every placed word, pruning the words of the remaining
    /// slots.
    ///
    /// Possible values: bool
    #[arg(long = "maintain-arc-consistency", verbatim_doc_comment)]
    maintain_arc_consistency: bool,
}

fn configure_logging(verbose: bool, log_statistics: bool) -> std::io::Result<()> {
    if log_statistics {
        configure_statistic_logging(
            "%%%wordfill-stat:",
            Some("%%%wordfill-stat-end"),
            Some(Case::Camel),
            None,
        );
    }
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    // The filled grid is printed to stdout, so the log goes to stderr.
    env_logger::Builder::new()
        .format(move |buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .filter_level(level_filter)
        .target(env_logger::Target::Stderr)
        .init();
    info!("Logging successfully configured");
    Ok(())
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> WordfillResult<()> {
    let args = Args::parse();

    configure_logging(args.verbose, args.log_statistics)?;

    if wordfill_solver::core::asserts::WORDFILL_ASSERT_LEVEL_DEFINITION
        >= wordfill_solver::core::asserts::WORDFILL_ASSERT_MODERATE
    {
        warn!(
            "Potential performance degradation: the wordfill assert level is set to {}, meaning many debug asserts are active which may result in performance degradation.",
            wordfill_solver::core::asserts::WORDFILL_ASSERT_LEVEL_DEFINITION
        );
    };

    let structure = File::open(&args.structure_path)
        .map_err(|e| WordfillError::inaccessible_file(args.structure_path.display(), e))?;
    let words = File::open(&args.words_path)
        .map_err(|e| WordfillError::inaccessible_file(args.words_path.display(), e))?;
    let crossword = parse_crossword(structure, words)?;

    let solver_options = SolverOptions {
        maintain_arc_consistency: args.maintain_arc_consistency,
        random_generator: SmallRng::seed_from_u64(args.random_seed),
    };
    let tie_breaking = args
        .random_tie_breaking
        .then(|| -> Box<dyn Random> { Box::new(SmallRng::seed_from_u64(args.random_seed)) });
    let mut brancher = DynamicBrancher::new(
        args.variable_selection.create_selector(tie_breaking),
        args.value_selection.create_selector(),
    );

    let time_limit = args.time_limit.map(Duration::from_millis);
    let mut termination = Combinator::new(
        OsSignal::install()?,
        time_limit.map(TimeBudget::starting_now),
    );

    let mut solver = Solver::with_options(solver_options);
    let result = solver.satisfy(&crossword, &mut brancher, &mut termination);
    solver.log_statistics();

    match result {
        SatisfactionResult::Satisfiable(solution) => {
            let rendered = render(&crossword, &solution);
            print!("{rendered}");

            if let Some(output_path) = args.output_path {
                std::fs::write(&output_path, &rendered)
                    .map_err(|e| WordfillError::inaccessible_file(output_path.display(), e))?;
                info!("Wrote the filled grid to {}", output_path.display());
            }
        }
        SatisfactionResult::Unsatisfiable => println!("No solution."),
        SatisfactionResult::Unknown => println!("Unknown."),
    }

    Ok(())
}
