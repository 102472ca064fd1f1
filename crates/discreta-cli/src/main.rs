mod repl;

use clap::{Parser, Subcommand};
use miette::IntoDiagnostic;
use tracing_subscriber::EnvFilter;

const CLI_LONG_ABOUT: &str =
    "Exact PMF/CDF calculator for discrete distributions.\n\n\
    Every probability is computed from first principles with exact integer\n\
    combinatorics; floating point enters only at the final conversion.\n\n\
    One-shot usage:\n  \
    discreta dbinom 2 5 0.23\n  \
    discreta phyper 2 3 2 2\n\n\
    Interactive usage:\n  \
    discreta repl";

#[derive(Parser)]
#[command(name = "discreta")]
#[command(about = "Exact PMF/CDF calculator for discrete distributions")]
#[command(long_about = CLI_LONG_ABOUT)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu loop reading parameters line by line
    #[command(display_order = 0)]
    Repl,

    /// Exact binomial coefficient C(n, k)
    Choose {
        /// Total number of items
        n: i64,
        /// Number of items to choose
        k: i64,
    },

    /// Negative binomial PMF: k failures before the r-th success
    Dnbinom {
        /// Number of failures
        k: i64,
        /// Number of successes to reach
        r: i64,
        /// Per-trial success probability
        p: f64,
    },

    /// Negative binomial CDF (R parameterization): at most x failures
    Pnbinom {
        /// Maximum number of failures
        x: i64,
        /// Number of successes to reach
        size: i64,
        /// Per-trial success probability
        prob: f64,
    },

    /// Binomial PMF: exactly x successes in size trials
    Dbinom {
        /// Number of successes
        x: i64,
        /// Number of trials
        size: i64,
        /// Per-trial success probability
        prob: f64,
    },

    /// Binomial CDF: P(X <= q), or P(X >= q) with --upper-tail
    Pbinom {
        /// Summation bound
        q: i64,
        /// Number of trials
        size: i64,
        /// Per-trial success probability
        prob: f64,
        /// Sum from q upward (inclusive) instead of up to q
        #[arg(long, default_value_t = false)]
        upper_tail: bool,
    },

    /// Hypergeometric PMF: x successes in a sample of k without replacement
    Dhyper {
        /// Successes in the sample
        x: i64,
        /// Successes in the population
        m: i64,
        /// Failures in the population
        n: i64,
        /// Sample size
        k: i64,
    },

    /// Hypergeometric CDF: at most x successes in a sample of n1
    Phyper {
        /// Maximum successes in the sample
        x: i64,
        /// Successes in the population
        m1: i64,
        /// Failures in the population
        m2: i64,
        /// Sample size
        n1: i64,
    },
}

fn main() -> miette::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Repl => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            repl::run(&mut stdin.lock(), &mut stdout.lock()).into_diagnostic()?;
        }
        Commands::Choose { n, k } => {
            let value = discreta_prob::choose(n, k).into_diagnostic()?;
            println!("OUT: {value}");
        }
        Commands::Dnbinom { k, r, p } => {
            let value = discreta_prob::dnbinom(k, r, p).into_diagnostic()?;
            println!("OUT: {value}");
        }
        Commands::Pnbinom { x, size, prob } => {
            let value = discreta_prob::pnbinom(x, size, prob).into_diagnostic()?;
            println!("OUT: {value}");
        }
        Commands::Dbinom { x, size, prob } => {
            let value = discreta_prob::dbinom(x, size, prob).into_diagnostic()?;
            println!("OUT: {value}");
        }
        Commands::Pbinom {
            q,
            size,
            prob,
            upper_tail,
        } => {
            let value = discreta_prob::pbinom(q, size, prob, !upper_tail).into_diagnostic()?;
            println!("OUT: {value}");
        }
        Commands::Dhyper { x, m, n, k } => {
            let value = discreta_prob::dhyper(x, m, n, k).into_diagnostic()?;
            println!("OUT: {value}");
        }
        Commands::Phyper { x, m1, m2, n1 } => {
            let value = discreta_prob::phyper(x, m1, m2, n1).into_diagnostic()?;
            println!("OUT: {value}");
        }
    }
    Ok(())
}
