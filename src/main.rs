use clap::Parser;
use env_logger::Env;
use std::io::Write;
use std::time::Duration;
use wtrl_rounds::LogConsole;

/// Fetch the WTRL ZRL rounds feed and log every round.
#[derive(Debug, Parser)]
#[command(name = "wtrl-rounds", version, about)]
struct Args {
    /// Request timeout in seconds (network stack default when omitted)
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<u64>,

    /// Log gateway debug output
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
                record.level(),
                record.args()
            )
        })
        .init();
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logger(args.verbose);

    let timeout = args.timeout.map(Duration::from_secs);
    wtrl_rounds::import_rounds_with(timeout, &LogConsole).await;
}
