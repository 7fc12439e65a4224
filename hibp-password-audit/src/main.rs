use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use hibp_password_audit::{
    BatchOutcome, Config, DEFAULT_REPORT_PATH, Error, Mode, check_password, messages, process_file,
};
use hibp_range_client::{DEFAULT_API_URL, HIBP_API_URL_ENV};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "hibp-password-audit")]
#[command(about = "Check passwords against Have I Been Pwned and rate their strength")]
struct Args {
    /// Base URL of the Pwned Passwords range API
    #[arg(long, env = HIBP_API_URL_ENV, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// CSV report written in file mode
    #[arg(long, default_value = DEFAULT_REPORT_PATH)]
    report: PathBuf,

    /// Ask the API to pad responses so their size does not reveal the prefix
    #[arg(long)]
    padding: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config { api_url: args.api_url, report_path: args.report, padding: args.padding }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Prints `prompt` and reads one line, without its line terminator.
fn prompt_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

async fn run(config: &Config) -> Result<ExitCode, Error> {
    println!("{}", messages::BANNER);

    let selection = prompt_line(messages::MODE_PROMPT)?;
    let Some(mode) = Mode::parse(&selection) else {
        println!("{}", messages::INVALID_OPTION);
        return Ok(ExitCode::SUCCESS);
    };
    debug!(?mode, api_url = %config.api_url, "mode selected");

    let client = config.range_client()?;

    match mode {
        Mode::SinglePassword => {
            let password = rpassword::prompt_password(messages::PASSWORD_PROMPT)?;
            match check_password(&client, &password).await {
                Ok(record) => {
                    println!("{}", messages::single_result(record.leak_count, record.strength));
                }
                Err(e) => {
                    eprintln!("{}", messages::single_failure(&e));
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Mode::PasswordFile => {
            let path = prompt_line(messages::PATH_PROMPT)?;
            let outcome = process_file(&client, Path::new(&path), &config.report_path).await?;
            if let BatchOutcome::Completed { records, failed } = outcome {
                debug!(checked = records.len(), failed, "batch finished");
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = Config::from(args);
    match run(&config).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ {e}");
            ExitCode::FAILURE
        }
    }
}
