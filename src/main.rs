use colored::*;
use gvm::cli::Exit;
use std::process;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli_args = match gvm::cli::parse_args() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version arrive here too; they are not failures.
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    // Setup tracing subscriber. Verbosity flags raise the default level;
    // GVM_LOG overrides everything.
    let default_level = match cli_args.verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var("GVM_LOG")
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Execute the command and terminate the way the child did
    match gvm::cli::run(cli_args).await {
        Ok(Exit::Code(code)) => process::exit(code),
        Ok(Exit::Signal(signal)) => {
            // Re-deliver the child's fatal signal; fall through to the
            // shell convention if it is ignored (or on non-unix targets).
            #[cfg(unix)]
            unsafe {
                libc::raise(signal);
            }
            process::exit(128 + signal);
        }
        Err(e) => {
            // Print user-facing error message clearly
            eprintln!("{}: {}", "Error".red().bold(), e);
            process::exit(1);
        }
    }
}
