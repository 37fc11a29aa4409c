use crate::gcloud::InstanceAction;
use clap::{ArgAction, Args, Parser, Subcommand};

const VERSION_INFO: &str = env!("GVM_BUILD_VERSION");

#[derive(Parser, Debug)]
#[command(name = "gvm")]
#[command(about = "Manage the terraform-provisioned GCP instance", long_about = None, version = VERSION_INFO)]
#[command(propagate_version = true)]
#[command(override_usage = "gvm <ssh|stop|start|suspend|resume> [EXTRA_ARGS]...")]
pub struct Cli {
    /// Increase message verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments shared by every instance action.
#[derive(Debug, Args)]
pub struct InstanceArgs {
    /// Extra arguments forwarded to gcloud verbatim (put `--` first to
    /// forward flag separators, e.g. `gvm ssh -- -- ls`)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra_args: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open an SSH session on the instance
    Ssh(InstanceArgs),

    /// Stop the instance
    Stop(InstanceArgs),

    /// Start the instance
    Start(InstanceArgs),

    /// Suspend the instance
    Suspend(InstanceArgs),

    /// Resume the instance
    Resume(InstanceArgs),
}

impl Commands {
    pub fn action(&self) -> InstanceAction {
        match self {
            Commands::Ssh(_) => InstanceAction::Ssh,
            Commands::Stop(_) => InstanceAction::Stop,
            Commands::Start(_) => InstanceAction::Start,
            Commands::Suspend(_) => InstanceAction::Suspend,
            Commands::Resume(_) => InstanceAction::Resume,
        }
    }

    pub fn extra_args(&self) -> &[String] {
        match self {
            Commands::Ssh(args)
            | Commands::Stop(args)
            | Commands::Start(args)
            | Commands::Suspend(args)
            | Commands::Resume(args) => &args.extra_args,
        }
    }
}
