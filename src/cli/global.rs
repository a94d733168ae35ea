use clap::Args;

/// Global arguments that apply to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Suppress warnings
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Extra codec configuration file, applied after the standard locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,
}
