use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab")]
struct Opts {
    /// Directory holding gate.json5 and the message files
    #[structopt(short, long, default_value = ".")]
    data_dir: PathBuf,

    /// Logging config file location
    #[structopt(short, long)]
    log_config: Option<PathBuf>,

    /// Validate the configuration and exit
    #[structopt(long)]
    check: bool,
}

pub fn main() -> Result<(), anyhow::Error> {
    let opts = Opts::from_args();

    hostgate_server::run::run_gate(hostgate_server::run::RunOptions {
        data_dir: opts.data_dir,
        log_config: opts.log_config,
        check: opts.check,
    })
}
