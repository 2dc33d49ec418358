use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process;

use textstrat::config::{Config, DEFAULT_DECORATOR, DEFAULT_INPUT, DEFAULT_STRATEGY};

/// Analyze a text file with a selectable strategy
#[derive(Parser, Debug)]
#[command(name = "textstrat", about, long_about = None, disable_version_flag = true)]
struct Args {
    /// Input file name
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Strategy to run (wordCount or MostRepeatedWords)
    #[arg(long, default_value = DEFAULT_STRATEGY)]
    strategy: String,

    /// Remove extra spaces first with removeExtraSpaces (default none)
    #[arg(long, default_value = DEFAULT_DECORATOR)]
    decorator: String,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            input: args.input,
            strategy: args.strategy,
            decorator: args.decorator,
        }
    }
}

fn main() {
    env_logger::init();
    let config = Config::from(Args::parse());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = textstrat::run(&config, &mut out) {
        eprintln!("{}", e);
        process::exit(1);
    }
}
