use clap::Parser;
use dustbot_cli::{init_logging, run, Cli};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = std::io::stdout();
    if let Err(e) = run(&cli, &mut stdout.lock()) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
