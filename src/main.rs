use anyhow::Result;
use couplingmap::cli::{handle_command, parse_args};
use couplingmap::observability::{init_tracing, install_panic_hook};

fn main() -> Result<()> {
    install_panic_hook();
    let cli = parse_args();
    init_tracing(cli.command.args().verbosity);

    handle_command(&cli.command)
}
