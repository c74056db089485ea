use std::process;

use depwalker::cli::{Args, Command};

fn main() {
    let args = Args::parse_args();
    let command = Command::from_args(args);

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("Critical: failed to start async runtime: {}", err);
            process::exit(2);
        }
    };

    let exit_code = runtime.block_on(command.run());
    process::exit(exit_code);
}
