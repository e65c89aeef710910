//! sandfall - pour sand into the cave described by an input file
//!
//! Usage: `sandfall [INPUT]` (defaults to `input.txt`).
//! Log level comes from `RUST_LOG`; `LOG_FORMAT=json` switches to JSON lines.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::process::ExitCode;

    use sandfall_engine::{solve, CaveSettings};

    const DEFAULT_INPUT: &str = "input.txt";

    fn init_tracing() {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

        let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
        if json {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .json()
                .init();
        } else {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact()
                .init();
        }

        std::panic::set_hook(Box::new(|info| {
            let backtrace = std::backtrace::Backtrace::capture();
            tracing::error!(%info, ?backtrace, "panic");
        }));
    }

    pub(super) fn run() -> ExitCode {
        init_tracing();

        let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_INPUT.to_string());
        let input = match std::fs::read_to_string(&path) {
            Ok(input) => input,
            Err(e) => {
                tracing::error!(%path, error = %e, "failed to read input");
                eprintln!("can't read {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        };

        match solve(&input, CaveSettings::default()) {
            Ok(answer) => {
                println!("Part 1 {}", answer.part1);
                println!("Part 2 {}", answer.part2);
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::error!(%path, error = %e, "invalid cave");
                eprintln!("{}", e);
                ExitCode::FAILURE
            }
        }
    }
}
