use clap::Parser;
use std::io;
use std::process::ExitCode;

use logmonitor_common::logging::{LogWriter, global, init_logger};
use logmonitor_lib::lm_clap::Cli;
use logmonitor_lib::lm_lib::forward_lines;

fn main() -> ExitCode {
    // Prints usage and exits with status 2 on bad arguments
    let cli = Cli::try_parse().unwrap_or_else(|e| e.exit());

    let writer = match global::install(LogWriter::for_target(cli.writer.output_target())) {
        Ok(writer) => writer,
        Err(e) => {
            eprintln!("{}", e.pretty());
            return ExitCode::from(1);
        }
    };
    if let Err(e) = init_logger(writer.clone()) {
        writer.trace_warning(&e.to_string());
    }

    let log_file = match cli.writer.open_log_file() {
        Ok(file) => file,
        Err(e) => {
            log::error!("{}", e.pretty());
            return ExitCode::from(1);
        }
    };

    log::info!(
        "Forwarding stdin to {} (interactive: {})",
        cli.writer.output_target(),
        writer.is_interactive()
    );

    match forward_lines(
        &writer,
        cli.level.trace_level(),
        io::stdin().lock(),
        log_file,
    ) {
        Ok(summary) => {
            log::info!("Forwarded {} lines", summary.lines);
            if summary.raw_failures > 0 {
                log::error!(
                    "{} lines could not be appended to the log file",
                    summary.raw_failures
                );
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            log::error!("{}", e.pretty());
            ExitCode::from(1)
        }
    }
}
