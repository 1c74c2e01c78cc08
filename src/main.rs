use matrix_verify::cli;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Locale detection must happen before any user-facing output.
    matrix_verify::init();

    match cli::run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
