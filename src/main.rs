use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match pgprobe::cli::start().await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
