use std::process::ExitCode;

fn main() -> ExitCode {
    match boilerplate_companion::cli::run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
