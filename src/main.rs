use std::{env, fs::read_to_string, process::ExitCode};

use log::debug;
use tinyscript::driver::Driver;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: tinyscript <filename>");
        return ExitCode::from(2);
    }

    let file_path = &args[1];

    let file_contents = match read_to_string(file_path) {
        Ok(contents) => contents,
        Err(error) => {
            eprintln!("Error: failed to read {}: {}", file_path, error);
            return ExitCode::FAILURE;
        }
    };

    debug!("read {} bytes from {}", file_contents.len(), file_path);

    let mut driver = Driver::stdio();
    match driver.run(file_contents, Some(file_path.clone())) {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
