use corkboard_core::{BoardError, BoardResult};
use corkboard_service::ApiResponse;
use serde::Serialize;

pub fn output_success<T: Serialize>(data: T) {
    let response = ApiResponse::success(data);
    println!("{}", serde_json::to_string(&response).unwrap());
}

/// Outputs a failure envelope to stderr and terminates the process.
///
/// Never returns (`!`): the process exits with code 1 so shell scripts and
/// CI pipelines can branch on the failure.
pub fn output_error(error: &BoardError) -> ! {
    let response: ApiResponse<()> = ApiResponse::failure(error);
    eprintln!("{}", serde_json::to_string(&response).unwrap());
    std::process::exit(1);
}

/// Unwrap an operation result, exiting with the failure envelope on error.
pub fn unwrap_or_exit<T>(result: BoardResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(error) => output_error(&error),
    }
}
