mod cli;
mod demo;
mod infra;
mod routes;
mod server;

pub use infra::AppState;
pub use routes::assessment_router;

use hba_core::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
