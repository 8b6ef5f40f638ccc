mod assessment;
mod cli;
mod infra;
mod routes;
mod server;

use homecare::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
