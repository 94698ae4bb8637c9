mod assess;
mod cli;
mod infra;
mod routes;
mod server;

use uni_readiness::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
