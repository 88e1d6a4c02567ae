use lambda_http::Error;
use lms::core::domain::Configuration;
use lms::server;
use lms::utils::logging::setup_tracing;

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    let config = Configuration::from_env()?;
    server::serve(config).await
}
