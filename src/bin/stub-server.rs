//! Fixed-response decision endpoint.
//!
//! Binds the decision port and answers `{"result":false}` to every request
//! on the decision route without reading the input. The baseline the other
//! endpoints are measured against. No flags, no environment.

use pdp_bench::policy::DecisionMode;
use pdp_bench::server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let listener = server::bind(server::DECISION_PORT).await?;
    server::serve(listener, DecisionMode::Stub).await?;
    Ok(())
}
