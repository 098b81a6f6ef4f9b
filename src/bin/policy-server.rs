//! Evaluating decision endpoint.
//!
//! Binds the decision port and answers each query by evaluating the
//! hardcoded RBAC rules. No flags, no environment.

use pdp_bench::policy::DecisionMode;
use pdp_bench::server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let listener = server::bind(server::DECISION_PORT).await?;
    server::serve(listener, DecisionMode::Evaluate).await?;
    Ok(())
}
