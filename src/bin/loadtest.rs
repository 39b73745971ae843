//! Load-test runner for the webserve front page.
//!
//! Start the server first, then run for example:
//!
//! ```bash
//! cargo run --release --bin loadtest -- --users 10 --run-time 60s
//! ```
//!
//! The target host defaults to the local server address; override it with
//! `--host` when testing a remote instance. Concurrency, run duration, and
//! reporting are all Goose's surface, not ours.

use goose::prelude::*;
use webserve::loadtest;

#[tokio::main]
async fn main() -> Result<(), GooseError> {
    GooseAttack::initialize()?
        .register_scenario(loadtest::website_user()?)
        .set_default(GooseDefault::Host, "http://127.0.0.1:7878")?
        .execute()
        .await?;

    Ok(())
}
