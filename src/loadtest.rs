//! Simulated-user definition for load testing the server.
//!
//! One scenario, `WebsiteUser`: each simulated user issues a single warm-up
//! GET to `/` when it starts, then keeps requesting `/` for the lifetime of
//! the test, pausing a random 0-1s between requests. Spawning users, pacing,
//! and metrics aggregation all belong to Goose; responses are not inspected
//! here and any request failure surfaces through Goose's own reporting.

use goose::prelude::*;
use std::time::Duration;

/// Random pause bounds applied between recurring requests of one simulated
/// user. The engine samples uniformly from `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitPolicy {
    pub min: Duration,
    pub max: Duration,
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self {
            min: Duration::ZERO,
            max: Duration::from_secs(1),
        }
    }
}

/// Builds the `WebsiteUser` scenario with the default 0-1s wait policy.
pub fn website_user() -> Result<Scenario, GooseError> {
    website_user_with_wait(WaitPolicy::default())
}

/// Builds the `WebsiteUser` scenario with explicit wait bounds. Goose rejects
/// inverted bounds (min > max).
pub fn website_user_with_wait(wait: WaitPolicy) -> Result<Scenario, GooseError> {
    Ok(scenario!("WebsiteUser")
        .set_wait_time(wait.min, wait.max)?
        .register_transaction(transaction!(warm_up).set_name("warm up").set_on_start())
        .register_transaction(transaction!(front_page).set_name("front page")))
}

/// Runs once per simulated user, before any recurring transaction.
pub async fn warm_up(user: &mut GooseUser) -> TransactionResult {
    let _goose = user.get("/").await?;

    Ok(())
}

/// Recurring transaction: one GET to `/` per invocation.
pub async fn front_page(user: &mut GooseUser) -> TransactionResult {
    let _goose = user.get("/").await?;

    Ok(())
}
