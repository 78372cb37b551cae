#![doc(test(attr(deny(warnings))))]

//! Campus Core provides the ledger, task, grading, and arithmetic
//! primitives shared by the campus console utilities.

pub mod calc;
pub mod cli;
pub mod config;
pub mod errors;
pub mod grades;
pub mod ledger;
pub mod storage;
pub mod tasks;
pub mod timefmt;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        init_tracing();
        tracing::info!("Campus Core tracing initialized.");
    });
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::from_default_env().add_directive("campus_core=info".parse().unwrap());

    fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
