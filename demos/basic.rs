//! # Example: basic
//!
//! Demonstrates the listener lifecycle on a single registry.
//!
//! Shows how to:
//! - Register closures at different priorities.
//! - Pause a listener to cut an emission short, then resume it.
//! - Cap a listener with a call limit.
//! - Keep going past failing callbacks with [`FailurePolicy::Continue`].
//!
//! ## Flow
//! ```text
//! register("order.placed", ...) x3
//!     ├─► emit #1 ──► billing(100) ──► mailer(50) ──► audit(0, limit=1)
//!     ├─► pause(mailer)
//!     ├─► emit #2 ──► billing(100) ──► [mailer paused: stop]
//!     ├─► resume(mailer)
//!     └─► emit #3 ──► billing(100) ──► mailer(50) ──► audit exhausted
//! ```
//!
//! ## Run
//! ```bash
//! RUST_LOG=tidings=trace cargo run --example basic
//! ```

use tidings::{Args, FailurePolicy, Registry, RegistryConfig, args};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let registry: Registry = Registry::builder(RegistryConfig::default())
        .failure_policy(FailurePolicy::Continue)
        .build();

    registry.on_with_priority(
        "order.placed",
        |a: &Args| {
            let id: &u32 = a.arg(0)?;
            let total: &f64 = a.arg(1)?;
            println!("[billing] order #{id}: charging {total:.2}");
            Ok(())
        },
        100,
    )?;

    let mailer = registry.on_with_priority(
        "order.placed",
        |a: &Args| {
            let id: &u32 = a.arg(0)?;
            println!("[mailer] order #{id}: confirmation sent");
            Ok(())
        },
        50,
    )?;

    let audit = registry.on("order.placed", |a: &Args| {
        println!("[audit] first order seen ({} args)", a.len());
        Ok(())
    })?;
    audit.set_call_limit(1)?;

    println!("-- emit #1");
    registry.emit("order.placed", &args![1u32, 19.99f64])?;

    println!("-- emit #2 (mailer paused)");
    mailer.pause();
    registry.emit("order.placed", &args![2u32, 5.00f64])?;

    println!("-- emit #3 (mailer resumed, audit exhausted)");
    mailer.resume();
    registry.emit("order.placed", &args![3u32, 42.50f64])?;

    println!("-- failing listener under FailurePolicy::Continue");
    registry.on_with_priority("order.refunded", |_| Err("payment gateway offline".into()), 10)?;
    registry.on("order.refunded", |_| {
        println!("[ledger] refund recorded anyway");
        Ok(())
    })?;
    if let Err(e) = registry.emit("order.refunded", &args![1u32]) {
        println!("emit returned: {e}");
    }

    println!(
        "mailer calls = {}, audit calls = {}, events = {:?}",
        mailer.call_count(),
        audit.call_count(),
        registry.event_names()
    );

    registry.reset();
    Ok(())
}
