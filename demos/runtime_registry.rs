//! # Runtime Registry Example
//!
//! This example demonstrates the dynamic layer: the slot list is declared as
//! values, verified against the record's schema at registration, and the
//! draft reports misuse as errors where the typed builder would refuse to
//! compile.
//!
//! ## Key Concepts
//!
//! - **Registry**: ordered slot descriptors, schema-verified up front
//! - **Draft**: persistent accumulator; `set` returns a new draft
//! - **Error taxonomy**: `SchemaError` at registration, `AssignError` at
//!   `set`, `BuildError` at `build`

use anyhow::Result;
use fx_slot_builder::{slots, Registry, Slot, SlotDef, SlotId};

#[derive(Debug, Clone, PartialEq)]
struct ServiceConfig {
    host: String,
    port: u16,
    workers: usize,
}

slots! {
    impl ServiceConfig {
        Host(host: String),
        Port(port: u16 = 8080),
        Workers(workers: usize = 4),
    }
}

// Slot ids agree between the layers: the markers derive theirs from the same
// field names the descriptors hash at runtime.
const HOST: SlotId = <Host as Slot>::ID;
const PORT: SlotId = <Port as Slot>::ID;
const WORKERS: SlotId = <Workers as Slot>::ID;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let registry = Registry::<ServiceConfig>::new(vec![
        SlotDef::required::<String>("host"),
        SlotDef::optional("port", || 8080u16),
        SlotDef::optional("workers", || 4usize),
    ])?;

    // One prefix, two branches.
    let base = registry.draft().set(HOST, String::from("0.0.0.0"))?;

    println!(
        "base draft: {} of 3 slots set, workers set: {}",
        base.fill_count(),
        base.is_set(WORKERS)
    );

    let public = base.set(PORT, 443u16)?.build()?;
    let default_port = base.build()?;

    println!("public:       {public:?}");
    println!("default port: {default_port:?}");

    // Misuse is reported, not absorbed.
    if let Err(error) = base.set(HOST, String::from("127.0.0.1")) {
        println!("second set of host: {error}");
    }

    match registry.draft().build() {
        Err(error) => println!("build with host unset: {error}"),
        Ok(config) => println!("unexpected: {config:?}"),
    }

    Ok(())
}
