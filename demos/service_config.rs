//! # Typed Builder Example
//!
//! This example demonstrates the compile-time checked builder on a service
//! configuration record: required slots must be set before `build` compiles,
//! optional slots fall back to their declared defaults, and a partially
//! configured builder can be cloned to seed several configurations.
//!
//! ## Key Concepts
//!
//! - **Slot**: one named, typed field of the record, settable at most once
//! - **Required slot**: no default; `build` only compiles once it is set
//! - **Optional slot**: declares a default used when the slot is left unset
//! - **Branching**: cloning a chain forks it; branches never see each other

use fx_slot_builder::{slots, Buildable};

#[derive(Debug, Clone, PartialEq)]
struct ServiceConfig {
    host: String,
    port: u16,
    workers: usize,
    verbose: bool,
}

slots! {
    impl ServiceConfig {
        Host(host: String),
        Port(port: u16 = 8080),
        Workers(workers: usize = 4),
        Verbose(verbose: bool = false),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Only the required slot is set; every other field takes its default.
    let minimal = ServiceConfig::builder()
        .set(Host, String::from("localhost"))
        .build();
    println!("minimal: {minimal:?}");

    // A common prefix, branched into two independent configurations.
    let base = ServiceConfig::builder()
        .set(Host, String::from("0.0.0.0"))
        .set(Workers, 16);

    let public = base.clone().set(Port, 443).build();
    let debug = base.set(Verbose, true).build();

    println!("public:  {public:?}");
    println!("debug:   {debug:?}");

    // Setting Host twice, or skipping it entirely, would not compile:
    //
    //   ServiceConfig::builder().set(Port, 9090).build();
    //                                           ^^^^^ no applicable impl
}
