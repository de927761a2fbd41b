//! Gumball Machine
//!
//! Runs a ten-item machine through six rounds of two purchases each, until
//! it sells out. Notices are printed through a `tracing` subscriber.
//!
//! Run with: cargo run --example gumball_machine
//! Set RUST_LOG=gumball=debug to also see every state transition.

use gumball::machine::GumballMachine;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .init();

    let mut machine = GumballMachine::new(10);
    println!("{machine}\n");

    for _ in 0..6 {
        machine.insert_payment();
        machine.turn_crank();
        machine.insert_payment();
        machine.turn_crank();

        println!("{machine}\n");
    }

    println!(
        "{} transitions recorded over {:?}",
        machine.history().transitions().len(),
        machine.history().duration().unwrap_or_default()
    );
}
