//! Walks a CoveringRing through overwrite and polling.
//!
//! Run with `RUST_LOG=debug cargo run --example covering --features std`.

use covering_ring::{CapacityError, CoveringRing};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), CapacityError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let ring = CoveringRing::new(10)?;

    for i in 0..20 {
        ring.offer(i);
    }
    println!("before poll: {ring:?}");

    for item in ring.poll_list(15) {
        println!("{item}");
    }
    println!("16th poll: {:?}", ring.poll());

    for i in 20..40 {
        ring.offer(i);
    }
    println!("17th poll: {:?}", ring.poll());

    for i in 40..60 {
        ring.offer(i);
    }
    println!("18th poll: {:?}", ring.poll());

    Ok(())
}
