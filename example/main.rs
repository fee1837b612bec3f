use std::time::Instant;

use ffnet::prelude::*;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let net = Network::from_entropy(2, &[layer(10, Activation::Sigmoid)])?;

    let start = Instant::now();
    let y_hat = net.predict(&[1.0, 0.0])?;
    let elapsed = start.elapsed();

    println!("{}", y_hat);
    info!(?elapsed, "predicted");
    Ok(())
}
