use ffnet::prelude::*;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut net = Network::from_entropy(
        2,
        &[
            layer(5, Activation::Relu),    // hidden
            layer(1, Activation::Sigmoid), // output
        ],
    )?;
    println!("{}", net);

    let samples = [
        Example::new([0.0, 0.0], [0.0]),
        Example::new([0.0, 1.0], [1.0]),
        Example::new([1.0, 0.0], [1.0]),
        Example::new([1.0, 1.0], [0.0]),
    ];

    println!("Before training:");
    for sample in &samples {
        println!("for {}: {}", sample.input, net.predict(&sample.input.to_vec())?);
    }

    SgdTrainer::new(&mut net, 0.05, Loss::SquaredError)?
        .on_epoch(|epoch, loss| {
            if epoch % 50 == 0 {
                info!(epoch, loss, "xor");
            }
        })
        .train(&CancelToken::new(), 500, &samples)?;

    println!("After training:");
    for sample in &samples {
        println!("for {}: {}", sample.input, net.predict(&sample.input.to_vec())?);
    }
    Ok(())
}
