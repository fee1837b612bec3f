use ffnet::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut net = ffnet::ffnet!(input 2; dense 5 => Activation::Sigmoid, dense 1 => Activation::Sigmoid)?;
    println!("{}", net);

    let samples = [
        Example::new([0.0, 0.0], [0.0]),
        Example::new([0.0, 1.0], [0.0]),
        Example::new([1.0, 0.0], [0.0]),
        Example::new([1.0, 1.0], [1.0]),
    ];

    let inputs: Vec<Vec<f64>> = samples.iter().map(|s| s.input.to_vec()).collect();

    println!("Before training:");
    for (input, y_hat) in inputs.iter().zip(net.predict_many(&inputs)?) {
        println!("for {:?}: {}", input, y_hat);
    }

    let report = SgdTrainer::new(&mut net, 0.05, Loss::SquaredError)?
        .train(&CancelToken::new(), 5000, &samples)?;
    println!("{:?}", report);

    println!("After training:");
    for (input, y_hat) in inputs.iter().zip(net.predict_many(&inputs)?) {
        println!("for {:?}: {}", input, y_hat);
    }
    Ok(())
}
