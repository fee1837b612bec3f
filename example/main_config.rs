use ffnet::config::load_config;
use ffnet::prelude::*;
use tracing::info;

// Usage: train_from_config [config.json] [history.csv]
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut args = std::env::args().skip(1);
    let config_path = args.next().unwrap_or_else(|| "config/xor.json".to_string());
    let history_path = args.next().unwrap_or_else(|| "loss_history.csv".to_string());

    let config = load_config(&config_path)?;
    info!(path = %config_path, "loaded config");

    let mut net = config.network.build()?;
    println!("{}", net);

    let samples = config.examples();

    let mut history = LossHistory::new();
    let report = SgdTrainer::from_config(&mut net, &config.trainer)?
        .on_epoch(|epoch, loss| history.record(epoch, loss))
        .train(&CancelToken::new(), config.trainer.epochs, &samples)?;
    info!(?report, "done");

    history.write_csv(&history_path)?;
    info!(path = %history_path, epochs = history.len(), "wrote loss history");

    for sample in &samples {
        let input = sample.input.to_vec();
        println!("for {:?}: {}", input, net.predict(&input)?);
    }
    Ok(())
}
