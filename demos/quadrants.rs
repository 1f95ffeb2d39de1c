//! Trains a small network to tell apart points left and right of the vertical axis and prints the
//! error before and after training.

use ndarray::array;
use sigmanet::{Dataset, Network, NetworkConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let data = Dataset::new(
        array![[1.0, 1.0], [1.0, -1.0], [-1.0, 1.0], [-1.0, -1.0]],
        array![[1.0, 0.0], [1.0, 0.0], [0.0, 1.0], [0.0, 1.0]],
    )
    .unwrap();

    let config = NetworkConfig::new(2, 2, 3, 2, 1000, 0.3).unwrap();
    let mut network = Network::new(config);
    network.initialize();

    let before = network.mean_squared_error(&data).unwrap();
    network.train_dataset(&data).unwrap();
    let after = network.mean_squared_error(&data).unwrap();

    println!("mse before: {:.6}, after: {:.6}", before, after);

    for sample in data.samples() {
        let output = network.predict(&sample.input).unwrap();
        println!("{} -> {:.4} (label {})", sample.input, output, sample.label);
    }
}
