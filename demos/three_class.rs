//! Loads a network configuration from a file, trains on a synthetic three-class dataset and
//! reports held-out accuracy.
//!
//! Run with: cargo run --example three_class -- [config.json]

use ndarray::Array2;
use rand::prelude::*;
use sigmanet::metrics::{accuracy, argmax};
use sigmanet::{Dataset, Network, NetworkConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "test_data/iris_config.json".to_string());
    let config = NetworkConfig::load_file(&path).unwrap();

    let centers = [
        [0.2, 0.8, 0.1, 0.1],
        [0.5, 0.4, 0.5, 0.5],
        [0.8, 0.5, 0.9, 0.9],
    ];
    let per_class = 50;
    let mut rng = thread_rng();

    let mut inputs = Array2::zeros((3 * per_class, 4));
    let mut labels = Array2::zeros((3 * per_class, 3));
    let mut order: Vec<usize> = (0..3 * per_class).collect();
    order.shuffle(&mut rng);

    for (row, &slot) in order.iter().enumerate() {
        let class = row / per_class;
        for (j, center) in centers[class].iter().enumerate() {
            let noise: f64 = rng.gen_range(-0.05..0.05);
            inputs[[slot, j]] = center + noise;
        }
        labels[[slot, class]] = 1.0;
    }

    let data = Dataset::new(inputs, labels).unwrap();
    let (train, test) = data.split_at(100);

    let mut network = Network::new(config);
    network.initialize();
    network.train_dataset(&train).unwrap();

    for (i, sample) in test.samples().enumerate() {
        let output = network.predict(&sample.input).unwrap();
        println!(
            "{} {:.3} predicted: {:?} answer: {:?}",
            i + 1,
            output,
            argmax(&output.row(0)),
            argmax(&sample.label.row(0))
        );
    }

    println!(
        "held-out accuracy: {:.1}%",
        100.0 * accuracy(&network, &test).unwrap()
    );
}
