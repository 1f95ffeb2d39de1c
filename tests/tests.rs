use ndarray::{array, Array2};
use rand::prelude::*;

use sigmanet::metrics::{accuracy, argmax, mean_squared_error};
use sigmanet::{Dataset, Error, Initializer, Network, NetworkConfig};

fn get_file_path(file_name: &str) -> String {
    format!("{}/test_data/{}", env!("CARGO_MANIFEST_DIR"), file_name)
}

// Four points at the corners of a square, labelled by whether they lie right or left of the
// vertical axis
fn quadrants() -> Dataset {
    Dataset::new(
        array![[1.0, 1.0], [1.0, -1.0], [-1.0, 1.0], [-1.0, -1.0]],
        array![[1.0, 0.0], [1.0, 0.0], [0.0, 1.0], [0.0, 1.0]],
    )
    .unwrap()
}

// Three well-separated clusters of four features each with one-hot labels, shuffled
fn three_class(seed: u64, per_class: usize) -> Dataset {
    let centers = [
        [0.2, 0.8, 0.1, 0.1],
        [0.5, 0.4, 0.5, 0.5],
        [0.8, 0.5, 0.9, 0.9],
    ];
    let mut rng = StdRng::seed_from_u64(seed);
    let mut rows = Vec::new();

    for (class, center) in centers.iter().enumerate() {
        for _ in 0..per_class {
            let input: Vec<f64> = center
                .iter()
                .map(|c| {
                    let noise: f64 = rng.gen_range(-0.05..0.05);
                    c + noise
                })
                .collect();
            let mut label = vec![0.0; 3];
            label[class] = 1.0;
            rows.push((input, label));
        }
    }
    rows.shuffle(&mut rng);

    let n = rows.len();
    let inputs = Array2::from_shape_fn((n, 4), |(i, j)| rows[i].0[j]);
    let labels = Array2::from_shape_fn((n, 3), |(i, j)| rows[i].1[j]);

    Dataset::new(inputs, labels).unwrap()
}

#[test]
fn test_learning_reduces_error() {
    let data = quadrants();

    for layers in 1..=2 {
        for seed in 0..5 {
            let config = NetworkConfig::new(2, 2, 3, layers, 1000, 0.3).unwrap();
            let mut network = Network::new(config);
            network.initialize_with(&mut Initializer::from_seed(seed));

            let before = network.mean_squared_error(&data).unwrap();
            network.train_dataset(&data).unwrap();
            let after = network.mean_squared_error(&data).unwrap();

            assert!(
                after < before,
                "layers {} seed {}: mse {} -> {}",
                layers,
                seed,
                before,
                after
            );
        }
    }
}

#[test]
fn test_three_class_end_to_end() {
    let config = NetworkConfig::load_file(get_file_path("iris_config.json")).unwrap();
    assert_eq!(NetworkConfig::new(4, 3, 3, 1, 500, 0.3).unwrap(), config);

    let data = three_class(1000, 40);
    let (train, test) = data.split_at(90);
    assert_eq!(30, test.len());

    let mut network = Network::new(config);
    network.initialize_with(&mut Initializer::from_seed(17));
    network.train_dataset(&train).unwrap();

    let held_out = accuracy(&network, &test).unwrap();
    assert!(held_out > 0.6, "held-out accuracy {}", held_out);

    for sample in test.samples() {
        let output = network.predict(&sample.input).unwrap();
        assert_eq!((1, 3), output.dim());
        assert!(output.iter().all(|&v| v > 0.0 && v < 1.0));
        assert!(argmax(&output.row(0)).is_some());
    }
}

#[test]
fn test_time_seeded_network() {
    let config = NetworkConfig::new(4, 3, 5, 3, 10, 0.3).unwrap();
    let mut network = Network::new(config);
    let input = array![[0.1, 0.2, 0.3, 0.4]];

    assert_eq!(Err(Error::UninitializedModel), network.predict(&input));

    network.initialize();
    let data = three_class(5, 5);
    network.train_dataset(&data).unwrap();

    let first = network.predict(&input).unwrap();
    let second = network.predict(&input).unwrap();
    assert_eq!(first, second);

    let predictions = network.predict_rows(data.inputs()).unwrap();
    assert!(mean_squared_error(&predictions, data.labels()).unwrap() < 1.0);
}

#[test]
fn test_train_rejects_wrong_widths() {
    let config = NetworkConfig::new(4, 3, 3, 1, 1, 0.3).unwrap();
    let mut network = Network::new(config);
    network.initialize_with(&mut Initializer::from_seed(3));

    let result = network.train(
        &Array2::<f64>::zeros((5, 3)),
        &Array2::<f64>::zeros((5, 3)),
    );
    assert_eq!(
        Err(Error::DimensionMismatch {
            expected: (usize::MAX, 4),
            found: (5, 3)
        }),
        result
    );

    let result = network.predict(&array![[1.0, 2.0]]);
    assert_eq!(
        Err(Error::DimensionMismatch {
            expected: (1, 4),
            found: (1, 2)
        }),
        result
    );
}
