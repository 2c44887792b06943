//! Shape-driven allocation tests across the public API.

use proptest::prelude::*;
use shapenet::{relu, tanh, ActivationFunction, Matrix, Network, NetworkConfig, NetworkError, NetworkShape, WeightInit};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn lengths(network: &Network) -> Vec<usize> {
    network.layers().iter().map(Vec::len).collect()
}

#[test]
fn test_create_three_two() {
    init_logger();
    let network = Network::from_widths(&[3, 2]).unwrap();
    assert_eq!(lengths(&network), vec![1, 3, 2]);
    assert!(network.layers().iter().flatten().all(|&x| x == 0.0));
}

#[test]
fn test_create_empty() {
    let network = Network::from_widths(&[]).unwrap();
    assert_eq!(lengths(&network), vec![1]);
}

#[test]
fn test_create_negative_width() {
    let err = Network::from_widths(&[-1]).unwrap_err();
    assert!(matches!(err, NetworkError::InvalidShape { index: 0, width: -1 }));
}

#[test]
fn test_default_networks_are_independent() {
    let mut a = Network::default();
    let b = Network::default();
    a.set_shape([5]);
    assert_eq!(lengths(&a), vec![1, 5]);
    assert_eq!(lengths(&b), vec![1]);
}

#[test]
fn test_apply_matches_scalar_functions() {
    let input = vec![-10.0, -1.0, 0.0, 1.0, 10.0];

    let mut buffer = input.clone();
    ActivationFunction::ReLU.apply(&mut buffer);
    assert_eq!(buffer, input.iter().map(|&x| relu(x)).collect::<Vec<_>>());

    let mut buffer = input.clone();
    ActivationFunction::Tanh.apply(&mut buffer);
    assert_eq!(buffer, input.iter().map(|&x| tanh(x)).collect::<Vec<_>>());
}

#[test]
fn test_forward_after_reshape_uses_new_layout() {
    init_logger();
    let mut network = Network::with_config(
        [2, 3, 1],
        NetworkConfig::new(ActivationFunction::Tanh, ActivationFunction::Tanh, WeightInit::Xavier),
    );
    let output = network.forward(&[0.25, -0.75]).unwrap();
    assert_eq!(output.len(), 1);
    assert!((-1.0..=1.0).contains(&output[0]));

    network.set_shape([1, 1]);
    network.set_weights(vec![Matrix::from_data(vec![vec![-2.0]])]).unwrap();
    network.set_activation(1, ActivationFunction::ReLU).unwrap();
    assert_eq!(network.forward(&[1.0]).unwrap(), &[0.0]);
    assert_eq!(network.forward(&[-1.0]).unwrap(), &[2.0]);
}

#[test]
fn test_set_weights_on_short_shapes() {
    let mut network = Network::new([4]);
    network.set_weights(vec![]).unwrap();
    let err = network.set_weights(vec![Matrix::zeros(4, 1)]).unwrap_err();
    assert_eq!(err, NetworkError::LayerCountMismatch { expected: 0, got: 1 });

    let mut network = Network::new([0, 3]);
    network.set_weights(vec![Matrix::zeros(0, 3)]).unwrap();
    assert_eq!(network.forward(&[]).unwrap(), &[0.0, 0.0, 0.0]);
}

#[test]
fn test_serde_forms() {
    let shape: NetworkShape = serde_json::from_str("[3, 2]").unwrap();
    assert_eq!(shape, NetworkShape::from([3, 2]));
    assert!(serde_json::from_str::<NetworkShape>("[-1]").is_err());

    let activation: ActivationFunction = serde_json::from_str("\"ReLU\"").unwrap();
    assert_eq!(activation, ActivationFunction::ReLU);

    let config = serde_json::to_string(&NetworkConfig::default()).unwrap();
    assert_eq!(
        config,
        r#"{"hidden_activation":"ReLU","output_activation":"Tanh","weight_init":"Zeros"}"#
    );
}

proptest! {
    #[test]
    fn test_layout_follows_shape(widths in prop::collection::vec(0..64usize, 0..8)) {
        let network = Network::new(widths.clone());
        let expected: Vec<usize> = std::iter::once(1).chain(widths.iter().copied()).collect();
        prop_assert_eq!(lengths(&network), expected);
        prop_assert!(network.layers().iter().flatten().all(|&x| x == 0.0));
    }

    #[test]
    fn test_set_shape_is_structurally_idempotent(widths in prop::collection::vec(0..64usize, 0..8)) {
        let mut network = Network::new([7, 7]);
        network.set_shape(widths.clone());
        let first = lengths(&network);
        network.forward(&vec![1.0; widths.first().copied().unwrap_or(0)]).ok();
        network.set_shape(widths);
        prop_assert_eq!(lengths(&network), first);
        prop_assert!(network.layers().iter().flatten().all(|&x| x == 0.0));
    }

    #[test]
    fn test_relu_definition(x in -1e6f64..1e6) {
        if x > 0.0 {
            prop_assert_eq!(relu(x), x);
        } else {
            prop_assert_eq!(relu(x), 0.0);
        }
    }

    #[test]
    fn test_signed_widths(widths in prop::collection::vec(-4i64..16, 0..8)) {
        match widths.iter().position(|&w| w < 0) {
            Some(index) => {
                let err = Network::from_widths(&widths).unwrap_err();
                prop_assert_eq!(err, NetworkError::InvalidShape { index, width: widths[index] });
            }
            None => {
                let network = Network::from_widths(&widths).unwrap();
                prop_assert_eq!(network.layers().len(), widths.len() + 1);
            }
        }
    }
}
