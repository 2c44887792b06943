use shapenet::{ActivationFunction, Network, NetworkConfig, WeightInit};

fn main() -> shapenet::Result<()> {
    env_logger::init();

    // 32 board squares in, one evaluation out.
    let config = NetworkConfig::new(
        ActivationFunction::ReLU,
        ActivationFunction::Tanh,
        WeightInit::He,
    );
    let mut network = Network::with_config([32, 16, 8, 1], config);

    let lengths: Vec<usize> = network.layers().iter().map(Vec::len).collect();
    println!("Buffer lengths: {:?}", lengths);

    let board: Vec<f64> = (0..32)
        .map(|square| match square {
            0..=11 => -1.0,
            20..=31 => 1.0,
            _ => 0.0,
        })
        .collect();

    let score = network.forward(&board)?[0];
    println!("Evaluation: {score:.4}");

    network.set_shape([32, 1]);
    network.set_activation(1, ActivationFunction::Tanh)?;
    println!("Rebuilt with {} neurons (bias unit included)", network.neuron_count());

    Ok(())
}
