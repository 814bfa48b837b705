use mind::{Activator, Lesson, Mind, MindConfig};

// Small network that learns XOR (educational example).
const TOPOLOGY: [usize; 3] = [2, 3, 1];
// Training hyperparameters.
const SEED: u64 = 42;
const ITERATIONS: usize = 2_000;
const LEARNING_RATE: f64 = 0.2;

fn main() {
    env_logger::init();

    let lessons: Vec<Lesson> = vec![
        (vec![0.0, 0.0], vec![0.0]),
        (vec![0.0, 1.0], vec![1.0]),
        (vec![1.0, 0.0], vec![1.0]),
        (vec![1.0, 1.0], vec![0.0]),
    ];

    let config = MindConfig {
        seed: Some(SEED),
        ..MindConfig::default()
    };
    let mut mind = Mind::with_config(&TOPOLOGY, Activator::HTan, &config)
        .expect("topology is valid");

    mind.train(&lessons, ITERATIONS, LEARNING_RATE)
        .expect("lesson dimensions match the topology");

    for (inputs, targets) in &lessons {
        mind.predict(inputs).expect("input dimensions match");
        let output = mind.get_output();
        println!(
            "{:?} -> {:.4} (expected {})",
            inputs, output[0], targets[0]
        );
    }
    println!("final error: {:.6}", mind.get_error());
}
