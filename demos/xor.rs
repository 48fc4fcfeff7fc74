use cobalt_nn::{
    ActivationFunction, LossFunction, MeanSquaredError, MultiLayerPerceptron, Result, Vector,
};

fn main() -> Result<()> {
    let mut network = MultiLayerPerceptron::new(
        vec![2, 6, 1],
        0.01,
        vec![ActivationFunction::ReLU, ActivationFunction::ReLU],
        Box::new(MeanSquaredError),
    )?;

    let inputs = vec![
        Vector::from_data(vec![0.0, 0.0]),
        Vector::from_data(vec![0.0, 1.0]),
        Vector::from_data(vec![1.0, 0.0]),
        Vector::from_data(vec![1.0, 1.0]),
    ];
    let targets = vec![
        Vector::from_data(vec![0.0]),
        Vector::from_data(vec![1.0]),
        Vector::from_data(vec![1.0]),
        Vector::from_data(vec![0.0]),
    ];

    let epochs = 2000;

    for epoch in 0..epochs {
        for (input, target) in inputs.iter().zip(&targets) {
            network.train(input, target)?;
        }

        if epoch % 100 == 0 {
            let mut loss = 0.0;
            for (input, target) in inputs.iter().zip(&targets) {
                loss += MeanSquaredError.compute(target, &network.predict(input)?)?;
            }
            println!("Epoch {epoch}: loss = {:.6}", loss / inputs.len() as f64);
        }
    }

    for (input, target) in inputs.iter().zip(&targets) {
        let output = network.predict(input)?;
        println!(
            "Input: {:?} -> Output: {:.4} (target {})",
            input.as_slice(),
            output[0],
            target[0]
        );
    }

    Ok(())
}
