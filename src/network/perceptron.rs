use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::activation::activation::ActivationFunction;
use crate::error::{Error, Result};
use crate::loss::loss::LossFunction;
use crate::math::matrix::Matrix;
use crate::math::vector::Vector;

/// A dense feed-forward network trained by backpropagation with plain
/// gradient descent, one sample at a time.
///
/// The network owns one weight matrix and one bias vector per layer
/// transition. Weights and biases are mutated in place by `train` and by
/// nothing else.
pub struct MultiLayerPerceptron {
    layers: Vec<usize>,
    weights: Vec<Matrix>,
    biases: Vec<Vector>,
    activation_functions: Vec<ActivationFunction>,
    learning_rate: f64,
    loss_function: Box<dyn LossFunction>,
}

impl MultiLayerPerceptron {
    /// Builds a network with weights drawn uniformly from [-1, 1] by the
    /// thread-local generator and biases set to zero.
    ///
    /// # Arguments
    /// - `layers`               — layer sizes from input to output, at least 2
    /// - `learning_rate`        — gradient descent step size, must be > 0
    /// - `activation_functions` — one per layer transition; extra entries are
    ///                            ignored
    /// - `loss_function`        — objective used by `train`, fixed for the
    ///                            network's lifetime
    pub fn new(
        layers: Vec<usize>,
        learning_rate: f64,
        activation_functions: Vec<ActivationFunction>,
        loss_function: Box<dyn LossFunction>,
    ) -> Result<Self> {
        Self::with_rng(
            layers,
            learning_rate,
            activation_functions,
            loss_function,
            &mut rand::thread_rng(),
        )
    }

    /// Like `new`, but with a fixed seed so runs are reproducible.
    pub fn with_seed(
        layers: Vec<usize>,
        learning_rate: f64,
        activation_functions: Vec<ActivationFunction>,
        loss_function: Box<dyn LossFunction>,
        seed: u64,
    ) -> Result<Self> {
        Self::with_rng(
            layers,
            learning_rate,
            activation_functions,
            loss_function,
            &mut StdRng::seed_from_u64(seed),
        )
    }

    /// Like `new`, but drawing the initial weights from a caller-supplied
    /// generator.
    pub fn with_rng<R: Rng + ?Sized>(
        layers: Vec<usize>,
        learning_rate: f64,
        activation_functions: Vec<ActivationFunction>,
        loss_function: Box<dyn LossFunction>,
        rng: &mut R,
    ) -> Result<Self> {
        if layers.len() < 2 {
            return Err(Error::InvalidConfiguration(format!(
                "a network needs an input and an output layer, got {} sizes",
                layers.len()
            )));
        }
        if !(learning_rate > 0.0) {
            return Err(Error::InvalidConfiguration(format!(
                "learning rate must be > 0, got {learning_rate}"
            )));
        }

        let transitions = layers.len() - 1;
        if activation_functions.len() < transitions {
            return Err(Error::InvalidConfiguration(format!(
                "{} activation functions for {} layer transitions",
                activation_functions.len(),
                transitions
            )));
        }

        let mut weights = Vec::with_capacity(transitions);
        let mut biases = Vec::with_capacity(transitions);

        for i in 0..transitions {
            weights.push(Matrix::random_with_rng(layers[i + 1], layers[i], rng));
            biases.push(Vector::zeros(layers[i + 1]));
        }

        Ok(MultiLayerPerceptron {
            layers,
            weights,
            biases,
            activation_functions,
            learning_rate,
            loss_function,
        })
    }

    pub fn input_dim(&self) -> usize {
        self.layers[0]
    }

    pub fn output_dim(&self) -> usize {
        self.layers[self.layers.len() - 1]
    }

    /// Read-only view of the weight matrices, one per layer transition.
    pub fn weights(&self) -> &[Matrix] {
        &self.weights
    }

    /// Read-only view of the bias vectors, one per layer transition.
    pub fn biases(&self) -> &[Vector] {
        &self.biases
    }

    /// Runs the forward pass and returns the output layer's activation.
    pub fn forward(&self, input: &Vector) -> Result<Vector> {
        self.check_input(input)?;

        let mut trace = self.forward_activations(input);
        Ok(trace
            .pop()
            .expect("activation trace always ends with the output layer"))
    }

    /// Equivalent to `forward`; a pure read with no effect on the network.
    pub fn predict(&self, input: &Vector) -> Result<Vector> {
        self.forward(input)
    }

    /// One step of online stochastic gradient descent on a single
    /// input/target pair. The only observable effect is the in-place update
    /// of the weights and biases.
    pub fn train(&mut self, input: &Vector, target: &Vector) -> Result<()> {
        self.check_input(input)?;
        if target.len() != self.output_dim() {
            return Err(Error::DimensionMismatch(format!(
                "target length {} vs output layer size {}",
                target.len(),
                self.output_dim()
            )));
        }

        let transitions = self.layers.len() - 1;

        // Forward pass, recording every layer's activation (the input is
        // activations[0]). The backward pass evaluates each activation's
        // derivative on these recorded outputs.
        let activations = self.forward_activations(input);

        // The loss gradient at the output seeds the backward pass.
        let mut delta = self
            .loss_function
            .gradient(target, &activations[transitions])?;

        // Backward pass, last transition to first.
        let mut nabla_w: Vec<Matrix> = self
            .weights
            .iter()
            .map(|w| Matrix::zeros(w.rows(), w.cols()))
            .collect();
        let mut nabla_b: Vec<Vector> = self.biases.iter().map(|b| Vector::zeros(b.len())).collect();

        for i in (0..transitions).rev() {
            let act = self.activation_functions[i];
            let derivative = activations[i + 1].map(|y| act.derivative(y));

            delta = delta * derivative;
            nabla_b[i] = delta.clone();
            nabla_w[i] = delta.outer_product(&activations[i]);

            if i > 0 {
                delta = self.weights[i].transpose() * delta;
            }
        }

        // Gradient descent update.
        for i in 0..transitions {
            self.weights[i] =
                self.weights[i].clone() - nabla_w[i].scaled(self.learning_rate);
            self.biases[i] = self.biases[i].clone() - nabla_b[i].scaled(self.learning_rate);
        }

        Ok(())
    }

    fn check_input(&self, input: &Vector) -> Result<()> {
        if input.len() != self.input_dim() {
            return Err(Error::DimensionMismatch(format!(
                "input length {} vs input layer size {}",
                input.len(),
                self.input_dim()
            )));
        }

        Ok(())
    }

    /// Forward pass over a validated input, returning every layer's
    /// activation in order.
    fn forward_activations(&self, input: &Vector) -> Vec<Vector> {
        let transitions = self.layers.len() - 1;
        let mut activations = Vec::with_capacity(self.layers.len());
        activations.push(input.clone());

        for i in 0..transitions {
            let z = self.weights[i].clone() * activations[i].clone() + self.biases[i].clone();
            let act = self.activation_functions[i];
            activations.push(z.map(|x| act.apply(x)));
        }

        activations
    }
}
