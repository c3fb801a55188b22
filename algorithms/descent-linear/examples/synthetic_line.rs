use std::error::Error;
use std::io;

use descent::traits::Fit;
use descent_datasets::{generate, split_tail};
use descent_linear::GradientDescentRegressor;
use ndarray::array;
use ndarray_rand::rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // y = 3 + 2x with a little noise
    let mut rng = Xoshiro256Plus::seed_from_u64(42);
    let dataset = generate::linear(120, 3., &array![2.], (0., 2.), 0.3, &mut rng);
    let (train, valid) = split_tail(dataset, 20);

    let model = GradientDescentRegressor::params()
        .learning_rate(0.1)
        .n_iterations(1000)
        .fit(&train)?;

    println!(
        "intercept {:.3}, weights {:.3}",
        model.intercept(),
        model.params()
    );

    let evaluation = model.evaluate(&valid)?;
    evaluation.report(io::stdout())?;

    Ok(())
}
