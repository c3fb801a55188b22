use std::error::Error;

use descent::traits::Fit;
use descent_datasets::generate;
use descent_linear::GradientDescentRegressor;
use descent_plot::{Diagnostics, FileRenderer, Renderer, SvgRenderer};
use ndarray::array;
use ndarray_rand::rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut rng = Xoshiro256Plus::seed_from_u64(42);
    let dataset = generate::linear(200, 1.5, &array![2., -3., 0.5], (0., 1.), 0.2, &mut rng);

    let model = GradientDescentRegressor::params()
        .learning_rate(0.1)
        .n_iterations(2000)
        .fit(&dataset)?;

    println!("{}", model.evaluate(&dataset)?);

    FileRenderer::new("loss_curve.png").render(&model.loss_curve())?;
    FileRenderer::new("predicted_vs_actual.svg").render(&model.predicted_vs_actual()?)?;

    let svg = SvgRenderer::default().render(&model.coefficients())?;
    println!("coefficient chart has {} bytes of svg", svg.len());

    Ok(())
}
