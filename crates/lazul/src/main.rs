//! Times 4x4 matrix products evaluated through expression nodes.

use std::{env, hint::black_box, time::Instant};

use anyhow::Context;
use lazul::{
    linalg::{Mat4, Matrix, MatrixStorage},
    timer::Timer,
};

const DEFAULT_ITERATIONS: u32 = 1_000_000;
const BATCH: u32 = 1000;

fn iterations() -> anyhow::Result<u32> {
    match env::var("LAZUL_ITERATIONS") {
        Ok(s) => s
            .parse()
            .with_context(|| format!("invalid LAZUL_ITERATIONS value '{s}'")),
        Err(env::VarError::NotPresent) => Ok(DEFAULT_ITERATIONS),
        Err(e) => Err(e).context("failed to read LAZUL_ITERATIONS"),
    }
}

fn main() -> anyhow::Result<()> {
    lazul::init_logger!();

    let iterations = iterations()?;
    let a: Mat4<f64> = Matrix::from_fn(|row, col| (row * 4 + col) as f64 * 0.25);
    let b: Mat4<f64> = Matrix::from_fn(|row, col| if row == col { 2.0 } else { -0.5 });
    let mut res = Mat4::ZERO;

    log::info!("computing {iterations} 4x4 matrix products");
    let t_mxm = Timer::new("mxm_4x4");
    let start = Instant::now();
    let mut done = 0;
    while done < iterations {
        let n = BATCH.min(iterations - done);
        t_mxm.time(|| -> anyhow::Result<()> {
            for _ in 0..n {
                res.assign(black_box(&a) * black_box(&b))?;
                black_box(&mut res);
            }
            Ok(())
        })?;
        done += n;
    }

    let per_product = start.elapsed().checked_div(iterations).unwrap_or_default();
    log::info!("{t_mxm} per batch of up to {BATCH}, {per_product:?} per product");
    log::debug!("result: {res:?}");

    Ok(())
}
