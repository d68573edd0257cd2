use anyhow::{Context, Result};

use redeem_linalg::config::LinalgConfig;
use redeem_linalg::generators::{identity, randi_with};
use redeem_linalg::math::Matrix;
use redeem_linalg::product::dot;
use redeem_linalg::utils::logging::{init_logging, log_matrix};

fn main() -> Result<()> {
    init_logging();

    // Optional path to a JSON LinalgConfig
    let config = match std::env::args().nth(1) {
        Some(path) => LinalgConfig::load(&path)?,
        None => LinalgConfig::default(),
    };

    let a = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]])
        .context("failed to build matrix a")?;
    let b = Matrix::from_rows(vec![vec![7, 8], vec![9, 10], vec![11, 12]])
        .context("failed to build matrix b")?;

    println!("{}", dot(&a, &b).context("a . b")?);
    println!("{}", a.reshape((3, 2)).context("reshape a to (3, 2)")?);

    let m = Matrix::from_rows(vec![vec![1, 1, 2], vec![2, 3, 4], vec![3, 4, 5]])?;
    println!("det = {}", m.determinant()?);

    let mut rng = config.rng();
    let noise = randi_with((3, 3), -5, 5, &mut rng)?;
    log_matrix(log::Level::Info, "noise", &noise);
    let shifted = (&identity((3, 3)) + &noise)?;
    println!("I + noise =\n{:.*}", config.display_precision.unwrap_or(0), shifted);
    println!("halved =\n{}", shifted.try_div_with(2, config.division)?);

    Ok(())
}
