use log::{Level, LevelFilter};

use crate::math::Matrix;

/// Install an `env_logger` backend filtered by `REDEEM_LOG` (default `error`).
///
/// Returns `false` when a logger was already installed, which is what
/// happens when several tests call this.
pub fn init_logging() -> bool {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("REDEEM_LOG", "error"))
        .try_init()
        .is_ok()
}

/// Render `m` for diagnostics, eliding the middle of long rows and
/// truncating after `max_rows` rows.
pub fn preview(
    m: &Matrix,
    max_rows: Option<usize>,
    max_cols: Option<usize>,
    precision: Option<usize>,
) -> String {
    let rows = m.rows();
    let rows_to_print = max_rows.unwrap_or(rows.len()).min(rows.len());
    let fmt_value = |v: &crate::math::Scalar| match precision {
        Some(p) => format!("{:.*}", p, v),
        None => v.to_string(),
    };

    let mut lines = Vec::with_capacity(rows_to_print + 1);
    for row in rows.iter().take(rows_to_print) {
        let values = row.as_slice();
        let cols_to_print = max_cols.unwrap_or(values.len()).min(values.len());
        let rendered: Vec<String> = if cols_to_print * 2 < values.len() {
            let head = values[..cols_to_print].iter().map(fmt_value);
            let tail = values[values.len() - cols_to_print..].iter().map(fmt_value);
            head.chain(std::iter::once("...".to_string()))
                .chain(tail)
                .collect()
        } else {
            values.iter().map(fmt_value).collect()
        };
        lines.push(format!("[{}]", rendered.join(", ")));
    }
    if rows_to_print < rows.len() {
        lines.push("...".to_string());
    }
    format!("[{}]", lines.join(",\n "))
}

/// Log a truncated preview of `m` at `level`.
pub fn log_matrix(level: Level, label: &str, m: &Matrix) {
    if log::log_enabled!(level) {
        let shape = match m.shape() {
            Ok(shape) => format!("{:?}", shape),
            Err(_) => "(0, ?)".to_string(),
        };
        log::log!(level, "{} {}:\n{}", label, shape, preview(m, Some(8), Some(4), None));
    }
}
