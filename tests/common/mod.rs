use heat1d::{Config, Float};

/// Grid small enough that the dense-LU path stays cheap.
pub fn tiny_config() -> Config {
    Config::builder().nx(31).nt(51).build()
}

pub fn max_abs_diff(a: &[Float], b: &[Float]) -> Float {
    a.iter()
        .zip(b)
        .map(|(ai, bi)| (ai - bi).abs())
        .fold(0.0, Float::max)
}
