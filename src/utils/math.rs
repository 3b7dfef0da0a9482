use num::Num;

/// dot積
/// d(a, b) = Σ(a_i * b_i)
/// pairs of already-aligned components; terms missing on either side contribute nothing
#[inline]
pub fn dot<N>(pairs: impl Iterator<Item = (N, N)>) -> f64
where
    N: Num + Copy + Into<f64>,
{
    pairs.map(|(a, b)| a.into() * b.into()).sum()
}

/// Σ(a_i^2)
#[inline]
pub fn squared_norm<N>(vals: impl Iterator<Item = N>) -> f64
where
    N: Num + Copy + Into<f64>,
{
    vals.map(|v| {
        let v: f64 = v.into();
        v * v
    })
    .sum()
}

/// コサイン類似度
/// cos(θ) = dot / (||a|| * ||b||)
/// A zero-length operand yields 0.0 instead of NaN.
#[inline]
pub fn cosine(dot: f64, squared_norm_a: f64, squared_norm_b: f64) -> f64 {
    if squared_norm_a == 0.0 || squared_norm_b == 0.0 {
        return 0.0;
    }
    dot / (squared_norm_a.sqrt() * squared_norm_b.sqrt())
}
