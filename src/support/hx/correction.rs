/// Trait for the LMTD correction factor of a flow arrangement.
///
/// The correction factor `F` multiplies the counter-flow log-mean
/// temperature difference to give the effective driving temperature
/// difference of the arrangement, so that `Q = U * A * F * LMTD`.
///
/// `p` is the cold-side temperature effectiveness and `r` the ratio of the
/// hot-side to cold-side temperature changes (see
/// [`Terminals::p`](super::Terminals::p) and [`Terminals::r`](super::Terminals::r)).
///
/// Implementations never fail: inputs outside the domain of a correlation, or
/// intermediate values that would be non-finite, yield `F = 1`.
pub trait LmtdCorrection {
    fn correction_factor(&self, p: f64, r: f64) -> f64;
}
