// Closed-form Black-Scholes pricing for European calls and puts on a
// non-dividend-paying underlying. These functions do not validate their inputs:
// non-positive T, sigma, S or X give undefined or non-finite results. Use
// `OptionInputs` for the checked path.

/// Standard normal cumulative distribution function Φ(x).
pub fn norm_cdf(x: f64) -> f64 {
    // erfc keeps relative precision in the lower tail, where 1 + erf cancels.
    0.5 * libm::erfc(-x / std::f64::consts::SQRT_2)
}

/// The standardized moneyness terms `(d1, d2)`.
#[allow(non_snake_case)]
pub fn d1_d2(S: f64, X: f64, T: f64, r: f64, sigma: f64) -> (f64, f64) {
    let vol_sqrt_t = sigma * T.sqrt();
    let log_moneyness = (S / X).ln();
    let d1 = (log_moneyness + (r + 0.5 * sigma * sigma) * T) / vol_sqrt_t;
    let d2 = (log_moneyness + (r - 0.5 * sigma * sigma) * T) / vol_sqrt_t;
    (d1, d2)
}

/// Both price terms can underflow to subnormals in the far tails, where their
/// difference rounds below zero. NaN passes through unchanged.
fn floor_at_zero(price: f64) -> f64 {
    if price < 0.0 {
        0.0
    } else {
        price
    }
}

/// Price of a European call option under Black-Scholes assumptions.
///
/// `call = S·Φ(d1) − X·e^(−rT)·Φ(d2)`
#[allow(non_snake_case)]
pub fn price_call(S: f64, X: f64, T: f64, r: f64, sigma: f64) -> f64 {
    let (d1, d2) = d1_d2(S, X, T, r, sigma);
    floor_at_zero(S * norm_cdf(d1) - X * (-r * T).exp() * norm_cdf(d2))
}

/// Price of a European put option under Black-Scholes assumptions.
///
/// `put = X·e^(−rT)·Φ(−d2) − S·Φ(−d1)`
#[allow(non_snake_case)]
pub fn price_put(S: f64, X: f64, T: f64, r: f64, sigma: f64) -> f64 {
    let (d1, d2) = d1_d2(S, X, T, r, sigma);
    floor_at_zero(X * (-r * T).exp() * norm_cdf(-d2) - S * norm_cdf(-d1))
}
