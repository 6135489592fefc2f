
use htvi_lib::{
    discounted_strike, norm_cdf, parity_gap, price, price_call, price_put, zero_vol_limit,
    OptionType,
};
use statrs::distribution::{ContinuousCDF, Normal};
use test_utils::{assert_close, assert_strictly_increasing, notebook_inputs};

/// Worked HTVI example: S = X = 1000, T = 5, r = 2%, sigma = 10%.
#[test]
fn test_notebook_call_value() {
    let call = price_call(1000.0, 1000.0, 5.0, 0.02, 0.1);
    println!("Notebook call value: {:.4}", call);
    assert_close(call, 140.66, 1e-2, "notebook call");
}

/// The put of the worked example follows from the call through parity.
#[test]
fn test_notebook_put_from_parity() {
    let call = price_call(1000.0, 1000.0, 5.0, 0.02, 0.1);
    let put = price_put(1000.0, 1000.0, 5.0, 0.02, 0.1);
    let expected = call - 1000.0 + 1000.0 * (-0.1_f64).exp();
    assert_close(put, expected, 1e-9, "notebook put");
}

/// Put-call parity over a grid of valid inputs.
#[test]
fn test_put_call_parity_grid() {
    for &s in &[50.0, 80.0, 100.0, 120.0, 200.0] {
        for &t in &[0.25, 1.0, 5.0] {
            for &r in &[-0.01, 0.0, 0.02, 0.05] {
                for &sigma in &[0.05, 0.2, 0.5, 1.0] {
                    let x = 100.0;
                    let call = price_call(s, x, t, r, sigma);
                    let put = price_put(s, x, t, r, sigma);
                    let gap = parity_gap(call, put, s, x, t, r);
                    assert!(
                        gap.abs() < 1e-9,
                        "parity broken at S={} T={} r={} sigma={}: gap={}",
                        s,
                        t,
                        r,
                        sigma,
                        gap
                    );
                }
            }
        }
    }
}

/// Both prices are non-negative for positive inputs.
#[test]
fn test_non_negativity_grid() {
    for &s in &[50.0, 80.0, 100.0, 120.0, 200.0] {
        for &t in &[0.25, 1.0, 5.0] {
            for &r in &[0.0, 0.02, 0.05] {
                for &sigma in &[0.05, 0.2, 0.5, 1.0] {
                    let call = price_call(s, 100.0, t, r, sigma);
                    let put = price_put(s, 100.0, t, r, sigma);
                    assert!(call >= 0.0, "negative call {} at S={} T={} r={} sigma={}", call, s, t, r, sigma);
                    assert!(put >= 0.0, "negative put {} at S={} T={} r={} sigma={}", put, s, t, r, sigma);
                }
            }
        }
    }
}

/// Deep ITM puts and deep OTM calls, where both formula terms underflow.
#[test]
fn test_non_negativity_far_tails() {
    let x = 100.0;
    let maturities = [0.01, 0.1, 1.0, 5.0, 13.18, 30.0];
    let rates = [-0.05, 0.0, 0.05, 0.1];
    let vols = [0.003, 0.01, 0.01995, 0.05, 0.2, 0.5, 1.5];
    let mut checked = 0;

    for i in 0..=120 {
        // S/X from 0.03 to 30, log-spaced
        let moneyness = 0.03 * 1000.0_f64.powf(i as f64 / 120.0);
        let s = x * moneyness;
        for &t in &maturities {
            for &r in &rates {
                for &sigma in &vols {
                    let call = price_call(s, x, t, r, sigma);
                    let put = price_put(s, x, t, r, sigma);
                    assert!(call >= 0.0, "call {:e} at S={} T={} r={} sigma={}", call, s, t, r, sigma);
                    assert!(put >= 0.0, "put {:e} at S={} T={} r={} sigma={}", put, s, t, r, sigma);
                    checked += 1;
                }
            }
        }
    }
    assert_eq!(checked, 121 * maturities.len() * rates.len() * vols.len());

    // Points where the unfloored difference is a negative subnormal
    let put = price_put(1122.018454301964, 100.0, 0.1, 0.1, 0.2);
    assert!(put >= 0.0, "put = {:e}", put);
    let put = price_put(3108.14, 100.0, 13.18, -0.05, 0.01995);
    assert!(put >= 0.0, "put = {:e}", put);
}

/// At the money, the call value grows with volatility and with maturity.
#[test]
fn test_atm_call_monotonicity() {
    for &r in &[0.0, 0.02, 0.05] {
        let by_vol: Vec<(f64, f64)> = (1..=20)
            .map(|i| {
                let sigma = 0.05 * i as f64;
                (sigma, price_call(1000.0, 1000.0, 5.0, r, sigma))
            })
            .collect();
        assert_strictly_increasing(&by_vol, "ATM call vs volatility");

        let by_maturity: Vec<(f64, f64)> = (1..=40)
            .map(|i| {
                let t = 0.5 * i as f64;
                (t, price_call(1000.0, 1000.0, t, r, 0.1))
            })
            .collect();
        assert_strictly_increasing(&by_maturity, "ATM call vs maturity");
    }
}

/// As volatility vanishes the call tends to max(S - X·e^(−rT), 0).
#[test]
fn test_zero_volatility_limit() {
    let (t, r) = (1.0, 0.05);

    // In the money after discounting the strike
    let itm = price_call(100.0, 90.0, t, r, 1e-6);
    assert_close(itm, 100.0 - discounted_strike(90.0, t, r), 1e-9, "ITM zero-vol call");
    assert_close(
        itm,
        zero_vol_limit(OptionType::Call, 100.0, 90.0, t, r),
        1e-9,
        "ITM zero-vol limit helper",
    );

    // Out of the money
    let otm = price_call(100.0, 120.0, t, r, 1e-6);
    assert_close(otm, 0.0, 1e-12, "OTM zero-vol call");

    // Convergence as sigma shrinks
    let limit = zero_vol_limit(OptionType::Call, 100.0, 90.0, t, r);
    let mut prev_err = f64::INFINITY;
    for &sigma in &[0.2, 0.1, 0.05, 0.01] {
        let err = (price_call(100.0, 90.0, t, r, sigma) - limit).abs();
        assert!(err <= prev_err, "error grew at sigma={}: {} > {}", sigma, err, prev_err);
        prev_err = err;
    }
}

/// The erfc-based CDF agrees with statrs' standard normal.
#[test]
fn test_norm_cdf_matches_statrs() {
    let normal = Normal::new(0.0, 1.0).unwrap();
    for i in -80..=80 {
        let x = i as f64 * 0.1;
        let expected = normal.cdf(x);
        let actual = norm_cdf(x);
        assert!(
            (actual - expected).abs() < 1e-12,
            "norm_cdf({}) = {}, statrs = {}",
            x,
            actual,
            expected
        );
    }
}

/// The validated entry point matches the raw formula and rejects bad inputs.
#[test]
fn test_validated_price() {
    let inputs = notebook_inputs();
    let call = price(OptionType::Call, 1000.0, 1000.0, 5.0, 0.02, 0.1).unwrap();
    assert_eq!(call, inputs.call_price());
    assert_eq!(call, price_call(1000.0, 1000.0, 5.0, 0.02, 0.1));

    let bad_cases = [
        (0.0, 1000.0, 5.0, 0.02, 0.1),
        (1000.0, 0.0, 5.0, 0.02, 0.1),
        (1000.0, 1000.0, 0.0, 0.02, 0.1),
        (1000.0, 1000.0, -5.0, 0.02, 0.1),
        (1000.0, 1000.0, 5.0, f64::INFINITY, 0.1),
        (1000.0, 1000.0, 5.0, 0.02, 0.0),
        (1000.0, 1000.0, 5.0, 0.02, f64::NAN),
    ];
    for (s, x, t, r, sigma) in bad_cases {
        assert!(
            price(OptionType::Put, s, x, t, r, sigma).is_err(),
            "expected rejection for S={} X={} T={} r={} sigma={}",
            s,
            x,
            t,
            r,
            sigma
        );
    }
}
