use arbscout::domain::StakeAllocation;

pub fn assert_near(actual: f64, expected: f64, tolerance: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "expected {} ± {}, got {}",
        expected,
        tolerance,
        actual
    );
}

/// Every leg returns the same amount and the stakes add up, within
/// two cents per outcome.
pub fn assert_balanced(allocation: &StakeAllocation, total_stake: f64) {
    let tolerance = allocation.len() as f64 * 0.02;
    assert!(
        allocation.return_spread() <= tolerance,
        "returns differ by {} (tolerance {}): {:?}",
        allocation.return_spread(),
        tolerance,
        allocation.legs()
    );
    assert_near(allocation.total_staked(), total_stake, tolerance);
}
