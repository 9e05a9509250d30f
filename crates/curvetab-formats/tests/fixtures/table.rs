//! Discrete bonding curve lookup tables.
//!
//! Values are fixed-point with 18 decimal places. Entry `i` covers the supply
//! range `[i * 100, (i + 1) * 100)` tokens.

/// Spot price per step.
pub static DISCRETE_PRICING_TABLE: &[u128] = &[
    10000000000000000, // 0: $0.010000000000000000
    10000000087600000, // 1
    10000000175200007, // 2
    10000000262800023,
    // 4 through 5
    10000000350400046, 10000000438000077,
    18446744073709551616, // 6: 2^64, exercises the high half
];

/// Cumulative value of all steps before `i`.
pub static DISCRETE_CUMULATIVE_VALUE_TABLE: &[u128] = &[
    0,
    1000000000000000000, // 100 tokens at step 0 price
    2000000008760000000,
    3000000026280000700,
    4000000052560003000,
    5000000087600007600,
    6000000131400015300,
];

pub const STEP_SIZE: u64 = 100;
