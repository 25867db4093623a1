//! Price-range to tick-range conversion.
//!
//! Prices are quoted as output units per 1 asset unit; ticks are the
//! exchange's discrete exponents with price = 1.0001^tick after adjusting
//! for each side's decimal precision.

use crate::core::constants::{MAX_TICK, MIN_TICK, TICK_ARRAY_SIZE, TICK_BASE};
use crate::core::{SdkError, SdkResult};
use crate::protocol::pool::ClmmPool;

/// A normalized tick range plus the start indices of the tick-array
/// accounts covering each boundary. Invariant: `tick_lower < tick_upper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickRange {
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub array_lower_start: i32,
    pub array_upper_start: i32,
}

/// Converts decimal prices into normalized, aligned tick indices for one
/// pool's tick spacing and decimal convention.
#[derive(Debug, Clone, Copy)]
pub struct TickRangeCalculator {
    tick_spacing: u16,
    decimals_0: u8,
    decimals_1: u8,
    base_in: bool,
}

impl TickRangeCalculator {
    pub fn new(tick_spacing: u16, decimals_0: u8, decimals_1: u8, base_in: bool) -> SdkResult<Self> {
        if tick_spacing == 0 {
            return Err(SdkError::InvalidPoolParameters(
                "tick_spacing must be non-zero".to_string(),
            ));
        }
        Ok(Self {
            tick_spacing,
            decimals_0,
            decimals_1,
            base_in,
        })
    }

    /// `base_in`: the vault's asset occupies the pool's token0 slot.
    pub fn for_pool(pool: &ClmmPool, base_in: bool) -> SdkResult<Self> {
        Self::new(pool.tick_spacing, pool.decimals_0, pool.decimals_1, base_in)
    }

    /// Convert one decimal price to a raw tick.
    pub fn price_to_tick(&self, price: f64) -> SdkResult<i32> {
        if !price.is_finite() || price <= 0.0 {
            return Err(SdkError::InvalidPoolParameters(format!(
                "price must be positive and finite, got {}",
                price
            )));
        }

        // Quoted per 1 asset unit; flip to token1-per-token0 if the asset
        // sits in the token1 slot.
        let token0_price = if self.base_in { price } else { 1.0 / price };
        let ratio =
            token0_price * 10f64.powi(self.decimals_1 as i32 - self.decimals_0 as i32);

        let tick = (ratio.ln() / TICK_BASE.ln()).floor();
        if tick < MIN_TICK as f64 || tick > MAX_TICK as f64 {
            return Err(SdkError::InvalidPoolParameters(format!(
                "price {} maps outside the valid tick range",
                price
            )));
        }

        Ok(tick as i32)
    }

    /// Convert a (start, end) price pair into a normalized tick range with
    /// tick-array start indices for both boundaries.
    pub fn tick_range(&self, start_price: f64, end_price: f64) -> SdkResult<TickRange> {
        let start_tick = self.price_to_tick(start_price)?;
        let end_tick = self.price_to_tick(end_price)?;

        let (tick_lower, mut tick_upper) = if start_tick > end_tick {
            (end_tick, start_tick)
        } else {
            (start_tick, end_tick)
        };

        // A degenerate range floors both prices onto the same tick; widen
        // upward by one spacing so lower < upper holds.
        if tick_lower == tick_upper {
            tick_upper += self.tick_spacing as i32;
        }
        if tick_upper > MAX_TICK {
            return Err(SdkError::InvalidPoolParameters(
                "upper tick outside the valid tick range".to_string(),
            ));
        }

        Ok(TickRange {
            tick_lower,
            tick_upper,
            array_lower_start: tick_array_start_index(tick_lower, self.tick_spacing)?,
            array_upper_start: tick_array_start_index(tick_upper, self.tick_spacing)?,
        })
    }
}

/// Start index of the fixed-size tick-array account covering `tick`.
///
/// Floors toward negative infinity, so `start <= tick < start + span`
/// holds for negative ticks as well.
pub fn tick_array_start_index(tick: i32, tick_spacing: u16) -> SdkResult<i32> {
    if tick_spacing == 0 {
        return Err(SdkError::InvalidPoolParameters(
            "tick_spacing must be non-zero".to_string(),
        ));
    }
    let span = tick_spacing as i32 * TICK_ARRAY_SIZE;
    Ok(tick.div_euclid(span) * span)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calculator(tick_spacing: u16) -> TickRangeCalculator {
        TickRangeCalculator::new(tick_spacing, 6, 6, true).unwrap()
    }

    #[test]
    fn test_start_index_scenarios() {
        // spacing 10 x array size 60 = span 600
        assert_eq!(tick_array_start_index(237, 10).unwrap(), 0);
        assert_eq!(tick_array_start_index(-237, 10).unwrap(), -600);
        assert_eq!(tick_array_start_index(600, 10).unwrap(), 600);
        assert_eq!(tick_array_start_index(-600, 10).unwrap(), -600);
        assert_eq!(tick_array_start_index(-601, 10).unwrap(), -1200);
    }

    #[test]
    fn test_start_index_bounds_tick() {
        for spacing in [1u16, 10, 60, 200] {
            let span = spacing as i32 * TICK_ARRAY_SIZE;
            for tick in [-443_636, -5281, -600, -1, 0, 1, 237, 5280, 443_636] {
                let start = tick_array_start_index(tick, spacing).unwrap();
                assert_eq!(start % span, 0, "start not aligned for tick {}", tick);
                assert!(start <= tick, "start above tick {}", tick);
                assert!(tick < start + span, "tick {} outside its array", tick);
            }
        }
    }

    #[test]
    fn test_start_index_rejects_zero_spacing() {
        assert!(tick_array_start_index(0, 0).is_err());
        assert!(TickRangeCalculator::new(0, 6, 6, true).is_err());
    }

    #[test]
    fn test_price_to_tick_rejects_bad_prices() {
        let calc = calculator(10);
        assert!(calc.price_to_tick(0.0).is_err());
        assert!(calc.price_to_tick(-1.5).is_err());
        assert!(calc.price_to_tick(f64::NAN).is_err());
        assert!(calc.price_to_tick(f64::INFINITY).is_err());
    }

    #[test]
    fn test_price_to_tick_equal_decimals() {
        let calc = calculator(10);
        // 1.0001^-101 < 0.99 < 1.0001^-100 and 1.0001^99 < 1.01 < 1.0001^100
        assert_eq!(calc.price_to_tick(0.99).unwrap(), -101);
        assert_eq!(calc.price_to_tick(1.01).unwrap(), 99);
        assert_eq!(calc.price_to_tick(1.0).unwrap(), 0);
    }

    #[test]
    fn test_price_to_tick_decimal_adjustment() {
        // token0 has 6 decimals, token1 has 9: one whole unit of price is
        // scaled by 10^3 before taking the tick logarithm.
        let calc = TickRangeCalculator::new(10, 6, 9, true).unwrap();
        let tick = calc.price_to_tick(1.0).unwrap();
        assert_eq!(tick, (1000f64.ln() / TICK_BASE.ln()).floor() as i32);
    }

    #[test]
    fn test_inverted_quote_flips_sign() {
        let direct = calculator(10).price_to_tick(1.01).unwrap();
        let inverted = TickRangeCalculator::new(10, 6, 6, false)
            .unwrap()
            .price_to_tick(1.01)
            .unwrap();
        // log(1/p) = -log(p); flooring shifts the inverted side by one.
        assert_eq!(inverted, -direct - 1);
    }

    #[test]
    fn test_tick_range_normalizes_order() {
        let calc = calculator(10);
        let forward = calc.tick_range(0.99, 1.01).unwrap();
        let reversed = calc.tick_range(1.01, 0.99).unwrap();
        assert_eq!(forward, reversed);
        assert!(forward.tick_lower < forward.tick_upper);
        assert_eq!(forward.tick_lower, -101);
        assert_eq!(forward.tick_upper, 99);
        assert_eq!(forward.array_lower_start, -600);
        assert_eq!(forward.array_upper_start, 0);
    }

    #[test]
    fn test_tick_range_widens_degenerate_range() {
        let calc = calculator(10);
        let range = calc.tick_range(1.0, 1.0).unwrap();
        assert_eq!(range.tick_lower, 0);
        assert_eq!(range.tick_upper, 10);
    }
}
