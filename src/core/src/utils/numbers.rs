pub struct FloatUtils;

impl FloatUtils {
    /// `numerator / denominator`, or `0.0` when the denominator is zero.
    ///
    /// Every per-game and percentage metric goes through here so a team
    /// without games never produces `NaN` or infinity.
    #[inline]
    pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
        if denominator == 0.0 {
            return 0.0;
        }

        let ratio = numerator / denominator;
        if ratio.is_finite() { ratio } else { 0.0 }
    }

    /// Ratio expressed as a percentage, same zero fallback.
    #[inline]
    pub fn safe_percentage(numerator: f64, denominator: f64) -> f64 {
        Self::safe_ratio(numerator, denominator) * 100.0
    }

    /// Round to a fixed number of decimal places for display.
    pub fn round_to(value: f64, decimals: u32) -> f64 {
        let factor = 10f64.powi(decimals as i32);
        let rounded = (value * factor).round() / factor;

        // -0.0 renders badly in tables
        if rounded == 0.0 { 0.0 } else { rounded }
    }
}
