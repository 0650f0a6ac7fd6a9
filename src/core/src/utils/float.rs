pub struct FloatUtils;

impl FloatUtils {
    /// Rounds half away from zero to the given number of decimal places.
    pub fn round_to(value: f64, decimals: i32) -> f64 {
        let factor = 10f64.powi(decimals);
        (value * factor).round() / factor
    }
}
