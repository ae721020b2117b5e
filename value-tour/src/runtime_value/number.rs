use std::ops::Add;

use ordered_float::OrderedFloat;

use super::RuntimeNumber;

impl RuntimeNumber {
    pub const ZERO: Self = Self::new(0.0);
    pub const NAN: Self = Self::new(f64::NAN);

    pub const fn new(value: f64) -> Self {
        Self {
            value: OrderedFloat(value),
        }
    }

    pub fn value(self) -> f64 {
        self.value.into_inner()
    }

    pub fn is_nan(self) -> bool {
        self.value().is_nan()
    }

    /// Returns if this number is either `0` or `-0`.
    pub fn is_zero(self) -> bool {
        self.value() == 0.0
    }
}

impl From<f64> for RuntimeNumber {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<RuntimeNumber> for f64 {
    fn from(number: RuntimeNumber) -> Self {
        number.value()
    }
}

impl Add for RuntimeNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.value() + rhs.value())
    }
}

/// Formats the number the way the scripting language converts numbers to strings.
///
/// Integral values have no fractional part, `-0` is shown as `0` and infinities are spelled out.
impl std::fmt::Display for RuntimeNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = self.value();
        if value.is_nan() {
            f.write_str("NaN")
        } else if value.is_infinite() {
            f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" })
        } else if value == 0.0 {
            f.write_str("0")
        } else {
            if value < 0.0 {
                f.write_str("-")?;
            }
            fmt_magnitude(value.abs(), f)
        }
    }
}

/// Writes a finite, positive number from its shortest round-tripping digits.
///
/// Uses plain decimal notation for magnitudes in `1e-6..1e21` and exponent notation otherwise.
fn fmt_magnitude(value: f64, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return write!(f, "{value}");
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return write!(f, "{value}");
    };
    let digits = mantissa.replace('.', "");
    let digit_count = digits.len() as i32;
    // position of the decimal point relative to the start of the digits
    let point = exponent + 1;

    if (digit_count..=21).contains(&point) {
        write!(f, "{digits}{}", "0".repeat((point - digit_count) as usize))
    } else if (1..=21).contains(&point) {
        let (integral, fractional) = digits.split_at(point as usize);
        write!(f, "{integral}.{fractional}")
    } else if (-5..=0).contains(&point) {
        write!(f, "0.{}{digits}", "0".repeat(-point as usize))
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            write!(f, "{first}e{sign}{}", exponent.abs())
        } else {
            write!(f, "{first}.{rest}e{sign}{}", exponent.abs())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_integral_numbers_without_fraction() {
        assert_eq!(RuntimeNumber::new(7.0).to_string(), "7");
        assert_eq!(RuntimeNumber::new(12.0).to_string(), "12");
        assert_eq!(RuntimeNumber::new(-3.0).to_string(), "-3");
    }

    #[test]
    fn display_special_values() {
        assert_eq!(RuntimeNumber::new(-0.0).to_string(), "0");
        assert_eq!(RuntimeNumber::NAN.to_string(), "NaN");
        assert_eq!(RuntimeNumber::new(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(RuntimeNumber::new(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(RuntimeNumber::new(10.5).to_string(), "10.5");
    }

    #[test]
    fn display_switches_to_exponent_notation() {
        assert_eq!(RuntimeNumber::new(1e21).to_string(), "1e+21");
        assert_eq!(RuntimeNumber::new(-1.5e300).to_string(), "-1.5e+300");
        assert_eq!(RuntimeNumber::new(1e-7).to_string(), "1e-7");
        assert_eq!(RuntimeNumber::new(123e-20).to_string(), "1.23e-18");
    }

    #[test]
    fn display_keeps_decimal_notation_in_range() {
        assert_eq!(RuntimeNumber::new(1e20).to_string(), "100000000000000000000");
        assert_eq!(RuntimeNumber::new(123456.789).to_string(), "123456.789");
        assert_eq!(RuntimeNumber::new(0.1).to_string(), "0.1");
        assert_eq!(RuntimeNumber::new(0.000001).to_string(), "0.000001");
        assert_eq!(RuntimeNumber::new(-0.00012).to_string(), "-0.00012");
    }

    #[test]
    fn equality_is_same_value_zero() {
        assert_eq!(RuntimeNumber::NAN, RuntimeNumber::NAN);
        assert_eq!(RuntimeNumber::new(0.0), RuntimeNumber::new(-0.0));
        assert_ne!(RuntimeNumber::new(1.0), RuntimeNumber::new(2.0));
    }

    #[test]
    fn addition() {
        let sum = RuntimeNumber::new(5.0) + RuntimeNumber::new(2.0);
        assert_eq!(sum.value(), 7.0);
    }
}
