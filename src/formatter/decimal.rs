/// Magnitude of a finite number as base-10 digits
///
/// Built from the shortest representation that round-trips to the same
/// `f64`, so rounding operates on the digits a reader sees (`1.005` is
/// `1.005`, not `1.00499999999999989...`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct DecimalDigits {
    pub(super) integer: Vec<u8>,
    pub(super) fraction: Vec<u8>,
}

impl DecimalDigits {
    /// The sign of `value` is ignored; `value` must be finite
    pub(super) fn from_f64(value: f64) -> Self {
        // Display for f64 never switches to exponent notation
        let repr = value.abs().to_string();
        let (int_str, frac_str) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

        let mut digits = Self {
            integer: int_str.bytes().map(|b| b - b'0').collect(),
            fraction: frac_str.bytes().map(|b| b - b'0').collect(),
        };
        digits.trim_leading_zeros();
        digits
    }

    /// Multiply by `10^places` by moving the decimal point
    pub(super) fn shift_left(&mut self, places: usize) {
        for _ in 0..places {
            let digit = if self.fraction.is_empty() {
                0
            } else {
                self.fraction.remove(0)
            };
            self.integer.push(digit);
        }
        self.trim_leading_zeros();
    }

    /// Round half away from zero to exactly `places` fraction digits
    pub(super) fn round_to(&mut self, places: usize) {
        if self.fraction.len() <= places {
            self.fraction.resize(places, 0);
            return;
        }

        let round_up = self.fraction[places] >= 5;
        self.fraction.truncate(places);
        if !round_up {
            return;
        }

        let mut carry = true;
        for digit in self
            .fraction
            .iter_mut()
            .rev()
            .chain(self.integer.iter_mut().rev())
        {
            *digit += 1;
            if *digit == 10 {
                *digit = 0;
            } else {
                carry = false;
                break;
            }
        }
        if carry {
            self.integer.insert(0, 1);
        }
    }

    /// True when the value is exactly one, used for unit plural forms
    pub(super) fn is_one(&self) -> bool {
        self.integer.len() == 1 && self.integer[0] == 1 && self.fraction.is_empty()
    }

    fn trim_leading_zeros(&mut self) {
        let leading = self
            .integer
            .iter()
            .take_while(|d| **d == 0)
            .count()
            .min(self.integer.len().saturating_sub(1));
        self.integer.drain(..leading);
        if self.integer.is_empty() {
            self.integer.push(0);
        }
    }
}
