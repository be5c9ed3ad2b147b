use crate::value::Value;

/// Digits collected by the number scanner, sign kept apart.
#[derive(Debug, Default)]
pub(crate) struct NumberText {
    pub negative: bool,
    pub fractional: bool,
    /// ASCII digits with at most one '.', no sign.
    pub digits: String,
}

impl NumberText {
    /// Converts the unsigned digit text, then applies the sign by negation.
    /// `-0` stays integer `0`; `-0.0` becomes float `-0.0`.
    ///
    /// Returns `None` when the text does not convert: empty runs, `i64`
    /// overflow, or a float too large to be finite. A fraction without
    /// digits must be caught by the scanner, `str::parse` accepts "1.".
    pub(crate) fn into_value(self) -> Option<Value> {
        if self.fractional {
            let f: f64 = self.digits.parse().ok()?;
            if !f.is_finite() {
                return None;
            }
            Some(Value::Float(if self.negative { -f } else { f }))
        } else {
            let i: i64 = self.digits.parse().ok()?;
            Some(Value::Integer(if self.negative { -i } else { i }))
        }
    }
}
