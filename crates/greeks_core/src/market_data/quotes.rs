//! Settable market quotes.

use std::cell::Cell;
use std::fmt;

/// A single settable market value.
///
/// This is the one piece of mutable state in a pricing request: the
/// spot quote a process observes. Re-assigning the value and re-reading
/// a Greek from the attached engine revalues the instrument at the new
/// market state. The cell is request-local and never shared across
/// threads, so interior mutability via `Cell` is sufficient.
///
/// # Examples
///
/// ```
/// use greeks_core::market_data::SimpleQuote;
///
/// let quote = SimpleQuote::new(110.0);
/// assert_eq!(quote.value(), 110.0);
///
/// quote.set_value(95.0);
/// assert_eq!(quote.value(), 95.0);
/// ```
#[derive(Debug, Clone)]
pub struct SimpleQuote {
    value: Cell<f64>,
}

impl SimpleQuote {
    /// Creates a quote with the given initial value.
    pub fn new(value: f64) -> Self {
        Self {
            value: Cell::new(value),
        }
    }

    /// Returns the current value.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value.get()
    }

    /// Replaces the current value.
    #[inline]
    pub fn set_value(&self, value: f64) {
        self.value.set(value);
    }
}

impl fmt::Display for SimpleQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_value() {
        let quote = SimpleQuote::new(110.0);
        assert_eq!(quote.value(), 110.0);
    }

    #[test]
    fn test_set_value_through_shared_reference() {
        let quote = SimpleQuote::new(100.0);
        let observer: &SimpleQuote = &quote;

        quote.set_value(80.0);
        assert_eq!(observer.value(), 80.0);

        quote.set_value(120.0);
        assert_eq!(observer.value(), 120.0);
    }

    #[test]
    fn test_display() {
        let quote = SimpleQuote::new(99.5);
        assert_eq!(format!("{}", quote), "99.5");
    }
}
