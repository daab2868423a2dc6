use serde::Serialize;
use std::fmt::{self, Display};
use std::ops::Add;

/// A share of a whole, displayed as a percentage with `PRECISION` decimal places.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub(crate) struct Pct<const PRECISION: u8>(pub(crate) f64);

impl<const PRECISION: u8> Pct<PRECISION> {
    pub(crate) fn new<T>(numerator: T, denominator: T) -> Pct<PRECISION>
    where
        f64: From<T>,
    {
        Pct(f64::from(numerator) / f64::from(denominator))
    }
}

impl<const PRECISION: u8> Add for Pct<PRECISION> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Pct(self.0 + other.0)
    }
}

impl<const PRECISION: u8> Display for Pct<PRECISION> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_infinite() {
            write!(f, "inf")
        } else if self.0.is_nan() {
            write!(f, "NaN")
        } else {
            write!(f, "{:.*}%", usize::from(PRECISION), self.0 * 100.0)
        }
    }
}

#[cfg(test)]
#[test]
fn test() {
    let fastballs: Pct<1> = Pct::new(5, 12);
    let sliders: Pct<1> = Pct::new(7, 12);
    assert_eq!(fastballs.to_string(), "41.7%");
    assert_eq!(sliders.to_string(), "58.3%");
    assert_eq!((fastballs + sliders).to_string(), "100.0%");
    assert_eq!(Pct::<0>::new(1, 3).to_string(), "33%");
    assert_eq!(Pct::<1>::new(1, 0).to_string(), "inf");
    assert_eq!(Pct::<1>::new(0, 0).to_string(), "NaN");
}
