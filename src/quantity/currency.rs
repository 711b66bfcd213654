use std::fmt::{Display, Formatter};

use crate::{
    fmt::format_indian,
    quantity::{distance::Kilometers, price::RupeesPerKilometer},
};

quantity!(
    /// Indian rupees.
    Rupees,
    suffix: "₹"
);

implement_mul!(Kilometers, RupeesPerKilometer, Rupees);

impl Rupees {
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0.0
    }
}

impl Display for Rupees {
    /// Whole rupees with Indian digit grouping, for example `₹3,00,000`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "₹{}", format_indian(self.0, 0))
    }
}
