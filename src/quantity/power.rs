use std::fmt::{Display, Formatter};

quantity!(Kilowatts, suffix: "kW");

impl Kilowatts {
    /// Zero means that the charger did not report its rating.
    #[must_use]
    pub const fn is_known(self) -> bool {
        self.0 > 0.0
    }
}

impl Display for Kilowatts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_known() { write!(f, "{} kW", self.0) } else { write!(f, "—") }
    }
}
