quantity!(Months, suffix: "months", precision: 1);

impl Months {
    #[must_use]
    pub fn to_years(self) -> f64 {
        self.0 / 12.0
    }
}
