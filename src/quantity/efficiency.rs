use crate::quantity::price::{RupeesPerKilometer, RupeesPerKilowattHour, RupeesPerLitre};

quantity!(
    /// Petrol vehicle mileage.
    KilometersPerLitre,
    suffix: "km/L",
    precision: 1
);

quantity!(
    /// Electric vehicle efficiency.
    KilometersPerKilowattHour,
    suffix: "km/kWh",
    precision: 1
);

implement_div!(RupeesPerLitre, KilometersPerLitre, RupeesPerKilometer);
implement_div!(RupeesPerKilowattHour, KilometersPerKilowattHour, RupeesPerKilometer);
