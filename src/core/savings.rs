use std::ops::Div;

use bon::Builder;
use serde::Serialize;

use crate::{
    core::lenient::finite_or_zero,
    quantity::{
        currency::Rupees,
        distance::Kilometers,
        efficiency::{KilometersPerKilowattHour, KilometersPerLitre},
        price::{RupeesPerKilometer, RupeesPerKilowattHour, RupeesPerLitre},
        time::Months,
    },
};

/// Mileage and efficiency are clamped to this floor, so that per-kilometre costs stay finite.
pub const CONSUMPTION_EPSILON: f64 = 1e-4;

/// Number of samples in the cumulative savings series.
pub const HORIZON_MONTHS: u32 = 24;

#[must_use]
#[derive(Copy, Clone, Debug, Builder, Serialize)]
pub struct VehicleCostInputs {
    pub monthly_distance: Kilometers,
    pub petrol_price: RupeesPerLitre,
    pub petrol_mileage: KilometersPerLitre,
    pub electricity_rate: RupeesPerKilowattHour,
    pub ev_efficiency: KilometersPerKilowattHour,

    /// Extra purchase price of the electric vehicle over the petrol one.
    #[builder(default)]
    pub extra_ev_cost: Rupees,
}

impl Default for VehicleCostInputs {
    fn default() -> Self {
        Self {
            monthly_distance: Kilometers(1000.0),
            petrol_price: RupeesPerLitre(106.0),
            petrol_mileage: KilometersPerLitre(20.0),
            electricity_rate: RupeesPerKilowattHour(8.0),
            ev_efficiency: KilometersPerKilowattHour(5.0),
            extra_ev_cost: Rupees(300_000.0),
        }
    }
}

impl VehicleCostInputs {
    /// Replace non-finite values with zeros.
    fn sanitized(self) -> Self {
        Self {
            monthly_distance: Kilometers(finite_or_zero(self.monthly_distance.0)),
            petrol_price: RupeesPerLitre(finite_or_zero(self.petrol_price.0)),
            petrol_mileage: KilometersPerLitre(finite_or_zero(self.petrol_mileage.0)),
            electricity_rate: RupeesPerKilowattHour(finite_or_zero(self.electricity_rate.0)),
            ev_efficiency: KilometersPerKilowattHour(finite_or_zero(self.ev_efficiency.0)),
            extra_ev_cost: Rupees(finite_or_zero(self.extra_ev_cost.0)),
        }
    }
}

#[must_use]
#[derive(Clone, Debug, Serialize)]
pub struct SavingsResult {
    pub petrol_cost_per_km: RupeesPerKilometer,
    pub electric_cost_per_km: RupeesPerKilometer,

    /// Monthly petrol spending.
    pub petrol_cost: Rupees,

    /// Monthly electricity spending.
    pub electric_cost: Rupees,

    /// Negative when the electric vehicle is more expensive to run.
    pub monthly_savings: Rupees,

    pub annual_savings: Rupees,
    pub breakeven: Breakeven,

    /// One sample per month, never negative.
    pub cumulative_savings: Vec<CumulativeSample>,
}

#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Breakeven {
    /// The extra purchase cost is paid off after this many months.
    Reachable(Months),

    /// The monthly savings are not positive.
    Unreachable,
}

impl Breakeven {
    #[must_use]
    pub const fn months(self) -> Option<Months> {
        match self {
            Self::Reachable(months) => Some(months),
            Self::Unreachable => None,
        }
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CumulativeSample {
    /// Starts from 1.
    pub month: u32,

    pub savings: Rupees,
}

/// Price divided by the consumption rate, with the rate clamped to [`CONSUMPTION_EPSILON`].
fn cost_per_km<P, C>(price: P, consumption_rate: C) -> RupeesPerKilometer
where
    P: Div<C, Output = RupeesPerKilometer>,
    C: Ord + From<f64>,
{
    price / consumption_rate.max(C::from(CONSUMPTION_EPSILON))
}

/// Compare the monthly running costs of a petrol and an electric vehicle.
///
/// Never fails: non-finite inputs are treated as zeros.
pub fn compute_savings(inputs: VehicleCostInputs) -> SavingsResult {
    let inputs = inputs.sanitized();

    let petrol_cost_per_km = cost_per_km(inputs.petrol_price, inputs.petrol_mileage);
    let electric_cost_per_km = cost_per_km(inputs.electricity_rate, inputs.ev_efficiency);
    let petrol_cost = inputs.monthly_distance * petrol_cost_per_km;
    let electric_cost = inputs.monthly_distance * electric_cost_per_km;

    let monthly_savings = petrol_cost - electric_cost;
    let annual_savings = monthly_savings * 12.0;

    let breakeven = if monthly_savings.is_positive() {
        let months = Months(inputs.extra_ev_cost.0 / monthly_savings.0);
        if months.0.is_finite() { Breakeven::Reachable(months) } else { Breakeven::Unreachable }
    } else {
        Breakeven::Unreachable
    };

    let cumulative_savings = (1..=HORIZON_MONTHS)
        .map(|month| CumulativeSample {
            month,
            savings: (monthly_savings * f64::from(month)).max(Rupees::ZERO),
        })
        .collect();

    SavingsResult {
        petrol_cost_per_km,
        electric_cost_per_km,
        petrol_cost,
        electric_cost,
        monthly_savings,
        annual_savings,
        breakeven,
        cumulative_savings,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_default_scenario() {
        let result = compute_savings(VehicleCostInputs::default());
        assert_abs_diff_eq!(result.petrol_cost_per_km.0, 5.3);
        assert_abs_diff_eq!(result.electric_cost_per_km.0, 1.6);
        assert_abs_diff_eq!(result.petrol_cost.0, 5300.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.electric_cost.0, 1600.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.monthly_savings.0, 3700.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.annual_savings.0, 44_400.0, epsilon = 1e-9);

        let months = result.breakeven.months().unwrap();
        assert_abs_diff_eq!(months.0, 300_000.0 / 3700.0, epsilon = 1e-9);
        assert_abs_diff_eq!(months.to_years(), 300_000.0 / 3700.0 / 12.0, epsilon = 1e-9);
    }

    #[test]
    fn test_annual_is_twelve_months() {
        let inputs = VehicleCostInputs::builder()
            .monthly_distance(Kilometers(1234.5))
            .petrol_price(RupeesPerLitre(103.44))
            .petrol_mileage(KilometersPerLitre(17.3))
            .electricity_rate(RupeesPerKilowattHour(7.25))
            .ev_efficiency(KilometersPerKilowattHour(6.1))
            .build();
        let result = compute_savings(inputs);
        assert_eq!(result.annual_savings, result.monthly_savings * 12.0);
        assert_eq!(result.breakeven, Breakeven::Reachable(Months::ZERO));
    }

    #[test]
    fn test_negative_savings_are_unreachable() {
        let inputs = VehicleCostInputs::builder()
            .monthly_distance(Kilometers(500.0))
            .petrol_price(RupeesPerLitre(50.0))
            .petrol_mileage(KilometersPerLitre(25.0))
            .electricity_rate(RupeesPerKilowattHour(20.0))
            .ev_efficiency(KilometersPerKilowattHour(4.0))
            .extra_ev_cost(Rupees(100_000.0))
            .build();
        let result = compute_savings(inputs);
        assert!(result.monthly_savings < Rupees::ZERO);
        assert_eq!(result.breakeven, Breakeven::Unreachable);
        assert!(result.cumulative_savings.iter().all(|sample| sample.savings == Rupees::ZERO));
    }

    #[test]
    fn test_zero_savings_are_unreachable() {
        let inputs = VehicleCostInputs::builder()
            .monthly_distance(Kilometers::ZERO)
            .petrol_price(RupeesPerLitre(106.0))
            .petrol_mileage(KilometersPerLitre(20.0))
            .electricity_rate(RupeesPerKilowattHour(8.0))
            .ev_efficiency(KilometersPerKilowattHour(5.0))
            .extra_ev_cost(Rupees(300_000.0))
            .build();
        let result = compute_savings(inputs);
        assert_eq!(result.monthly_savings, Rupees::ZERO);
        assert_eq!(result.breakeven, Breakeven::Unreachable);
        assert_eq!(result.breakeven.months(), None);
    }

    #[test]
    fn test_cumulative_series() {
        let result = compute_savings(VehicleCostInputs::default());
        assert_eq!(result.cumulative_savings.len(), 24);
        for (sample, month) in result.cumulative_savings.iter().zip(1_u32..) {
            assert_eq!(sample.month, month);
            assert_eq!(
                sample.savings,
                (result.monthly_savings * f64::from(month)).max(Rupees::ZERO)
            );
        }
        assert_eq!(
            result.cumulative_savings[23].savings,
            (result.annual_savings * 2.0).max(Rupees::ZERO),
        );
    }

    #[test]
    fn test_zero_mileage_is_finite() {
        let inputs = VehicleCostInputs {
            petrol_mileage: KilometersPerLitre::ZERO,
            ..VehicleCostInputs::default()
        };
        let result = compute_savings(inputs);
        assert!(result.petrol_cost.0.is_finite());
        assert_abs_diff_eq!(
            result.petrol_cost_per_km.0,
            106.0 / CONSUMPTION_EPSILON,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_negative_efficiency_is_clamped() {
        let inputs = VehicleCostInputs {
            ev_efficiency: KilometersPerKilowattHour(-5.0),
            ..VehicleCostInputs::default()
        };
        let result = compute_savings(inputs);
        assert_abs_diff_eq!(
            result.electric_cost_per_km.0,
            8.0 / CONSUMPTION_EPSILON,
            epsilon = 1e-6
        );
        assert_eq!(result.breakeven, Breakeven::Unreachable);
    }

    #[test]
    fn test_non_finite_inputs_are_zeros() {
        let inputs = VehicleCostInputs {
            monthly_distance: Kilometers(f64::NAN),
            petrol_mileage: KilometersPerLitre(f64::NAN),
            extra_ev_cost: Rupees(f64::INFINITY),
            ..VehicleCostInputs::default()
        };
        let result = compute_savings(inputs);
        assert_eq!(result.petrol_cost, Rupees::ZERO);
        assert_eq!(result.electric_cost, Rupees::ZERO);
        assert_eq!(result.monthly_savings, Rupees::ZERO);
        assert_eq!(result.breakeven, Breakeven::Unreachable);
    }
}
