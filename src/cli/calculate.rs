use clap::Parser;

use crate::{
    core::{
        lenient,
        savings::{VehicleCostInputs, compute_savings},
    },
    prelude::*,
    quantity::{
        currency::Rupees,
        distance::Kilometers,
        efficiency::{KilometersPerKilowattHour, KilometersPerLitre},
        price::{RupeesPerKilowattHour, RupeesPerLitre},
    },
    tables::{build_breakeven_table, build_cumulative_savings_table, build_savings_table},
};

/// Malformed numbers are read as zeros.
#[derive(Parser)]
pub struct CalculateArgs {
    /// Distance driven per month, in kilometres.
    #[clap(
        long = "monthly-distance",
        env = "MONTHLY_DISTANCE_KM",
        default_value = "1000",
        value_parser = lenient::parse,
        allow_hyphen_values = true
    )]
    monthly_distance: f64,

    /// Petrol price, in rupees per litre.
    #[clap(
        long = "petrol-price",
        env = "PETROL_PRICE_PER_LITRE",
        default_value = "106",
        value_parser = lenient::parse,
        allow_hyphen_values = true
    )]
    petrol_price: f64,

    /// Petrol vehicle mileage, in kilometres per litre.
    #[clap(
        long = "petrol-mileage",
        env = "PETROL_MILEAGE_KM_PER_LITRE",
        default_value = "20",
        value_parser = lenient::parse,
        allow_hyphen_values = true
    )]
    petrol_mileage: f64,

    /// Electricity rate, in rupees per kilowatt-hour.
    #[clap(
        long = "electricity-rate",
        env = "ELECTRICITY_RATE_PER_KWH",
        default_value = "8",
        value_parser = lenient::parse,
        allow_hyphen_values = true
    )]
    electricity_rate: f64,

    /// Electric vehicle efficiency, in kilometres per kilowatt-hour.
    #[clap(
        long = "ev-efficiency",
        env = "EV_EFFICIENCY_KM_PER_KWH",
        default_value = "5",
        value_parser = lenient::parse,
        allow_hyphen_values = true
    )]
    ev_efficiency: f64,

    /// Extra purchase price of the electric vehicle, in rupees.
    #[clap(
        long = "extra-ev-cost",
        env = "EXTRA_EV_COST",
        default_value = "300000",
        value_parser = lenient::parse,
        allow_hyphen_values = true
    )]
    extra_ev_cost: f64,

    /// Print JSON instead of the tables.
    #[clap(long)]
    json: bool,
}

impl CalculateArgs {
    fn inputs(&self) -> VehicleCostInputs {
        VehicleCostInputs::builder()
            .monthly_distance(Kilometers(self.monthly_distance))
            .petrol_price(RupeesPerLitre(self.petrol_price))
            .petrol_mileage(KilometersPerLitre(self.petrol_mileage))
            .electricity_rate(RupeesPerKilowattHour(self.electricity_rate))
            .ev_efficiency(KilometersPerKilowattHour(self.ev_efficiency))
            .extra_ev_cost(Rupees(self.extra_ev_cost))
            .build()
    }

    #[instrument(skip_all)]
    pub fn run(self) -> Result {
        let inputs = self.inputs();
        debug!(?inputs, "calculating…");
        let result = compute_savings(inputs);
        info!(monthly_savings = %result.monthly_savings, breakeven = ?result.breakeven, "calculated");

        if self.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{}", build_savings_table(&result));
            println!("{}", build_breakeven_table(result.breakeven));
            println!("{}", build_cumulative_savings_table(&result));
        }
        Ok(())
    }
}
