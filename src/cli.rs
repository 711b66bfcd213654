mod calculate;
mod stations;
mod subsidies;

use clap::{Parser, Subcommand};

use crate::{
    cli::{calculate::CalculateArgs, stations::StationsArgs, subsidies::SubsidiesArgs},
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare monthly petrol and electricity spending, and estimate the breakeven.
    #[clap(name = "calculate")]
    Calculate(Box<CalculateArgs>),

    /// List charging stations around a city, merging the local catalog with TomTom results.
    #[clap(name = "stations")]
    Stations(Box<StationsArgs>),

    /// Show state EV subsidies.
    #[clap(name = "subsidies")]
    Subsidies(SubsidiesArgs),
}

impl Command {
    pub async fn run(self) -> Result {
        match self {
            Self::Calculate(args) => args.run(),
            Self::Stations(args) => args.run().await,
            Self::Subsidies(args) => args.run(),
        }
    }
}
