use std::slice;

use clap::Parser;

use crate::{data::subsidies, prelude::*, tables::build_subsidies_table};

#[derive(Parser)]
pub struct SubsidiesArgs {
    /// Show a single state, for example `Karnataka`.
    #[clap(long, env = "STATE")]
    state: Option<String>,
}

impl SubsidiesArgs {
    pub fn run(self) -> Result {
        let subsidies = match &self.state {
            Some(state) => slice::from_ref(
                subsidies::find(state)
                    .with_context(|| format!("no subsidy information for `{state}`"))?,
            ),
            None => subsidies::all(),
        };
        println!("{}", build_subsidies_table(subsidies));
        Ok(())
    }
}
