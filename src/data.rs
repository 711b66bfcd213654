pub mod cities;
pub mod stations;
pub mod subsidies;
