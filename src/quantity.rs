#[macro_use]
mod macros;

pub mod currency;
pub mod distance;
pub mod efficiency;
pub mod power;
pub mod price;
pub mod time;
