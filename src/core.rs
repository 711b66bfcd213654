pub mod dedupe;
pub mod lenient;
pub mod savings;
pub mod station;
