pub mod cost;
pub mod energy;
pub mod power;
pub mod rate;
pub mod vat;
