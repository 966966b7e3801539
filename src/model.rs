pub mod bill;
pub mod offer;
pub mod simulation;
