pub mod comparison;
pub mod tariff;
pub mod vat;
