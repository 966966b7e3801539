//! Human-readable comparison report.

use std::fmt::Write;

use crate::{
    core::comparison::Comparison,
    model::{bill::BillData, offer::OfferData},
    quantity::cost::SignedCost,
};

/// Renders the exportable plain-text report. The output is meant for humans,
/// nothing parses it back.
#[must_use]
pub fn render(bill: &BillData, offer: &OfferData, comparison: &Comparison) -> String {
    let mut report = String::new();

    // Infallible: writing into a `String` cannot fail.
    let _ = writeln!(report, "Tariff comparison — {}", offer.label());
    let _ = writeln!(report);
    let _ = writeln!(report, "Billing period:   {} days", bill.billing_days);
    let _ = writeln!(report, "Consumption:      {}", bill.consumption);
    let _ = writeln!(report, "Contracted power: {}", bill.contracted_power);
    let _ = writeln!(report);
    let _ = writeln!(report, "Offer prices: {} + {}", offer.power_price, offer.energy_price);
    let _ = writeln!(report);

    let current = &comparison.current;
    let offered = &comparison.offered;
    for (label, current_component, offered_component) in [
        ("Energy", current.energy, offered.energy),
        ("Power", current.power, offered.power),
        ("Taxes", current.levies, offered.levies),
    ] {
        let _ = writeln!(
            report,
            "{label:<8} current {} (VAT {}) | new {} (VAT {})",
            current_component.base,
            current_component.vat,
            offered_component.base,
            offered_component.vat,
        );
    }
    let _ = writeln!(report);
    let _ = writeln!(
        report,
        "Current total: {} without VAT, {} with VAT",
        current.base(),
        current.total(),
    );
    let _ = writeln!(
        report,
        "New total:     {} without VAT, {} with VAT",
        offered.base(),
        offered.total(),
    );
    let _ = writeln!(
        report,
        "Difference:    {} per billing period",
        SignedCost(comparison.difference),
    );
    match comparison.yearly_savings {
        Some(savings) => {
            let _ = writeln!(report, "Yearly:        {} (estimate)", SignedCost(savings));
        }
        None => {
            let _ = writeln!(report, "Yearly:        not computable for a zero-day period");
        }
    }

    report
}
