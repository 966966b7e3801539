use comfy_table::{Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{comparison::RankedOffer, tariff::CostBreakdown},
    quantity::cost::{Cost, SignedCost},
};

#[must_use]
pub fn build_ranking_table(current_total: Cost, ranked: &[RankedOffer]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec!["#", "Supplier", "Power price", "Energy price", "Total", "Yearly"]);
    for offer in ranked {
        let total_color =
            if offer.total < current_total { Color::Green } else { Color::Red };
        table.add_row(vec![
            Cell::new(offer.original_index.to_string()),
            Cell::new(offer.offer.label()),
            Cell::new(offer.offer.power_price.to_string()).set_alignment(CellAlignment::Right),
            Cell::new(offer.offer.energy_price.to_string()).set_alignment(CellAlignment::Right),
            Cell::new(offer.total.to_string())
                .set_alignment(CellAlignment::Right)
                .fg(total_color),
            Cell::new(
                offer
                    .yearly_savings
                    .map_or_else(|| "n/a".to_owned(), |savings| SignedCost(savings).to_string()),
            )
            .set_alignment(CellAlignment::Right)
            .fg(total_color),
        ]);
    }
    table
}

#[must_use]
pub fn build_breakdown_table(current: &CostBreakdown, offered: &CostBreakdown) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec!["Category", "Current base", "Current VAT", "New base", "New VAT"]);
    for (label, current_component, offered_component) in [
        ("Energy", current.energy, offered.energy),
        ("Power", current.power, offered.power),
        ("Taxes", current.levies, offered.levies),
    ] {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(current_component.base.to_string()).set_alignment(CellAlignment::Right),
            Cell::new(current_component.vat.to_string()).set_alignment(CellAlignment::Right),
            Cell::new(offered_component.base.to_string()).set_alignment(CellAlignment::Right),
            Cell::new(offered_component.vat.to_string()).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total"),
        Cell::new(current.base().to_string()).set_alignment(CellAlignment::Right),
        Cell::new(current.vat().to_string()).set_alignment(CellAlignment::Right),
        Cell::new(offered.base().to_string()).set_alignment(CellAlignment::Right),
        Cell::new(offered.vat().to_string()).set_alignment(CellAlignment::Right),
    ]);
    table
}
