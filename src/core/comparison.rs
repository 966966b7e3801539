//! Current-versus-offer comparison and multi-offer ranking.

use crate::{
    core::{
        tariff::{CostBreakdown, TariffPrices, compute_cost},
        vat::VatConfig,
    },
    model::{bill::BillData, offer::OfferData, simulation::SavedSimulation},
    quantity::cost::Cost,
};

/// Outcome of comparing the current tariff against one offer over the same
/// billing period.
#[derive(Clone, Copy, Debug)]
pub struct Comparison {
    pub current: CostBreakdown,
    pub offered: CostBreakdown,

    /// Current total minus offered total: positive means the offer is cheaper.
    pub difference: Cost,

    pub is_cheaper: bool,

    /// Linear extrapolation of the difference to 365 days. `None` when the
    /// billing period length is zero and the extrapolation is not computable.
    pub yearly_savings: Option<Cost>,
}

/// One saved offer costed against the current bill, ready for ranking.
#[derive(Clone, Debug)]
pub struct RankedOffer {
    /// Position in the loaded simulation list, kept stable across re-sorting
    /// so entries can still be removed by identity.
    pub original_index: usize,

    pub offer: OfferData,

    pub breakdown: CostBreakdown,

    pub total: Cost,

    pub yearly_savings: Option<Cost>,
}

fn current_prices(bill: &BillData) -> TariffPrices {
    TariffPrices {
        power_per_day: bill.power_price.unwrap_or_default(),
        energy_per_kwh: bill.energy_price.unwrap_or_default(),
    }
}

/// Costs the current tariff over its own billing period. Bills that do not
/// state their effective unit prices are costed at zero rates.
pub fn current_breakdown(bill: &BillData, vat: &VatConfig) -> CostBreakdown {
    compute_cost(
        bill.consumption,
        bill.contracted_power,
        bill.billing_days,
        current_prices(bill),
        &bill.taxes,
        vat,
    )
}

fn extrapolate_yearly(difference: Cost, billing_days: u32) -> Option<Cost> {
    (billing_days > 0).then(|| difference * (365.0 / f64::from(billing_days)))
}

/// Compares the current bill against one offer.
///
/// Both tariffs are costed over the same consumption, contracted power,
/// period length, and levies; only the unit prices differ. Returns `None`
/// when the bill carries no consumption, as there is nothing to compare.
pub fn compare(bill: &BillData, offer: &OfferData, vat: &VatConfig) -> Option<Comparison> {
    if bill.consumption.0 == 0.0 {
        return None;
    }

    let current = current_breakdown(bill, vat);
    let offered = compute_cost(
        bill.consumption,
        bill.contracted_power,
        bill.billing_days,
        TariffPrices { power_per_day: offer.power_price, energy_per_kwh: offer.energy_price },
        &bill.taxes,
        vat,
    );

    let difference = current.total() - offered.total();
    Some(Comparison {
        current,
        offered,
        difference,
        is_cheaper: offered.total() < current.total(),
        yearly_savings: extrapolate_yearly(difference, bill.billing_days),
    })
}

/// Costs every saved offer against the *current* bill's consumption profile
/// and returns them cheapest first.
///
/// The saved simulations' own bills are deliberately ignored: ranking against
/// a single consumption profile is what keeps the comparison fair. The sort
/// is stable, so offers with equal totals keep their insertion order.
pub fn rank_offers(
    bill: &BillData,
    simulations: &[SavedSimulation],
    vat: &VatConfig,
) -> Vec<RankedOffer> {
    if bill.consumption.0 == 0.0 || simulations.is_empty() {
        return Vec::new();
    }

    let current_total = current_breakdown(bill, vat).total();

    let mut ranked: Vec<RankedOffer> = simulations
        .iter()
        .enumerate()
        .map(|(original_index, simulation)| {
            let offer = simulation.new_offer.clone();
            let breakdown = compute_cost(
                bill.consumption,
                bill.contracted_power,
                bill.billing_days,
                TariffPrices {
                    power_per_day: offer.power_price,
                    energy_per_kwh: offer.energy_price,
                },
                &bill.taxes,
                vat,
            );
            let total = breakdown.total();
            RankedOffer {
                original_index,
                offer,
                breakdown,
                total,
                yearly_savings: extrapolate_yearly(current_total - total, bill.billing_days),
            }
        })
        .collect();
    ranked.sort_by_key(|offer| offer.total);
    ranked
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use itertools::Itertools;

    use super::*;
    use crate::quantity::{
        energy::KilowattHours,
        power::KiloVoltAmperes,
        rate::{DailyRate, KilowattHourRate},
    };

    fn bill() -> BillData {
        BillData {
            consumption: KilowattHours(200.0),
            contracted_power: KiloVoltAmperes(4.6),
            billing_days: 30,
            power_price: Some(DailyRate(0.15)),
            energy_price: Some(KilowattHourRate(0.18)),
            ..BillData::default()
        }
    }

    fn offer(supplier: &str, energy_price: f64) -> OfferData {
        OfferData {
            supplier: Some(supplier.to_owned()),
            power_price: DailyRate(0.15),
            energy_price: KilowattHourRate(energy_price),
        }
    }

    #[test]
    fn test_compare_cheaper_offer() {
        let comparison =
            compare(&bill(), &offer("Luzboa", 0.16), &VatConfig::PORTUGAL).expect("comparable");
        assert!(comparison.is_cheaper);
        assert!(comparison.difference > Cost::ZERO);
        let yearly = comparison.yearly_savings.expect("billing days are non-zero");
        assert_abs_diff_eq!(
            yearly.value(),
            comparison.difference.value() * 365.0 / 30.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_compare_returns_none_without_consumption() {
        let bill = BillData { consumption: KilowattHours::ZERO, ..bill() };
        assert!(compare(&bill, &offer("Luzboa", 0.01), &VatConfig::PORTUGAL).is_none());
    }

    #[test]
    fn test_yearly_savings_guarded_against_zero_days() {
        let bill = BillData { billing_days: 0, ..bill() };
        let comparison =
            compare(&bill, &offer("Luzboa", 0.16), &VatConfig::PORTUGAL).expect("comparable");
        assert!(comparison.yearly_savings.is_none());
    }

    fn saved(supplier: &str, energy_price: f64) -> SavedSimulation {
        SavedSimulation::new(BillData::default(), offer(supplier, energy_price))
    }

    #[test]
    fn test_rank_is_ascending_and_keeps_original_indices() {
        let simulations =
            [saved("Dearest", 0.22), saved("Cheapest", 0.12), saved("Middle", 0.17)];
        let ranked = rank_offers(&bill(), &simulations, &VatConfig::PORTUGAL);

        assert!(ranked.iter().tuple_windows().all(|(a, b)| a.total <= b.total));
        assert_eq!(
            ranked.iter().map(|offer| offer.original_index).collect_vec(),
            vec![1, 2, 0]
        );
        assert!(ranked[0].yearly_savings.expect("non-zero days") > Cost::ZERO);
    }

    #[test]
    fn test_rank_is_stable_for_equal_totals() {
        let simulations = [saved("First", 0.17), saved("Second", 0.17), saved("Third", 0.17)];
        let ranked = rank_offers(&bill(), &simulations, &VatConfig::PORTUGAL);
        assert_eq!(
            ranked.iter().map(|offer| offer.original_index).collect_vec(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_rank_ignores_the_saved_bills_own_consumption() {
        let mut simulation = saved("Luzboa", 0.18);
        simulation.bill_data.consumption = KilowattHours(9000.0);
        let ranked = rank_offers(&bill(), &[simulation], &VatConfig::PORTUGAL);

        // Same prices as the current tariff, costed over the current bill's
        // 200 kWh, must land on the current total exactly.
        let current = compare(&bill(), &offer("Luzboa", 0.18), &VatConfig::PORTUGAL)
            .expect("comparable")
            .current;
        assert_eq!(ranked[0].total, current.total());
    }

    #[test]
    fn test_rank_guards() {
        assert!(rank_offers(&bill(), &[], &VatConfig::PORTUGAL).is_empty());
        let empty_bill = BillData::default();
        assert!(
            rank_offers(&empty_bill, &[saved("Luzboa", 0.1)], &VatConfig::PORTUGAL).is_empty()
        );
    }
}
