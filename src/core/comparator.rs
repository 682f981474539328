//! Pick the cheapest pricing option along one cost dimension.

use crate::core::aggregator::{sum_miscs, sum_seafreights};
use crate::domain::model::PricingOption;
use crate::domain::report::{Dimension, OptionTotals};

/// Relative tolerance under which two prices count as equal.
pub const PRICE_TOLERANCE: f64 = 1e-9;

fn same_price(a: f64, b: f64) -> bool {
    (a - b).abs() <= PRICE_TOLERANCE * a.abs().max(b.abs()).max(1.0)
}

/// Index of the option with the strictly lowest extracted value.
///
/// Empty slots, and slots the extractor yields nothing (or a non-finite value)
/// for, are skipped. Returns `None` when nothing is comparable or when every
/// comparable value is the same, a single comparable value included. Among
/// tied minima the earliest slot wins.
pub fn best_index<T, F>(options: &[Option<T>], extractor: F) -> Option<usize>
where
    F: Fn(&T) -> Option<f64>,
{
    let mut best: Option<(usize, f64)> = None;
    let mut first_value: Option<f64> = None;
    let mut all_equal = true;

    let comparable = options.iter().enumerate().filter_map(|(index, slot)| {
        slot.as_ref()
            .and_then(&extractor)
            .filter(|value| value.is_finite())
            .map(|value| (index, value))
    });

    for (index, value) in comparable {
        match first_value {
            None => first_value = Some(value),
            Some(first) if !same_price(first, value) => all_equal = false,
            Some(_) => {}
        }

        match best {
            Some((_, current)) if value >= current || same_price(value, current) => {}
            _ => best = Some((index, value)),
        }
    }

    if all_equal {
        return None;
    }
    best.map(|(index, _)| index)
}

/// Sentinel form used in serialized reports: the index, or -1.
pub fn best_index_sentinel(best: Option<usize>) -> i64 {
    best.map_or(-1, |index| index as i64)
}

impl Dimension {
    /// The value this dimension compares for one option, if it applies.
    pub fn extract(&self, option: &PricingOption) -> Option<f64> {
        let haulage = option.selected_haulage.as_ref();
        match self {
            Dimension::Seafreight => (!option.selected_seafreights.is_empty())
                .then(|| sum_seafreights(&option.selected_seafreights)),
            Dimension::Misc => {
                (!option.my_miscs.is_empty()).then(|| sum_miscs(&option.my_miscs))
            }
            Dimension::HaulageTariff => haulage.map(|h| h.unit_tariff),
            Dimension::MultiStop => haulage.map(|h| h.multi_stop),
            Dimension::Overtime => haulage.map(|h| h.overtime_tariff),
            Dimension::GrandTotal => OptionTotals::of(option).haulage_unit_total,
            Dimension::GrandTotalNoHaulage => Some(OptionTotals::of(option).alt_total),
        }
    }

    pub fn best_index(&self, options: &[Option<PricingOption>]) -> Option<usize> {
        best_index(options, |option| self.extract(option))
    }
}
