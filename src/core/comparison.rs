use crate::core::comparator::{best_index, best_index_sentinel};
use crate::core::port_matcher::{match_port, rank_by_closeness};
use crate::domain::model::{Location, OptionSlots, Port};
use crate::domain::report::{
    ComparisonReport, Dimension, DimensionResult, OptionTotals, PortResolution,
};

/// Run every dimension over the three slots.
pub fn compare_options(options: &OptionSlots) -> ComparisonReport {
    let slots = options.as_slice();

    let dimensions = Dimension::ALL
        .iter()
        .map(|dimension| DimensionResult {
            dimension: *dimension,
            values: std::array::from_fn(|index| {
                slots[index].as_ref().and_then(|option| dimension.extract(option))
            }),
            best_index: best_index_sentinel(dimension.best_index(slots)),
        })
        .collect();

    // each option is ranked on its own grand total: haulage-inclusive when it
    // has a haulage leg, port-to-port otherwise
    let overall_best = best_index(slots, |option| Some(OptionTotals::of(option).grand_total()));

    ComparisonReport {
        totals: std::array::from_fn(|index| slots[index].as_ref().map(OptionTotals::of)),
        dimensions,
        uses_haulage: options.present().any(|option| option.has_haulage()),
        overall_best: best_index_sentinel(overall_best),
    }
}

impl ComparisonReport {
    pub fn best_for(&self, dimension: Dimension) -> Option<usize> {
        self.dimensions
            .iter()
            .find(|result| result.dimension == dimension)
            .and_then(|result| usize::try_from(result.best_index).ok())
    }

    pub fn overall_best_index(&self) -> Option<usize> {
        usize::try_from(self.overall_best).ok()
    }
}

/// Matched port plus the `suggestions` closest ports, for display.
pub fn resolve_port(location: &Location, ports: &[Port], suggestions: usize) -> PortResolution {
    let matched = match_port(location, ports);

    PortResolution {
        city: location.city.clone(),
        matched: matched.map(|(port, _)| port.clone()),
        matched_by: matched.map(|(_, by)| by),
        suggestions: rank_by_closeness(location, ports)
            .into_iter()
            .take(suggestions)
            .map(Into::into)
            .collect(),
    }
}
