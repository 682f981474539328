//! Cost summation for pricing options. All sums are 0 for empty lists.

use crate::domain::model::{ContainerCharge, Misc, PricingOption, Seafreight};
use crate::domain::report::OptionTotals;

pub fn container_services_total(containers: &[ContainerCharge]) -> f64 {
    containers
        .iter()
        .flat_map(|container| container.services.iter())
        .map(|service| service.price)
        .sum()
}

pub fn seafreight_line_total(seafreight: &Seafreight) -> f64 {
    seafreight.base_price + container_services_total(&seafreight.containers)
}

pub fn sum_seafreights(seafreights: &[Seafreight]) -> f64 {
    seafreights.iter().map(seafreight_line_total).sum()
}

pub fn sum_miscs(miscs: &[Misc]) -> f64 {
    miscs.iter().map(|misc| misc.price).sum()
}

impl OptionTotals {
    pub fn of(option: &PricingOption) -> Self {
        let seafreight_total = sum_seafreights(&option.selected_seafreights);
        let misc_total = sum_miscs(&option.my_miscs);
        let alt_total = seafreight_total + misc_total;

        Self {
            seafreight_total,
            misc_total,
            haulage_unit_total: option
                .selected_haulage
                .as_ref()
                .map(|haulage| haulage.unit_tariff + alt_total),
            alt_total,
        }
    }

    /// Door-to-port total when there is a haulage leg, port-to-port otherwise.
    pub fn grand_total(&self) -> f64 {
        self.haulage_unit_total.unwrap_or(self.alt_total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Haulage, ServiceLine};

    fn container(prices: &[f64]) -> ContainerCharge {
        ContainerCharge {
            container: "40' HC".to_string(),
            services: prices
                .iter()
                .map(|&price| ServiceLine {
                    service_name: "THC".to_string(),
                    price,
                })
                .collect(),
        }
    }

    fn seafreight(base_price: f64, containers: Vec<ContainerCharge>) -> Seafreight {
        Seafreight {
            default_container: "40' HC".to_string(),
            transit_time: 14.0,
            base_price,
            containers,
        }
    }

    #[test]
    fn test_container_services_total() {
        let containers = vec![container(&[120.0, 30.0]), container(&[50.0]), container(&[])];
        assert_eq!(container_services_total(&containers), 200.0);
        assert_eq!(container_services_total(&[]), 0.0);
    }

    #[test]
    fn test_seafreight_line_and_sum() {
        let lines = vec![
            seafreight(1000.0, vec![container(&[100.0])]),
            seafreight(500.0, vec![]),
        ];
        assert_eq!(seafreight_line_total(&lines[0]), 1100.0);
        assert_eq!(sum_seafreights(&lines), 1600.0);
        assert_eq!(sum_seafreights(&[]), 0.0);
    }

    #[test]
    fn test_sum_miscs() {
        let miscs = vec![
            Misc {
                text_services: "Customs".to_string(),
                price: 45.0,
            },
            Misc {
                text_services: "Insurance".to_string(),
                price: 15.5,
            },
        ];
        assert_eq!(sum_miscs(&miscs), 60.5);
        assert_eq!(sum_miscs(&[]), 0.0);
    }

    #[test]
    fn test_option_totals() {
        let mut option = PricingOption {
            selected_haulage: None,
            selected_seafreights: vec![seafreight(200.0, vec![])],
            my_miscs: vec![Misc {
                text_services: "Docs".to_string(),
                price: 10.0,
            }],
        };

        let totals = OptionTotals::of(&option);
        assert_eq!(totals.alt_total, 210.0);
        assert_eq!(totals.haulage_unit_total, None);
        assert_eq!(totals.grand_total(), 210.0);

        option.selected_haulage = Some(Haulage {
            unit_tariff: 100.0,
            multi_stop: 0.0,
            overtime_tariff: 0.0,
            haulier_name: "Trans Sud".to_string(),
        });
        let totals = OptionTotals::of(&option);
        assert_eq!(totals.haulage_unit_total, Some(310.0));
        assert_eq!(totals.grand_total(), 310.0);
    }
}
