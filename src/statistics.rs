use log::info;

use crate::{dispenser::Dispenser, order::Ingredient};

pub struct StatisticsPrinter<'a> {
    dispenser: &'a Dispenser,
}

impl<'a> StatisticsPrinter<'a> {
    pub fn new(dispenser: &'a Dispenser) -> StatisticsPrinter<'a> {
        StatisticsPrinter { dispenser }
    }

    pub fn print_statistics(&self) {
        info!("{}", self.statistics());
    }

    pub fn statistics(&self) -> String {
        let mut statistics = format!(
            "[STATISTICS] Orders processed={} | Ingredient=(remaining, consumed) |",
            self.dispenser.cups_served()
        );
        self.add_resources_to_statistics_string(&mut statistics);
        statistics
    }

    fn add_resources_to_statistics_string(&self, statistics: &mut String) {
        for ingredient in Ingredient::values() {
            if let Some(container) = self.dispenser.container(ingredient) {
                statistics.push_str(&format!(
                    " {:?}=({},{}) ",
                    ingredient, container.remaining, container.consumed
                ));
            }
        }
    }
}
