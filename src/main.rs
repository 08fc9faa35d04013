pub mod coffee_machine;
pub mod constants;
pub mod container;
pub mod dispenser;
pub mod errors;
pub mod ingredient_source;
pub mod order;
pub mod orders_reader;
pub mod recipe;
pub mod statistics;

use std::env;

use coffee_machine::CoffeeMachine;
use constants::{DEFAULT_ORDERS_PATH, RANDOM_ORDERS};
use dispenser::Dispenser;
use log::{error, info, LevelFilter};
use orders_reader::{generate_random_orders, read_orders};
use simple_logger::SimpleLogger;
use statistics::StatisticsPrinter;

fn main() {
    if let Err(err) = SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()
    {
        eprintln!("Error initializing the logger: {}", err);
    }

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_ORDERS_PATH.to_string());
    let orders = match read_orders(&path) {
        Ok(orders) => orders,
        Err(err) => {
            error!(
                "[COFFEE MACHINE] Could not read {} ({:?}), making {} random orders",
                path, err, RANDOM_ORDERS
            );
            generate_random_orders(RANDOM_ORDERS)
        }
    };

    let mut coffee_machine = CoffeeMachine::new(Dispenser::new());
    for order in orders {
        info!(
            "[COFFEE MACHINE] Order {}: {:?} {:?}",
            order.id, order.size, order.drink
        );
        coffee_machine.make(order.drink, order.size);
    }

    StatisticsPrinter::new(coffee_machine.source()).print_statistics();
}
