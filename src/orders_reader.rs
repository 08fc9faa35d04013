use log::{debug, info};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::errors::CoffeeMakerError;
use crate::order::{CupSize, DrinkType, Order};

#[derive(Deserialize, Debug)]
struct JsonOrder {
    drink: DrinkType,
    size: CupSize,
}

#[derive(Deserialize)]
struct OrdersConfiguration {
    orders: Vec<JsonOrder>,
}

fn read_orders_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<JsonOrder>, CoffeeMakerError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let orders_config: OrdersConfiguration = serde_json::from_reader(reader)?;
    Ok(orders_config.orders)
}

fn number_orders(json_orders: Vec<JsonOrder>) -> Vec<Order> {
    json_orders
        .into_iter()
        .enumerate()
        .map(|(id, order)| {
            debug!("[READER] Added order {}", id);
            Order::new(id, order.drink, order.size)
        })
        .collect()
}

/// Reads the orders of a JSON file like `{ "orders": [ { "drink": "latte", "size": "big" } ] }`
pub fn read_orders<P: AsRef<Path>>(path: P) -> Result<Vec<Order>, CoffeeMakerError> {
    let orders = number_orders(read_orders_from_file(path)?);
    info!("[READER] Read {} orders", orders.len());
    Ok(orders)
}

pub fn generate_random_orders(total: usize) -> Vec<Order> {
    let drinks = DrinkType::values();
    let sizes = CupSize::values();
    let mut rng = thread_rng();
    (0..total)
        .filter_map(|id| {
            let drink = drinks.choose(&mut rng)?;
            let size = sizes.choose(&mut rng)?;
            Some(Order::new(id, *drink, *size))
        })
        .collect()
}
