//! Configuration parameters of the coffee machine

/// Weight in grams of a small cup
pub const SMALL_CUP_GRAMS: u32 = 100;

/// Weight in grams of a big cup
pub const BIG_CUP_GRAMS: u32 = 140;

/// Water temperatures (Celsius) used by each recipe
pub const AMERICANO_WATER_TEMPERATURE: u32 = 60;
pub const CAPPUCCINO_WATER_TEMPERATURE: u32 = 80;
pub const LATTE_WATER_TEMPERATURE: u32 = 90;

/// Initial capacity of the water container
pub const WATER_STORAGE: u32 = 5000;

/// Initial capacity of the sugar container
pub const SUGAR_STORAGE: u32 = 1000;

/// Initial capacity of the ground coffee container
pub const COFFEE_STORAGE: u32 = 2000;

/// Initial capacity of the milk container
pub const MILK_STORAGE: u32 = 2000;

/// Initial capacity of the milk foam container
pub const MILK_FOAM_STORAGE: u32 = 2000;

/// Initial capacity of the chocolate container
pub const CHOCOLATE_STORAGE: u32 = 1000;

/// Initial capacity of the cream container
pub const CREAM_STORAGE: u32 = 1000;

/// Orders file read when no path is given on the command line
pub const DEFAULT_ORDERS_PATH: &str = "orders.json";

/// How many random orders are made when the orders file can't be read
pub const RANDOM_ORDERS: usize = 20;
