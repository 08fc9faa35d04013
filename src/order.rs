//! Drinks, cup sizes and ingredients the coffee machine works with
use serde::Deserialize;

use crate::constants::{BIG_CUP_GRAMS, SMALL_CUP_GRAMS};

pub const TOTAL_INGREDIENTS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ingredient {
    Water,
    Sugar,
    Coffee,
    Milk,
    MilkFoam,
    Chocolate,
    Cream,
}

impl Ingredient {
    /// Returns every ingredient, in the order the statistics are printed
    pub fn values() -> [Ingredient; TOTAL_INGREDIENTS] {
        [
            Ingredient::Water,
            Ingredient::Sugar,
            Ingredient::Coffee,
            Ingredient::Milk,
            Ingredient::MilkFoam,
            Ingredient::Chocolate,
            Ingredient::Cream,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrinkType {
    Americano,
    Cappuccino,
    Latte,
    Marochino,
}

impl DrinkType {
    pub fn values() -> Vec<DrinkType> {
        vec![
            DrinkType::Americano,
            DrinkType::Cappuccino,
            DrinkType::Latte,
            DrinkType::Marochino,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CupSize {
    Small,
    Big,
}

impl CupSize {
    pub fn values() -> Vec<CupSize> {
        vec![CupSize::Small, CupSize::Big]
    }

    /// Total weight of a full cup of this size
    pub fn grams(self) -> u32 {
        match self {
            CupSize::Small => SMALL_CUP_GRAMS,
            CupSize::Big => BIG_CUP_GRAMS,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Order {
    pub id: usize,
    pub drink: DrinkType,
    pub size: CupSize,
}

impl Order {
    pub fn new(id: usize, drink: DrinkType, size: CupSize) -> Order {
        Order { id, drink, size }
    }
}
