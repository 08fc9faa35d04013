//! Simulated ingredient source of the coffee machine, backed by finite containers.
use std::collections::HashMap;

use log::{debug, warn};

use crate::{
    constants::{
        CHOCOLATE_STORAGE, COFFEE_STORAGE, CREAM_STORAGE, MILK_FOAM_STORAGE, MILK_STORAGE,
        SUGAR_STORAGE, WATER_STORAGE,
    },
    container::Container,
    ingredient_source::IngredientSource,
    order::Ingredient,
};

/// Dispenses ingredients into the current cup.
/// Holds one container per ingredient and counts the cups served.
pub struct Dispenser {
    resources: HashMap<Ingredient, Container>,
    cup_capacity: u32,
    cup_filled: u32,
    cups_served: u64,
}

impl Dispenser {
    pub fn new() -> Dispenser {
        let mut resources = HashMap::new();
        resources.insert(Ingredient::Water, Container::new(WATER_STORAGE));
        resources.insert(Ingredient::Sugar, Container::new(SUGAR_STORAGE));
        resources.insert(Ingredient::Coffee, Container::new(COFFEE_STORAGE));
        resources.insert(Ingredient::Milk, Container::new(MILK_STORAGE));
        resources.insert(Ingredient::MilkFoam, Container::new(MILK_FOAM_STORAGE));
        resources.insert(Ingredient::Chocolate, Container::new(CHOCOLATE_STORAGE));
        resources.insert(Ingredient::Cream, Container::new(CREAM_STORAGE));
        Dispenser::with_resources(resources)
    }

    pub fn with_resources(resources: HashMap<Ingredient, Container>) -> Dispenser {
        Dispenser {
            resources,
            cup_capacity: 0,
            cup_filled: 0,
            cups_served: 0,
        }
    }

    pub fn cups_served(&self) -> u64 {
        self.cups_served
    }

    pub fn container(&self, ingredient: Ingredient) -> Option<&Container> {
        self.resources.get(&ingredient)
    }

    fn dispense(&mut self, ingredient: Ingredient, quantity_required: u32) {
        let taken = match self.resources.get_mut(&ingredient) {
            Some(container) => container.take(quantity_required),
            None => 0,
        };
        if taken < quantity_required {
            warn!(
                "[DISPENSER] Not enough {:?}, served {} of {}",
                ingredient, taken, quantity_required
            );
        }

        self.cup_filled += taken;
        if self.cup_filled > self.cup_capacity {
            warn!(
                "[DISPENSER] Cup overflowed with {:?}, {} of {}",
                ingredient, self.cup_filled, self.cup_capacity
            );
        }
        debug!("[DISPENSER] Uses {} of {:?}", taken, ingredient);
    }
}

impl Default for Dispenser {
    fn default() -> Self {
        Dispenser::new()
    }
}

impl IngredientSource for Dispenser {
    fn set_cup_size(&mut self, grams: u32) {
        self.cup_capacity = grams;
        self.cup_filled = 0;
        self.cups_served += 1;
        debug!("[DISPENSER] New cup of {}g", grams);
    }

    fn add_water(&mut self, grams: u32, temperature: u32) {
        debug!("[DISPENSER] Heating water to {}C", temperature);
        self.dispense(Ingredient::Water, grams);
    }

    fn add_sugar(&mut self, grams: u32) {
        self.dispense(Ingredient::Sugar, grams);
    }

    fn add_coffee(&mut self, grams: u32) {
        self.dispense(Ingredient::Coffee, grams);
    }

    fn add_milk(&mut self, grams: u32) {
        self.dispense(Ingredient::Milk, grams);
    }

    fn add_milk_foam(&mut self, grams: u32) {
        self.dispense(Ingredient::MilkFoam, grams);
    }

    fn add_chocolate(&mut self, grams: u32) {
        self.dispense(Ingredient::Chocolate, grams);
    }

    fn add_cream(&mut self, grams: u32) {
        self.dispense(Ingredient::Cream, grams);
    }
}
