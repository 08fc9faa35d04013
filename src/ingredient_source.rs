//! Capability the coffee machine uses to dispense ingredients.

/// Automated source of ingredients. Every command is fire-and-forget:
/// running out of something is the source's problem, not the machine's.
pub trait IngredientSource {
    fn set_cup_size(&mut self, grams: u32);
    fn add_water(&mut self, grams: u32, temperature: u32);
    fn add_sugar(&mut self, grams: u32);
    fn add_coffee(&mut self, grams: u32);
    fn add_milk(&mut self, grams: u32);
    fn add_milk_foam(&mut self, grams: u32);
    fn add_chocolate(&mut self, grams: u32);
    fn add_cream(&mut self, grams: u32);
}

impl<S: IngredientSource + ?Sized> IngredientSource for &mut S {
    fn set_cup_size(&mut self, grams: u32) {
        (**self).set_cup_size(grams)
    }

    fn add_water(&mut self, grams: u32, temperature: u32) {
        (**self).add_water(grams, temperature)
    }

    fn add_sugar(&mut self, grams: u32) {
        (**self).add_sugar(grams)
    }

    fn add_coffee(&mut self, grams: u32) {
        (**self).add_coffee(grams)
    }

    fn add_milk(&mut self, grams: u32) {
        (**self).add_milk(grams)
    }

    fn add_milk_foam(&mut self, grams: u32) {
        (**self).add_milk_foam(grams)
    }

    fn add_chocolate(&mut self, grams: u32) {
        (**self).add_chocolate(grams)
    }

    fn add_cream(&mut self, grams: u32) {
        (**self).add_cream(grams)
    }
}
