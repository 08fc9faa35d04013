//! Coffee machine. Turns a drink and a cup size into dosing commands.
use log::debug;

use crate::{
    ingredient_source::IngredientSource,
    order::{CupSize, DrinkType, Ingredient},
    recipe::{recipe_for, Dose},
};

/// Makes drinks using an ingredient source it keeps for its whole lifetime.
/// Pass `&mut source` to keep ownership of the source outside the machine.
pub struct CoffeeMachine<S: IngredientSource> {
    source: S,
}

impl<S: IngredientSource> CoffeeMachine<S> {
    pub fn new(source: S) -> CoffeeMachine<S> {
        CoffeeMachine { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }

    pub fn make_americano(&mut self, size: CupSize) {
        self.make(DrinkType::Americano, size);
    }

    pub fn make_cappuccino(&mut self, size: CupSize) {
        self.make(DrinkType::Cappuccino, size);
    }

    pub fn make_latte(&mut self, size: CupSize) {
        self.make(DrinkType::Latte, size);
    }

    pub fn make_marochino(&mut self, size: CupSize) {
        self.make(DrinkType::Marochino, size);
    }

    /// Sets the cup size and then pours every dose of the recipe, each one
    /// truncated on its own.
    pub fn make(&mut self, drink: DrinkType, size: CupSize) {
        let total_grams = size.grams();
        debug!("[COFFEE MACHINE] Making {:?} {:?} ({}g)", size, drink, total_grams);

        self.source.set_cup_size(total_grams);
        for dose in recipe_for(drink, size).doses {
            self.pour(dose, total_grams);
        }
    }

    fn pour(&mut self, dose: &Dose, total_grams: u32) {
        match *dose {
            Dose::Water {
                fraction,
                temperature,
            } => self.source.add_water(fraction.of(total_grams), temperature),
            Dose::Add(ingredient, fraction) => {
                if fraction.is_zero() {
                    return;
                }
                let grams = fraction.of(total_grams);
                match ingredient {
                    Ingredient::Sugar => self.source.add_sugar(grams),
                    Ingredient::Coffee => self.source.add_coffee(grams),
                    Ingredient::Milk => self.source.add_milk(grams),
                    Ingredient::MilkFoam => self.source.add_milk_foam(grams),
                    Ingredient::Chocolate => self.source.add_chocolate(grams),
                    Ingredient::Cream => self.source.add_cream(grams),
                    // water needs a temperature, only `Dose::Water` pours it
                    Ingredient::Water => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingredient_source::recording::{Call, RecordingSource};

    fn make(drink: DrinkType, size: CupSize) -> Vec<Call> {
        let mut source = RecordingSource::new();
        CoffeeMachine::new(&mut source).make(drink, size);
        source.calls
    }

    #[test]
    fn should_make_a_small_americano() {
        let mut source = RecordingSource::new();
        CoffeeMachine::new(&mut source).make_americano(CupSize::Small);
        assert_eq!(
            vec![
                Call::SetCupSize(100),
                Call::AddCoffee(33),
                Call::AddWater(66, 60)
            ],
            source.calls
        );
    }

    #[test]
    fn should_make_a_big_americano() {
        let mut source = RecordingSource::new();
        CoffeeMachine::new(&mut source).make_americano(CupSize::Big);
        assert_eq!(
            vec![
                Call::SetCupSize(140),
                Call::AddCoffee(35),
                Call::AddWater(105, 60)
            ],
            source.calls
        );
    }

    #[test]
    fn should_not_add_milk_or_chocolate_to_an_americano() {
        for size in CupSize::values() {
            let mut source = RecordingSource::new();
            CoffeeMachine::new(&mut source).make_americano(size);
            let milk_or_chocolate = source.count(|call| {
                matches!(
                    call,
                    Call::AddMilk(_) | Call::AddMilkFoam(_) | Call::AddChocolate(_)
                )
            });
            assert_eq!(0, milk_or_chocolate);
        }
    }

    #[test]
    fn should_make_a_small_cappuccino() {
        let mut source = RecordingSource::new();
        CoffeeMachine::new(&mut source).make_cappuccino(CupSize::Small);
        assert_eq!(
            vec![
                Call::SetCupSize(100),
                Call::AddWater(0, 80),
                Call::AddMilk(33),
                Call::AddCoffee(33),
                Call::AddMilkFoam(33)
            ],
            source.calls
        );
    }

    #[test]
    fn should_make_a_big_cappuccino() {
        let mut source = RecordingSource::new();
        CoffeeMachine::new(&mut source).make_cappuccino(CupSize::Big);
        assert_eq!(
            vec![
                Call::SetCupSize(140),
                Call::AddWater(0, 80),
                Call::AddMilk(46),
                Call::AddCoffee(46),
                Call::AddMilkFoam(46)
            ],
            source.calls
        );
    }

    #[test]
    fn should_make_a_small_latte() {
        let mut source = RecordingSource::new();
        CoffeeMachine::new(&mut source).make_latte(CupSize::Small);
        assert_eq!(
            vec![
                Call::SetCupSize(100),
                Call::AddWater(0, 90),
                Call::AddMilk(25),
                Call::AddCoffee(50),
                Call::AddMilkFoam(25)
            ],
            source.calls
        );
    }

    #[test]
    fn should_make_a_big_latte() {
        let mut source = RecordingSource::new();
        CoffeeMachine::new(&mut source).make_latte(CupSize::Big);
        assert_eq!(
            vec![
                Call::SetCupSize(140),
                Call::AddWater(0, 90),
                Call::AddMilk(35),
                Call::AddCoffee(70),
                Call::AddMilkFoam(35)
            ],
            source.calls
        );
    }

    #[test]
    fn should_make_a_big_marochino_without_water() {
        let mut source = RecordingSource::new();
        CoffeeMachine::new(&mut source).make_marochino(CupSize::Big);
        assert_eq!(
            vec![
                Call::SetCupSize(140),
                Call::AddChocolate(35),
                Call::AddCoffee(35),
                Call::AddMilkFoam(35)
            ],
            source.calls
        );
    }

    #[test]
    fn should_set_the_cup_size_once_and_first() {
        for size in CupSize::values() {
            for drink in DrinkType::values() {
                let calls = make(drink, size);
                assert_eq!(Some(&Call::SetCupSize(size.grams())), calls.first());
                let cup_sizes = calls
                    .iter()
                    .filter(|call| matches!(call, Call::SetCupSize(_)))
                    .count();
                assert_eq!(1, cup_sizes);
            }
        }
    }

    #[test]
    fn should_never_add_sugar_or_cream() {
        for size in CupSize::values() {
            for drink in DrinkType::values() {
                let mut source = RecordingSource::new();
                CoffeeMachine::new(&mut source).make(drink, size);
                let sugar_or_cream =
                    source.count(|call| matches!(call, Call::AddSugar(_) | Call::AddCream(_)));
                assert_eq!(0, sugar_or_cream);
            }
        }
    }

    #[test]
    fn should_repeat_the_same_sequence_for_the_same_drink() {
        let mut source = RecordingSource::new();
        let mut machine = CoffeeMachine::new(&mut source);
        machine.make_latte(CupSize::Big);
        machine.make_latte(CupSize::Big);

        let (first, second) = source.calls.split_at(source.calls.len() / 2);
        assert_eq!(first, second);
        assert_eq!(make(DrinkType::Latte, CupSize::Big), first.to_vec());
    }

    #[test]
    fn should_give_back_an_owned_source() {
        let mut machine = CoffeeMachine::new(RecordingSource::new());
        machine.make_cappuccino(CupSize::Small);
        assert_eq!(5, machine.source().calls.len());
        assert_eq!(5, machine.into_source().calls.len());
    }
}
