//! Static recipes. Every dose is a fraction of the total cup weight.
use crate::{
    constants::{
        AMERICANO_WATER_TEMPERATURE, CAPPUCCINO_WATER_TEMPERATURE, LATTE_WATER_TEMPERATURE,
    },
    order::{CupSize, DrinkType, Ingredient},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    pub numerator: u32,
    pub denominator: u32,
}

impl Fraction {
    pub const fn new(numerator: u32, denominator: u32) -> Fraction {
        Fraction {
            numerator,
            denominator,
        }
    }

    /// Truncating share of `grams`
    pub fn of(&self, grams: u32) -> u32 {
        grams * self.numerator / self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dose {
    /// Always poured, even with a zero fraction.
    Water { fraction: Fraction, temperature: u32 },
    Add(Ingredient, Fraction),
}

#[derive(Debug, PartialEq, Eq)]
pub struct Recipe {
    pub doses: &'static [Dose],
}

static SMALL_AMERICANO: Recipe = Recipe {
    doses: &[
        Dose::Add(Ingredient::Coffee, Fraction::new(1, 3)),
        Dose::Water {
            fraction: Fraction::new(2, 3),
            temperature: AMERICANO_WATER_TEMPERATURE,
        },
    ],
};

static BIG_AMERICANO: Recipe = Recipe {
    doses: &[
        Dose::Add(Ingredient::Coffee, Fraction::new(1, 4)),
        Dose::Water {
            fraction: Fraction::new(3, 4),
            temperature: AMERICANO_WATER_TEMPERATURE,
        },
    ],
};

static CAPPUCCINO: Recipe = Recipe {
    doses: &[
        Dose::Water {
            fraction: Fraction::new(0, 1),
            temperature: CAPPUCCINO_WATER_TEMPERATURE,
        },
        Dose::Add(Ingredient::Milk, Fraction::new(1, 3)),
        Dose::Add(Ingredient::Coffee, Fraction::new(1, 3)),
        Dose::Add(Ingredient::MilkFoam, Fraction::new(1, 3)),
    ],
};

static LATTE: Recipe = Recipe {
    doses: &[
        Dose::Water {
            fraction: Fraction::new(0, 1),
            temperature: LATTE_WATER_TEMPERATURE,
        },
        Dose::Add(Ingredient::Milk, Fraction::new(1, 4)),
        Dose::Add(Ingredient::Coffee, Fraction::new(1, 2)),
        Dose::Add(Ingredient::MilkFoam, Fraction::new(1, 4)),
    ],
};

// The last quarter of the cup stays empty.
static MAROCHINO: Recipe = Recipe {
    doses: &[
        Dose::Add(Ingredient::Chocolate, Fraction::new(1, 4)),
        Dose::Add(Ingredient::Coffee, Fraction::new(1, 4)),
        Dose::Add(Ingredient::MilkFoam, Fraction::new(1, 4)),
    ],
};

/// Returns the recipe for a drink. Only americano changes with the cup size.
pub fn recipe_for(drink: DrinkType, size: CupSize) -> &'static Recipe {
    match (drink, size) {
        (DrinkType::Americano, CupSize::Small) => &SMALL_AMERICANO,
        (DrinkType::Americano, CupSize::Big) => &BIG_AMERICANO,
        (DrinkType::Cappuccino, _) => &CAPPUCCINO,
        (DrinkType::Latte, _) => &LATTE,
        (DrinkType::Marochino, _) => &MAROCHINO,
    }
}
