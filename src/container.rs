pub struct Container {
    pub remaining: u32,
    pub consumed: u32,
}

impl Container {
    pub fn new(initial_capacity: u32) -> Container {
        Container {
            remaining: initial_capacity,
            consumed: 0,
        }
    }

    /// Takes up to `quantity` from the container and returns how much was taken
    pub fn take(&mut self, quantity: u32) -> u32 {
        let taken = quantity.min(self.remaining);
        self.remaining -= taken;
        self.consumed += taken;
        taken
    }
}
