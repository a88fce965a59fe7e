/// A postal address. Plain mutable data; nothing about the type itself stops
/// it from being rewritten after it has been hashed. Whether that matters
/// depends entirely on how its owner shares it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    street_name: String,
    house_number: u32,
}

impl Address {
    pub fn new(street_name: &str, house_number: u32) -> Self {
        Self {
            street_name: street_name.to_string(),
            house_number,
        }
    }

    pub fn street_name(&self) -> &str {
        &self.street_name
    }

    pub fn set_street_name(&mut self, street_name: &str) {
        self.street_name = street_name.to_string();
    }

    pub fn house_number(&self) -> u32 {
        self.house_number
    }

    pub fn set_house_number(&mut self, house_number: u32) {
        self.house_number = house_number;
    }
}
