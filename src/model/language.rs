/// A spoken-language label ("English", "Ukrainian").
///
/// Compared by value. `clone` is the deep-copy operation: the clone owns its
/// own string, so mutating either instance never shows through the other.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Language {
    value: String,
}

impl Language {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }
}
