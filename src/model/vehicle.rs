use serde::{Deserialize, Serialize};

/// A vehicle that can serve orders whose requested class appears in its
/// supported-tag set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    /// Vehicle number, the stable key used by assignments.
    pub id: String,
    /// Physical class of the vehicle itself (e.g. "10t").
    pub class: String,
    /// Request classes this vehicle may be dispatched for.
    pub supported_tags: Vec<String>,
    pub driver_name: Option<String>,
}

impl Vehicle {
    pub fn new(
        id: impl Into<String>,
        class: impl Into<String>,
        supported_tags: &[&str],
        driver_name: Option<&str>,
    ) -> Self {
        Self {
            id: id.into(),
            class: class.into(),
            supported_tags: supported_tags.iter().map(|t| t.to_string()).collect(),
            driver_name: driver_name.map(str::to_string),
        }
    }

    pub fn supports(&self, tag: &str) -> bool {
        self.supported_tags.iter().any(|t| t == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supports_matches_exact_tag() {
        let v = Vehicle::new("T-101", "10t", &["10t", "4t"], Some("A. Reyes"));
        assert!(v.supports("10t"));
        assert!(v.supports("4t"));
        assert!(!v.supports("trailer"));
    }
}
