use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Commercial,
    Ecommerce,
    Informational,
    Unknown,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Commercial => "commercial",
            Category::Ecommerce => "ecommerce",
            Category::Informational => "informational",
            Category::Unknown => "unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Unknown)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Category;

    #[test]
    fn displays_lowercase_names() {
        assert_eq!(Category::Commercial.to_string(), "commercial");
        assert_eq!(Category::Ecommerce.to_string(), "ecommerce");
        assert_eq!(format!("{:>8}", Category::Unknown), " unknown");
        assert!(!Category::Unknown.is_known());
        assert!(Category::Informational.is_known());
    }
}
