//! Screen identifiers.

use std::fmt;

/// Each primary screen, navigable by number keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenId {
    #[default]
    Dashboard, // 1
    Products,  // 2
    Suppliers, // 3
    Orders,    // 4
    Create,    // 5
}

impl ScreenId {
    /// All screens in tab-bar order.
    pub const ALL: [ScreenId; 5] = [
        Self::Dashboard,
        Self::Products,
        Self::Suppliers,
        Self::Orders,
        Self::Create,
    ];

    pub fn number(self) -> u8 {
        match self {
            Self::Dashboard => 1,
            Self::Products => 2,
            Self::Suppliers => 3,
            Self::Orders => 4,
            Self::Create => 5,
        }
    }

    /// Screen from a numeric key (1-5).
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Dashboard),
            2 => Some(Self::Products),
            3 => Some(Self::Suppliers),
            4 => Some(Self::Orders),
            5 => Some(Self::Create),
            _ => None,
        }
    }

    /// Next screen in tab order (wraps around).
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&s| s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous screen in tab order (wraps around).
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|&s| s == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Products => "Products",
            Self::Suppliers => "Suppliers",
            Self::Orders => "Orders",
            Self::Create => "Create",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn numbers_round_trip() {
        for id in ScreenId::ALL {
            assert_eq!(ScreenId::from_number(id.number()), Some(id));
        }
        assert_eq!(ScreenId::from_number(0), None);
        assert_eq!(ScreenId::from_number(6), None);
    }

    #[test]
    fn tab_order_wraps() {
        assert_eq!(ScreenId::Create.next(), ScreenId::Dashboard);
        assert_eq!(ScreenId::Dashboard.prev(), ScreenId::Create);
        assert_eq!(ScreenId::Products.next(), ScreenId::Suppliers);
    }
}
