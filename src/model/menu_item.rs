use serde::{Deserialize, Serialize};

/// A named, priced entry on a restaurant's menu.
///
/// The variant-specific facts live in [`MenuItemKind`], so renderers match on the
/// kind instead of probing for optional fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: f64,
    pub kind: MenuItemKind,
}

/// What kind of menu entry this is, with the fields only that kind carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MenuItemKind {
    Dish { description: String },
    Combo { kind: String, size: String },
    Drink { size: String },
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: f64, kind: MenuItemKind) -> Self {
        Self {
            name: name.into(),
            price,
            kind,
        }
    }

    pub fn dish(name: impl Into<String>, price: f64, description: impl Into<String>) -> Self {
        Self::new(name, price, MenuItemKind::Dish { description: description.into() })
    }

    pub fn combo(
        name: impl Into<String>,
        price: f64,
        kind: impl Into<String>,
        size: impl Into<String>,
    ) -> Self {
        Self::new(
            name,
            price,
            MenuItemKind::Combo {
                kind: kind.into(),
                size: size.into(),
            },
        )
    }

    pub fn drink(name: impl Into<String>, price: f64, size: impl Into<String>) -> Self {
        Self::new(name, price, MenuItemKind::Drink { size: size.into() })
    }

    /// Checks that the item can be listed: a name, a usable price, and its
    /// descriptive field(s) filled in.
    ///
    /// # Errors
    /// Returns a human-readable reason for the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name is empty".to_string());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(format!("invalid price {} for '{}'", self.price, self.name));
        }

        let missing = match &self.kind {
            MenuItemKind::Dish { description } if description.trim().is_empty() => Some("description"),
            MenuItemKind::Combo { kind, .. } if kind.trim().is_empty() => Some("type"),
            MenuItemKind::Combo { size, .. } | MenuItemKind::Drink { size } if size.trim().is_empty() => {
                Some("size")
            }
            _ => None,
        };
        match missing {
            Some(field) => Err(format!("'{}' has no {}", self.name, field)),
            None => Ok(()),
        }
    }
}
