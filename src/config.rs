//! Menu configuration for the decorator demo.
//!
//! A menu is one base item plus an ordered list of toppings, read from TOML:
//!
//! ```toml
//! [base]
//! description = "Thin dough"
//! price = "4.00"
//!
//! [[toppings]]
//! name = "mozzarella"
//! price = "0.50"
//! ```
//!
//! Toppings are applied in file order, so the first one listed is innermost.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::decorator::{BaseItem, ChainBuilder, PriceableItem, Receipt};
use crate::error::Result;
use crate::price::Price;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    pub description: String,
    pub price: Price,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToppingConfig {
    pub name: String,
    pub price: Price,
}

impl ToppingConfig {
    /// The text this topping appends to the description.
    pub fn suffix(&self) -> String {
        format!(", {}", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuConfig {
    pub base: BaseConfig,
    #[serde(default)]
    pub toppings: Vec<ToppingConfig>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            base: BaseConfig {
                description: "Thin dough".to_string(),
                price: Price::new(4, 0),
            },
            toppings: vec![
                ToppingConfig {
                    name: "mozzarella".to_string(),
                    price: Price::new(0, 50),
                },
                ToppingConfig {
                    name: "tomato sauce".to_string(),
                    price: Price::new(0, 35),
                },
            ],
        }
    }
}

impl MenuConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading menu");
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    fn base_item(&self) -> Result<BaseItem> {
        BaseItem::new(self.base.description.clone(), self.base.price)
    }

    pub fn build_chain(&self) -> Result<Box<dyn PriceableItem>> {
        let mut builder = ChainBuilder::new().base(self.base_item()?)?;
        for topping in &self.toppings {
            builder = builder.topping(topping.suffix(), topping.price)?;
        }
        builder.build()
    }

    /// One receipt per stage: the bare base first, then after each topping.
    pub fn receipts(&self) -> Result<Vec<Receipt>> {
        let mut builder = ChainBuilder::new().base(self.base_item()?)?;
        let mut receipts = Vec::with_capacity(self.toppings.len() + 1);
        receipts.extend(builder.current().map(Receipt::of));

        for topping in &self.toppings {
            builder = builder.topping(topping.suffix(), topping.price)?;
            receipts.extend(builder.current().map(Receipt::of));
        }
        Ok(receipts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decorator::reference_receipts;
    use crate::error::Error;

    const MENU: &str = r#"
[base]
description = "Sourdough"
price = "5.25"

[[toppings]]
name = "basil"
price = 0.3

[[toppings]]
name = "happy hour"
price = "-1.00"
"#;

    #[test]
    fn test_default_matches_reference_pizza() {
        let receipts = MenuConfig::default().receipts().unwrap();
        assert_eq!(receipts, reference_receipts());
    }

    #[test]
    fn test_parse_menu() {
        let menu = MenuConfig::from_toml_str(MENU).unwrap();
        assert_eq!(menu.base.description, "Sourdough");
        assert_eq!(menu.toppings.len(), 2);
        assert_eq!(menu.toppings[0].price, Price::from_cents(30));

        let chain = menu.build_chain().unwrap();
        assert_eq!(chain.describe(), "Sourdough, basil, happy hour");
        assert_eq!(chain.cost(), Price::new(4, 55));
    }

    #[test]
    fn test_receipts_per_stage() {
        let menu = MenuConfig::from_toml_str(MENU).unwrap();
        let prices: Vec<String> = menu
            .receipts()
            .unwrap()
            .iter()
            .map(|r| r.price.to_string())
            .collect();
        assert_eq!(prices, vec!["5.25", "5.55", "4.55"]);
    }

    #[test]
    fn test_base_only_menu() {
        let menu = MenuConfig::from_toml_str("[base]\ndescription = \"Focaccia\"\nprice = 3\n").unwrap();
        assert!(menu.toppings.is_empty());
        assert_eq!(menu.receipts().unwrap().len(), 1);
    }

    #[test]
    fn test_rejects_negative_base() {
        let menu = MenuConfig::from_toml_str("[base]\ndescription = \"Odd\"\nprice = \"-2.00\"\n").unwrap();
        assert!(matches!(menu.build_chain(), Err(Error::NegativeBaseCost(_))));
    }

    #[test]
    fn test_rejects_malformed_menus() {
        assert!(matches!(MenuConfig::from_toml_str("[[toppings]]\nname = \"x\"\nprice = 1\n"), Err(Error::Config(_))));
        assert!(matches!(
            MenuConfig::from_toml_str("[base]\ndescription = \"x\"\nprice = \"1.234\"\n"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            MenuConfig::from_toml_str("[base]\ndescription = \"x\"\nprice = 1\ncolour = \"red\"\n"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_rejects_prices_beyond_limit() {
        let menu = "[base]\ndescription = \"x\"\nprice = \"90000000000000000\"\n\n\
                    [[toppings]]\nname = \"y\"\nprice = \"90000000000000000\"\n";
        assert!(matches!(MenuConfig::from_toml_str(menu), Err(Error::Config(_))));

        let whole = "[base]\ndescription = \"x\"\nprice = 90000000000000000\n";
        assert!(matches!(MenuConfig::from_toml_str(whole), Err(Error::Config(_))));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let text = toml::to_string(&MenuConfig::default()).unwrap();
        assert!(text.contains("price = \"4.00\""));
        assert_eq!(MenuConfig::from_toml_str(&text).unwrap(), MenuConfig::default());
    }
}
