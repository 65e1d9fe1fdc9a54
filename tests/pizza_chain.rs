use design_patterns::decorator::{self, PriceableExt};
use design_patterns::{BaseItem, ChainBuilder, Mozzarella, Price, PriceableItem, Receipt, TomatoSauce};
use proptest::prelude::*;

#[test]
fn reference_pizza_stages() {
    let plain = BaseItem::new("Thin dough", "4.00".parse().unwrap()).unwrap();
    assert_eq!(plain.describe(), "Thin dough");
    assert_eq!(plain.cost().to_string(), "4");

    let cheese = Mozzarella::new(plain);
    assert_eq!(cheese.describe(), "Thin dough, mozzarella");
    assert_eq!(cheese.cost().to_string(), "4.5");

    let full = TomatoSauce::new(cheese);
    assert_eq!(full.describe(), "Thin dough, mozzarella, tomato sauce");
    assert_eq!(full.cost().to_string(), "4.85");
}

#[test]
fn reference_receipts_render_two_lines_each() {
    let receipts = decorator::reference_receipts();
    let rendered: Vec<String> = receipts.iter().map(Receipt::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "Ingredients: Thin dough\nPrice: $4",
            "Ingredients: Thin dough, mozzarella\nPrice: $4.5",
            "Ingredients: Thin dough, mozzarella, tomato sauce\nPrice: $4.85",
        ]
    );
}

#[test]
fn receipts_serialize_for_json_output() {
    let receipt = Receipt::of(&BaseItem::thin_dough().with_mozzarella());
    let json = serde_json::to_value(&receipt).unwrap();
    assert_eq!(json["ingredients"], "Thin dough, mozzarella");
    assert_eq!(json["price"], "4.50");
}

fn toppings() -> impl Strategy<Value = Vec<(String, i64)>> {
    prop::collection::vec(("[a-z]{1,10}", -500i64..2_000), 0..16)
}

proptest! {
    #[test]
    fn cost_is_base_plus_every_delta(base in 0i64..100_000, layers in toppings()) {
        let mut builder = ChainBuilder::new()
            .base(BaseItem::new("Base", Price::from_cents(base)).unwrap())
            .unwrap();
        for (name, delta) in &layers {
            builder = builder.topping(format!(", {}", name), Price::from_cents(*delta)).unwrap();
        }
        let chain = builder.build().unwrap();

        let expected = Price::from_cents(base) + layers.iter().map(|(_, d)| Price::from_cents(*d)).sum::<Price>();
        prop_assert_eq!(chain.cost(), expected);
    }

    #[test]
    fn description_appends_in_wrap_order(layers in toppings()) {
        let mut chain: Box<dyn PriceableItem> = BaseItem::thin_dough().boxed();
        for (name, delta) in &layers {
            chain = chain.with_topping(format!(", {}", name), Price::from_cents(*delta)).boxed();
        }

        let mut expected = String::from("Thin dough");
        for (name, _) in &layers {
            expected.push_str(", ");
            expected.push_str(name);
        }
        prop_assert_eq!(chain.describe(), expected);
    }

    #[test]
    fn non_negative_deltas_never_go_below_base(
        base in 0i64..10_000,
        deltas in prop::collection::vec(0i64..1_000, 0..10),
    ) {
        let base_price = Price::from_cents(base);
        let mut chain: Box<dyn PriceableItem> = BaseItem::new("Base", base_price).unwrap().boxed();
        for delta in &deltas {
            chain = chain.with_topping(", extra", Price::from_cents(*delta)).boxed();
        }
        prop_assert!(chain.cost() >= base_price);
    }

    #[test]
    fn price_display_parses_back(cents in -Price::LIMIT.cents()..=Price::LIMIT.cents()) {
        let price = Price::from_cents(cents);
        prop_assert_eq!(price.to_string().parse::<Price>().unwrap(), price);
        prop_assert_eq!(format!("{:#}", price).parse::<Price>().unwrap(), price);
    }

    #[test]
    fn builder_never_panics_on_extreme_deltas(
        base in 0i64..=i64::MAX,
        deltas in prop::collection::vec(any::<i64>(), 0..8),
    ) {
        let base_item = BaseItem::new("Base", Price::from_cents(base)).unwrap();
        let mut builder = Some(ChainBuilder::new().base(base_item).unwrap());
        let mut total = Some(Price::from_cents(base));
        for delta in &deltas {
            let delta = Price::from_cents(*delta);
            total = total.and_then(|t| t.checked_add(delta));
            builder = builder.and_then(|b| b.topping(", extra", delta).ok());
            prop_assert_eq!(builder.is_some(), total.is_some());
        }
        if let (Some(builder), Some(total)) = (builder, total) {
            prop_assert_eq!(builder.build().unwrap().cost(), total);
        }
    }
}
