//! End-to-end flow: stock a factory, sell a car on request, and verify the
//! sold car's price is frozen.

use autoconcern_core::{CodeRegistry, DomainError, Money};
use autoconcern_dealership::{Customer, Factory};
use autoconcern_vehicles::Engine;

#[test]
fn request_dispatch_and_frozen_price_flow() {
    let mut registry = CodeRegistry::with_seed(2022);
    let mut factory = Factory::new();

    let bmw = factory
        .create_car(
            &mut registry,
            "BMW",
            "Series 3",
            Engine::new(300).unwrap(),
            Money::from_major(20_000, 50).unwrap(),
            2022,
        )
        .unwrap();
    let mercedes = factory
        .create_car(
            &mut registry,
            "Mercedes",
            "Series C",
            Engine::new(500).unwrap(),
            Money::from_major(22_000, 0).unwrap(),
            2022,
        )
        .unwrap();
    assert_eq!(factory.available_cars().len(), 2);

    let mut vika = Customer::new(&mut registry, "Vika", "123-456-7890").unwrap();
    let bought = vika.request_car(&mut factory, "Series 3").unwrap();
    assert_eq!(bought, Some(bmw));

    // The BMW left the inventory and landed in Vika's purchases, sold.
    assert!(factory.car(bmw).is_none());
    assert!(factory.check_availability("Series 3").is_empty());
    assert_eq!(vika.purchases().len(), 1);
    let purchased = &vika.purchases()[0];
    assert_eq!(purchased.code(), bmw);
    assert!(purchased.is_sold());

    // The Mercedes is untouched.
    assert!(factory.car(mercedes).is_some_and(|car| car.is_available()));

    // Price mutations on the sold car are rejected and leave it unchanged.
    let original_price = vika.purchases()[0].price();
    let sold_car = vika.purchase_mut(bmw).unwrap();
    assert!(matches!(
        sold_car.apply_discount(10.0),
        Err(DomainError::InvalidState(_))
    ));
    assert!(matches!(
        sold_car.update_price(Money::from_major(18_000, 0).unwrap()),
        Err(DomainError::InvalidState(_))
    ));
    assert_eq!(vika.purchases()[0].price(), original_price);

    // A second request for the same model finds nothing and changes nothing.
    assert_eq!(vika.request_car(&mut factory, "Series 3").unwrap(), None);
    assert_eq!(vika.purchases().len(), 1);
    assert_eq!(factory.available_cars().len(), 1);
}
