use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use autoconcern_core::{Describable, DomainError, DomainResult, Entity, EntityCode, Money};

use crate::engine::Engine;

/// Car sale status lifecycle. `Sold` is terminal; there is no return path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarStatus {
    Available,
    Sold,
}

/// A car held by a factory until sold, then owned by a customer.
///
/// The entity code is assigned at construction and never changes. Price
/// mutations are rejected once the car is sold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    code: EntityCode,
    name: String,
    model: String,
    engine: Engine,
    price: Money,
    year_of_manufacture: i32,
    status: CarStatus,
    created_at: DateTime<Utc>,
    sold_at: Option<DateTime<Utc>>,
}

impl Car {
    pub fn new(
        name: impl Into<String>,
        model: impl Into<String>,
        engine: Engine,
        price: Money,
        year_of_manufacture: i32,
        code: EntityCode,
    ) -> DomainResult<Self> {
        let name = name.into();
        let model = model.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("car name cannot be empty"));
        }
        if model.trim().is_empty() {
            return Err(DomainError::validation("car model cannot be empty"));
        }
        Ok(Self {
            code,
            name,
            model,
            engine,
            price,
            year_of_manufacture,
            status: CarStatus::Available,
            created_at: Utc::now(),
            sold_at: None,
        })
    }

    pub fn code(&self) -> EntityCode {
        self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn year_of_manufacture(&self) -> i32 {
        self.year_of_manufacture
    }

    pub fn status(&self) -> CarStatus {
        self.status
    }

    pub fn is_available(&self) -> bool {
        self.status == CarStatus::Available
    }

    pub fn is_sold(&self) -> bool {
        self.status == CarStatus::Sold
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn sold_at(&self) -> Option<DateTime<Utc>> {
        self.sold_at
    }

    /// Transition this car to `Sold`, recording the sale time.
    ///
    /// Driven by factory dispatch, exactly once per sale; a second call is an
    /// invalid state transition.
    pub fn mark_sold(&mut self) -> DomainResult<()> {
        if self.is_sold() {
            return Err(DomainError::invalid_state(format!(
                "{} {} has already been sold",
                self.name, self.model
            )));
        }
        self.status = CarStatus::Sold;
        self.sold_at = Some(Utc::now());
        Ok(())
    }

    /// Reduce the price by a percentage, returning the new price.
    pub fn apply_discount(&mut self, percent: f64) -> DomainResult<Money> {
        self.ensure_unsold("apply discount")?;
        self.price = self.price.discounted(percent)?;
        Ok(self.price)
    }

    /// Overwrite the price, returning the new price.
    pub fn update_price(&mut self, new_price: Money) -> DomainResult<Money> {
        self.ensure_unsold("update price")?;
        self.price = new_price;
        Ok(self.price)
    }

    fn ensure_unsold(&self, action: &str) -> DomainResult<()> {
        if self.is_sold() {
            return Err(DomainError::invalid_state(format!(
                "cannot {action}: {} {} has been sold",
                self.name, self.model
            )));
        }
        Ok(())
    }
}

impl Entity for Car {
    type Id = EntityCode;

    fn id(&self) -> &Self::Id {
        &self.code
    }
}

impl Describable for Car {
    fn describe(&self) -> String {
        format!(
            "{} {} with engine: {} and costs {}.",
            self.name,
            self.model,
            self.engine.describe(),
            self.price
        )
    }
}

impl core::fmt::Display for Car {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let status = match self.status {
            CarStatus::Available => "Available",
            CarStatus::Sold => "Sold",
        };
        write!(
            f,
            "Car(Name: {}, Model: {}, Engine: {}, Price: {}, Code: {}, Status: {status})",
            self.name,
            self.model,
            self.engine.describe(),
            self.price,
            self.code
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoconcern_core::CodeRegistry;

    fn test_car() -> Car {
        let mut registry = CodeRegistry::with_seed(1);
        Car::new(
            "BMW",
            "Series 3",
            Engine::new(300).unwrap(),
            Money::from_major(20_000, 50).unwrap(),
            2022,
            registry.issue(),
        )
        .unwrap()
    }

    #[test]
    fn new_car_is_available() {
        let car = test_car();
        assert_eq!(car.status(), CarStatus::Available);
        assert!(car.is_available());
        assert!(car.sold_at().is_none());
    }

    #[test]
    fn new_rejects_blank_name_or_model() {
        let mut registry = CodeRegistry::with_seed(2);
        let engine = Engine::new(100).unwrap();
        let price = Money::from_cents(1);
        assert!(Car::new("  ", "Series 3", engine.clone(), price, 2022, registry.issue()).is_err());
        assert!(Car::new("BMW", "", engine, price, 2022, registry.issue()).is_err());
    }

    #[test]
    fn mark_sold_is_a_one_way_transition() {
        let mut car = test_car();
        car.mark_sold().unwrap();
        assert!(car.is_sold());
        assert!(car.sold_at().is_some());
        assert!(matches!(car.mark_sold(), Err(DomainError::InvalidState(_))));
    }

    #[test]
    fn discount_reduces_price_and_returns_it() {
        let mut car = test_car();
        let new_price = car.apply_discount(10.0).unwrap();
        assert_eq!(new_price, Money::from_cents(1_800_045));
        assert_eq!(car.price(), new_price);
    }

    #[test]
    fn price_is_immutable_once_sold() {
        let mut car = test_car();
        let original = car.price();
        car.mark_sold().unwrap();

        assert!(matches!(
            car.apply_discount(10.0),
            Err(DomainError::InvalidState(_))
        ));
        assert!(matches!(
            car.update_price(Money::from_major(18_000, 0).unwrap()),
            Err(DomainError::InvalidState(_))
        ));
        assert_eq!(car.price(), original);
    }

    #[test]
    fn update_price_overwrites_when_available() {
        let mut car = test_car();
        let new_price = Money::from_major(18_000, 0).unwrap();
        assert_eq!(car.update_price(new_price).unwrap(), new_price);
        assert_eq!(car.price(), new_price);
    }

    #[test]
    fn describe_combines_name_model_engine_and_price() {
        let car = test_car();
        assert_eq!(
            car.describe(),
            "BMW Series 3 with engine: Engine Horsepower: 300 HP and costs $20000.50."
        );
    }

    #[test]
    fn display_includes_code_and_status() {
        let mut car = test_car();
        let line = car.to_string();
        assert!(line.contains("Name: BMW"));
        assert!(line.contains(&format!("Code: {}", car.code())));
        assert!(line.ends_with("Status: Available)"));

        car.mark_sold().unwrap();
        assert!(car.to_string().ends_with("Status: Sold)"));
    }
}
