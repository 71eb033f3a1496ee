use tracing::info;

use autoconcern_core::{CodeRegistry, DomainError, DomainResult, EntityCode, Money};
use autoconcern_vehicles::{Car, Engine};

use crate::customer::Customer;

/// A factory owning the inventory of available cars.
///
/// Invariant: every car in the inventory is `Available`; dispatch removes the
/// car and marks it sold in the same call, so a sold car never lingers in any
/// factory's list.
#[derive(Debug, Default)]
pub struct Factory {
    available_cars: Vec<Car>,
}

impl Factory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a car with a fresh entity code and add it to the inventory.
    ///
    /// Returns the car's code, the handle used for later lookup and dispatch.
    pub fn create_car(
        &mut self,
        registry: &mut CodeRegistry,
        name: impl Into<String>,
        model: impl Into<String>,
        engine: Engine,
        price: Money,
        year_of_manufacture: i32,
    ) -> DomainResult<EntityCode> {
        let car = Car::new(name, model, engine, price, year_of_manufacture, registry.issue())?;
        let code = car.code();
        info!(%code, name = car.name(), model = car.model(), "car added to factory inventory");
        self.available_cars.push(car);
        Ok(code)
    }

    /// All available cars of the given model, in insertion order.
    ///
    /// Never returns a sold car.
    pub fn check_availability(&self, model: &str) -> Vec<&Car> {
        self.available_cars
            .iter()
            .filter(|car| car.model() == model && car.is_available())
            .collect()
    }

    /// Sell a car to a customer.
    ///
    /// Removes the car from the inventory, marks it sold, and hands it over
    /// to the customer's purchase list. Fails with a not-found error if no
    /// car with this code is in the inventory; in that case nothing changes.
    pub fn dispatch_car(&mut self, code: EntityCode, customer: &mut Customer) -> DomainResult<()> {
        let index = self
            .available_cars
            .iter()
            .position(|car| car.code() == code)
            .ok_or_else(|| {
                DomainError::not_found(format!("car {code} is not available in the factory"))
            })?;

        let mut car = self.available_cars.remove(index);
        if let Err(err) = car.mark_sold() {
            // Restore the inventory so a failed dispatch leaves no trace.
            self.available_cars.insert(index, car);
            return Err(err);
        }

        info!(%code, customer = customer.name(), "car dispatched to customer");
        customer.take_delivery(car);
        Ok(())
    }

    pub fn available_cars(&self) -> &[Car] {
        &self.available_cars
    }

    pub fn car(&self, code: EntityCode) -> Option<&Car> {
        self.available_cars.iter().find(|car| car.code() == code)
    }

    /// Mutable access to an inventory car, for repricing before sale.
    pub fn car_mut(&mut self, code: EntityCode) -> Option<&mut Car> {
        self.available_cars.iter_mut().find(|car| car.code() == code)
    }
}
