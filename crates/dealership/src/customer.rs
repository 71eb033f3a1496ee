use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use autoconcern_core::{
    CodeRegistry, Describable, DomainError, DomainResult, Entity, EntityCode,
};
use autoconcern_vehicles::Car;

use crate::factory::Factory;

/// A customer with an ordered list of purchased cars.
///
/// Purchases only grow: cars arrive via factory dispatch and are never given
/// back (no return/refund path is modeled).
#[derive(Debug)]
pub struct Customer {
    code: EntityCode,
    name: String,
    contact: String,
    purchases: Vec<Car>,
    created_at: DateTime<Utc>,
}

/// Serializable snapshot of a customer and their purchases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub name: String,
    pub contact: String,
    pub code: EntityCode,
    pub purchases: Vec<String>,
}

impl Customer {
    pub fn new(
        registry: &mut CodeRegistry,
        name: impl Into<String>,
        contact: impl Into<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("customer name cannot be empty"));
        }
        Ok(Self {
            code: registry.issue(),
            name,
            contact: contact.into(),
            purchases: Vec::new(),
            created_at: Utc::now(),
        })
    }

    pub fn code(&self) -> EntityCode {
        self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn purchases(&self) -> &[Car] {
        &self.purchases
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Mutable access to a purchased car by code.
    pub fn purchase_mut(&mut self, code: EntityCode) -> Option<&mut Car> {
        self.purchases.iter_mut().find(|car| car.code() == code)
    }

    /// Accept a sold car from factory dispatch.
    pub fn take_delivery(&mut self, car: Car) {
        self.purchases.push(car);
    }

    /// Request a car of the given model from a factory.
    ///
    /// Takes the first available match (FIFO by insertion order) and has the
    /// factory dispatch it to this customer, returning the car's code.
    /// Returns `Ok(None)` when no car of that model is available; nothing is
    /// mutated in that case.
    pub fn request_car(
        &mut self,
        factory: &mut Factory,
        model: &str,
    ) -> DomainResult<Option<EntityCode>> {
        info!(customer = %self.code, model, "customer requesting a car");

        let first_match = factory
            .check_availability(model)
            .first()
            .map(|car| car.code());
        let Some(code) = first_match else {
            info!(model, "requested car model is not available");
            return Ok(None);
        };

        factory.dispatch_car(code, self)?;
        Ok(Some(code))
    }

    /// Snapshot of this customer's identity and string-rendered purchases.
    pub fn get_details(&self) -> CustomerDetails {
        CustomerDetails {
            name: self.name.clone(),
            contact: self.contact.clone(),
            code: self.code,
            purchases: self.purchases.iter().map(Car::to_string).collect(),
        }
    }
}

impl Entity for Customer {
    type Id = EntityCode;

    fn id(&self) -> &Self::Id {
        &self.code
    }
}

impl Describable for Customer {
    fn describe(&self) -> String {
        format!(
            "Customer '{}' has purchased {} car(s).",
            self.name,
            self.purchases.len()
        )
    }
}
