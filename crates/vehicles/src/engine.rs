use serde::{Deserialize, Serialize};

use autoconcern_core::{Describable, DomainError, DomainResult};

/// An engine with a horsepower rating.
///
/// Invariant: horsepower is strictly positive at all times; every mutation
/// re-validates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engine {
    horsepower: i32,
}

impl Engine {
    pub fn new(horsepower: i32) -> DomainResult<Self> {
        Self::validate(horsepower)?;
        Ok(Self { horsepower })
    }

    pub fn horsepower(&self) -> i32 {
        self.horsepower
    }

    pub fn set_horsepower(&mut self, value: i32) -> DomainResult<()> {
        Self::validate(value)?;
        self.horsepower = value;
        Ok(())
    }

    fn validate(horsepower: i32) -> DomainResult<()> {
        if horsepower <= 0 {
            return Err(DomainError::validation(format!(
                "horsepower must be a positive number, got {horsepower}"
            )));
        }
        Ok(())
    }
}

impl Describable for Engine {
    fn describe(&self) -> String {
        format!("Engine Horsepower: {} HP", self.horsepower)
    }
}
