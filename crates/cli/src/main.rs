//! Demo entry point: stock a factory, run a scripted sale, and show that the
//! sold car's price is frozen. Domain errors are caught and printed locally;
//! none of them abort the run.

use anyhow::Result;

use autoconcern_core::{CodeRegistry, Describable, Money};
use autoconcern_dealership::{Customer, Factory};
use autoconcern_vehicles::Engine;

fn main() {
    autoconcern_observability::init();

    if let Err(err) = run() {
        eprintln!("fatal: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut registry = CodeRegistry::new();
    let mut factory = Factory::new();

    let bmw = factory.create_car(
        &mut registry,
        "BMW",
        "Series 3",
        Engine::new(300)?,
        Money::from_major(20_000, 50)?,
        2022,
    )?;
    let mercedes = factory.create_car(
        &mut registry,
        "Mercedes",
        "Series C",
        Engine::new(500)?,
        Money::from_major(22_000, 0)?,
        2022,
    )?;

    println!("Available cars in the factory:");
    for car in factory.available_cars() {
        println!("  {car}");
    }

    // Inventory cars can still be repriced.
    if let Some(car) = factory.car_mut(mercedes) {
        let new_price = car.apply_discount(5.0)?;
        println!("\nNew price of {} {}: {new_price}", car.name(), car.model());
    }

    let mut vika = Customer::new(&mut registry, "Vika", "123-456-7890")?;
    match vika.request_car(&mut factory, "Series 3")? {
        Some(code) => println!("\nCar {code} is now owned by {}.", vika.name()),
        None => println!("\nCar model 'Series 3' is not available."),
    }
    if vika.request_car(&mut factory, "Roadster")?.is_none() {
        println!("Car model 'Roadster' is not available.");
    }

    println!("\nCustomer details:");
    println!("{}", serde_json::to_string_pretty(&vika.get_details())?);
    println!("{}", vika.describe());

    println!("\nAvailable cars in the factory after the sale:");
    for car in factory.available_cars() {
        println!("  {car}");
    }

    // Both price mutations fail once the car is sold; report and move on.
    if let Some(car) = vika.purchase_mut(bmw) {
        if let Err(err) = car.apply_discount(10.0) {
            println!("\n{err}");
        }
        if let Err(err) = car.update_price(Money::from_major(18_000, 0)?) {
            println!("{err}");
        }
    }

    Ok(())
}
