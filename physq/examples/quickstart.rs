//! Tour of the `physq` API.
//!
//! Run with `cargo run -p physq --example quickstart`. Set `PHYSQ_CONFIG` to a TOML file to change the tolerances.

use physq::constants::{GRAVITATIONAL_CONSTANT, SOLAR_MASS};
use physq::length::{AstronomicalUnit, Kilometer};
use physq::mechanics::{KilometerPerHour, Velocity};
use physq::time::{Day, Second};
use physq::{Dimension, Quantity, Settings, Unit, Value, Vector3};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Dynamic values carry their dimension at runtime.
    let distance = Value::new(100.0, Dimension::LENGTH);
    let time = Value::new(9.58, Dimension::TIME);
    println!("sprint speed: {:.3}", distance / time);

    if let Err(e) = distance.try_add(time) {
        println!("rejected: {e}");
    }

    // Typed quantities check kinds at compile time.
    let v: Quantity<Velocity> = Kilometer::of(42.195) / Second::of(7_299.0);
    println!("marathon record pace: {:.2} km/h", v.in_unit::<KilometerPerHour>());

    // Circular orbital speed around the Sun at 1 au.
    let r = Value::from(AstronomicalUnit::of(1.0));
    let speed = (GRAVITATIONAL_CONSTANT * Value::from(SOLAR_MASS) / r).sqrt()?;
    let speed = Quantity::<Velocity>::try_from(speed)?;
    println!("orbital speed: {:.2} km/s", speed.value() / 1_000.0);
    println!("distance per day: {:.0} km", (speed * Day::of(1.0)).in_unit::<Kilometer>());

    // Vectors share one dimension across components.
    let lever = Vector3::from_array([0.0, 0.3, 0.0], Dimension::LENGTH);
    let force = Vector3::from_array([12.0, 0.0, 5.0], Dimension::FORCE);
    let torque = lever.cross(force);
    println!("torque: {torque:.2} (|τ| = {:.2})", torque.magnitude()?);
    println!("angle: {:.1}°", lever.angle_between(force)?.to_degrees());

    let settings = Settings::global();
    println!(
        "torque ⟂ lever under configured tolerance: {}",
        settings.is_perpendicular(torque, lever)
    );

    Ok(())
}
