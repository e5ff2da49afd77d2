//! Minimal end-to-end example: read raw simulator samples, convert them and print them.

use fsunits::{Length, LengthUnit, Mass, MassUnit, Result, Speed, SpeedUnit, Temperature};

fn main() -> Result<()> {
    // Raw samples as a simulator would report them: value plus unit id.
    let altitude = Length::from_unit_id(35_000, 6)?;
    let airspeed = Speed::from_unit_id(450, 7)?;
    let fuel = Mass::parse("12000 lb")?;
    let oat = Temperature::from_celsius(-56.5)?;

    println!("altitude  {} ({:.1})", altitude, altitude.to_unit(LengthUnit::Kilometre));
    println!("airspeed  {} ({:.0})", airspeed, airspeed.to_unit(SpeedUnit::KilometrePerHour));
    println!("fuel      {} ({})", fuel, fuel.to_unit(MassUnit::Kilogram).format("F0")?);
    println!("oat       {} ({})", oat, oat.format("F2")?);

    let climb = Length::from_feet(2_000)?;
    let target = altitude + climb;
    assert!(target > Length::from_metres(11_000)?);
    println!("target    {}", target);

    Ok(())
}
