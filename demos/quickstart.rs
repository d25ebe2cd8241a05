use chrono::Utc;
use daybreak::{
    horizon_position, julian_date, rise_set, snapshot, terminator_curve, Body, GeographicPoint,
    DEFAULT_LATITUDE_STEP,
};

fn main() -> daybreak::Result<()> {
    let now = Utc::now();
    let madrid = GeographicPoint::new(40.4168, -3.7038)?;

    let snap = snapshot(now)?;
    println!("{}", julian_date(now));
    println!("Sun overhead:  {}", snap.sun);
    println!("Moon overhead: {}", snap.moon);

    let moon = horizon_position(Body::Moon, now, madrid)?;
    println!("Moon from {madrid}: alt {:.2}°, az {:.2}°", moon.altitude, moon.azimuth);

    println!("{:?}", rise_set(now, madrid)?);

    let curve = terminator_curve(now, DEFAULT_LATITUDE_STEP)?;
    println!(
        "terminator: {} points in {} segment(s)",
        curve.len(),
        curve.segments().len()
    );
    Ok(())
}
