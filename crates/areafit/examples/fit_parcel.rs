//! Fit a small parcel to a target planar area and print each figure.
//!
//! Usage:
//!   cargo run -p areafit --example fit_parcel -- 12345.67

use areafit::api::{fit_area, planar_stats, MatchCfg, Projector};
use areafit::{Collection, LonLat, Polygon, Xy};

fn main() {
    let target: f64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(12_345.67);
    let pr = Projector::default();
    let c = pr.forward(LonLat::new(13.405, 52.52));
    let ring = [(0.0, 0.0), (120.0, 0.0), (150.0, 70.0), (10.0, 90.0)]
        .iter()
        .map(|&(x, y)| pr.inverse(c + Xy::new(x, y)))
        .collect();
    let fc = Collection::from_polygons([Polygon::new(ring, vec![])]);

    let before = planar_stats(&pr, &fc);
    println!(
        "before: area={:.2} m² width={:.2} m height={:.2} m",
        before.area,
        before.width(),
        before.height()
    );
    match fit_area(&pr, &fc, target, MatchCfg::default()) {
        Ok(fitted) => {
            let after = planar_stats(&pr, &fitted.collection);
            println!(
                "after {} step(s): area={:.2} m² width={:.2} m height={:.2} m",
                fitted.steps,
                after.area,
                after.width(),
                after.height()
            );
        }
        Err(e) => eprintln!("fit failed: {e}"),
    }
}
