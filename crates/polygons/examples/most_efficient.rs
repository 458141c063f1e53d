//! Most efficient regular polygon for a few radii.
//!
//! Prints, for each circumradius, which edge count maximizes area/perimeter among
//! 3..=64 edges. Because the apothem is rounded to two decimals, small radii saturate
//! early and the winner is far below the largest edge count.

use polygons::prelude::*;

fn main() -> Result<(), PolygonError> {
    let max_edges = 64;
    for radius in [0.5, 1.0, 10.0, 100.0, 1000.0] {
        let coll = PolygonCollection::new(max_edges, radius)?;
        let best = coll.efficiency();
        println!(
            "{coll} best_edges={} ratio={:.6} area={:.6}",
            best.edge_count(),
            best.ratio(),
            best.area()
        );
    }
    let square = RegularPolygon::new(4, 10.0)?;
    println!("{}", square.details());
    Ok(())
}
