use closest_pair::{ClosestPairIndex, PairResult, Point, SortedPoints};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstar::RTree;

// Closest pair distance using rstar nearest neighbor queries
fn rstar_closest_distance(points: &[Point<f64>]) -> f64 {
    let tree = RTree::bulk_load(points.iter().map(|p| [p.x, p.y]).collect());
    tree.iter()
        .filter_map(|p| tree.nearest_neighbor_iter(p).nth(1).map(|q| (p, q)))
        .map(|(p, q)| Point::new(p[0], p[1]).distance_to(&Point::new(q[0], q[1])))
        .fold(f64::INFINITY, f64::min)
}

// Closest pair distance using the divide-and-conquer search
fn divide_closest_distance(points: &[Point<f64>]) -> f64 {
    let index = SortedPoints::from_points(points.to_vec());
    match index.closest_pair() {
        PairResult::Pair { distance, .. } => distance,
        PairResult::NoPair => f64::INFINITY,
    }
}

fn main() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut mismatches = 0;

    for round in 0..100 {
        let n = rng.gen_range(2..5_000);
        // Narrow scenes stress the y window: wide in x, shallow in y
        let height = if round % 2 == 0 { 1080.0 } else { 4.0 };
        let points: Vec<Point<f64>> = (0..n)
            .map(|_| Point::new(rng.gen_range(0.0..1920.0), rng.gen_range(0.0..height)))
            .collect();

        let expected = rstar_closest_distance(&points);
        let actual = divide_closest_distance(&points);
        if expected != actual {
            mismatches += 1;
            println!(
                "round {}: {} points, rstar {} vs divide {}",
                round, n, expected, actual
            );
        }
    }

    println!("{} mismatches in 100 rounds", mismatches);
}
