use oorandom::Rand32;
use thermovox3d::bounding_volume::{compute_aabb, Aabb};
use thermovox3d::math::{Point, Real};
use thermovox3d::shape::TriangleSoup;

fn random_coords(rng: &mut Rand32, num_triangles: usize) -> Vec<Real> {
    (0..num_triangles * 9)
        .map(|_| (rng.rand_float() as Real - 0.5) * 100.0)
        .collect()
}

#[test]
fn aabb_is_invariant_under_triangle_permutation() {
    let mut rng = Rand32::new(42);

    for num_triangles in [1, 2, 7, 50] {
        let coords = random_coords(&mut rng, num_triangles);
        let aabb = compute_aabb(&coords).unwrap();

        let mut triangles: Vec<_> = coords.chunks_exact(9).map(|t| t.to_vec()).collect();
        for i in (1..triangles.len()).rev() {
            let j = rng.rand_range(0..i as u32 + 1) as usize;
            triangles.swap(i, j);
        }
        let shuffled: Vec<Real> = triangles.concat();

        assert_eq!(compute_aabb(&shuffled), Some(aabb));
    }
}

#[test]
fn aabb_contains_every_vertex() {
    let mut rng = Rand32::new(7);
    let soup = TriangleSoup::new(random_coords(&mut rng, 30)).unwrap();
    let aabb = soup.local_aabb().unwrap();

    for pt in soup.vertices() {
        assert!(aabb.contains_local_point(&pt));
    }

    // The bounds are attained by some vertex along each axis.
    for axis in 0..3 {
        assert!(soup.vertices().any(|pt| pt[axis] == aabb.mins[axis]));
        assert!(soup.vertices().any(|pt| pt[axis] == aabb.maxs[axis]));
    }
}

#[test]
fn single_point_aabb_is_flat() {
    let aabb = compute_aabb(&[1.0, -2.0, 3.0]).unwrap();
    assert_eq!(aabb, Aabb::new(Point::new(1.0, -2.0, 3.0), Point::new(1.0, -2.0, 3.0)));
    assert_eq!(compute_aabb(&[]), None);
}
