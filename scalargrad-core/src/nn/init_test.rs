use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_uniform_parameter_in_range() {
    let mut g = Graph::new();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1000 {
        let p = uniform_parameter(&mut g, &mut rng);
        let v = g.value(p);
        assert!((-1.0..=1.0).contains(&v), "value {} out of [-1, 1]", v);
        assert!(g.is_leaf(p));
        assert_eq!(g.grad(p), 0.0);
    }
}

#[test]
fn test_seeded_initialization_reproducible() {
    let draw = |seed: u64| {
        let mut g = Graph::new();
        let mut rng = StdRng::seed_from_u64(seed);
        (0..16)
            .map(|_| {
                let p = uniform_parameter(&mut g, &mut rng);
                g.value(p)
            })
            .collect::<Vec<f64>>()
    };
    assert_eq!(draw(42), draw(42));
    assert_ne!(draw(42), draw(43));
}
