use nalgebra::Vector2;
use once_cell::sync::Lazy;

/// Points generated randomly
/// ```python
/// from random import random
/// for i in range(10):
///     print(f"Vector2::new({random()*800:.3f}, {random()*600:.3f}),")
/// ```
pub static POINTS: Lazy<Vec<Vector2<f64>>> = Lazy::new(|| vec![
    Vector2::new(412.083, 96.417),
    Vector2::new(57.592, 311.280),
    Vector2::new(688.154, 520.936),
    Vector2::new(230.771, 47.005),
    Vector2::new(749.360, 268.814),
    Vector2::new(121.448, 583.129),
    Vector2::new(502.917, 402.663),
    Vector2::new(318.006, 150.372),
    Vector2::new(27.845, 455.091),
    Vector2::new(640.219, 12.774),
]);

/// A long editing session: the random points repeated and shifted to the right
pub static MANY_POINTS: Lazy<Vec<Vector2<f64>>> = Lazy::new(|| {
    (0..20)
        .flat_map(|i| {
            POINTS
                .iter()
                .map(move |p| p + Vector2::new(800.0 * i as f64, 0.0))
        })
        .collect()
});
