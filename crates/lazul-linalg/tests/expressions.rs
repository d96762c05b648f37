use std::cell::Cell;

use approx::assert_relative_eq;
use lazul_linalg::*;
use rayon::prelude::*;

/// A 3D vector leaf whose elements can change behind shared references, and which counts how
/// often its elements are read.
struct Probe {
    values: [Cell<f64>; 3],
    reads: Cell<usize>,
}

impl Probe {
    fn new(values: [f64; 3]) -> Self {
        Self {
            values: values.map(Cell::new),
            reads: Cell::new(0),
        }
    }
}

impl ExprTraits for Probe {
    type Elem = f64;
    const RANK: usize = 1;
}

impl VectorExpr for Probe {
    type Size = Const<3>;

    fn size(&self) -> usize {
        3
    }

    fn get(&self, i: usize) -> f64 {
        self.reads.set(self.reads.get() + 1);
        self.values[i].get()
    }
}

fn random_matrix<const R: usize, const C: usize>(rng: &mut fastrand::Rng) -> Matrix<f64, R, C> {
    Matrix::from_fn(|_, _| rng.f64() * 2.0 - 1.0)
}

fn to_nalgebra<const R: usize, const C: usize>(m: &Matrix<f64, R, C>) -> nalgebra::DMatrix<f64> {
    nalgebra::DMatrix::from_fn(R, C, |row, col| m[(row, col)])
}

#[test]
fn nodes_are_lazy() {
    let probe = Probe::new([1.0, 2.0, 3.0]);
    let ones = vec3(1.0, 1.0, 1.0);

    let e = VecBinary::new(Borrowed::new(&probe), Borrowed::new(&ones), Plus) * 2.0;
    let e = -e;
    assert_eq!(probe.reads.get(), 0);

    let v = Vector::from_expr(&e).unwrap();
    assert_eq!(v, vec3(-4.0, -6.0, -8.0));
    assert_eq!(probe.reads.get(), 3);
}

#[test]
fn borrowed_operands_observe_their_referent() {
    let probe = Probe::new([1.0, 2.0, 3.0]);
    let offset = vec3(10.0, 20.0, 30.0);

    let e = VecBinary::new(Borrowed::new(&probe), Owned::new(offset), Minus);
    assert_eq!(e.left().capture(), Capture::Borrowed);
    assert_eq!(e.right().capture(), Capture::Owned);
    assert_eq!(Vector::from_expr(&e).unwrap(), vec3(-9.0, -18.0, -27.0));

    // Mutating the referent between evaluations is visible through the node.
    probe.values[1].set(0.0);
    assert_eq!(Vector::from_expr(&e).unwrap(), vec3(-9.0, -20.0, -27.0));

    // A copy of the node reads from the same referent.
    let copy = e.clone();
    probe.values[0].set(10.0);
    assert_eq!(Vector::from_expr(&copy).unwrap(), vec3(0.0, -20.0, -27.0));
}

#[test]
fn owned_operands_are_snapshots() {
    let mut a = vec3(1, 2, 3);
    let e = a + vec3(1, 1, 1);
    a[0] = 100;

    assert_eq!(Vector::from_expr(&e).unwrap(), vec3(2, 3, 4));
    assert_eq!(a, vec3(100, 2, 3));
}

#[test]
fn evaluation_is_pure() {
    let a = DMatrix::from_fn(6, 4, |r, c| (r * 4 + c) as f64);
    let b = DMatrix::from_fn(4, 5, |r, c| r as f64 - c as f64);
    let v = DVector::from_fn(5, |i| 1.0 / (i + 1) as f64);

    let e = &a * &b * &v;
    let reference = DVector::from_expr(&e).unwrap();

    let results: Vec<_> = (0..16)
        .into_par_iter()
        .map(|_| DVector::from_expr(&e).unwrap())
        .collect();
    for result in results {
        assert_eq!(result, reference);
    }
}

#[test]
fn shape_mismatches_are_reported_before_writing() {
    let a = DVector::from(vec![1.0, 2.0, 3.0]);
    let b = DVector::from(vec![1.0, 2.0]);
    let c = vec3(1.0, 1.0, 1.0);

    // The mismatch is buried inside the right operand of the outer node.
    let mut out = DVector::from(vec![7.0; 3]);
    let err = out.assign(&c + &a * 2.0 + (&c - &b)).unwrap_err();
    assert_eq!(
        err,
        Error::SizeMismatch {
            op: "subtract",
            expected: 3,
            found: 2,
        }
    );
    assert_eq!(out.as_slice(), &[7.0; 3]);

    // Destinations are never resized.
    let mut short = DVector::from(vec![0.0; 2]);
    assert!(short.assign(&a + &c).is_err());
    assert_eq!(short.len(), 2);

    let m = DMatrix::<f64>::zeros(3, 2);
    let mut out = DMatrix::<f64>::zeros(3, 3);
    assert_eq!(
        out.assign(&m * &m),
        Err(Error::SizeMismatch {
            op: "matrix multiply",
            expected: 2,
            found: 3,
        })
    );
}

#[test]
fn matrix_products_match_nalgebra() {
    let mut rng = fastrand::Rng::with_seed(0x5eed);

    for _ in 0..20 {
        let a = random_matrix::<3, 5>(&mut rng);
        let b = random_matrix::<5, 2>(&mut rng);
        let c = random_matrix::<3, 2>(&mut rng);

        let ours = Matrix::from_expr(&a * &b - &c * 0.5).unwrap();
        let theirs = to_nalgebra(&a) * to_nalgebra(&b) - to_nalgebra(&c) * 0.5;

        for row in 0..3 {
            for col in 0..2 {
                assert_relative_eq!(ours[(row, col)], theirs[(row, col)], epsilon = 1e-12);
            }
        }
    }
}

#[test]
fn mixed_fixed_and_dynamic_products() {
    let mut rng = fastrand::Rng::with_seed(42);
    let a = random_matrix::<4, 4>(&mut rng);
    let d = DMatrix::from_fn(4, 4, |r, c| a[(r, c)]);

    let fixed = Matrix::from_expr(&a * &a * transpose(&a)).unwrap();
    let mixed = DMatrix::from_expr(&d * &a * transpose(&d)).unwrap();
    assert_relative_eq!(DMatrix::from_fn(4, 4, |r, c| fixed[(r, c)]), mixed);
}

#[test]
fn cross_product_properties() {
    let mut rng = fastrand::Rng::with_seed(3);

    for _ in 0..50 {
        let a: Vec3<f64> = Vector::from_fn(|_| rng.f64() * 10.0 - 5.0);
        let b: Vec3<f64> = Vector::from_fn(|_| rng.f64() * 10.0 - 5.0);

        let ab = Vector::from_expr(cross(&a, &b)).unwrap();
        let ba = Vector::from_expr(cross(&b, &a)).unwrap();
        assert_relative_eq!(ab, Vector::from_expr(-ba).unwrap());

        // The result is orthogonal to both operands.
        assert_relative_eq!(dot(&ab, &a).unwrap(), 0.0, epsilon = 1e-9);
        assert_relative_eq!(dot(&ab, &b).unwrap(), 0.0, epsilon = 1e-9);

        let aa = Vector::from_expr(cross(&a, &a)).unwrap();
        assert_eq!(aa, Vec3::ZERO);
    }

    assert_eq!(
        Vector::from_expr(cross(x_axis_3d::<i32>(), y_axis_3d::<i32>())).unwrap(),
        z_axis_3d::<i32>()
    );
}

#[test]
fn builders_in_expressions() {
    let p = vec2(3.0, 4.0);
    let embed = identity_transform_3x2::<f64>();
    let lifted = Vector::from_expr(&embed * &p + z_axis_3d::<f64>()).unwrap();
    assert_eq!(lifted, vec3(3.0, 4.0, 1.0));
    assert_eq!(length(&lifted).unwrap(), 26.0_f64.sqrt());

    let mut m = identity_4x4::<i32>();
    m += identity_4x4::<i32>();
    m *= 3;
    assert_eq!(m, Matrix::from_fn(|r, c| if r == c { 6 } else { 0 }));
}
