//! Conversions between Cartesian, polar, cylindrical and spherical coordinates.
//!
//! The 3D conversions take an `axis` (0, 1 or 2) selecting the Cartesian axis that acts as the
//! cylinder's height axis or the sphere's pole. The remaining two axes follow it in cyclic order
//! (see [`cyclic_permutation`]), so `axis = 2` gives the usual `x = r cos θ`, `y = r sin θ`,
//! `z = h` layout.
//!
//! Destinations and sources must have length 3 (or 2 for the polar conversions). This is checked
//! at compile time for fixed-size vectors and before any element is written for [`DVector`]s.
//!
//! Angle extraction is unstable for points very close to the origin or the pole, so the
//! `cartesian_to_*` functions clamp the affected angles to 0 when the relevant radius is below a
//! tolerance. The plain functions use [`Float::EPSILON`]; the `*_tol` variants take the tolerance
//! as an argument.
//!
//! [`DVector`]: crate::DVector

use crate::{
    error::{self, Result},
    length, DimOf, Float, Trig, VectorExpr, VectorStorage, Zero,
};

/// Returns the cyclic permutation `(i, j, k)` of `(0, 1, 2)` starting at `i`.
///
/// `i` must be below 3.
#[inline]
pub(crate) fn permute(i: usize) -> (usize, usize, usize) {
    let j = (i + 1) % 3;
    let k = (j + 1) % 3;
    (i, j, k)
}

/// Returns the cyclic permutation of `(0, 1, 2)` that starts at `axis`.
///
/// # Errors
///
/// Returns [`Error::InvalidIndex`][crate::Error::InvalidIndex] if `axis` is not 0, 1 or 2.
///
/// # Examples
///
/// ```
/// # use lazul_linalg::*;
/// assert_eq!(cyclic_permutation(0).unwrap(), (0, 1, 2));
/// assert_eq!(cyclic_permutation(1).unwrap(), (1, 2, 0));
/// assert_eq!(cyclic_permutation(2).unwrap(), (2, 0, 1));
/// assert!(cyclic_permutation(3).is_err());
/// ```
pub fn cyclic_permutation(axis: usize) -> Result<(usize, usize, usize)> {
    error::check_index("cyclic permutation", axis, 3)?;
    Ok(permute(axis))
}

/// Selects how the elevation angle of spherical coordinates is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SphericalKind {
    /// The angle is measured from the equator (the plane orthogonal to the pole axis).
    Latitude,
    /// The angle is measured from the pole axis.
    Colatitude,
}

impl SphericalKind {
    /// Converts a colatitude to this kind of angle, or this kind of angle to a colatitude.
    ///
    /// Both directions use the same formula: for [`SphericalKind::Latitude`] the result is
    /// `π/2 - phi`, for [`SphericalKind::Colatitude`] it is `phi` unchanged.
    pub fn convert<T: Float>(self, phi: T) -> T {
        match self {
            Self::Latitude => T::FRAC_PI_2 - phi,
            Self::Colatitude => phi,
        }
    }
}

/// 2D polar coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polar<T> {
    pub radius: T,
    /// Angle to the positive X axis, in radians.
    pub theta: T,
}

/// Cylindrical coordinates around one of the three Cartesian axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylindrical<T> {
    /// Distance from the height axis.
    pub radius: T,
    /// Azimuth, in radians.
    pub theta: T,
    /// Position along the height axis.
    pub height: T,
}

/// Spherical coordinates around one of the three Cartesian axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical<T> {
    /// Distance from the origin.
    pub radius: T,
    /// Azimuth, in radians.
    pub theta: T,
    /// Elevation, in radians, interpreted according to a [`SphericalKind`].
    pub phi: T,
}

fn hypot<T: Float>(a: T, b: T) -> T {
    (a * a + b * b).sqrt()
}

fn check_destination<D>(op: &'static str, len: usize, v: &D) -> Result<()>
where
    D: VectorExpr,
{
    v.validate()?;
    error::check_size(op, len, v.size())
}

/// Writes the Cartesian position of cylindrical coordinates into `v`.
///
/// # Errors
///
/// Fails if `axis` is not below 3 or if `v` is a dynamically-sized vector whose length is not 3.
/// `v` is left unchanged on error.
///
/// # Examples
///
/// ```
/// # use lazul_linalg::*;
/// let mut v = Vec3::ZERO;
/// cylindrical_to_cartesian(2.0, 0.0, 5.0, 2, &mut v).unwrap();
/// assert_eq!(v, vec3(2.0, 0.0, 5.0));
/// ```
pub fn cylindrical_to_cartesian<T, D>(
    radius: T,
    theta: T,
    height: T,
    axis: usize,
    v: &mut D,
) -> Result<()>
where
    T: Float,
    D: VectorStorage<Elem = T>,
    D::Size: DimOf<3>,
{
    check_destination("cylindrical to cartesian", 3, v)?;
    let (i, j, k) = cyclic_permutation(axis)?;

    v.set(i, height);
    v.set(j, theta.cos() * radius);
    v.set(k, theta.sin() * radius);
    Ok(())
}

/// Writes the Cartesian position of spherical coordinates into `v`.
///
/// `phi` is interpreted according to `kind`.
///
/// # Errors
///
/// Fails if `axis` is not below 3 or if `v` is a dynamically-sized vector whose length is not 3.
/// `v` is left unchanged on error.
pub fn spherical_to_cartesian<T, D>(
    radius: T,
    theta: T,
    phi: T,
    axis: usize,
    kind: SphericalKind,
    v: &mut D,
) -> Result<()>
where
    T: Float,
    D: VectorStorage<Elem = T>,
    D::Size: DimOf<3>,
{
    check_destination("spherical to cartesian", 3, v)?;
    let (i, j, k) = cyclic_permutation(axis)?;

    let phi = kind.convert(phi);
    let sin_phi_r = phi.sin() * radius;
    v.set(i, phi.cos() * radius);
    v.set(j, sin_phi_r * theta.cos());
    v.set(k, sin_phi_r * theta.sin());
    Ok(())
}

/// Writes the Cartesian position of polar coordinates into `v`.
///
/// # Errors
///
/// Fails if `v` is a dynamically-sized vector whose length is not 2.
pub fn polar_to_cartesian<T, D>(radius: T, theta: T, v: &mut D) -> Result<()>
where
    T: Float,
    D: VectorStorage<Elem = T>,
    D::Size: DimOf<2>,
{
    check_destination("polar to cartesian", 2, v)?;

    v.set(0, theta.cos() * radius);
    v.set(1, theta.sin() * radius);
    Ok(())
}

/// Converts a Cartesian position to cylindrical coordinates around `axis`.
///
/// # Errors
///
/// Fails if `axis` is not below 3, or if `v` is not a valid expression of length 3.
///
/// # Examples
///
/// ```
/// # use lazul_linalg::*;
/// let c = cartesian_to_cylindrical(vec3(0.0, 3.0, 1.0), 2).unwrap();
/// assert_eq!(c.radius, 3.0);
/// assert_eq!(c.height, 1.0);
/// assert!((c.theta - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// ```
pub fn cartesian_to_cylindrical<E>(v: E, axis: usize) -> Result<Cylindrical<E::Elem>>
where
    E: VectorExpr,
    E::Size: DimOf<3>,
    E::Elem: Float,
{
    cartesian_to_cylindrical_tol(v, axis, <E::Elem as Float>::EPSILON)
}

/// Converts a Cartesian position to cylindrical coordinates around `axis`.
///
/// `theta` is 0 if the radius is below `tolerance`.
pub fn cartesian_to_cylindrical_tol<E>(
    v: E,
    axis: usize,
    tolerance: E::Elem,
) -> Result<Cylindrical<E::Elem>>
where
    E: VectorExpr,
    E::Size: DimOf<3>,
    E::Elem: Float,
{
    check_destination("cartesian to cylindrical", 3, &v)?;
    let (i, j, k) = cyclic_permutation(axis)?;

    let (vi, vj, vk) = (v.get(i), v.get(j), v.get(k));
    let radius = hypot(vj, vk);
    let theta = if radius < tolerance {
        E::Elem::ZERO
    } else {
        vk.atan2(vj)
    };
    Ok(Cylindrical {
        radius,
        theta,
        height: vi,
    })
}

/// Converts a Cartesian position to spherical coordinates around `axis`.
///
/// # Errors
///
/// Fails if `axis` is not below 3, or if `v` is not a valid expression of length 3.
pub fn cartesian_to_spherical<E>(
    v: E,
    axis: usize,
    kind: SphericalKind,
) -> Result<Spherical<E::Elem>>
where
    E: VectorExpr,
    E::Size: DimOf<3>,
    E::Elem: Float,
{
    cartesian_to_spherical_tol(v, axis, kind, <E::Elem as Float>::EPSILON)
}

/// Converts a Cartesian position to spherical coordinates around `axis`.
///
/// `theta` is 0 if the distance from the pole axis is below `tolerance`, and `phi` is 0 if the
/// distance from the origin is below `tolerance`.
pub fn cartesian_to_spherical_tol<E>(
    v: E,
    axis: usize,
    kind: SphericalKind,
    tolerance: E::Elem,
) -> Result<Spherical<E::Elem>>
where
    E: VectorExpr,
    E::Size: DimOf<3>,
    E::Elem: Float,
{
    check_destination("cartesian to spherical", 3, &v)?;
    let (i, j, k) = cyclic_permutation(axis)?;

    let (vi, vj, vk) = (v.get(i), v.get(j), v.get(k));
    let len = hypot(vj, vk);
    let theta = if len < tolerance {
        E::Elem::ZERO
    } else {
        vk.atan2(vj)
    };
    let radius = hypot(vi, len);
    let phi = if radius < tolerance {
        E::Elem::ZERO
    } else {
        kind.convert(len.atan2(vi))
    };
    Ok(Spherical { radius, theta, phi })
}

/// Converts a 2D Cartesian position to polar coordinates.
///
/// # Errors
///
/// Fails if `v` is not a valid expression of length 2.
pub fn cartesian_to_polar<E>(v: E) -> Result<Polar<E::Elem>>
where
    E: VectorExpr,
    E::Size: DimOf<2>,
    E::Elem: Float,
{
    cartesian_to_polar_tol(v, <E::Elem as Float>::EPSILON)
}

/// Converts a 2D Cartesian position to polar coordinates.
///
/// `theta` is 0 if the radius is below `tolerance`.
pub fn cartesian_to_polar_tol<E>(v: E, tolerance: E::Elem) -> Result<Polar<E::Elem>>
where
    E: VectorExpr,
    E::Size: DimOf<2>,
    E::Elem: Float,
{
    check_destination("cartesian to polar", 2, &v)?;

    let radius = length(&v)?;
    let theta = if radius < tolerance {
        E::Elem::ZERO
    } else {
        v.get(1).atan2(v.get(0))
    };
    Ok(Polar { radius, theta })
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use approx::assert_relative_eq;

    use crate::*;

    #[test]
    fn permutations() {
        assert_eq!(super::permute(0), (0, 1, 2));
        assert_eq!(super::permute(2), (2, 0, 1));
        assert_eq!(
            cyclic_permutation(7),
            Err(Error::InvalidIndex {
                op: "cyclic permutation",
                index: 7,
                bound: 3,
            })
        );
    }

    #[test]
    fn spherical_kind() {
        assert_eq!(SphericalKind::Colatitude.convert(0.25_f64), 0.25);
        assert_relative_eq!(SphericalKind::Latitude.convert(0.25_f64), FRAC_PI_2 - 0.25);
        assert_relative_eq!(SphericalKind::Latitude.convert(FRAC_PI_2), 0.0);
    }

    #[test]
    fn cylindrical_axes() {
        let mut v = Vec3::ZERO;
        cylindrical_to_cartesian(1.0, FRAC_PI_2, 4.0, 0, &mut v).unwrap();
        assert_relative_eq!(v, vec3(4.0, 0.0, 1.0), epsilon = 1e-12);

        cylindrical_to_cartesian(1.0, 0.0, 4.0, 1, &mut v).unwrap();
        assert_relative_eq!(v, vec3(0.0, 4.0, 1.0), epsilon = 1e-12);

        let c = cartesian_to_cylindrical(vec3(-2.0, 0.0, 7.0), 2).unwrap();
        assert_relative_eq!(c.radius, 2.0);
        assert_relative_eq!(c.theta, PI);
        assert_relative_eq!(c.height, 7.0);
    }

    #[test]
    fn spherical_kinds_agree() {
        let mut a = Vec3::ZERO;
        let mut b = Vec3::ZERO;
        spherical_to_cartesian(2.0, FRAC_PI_4, 0.5, 2, SphericalKind::Colatitude, &mut a).unwrap();
        spherical_to_cartesian(2.0, FRAC_PI_4, FRAC_PI_2 - 0.5, 2, SphericalKind::Latitude, &mut b)
            .unwrap();
        assert_relative_eq!(a, b, epsilon = 1e-12);

        let s = cartesian_to_spherical(&a, 2, SphericalKind::Latitude).unwrap();
        assert_relative_eq!(s.radius, 2.0, epsilon = 1e-12);
        assert_relative_eq!(s.theta, FRAC_PI_4, epsilon = 1e-12);
        assert_relative_eq!(s.phi, FRAC_PI_2 - 0.5, epsilon = 1e-12);
    }

    #[test]
    fn polar() {
        let mut v = Vec2::ZERO;
        polar_to_cartesian(2.0, FRAC_PI_2, &mut v).unwrap();
        assert_relative_eq!(v, vec2(0.0, 2.0), epsilon = 1e-12);

        let p = cartesian_to_polar(vec2(0.0_f32, -3.0)).unwrap();
        assert_eq!(p.radius, 3.0);
        assert_relative_eq!(p.theta, -std::f32::consts::FRAC_PI_2);
    }

    #[test]
    fn degenerate_angles_clamp_to_zero() {
        let c = cartesian_to_cylindrical(vec3(5.0, 0.0, 0.0), 0).unwrap();
        assert_eq!((c.radius, c.theta, c.height), (0.0, 0.0, 5.0));

        let s = cartesian_to_spherical(Vec3::<f64>::ZERO, 1, SphericalKind::Latitude).unwrap();
        assert_eq!((s.radius, s.theta, s.phi), (0.0, 0.0, 0.0));

        let p = cartesian_to_polar_tol(vec2(1e-4, 1e-4), 1e-3).unwrap();
        assert_eq!(p.theta, 0.0);
        let p = cartesian_to_polar_tol(vec2(1e-4, 1e-4), 1e-6).unwrap();
        assert_relative_eq!(p.theta, FRAC_PI_4);
    }

    #[test]
    fn sources_can_be_expressions() {
        let a = vec3(1.0, 1.0, 0.0);
        let b = vec3(0.0, 0.0, 1.0);
        let c = cartesian_to_cylindrical(&a * 2.0 + &b, 2).unwrap();
        assert_relative_eq!(c.radius, 8.0_f64.sqrt());
        assert_relative_eq!(c.theta, FRAC_PI_4);
        assert_relative_eq!(c.height, 1.0);
    }

    #[test]
    fn dynamic_lengths_are_checked() {
        let mut short = DVector::<f64>::zeros(2);
        assert_eq!(
            cylindrical_to_cartesian(1.0, 0.0, 1.0, 2, &mut short),
            Err(Error::SizeMismatch {
                op: "cylindrical to cartesian",
                expected: 3,
                found: 2,
            })
        );
        assert_eq!(short, DVector::zeros(2));

        let mut ok = DVector::<f64>::zeros(3);
        cylindrical_to_cartesian(1.0, 0.0, 1.0, 2, &mut ok).unwrap();
        assert_eq!(ok.as_slice(), &[1.0, 0.0, 1.0]);

        assert!(cartesian_to_polar(&ok).is_err());
        assert!(cartesian_to_spherical(&ok, 3, SphericalKind::Colatitude).is_err());
    }

    #[test]
    fn length_is_checked_before_axis() {
        let mut short = DVector::<f64>::zeros(2);
        let size_error = |op| Error::SizeMismatch {
            op,
            expected: 3,
            found: 2,
        };
        assert_eq!(
            cylindrical_to_cartesian(1.0, 0.0, 1.0, 5, &mut short),
            Err(size_error("cylindrical to cartesian"))
        );
        assert_eq!(
            spherical_to_cartesian(1.0, 0.0, 0.0, 5, SphericalKind::Latitude, &mut short),
            Err(size_error("spherical to cartesian"))
        );
        assert_eq!(
            cartesian_to_cylindrical(&short, 5),
            Err(size_error("cartesian to cylindrical"))
        );
        assert_eq!(
            cartesian_to_spherical(&short, 5, SphericalKind::Colatitude),
            Err(size_error("cartesian to spherical"))
        );
        assert_eq!(short, DVector::zeros(2));
    }

    #[test]
    fn generic_over_element_type() {
        let c = cartesian_to_cylindrical(vec3(0.0_f32, 0.0, 2.0), 2).unwrap();
        assert_eq!((c.radius, c.theta, c.height), (0.0, 0.0, 2.0));
        let p = vec3(0.0_f32, 1.0, 0.0);
        let s = cartesian_to_spherical_tol(p, 1, SphericalKind::Colatitude, 1e-3).unwrap();
        assert_eq!((s.radius, s.theta, s.phi), (1.0, 0.0, 0.0));
        let polar = cartesian_to_polar(DVector::from(vec![1.0_f32, 0.0])).unwrap();
        assert_eq!((polar.radius, polar.theta), (1.0, 0.0));
    }
}
