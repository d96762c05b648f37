//! Shorthand constructors for common vectors and matrices.
//!
//! These return storage rather than expression nodes, so they can be used as named operands of
//! further expressions. The element type is picked by inference:
//!
//! ```
//! # use lazul_linalg::*;
//! let up: Vec3<f32> = y_axis_3d();
//! let m = identity_3x3::<f32>();
//! assert_eq!(Vector::from_expr(&m * &up).unwrap(), up);
//! ```

use crate::{
    error::{self, Result},
    Mat2, Mat2x3, Mat3, Mat3x2, Mat3x4, Mat4, Mat4x3, Matrix, One, Vec2, Vec3, Vec4, Vector, Zero,
};

/// Returns a vector with every element set to 0.
pub fn zero<T: Zero + Copy, const N: usize>() -> Vector<T, N> {
    Vector::ZERO
}

/// Returns the unit vector pointing along Cartesian axis `i`.
///
/// # Errors
///
/// Returns [`Error::InvalidIndex`][crate::Error::InvalidIndex] if `i` is not below `N`.
///
/// # Examples
///
/// ```
/// # use lazul_linalg::*;
/// assert_eq!(axis::<i32, 4>(3).unwrap(), vec4(0, 0, 0, 1));
/// assert!(axis::<i32, 4>(4).is_err());
/// ```
pub fn axis<T: Zero + One + Copy, const N: usize>(i: usize) -> Result<Vector<T, N>> {
    error::check_index("axis", i, N)?;
    let mut v = Vector::ZERO;
    v[i] = T::ONE;
    Ok(v)
}

pub fn zero_2d<T: Zero + Copy>() -> Vec2<T> {
    zero()
}

pub fn zero_3d<T: Zero + Copy>() -> Vec3<T> {
    zero()
}

pub fn zero_4d<T: Zero + Copy>() -> Vec4<T> {
    zero()
}

/// Returns the 2D unit vector along axis `i`.
pub fn axis_2d<T: Zero + One + Copy>(i: usize) -> Result<Vec2<T>> {
    axis(i)
}

/// Returns the 3D unit vector along axis `i`.
pub fn axis_3d<T: Zero + One + Copy>(i: usize) -> Result<Vec3<T>> {
    axis(i)
}

pub fn x_axis_2d<T: Zero + One + Copy>() -> Vec2<T> {
    Vec2::X
}

pub fn y_axis_2d<T: Zero + One + Copy>() -> Vec2<T> {
    Vec2::Y
}

pub fn x_axis_3d<T: Zero + One + Copy>() -> Vec3<T> {
    Vec3::X
}

pub fn y_axis_3d<T: Zero + One + Copy>() -> Vec3<T> {
    Vec3::Y
}

pub fn z_axis_3d<T: Zero + One + Copy>() -> Vec3<T> {
    Vec3::Z
}

/// Returns a matrix with every element set to 0.
pub fn zero_matrix<T: Zero + Copy, const R: usize, const C: usize>() -> Matrix<T, R, C> {
    Matrix::ZERO
}

/// Returns the `N`x`N` identity matrix.
pub fn identity<T: Zero + One + Copy, const N: usize>() -> Matrix<T, N, N> {
    Matrix::IDENTITY
}

/// Returns a matrix with 1 on its leading diagonal and 0 everywhere else.
///
/// For non-square shapes, this embeds the smaller space into the larger one, or projects the
/// larger one onto the smaller one, dropping the trailing coordinates.
///
/// # Examples
///
/// ```
/// # use lazul_linalg::*;
/// let v = vec3(1, 2, 3);
/// let p = identity_transform::<i32, 2, 3>();
/// assert_eq!(Vector::from_expr(&p * &v).unwrap(), vec2(1, 2));
/// ```
pub fn identity_transform<T: Zero + One + Copy, const R: usize, const C: usize>(
) -> Matrix<T, R, C> {
    Matrix::IDENTITY
}

pub fn zero_2x2<T: Zero + Copy>() -> Mat2<T> {
    zero_matrix()
}

pub fn zero_3x3<T: Zero + Copy>() -> Mat3<T> {
    zero_matrix()
}

pub fn zero_4x4<T: Zero + Copy>() -> Mat4<T> {
    zero_matrix()
}

pub fn identity_2x2<T: Zero + One + Copy>() -> Mat2<T> {
    identity()
}

pub fn identity_3x3<T: Zero + One + Copy>() -> Mat3<T> {
    identity()
}

pub fn identity_4x4<T: Zero + One + Copy>() -> Mat4<T> {
    identity()
}

pub fn identity_transform_3x2<T: Zero + One + Copy>() -> Mat3x2<T> {
    identity_transform()
}

pub fn identity_transform_2x3<T: Zero + One + Copy>() -> Mat2x3<T> {
    identity_transform()
}

pub fn identity_transform_4x3<T: Zero + One + Copy>() -> Mat4x3<T> {
    identity_transform()
}

pub fn identity_transform_3x4<T: Zero + One + Copy>() -> Mat3x4<T> {
    identity_transform()
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn vectors() {
        assert_eq!(zero_4d::<u8>(), [0; 4]);
        assert_eq!(axis_2d::<i32>(1).unwrap(), y_axis_2d());
        assert_eq!(axis_3d::<f32>(2).unwrap(), z_axis_3d());
        assert_eq!(x_axis_3d::<i32>(), vec3(1, 0, 0));
        assert_eq!(zero_3d::<f64>(), vec3(0.0, 0.0, 0.0));
        assert_eq!(x_axis_3d::<f64>(), axis_3d(0).unwrap());
        assert_eq!(y_axis_3d::<f64>(), axis_3d(1).unwrap());
        assert_eq!(
            axis_3d::<f32>(3),
            Err(Error::InvalidIndex {
                op: "axis",
                index: 3,
                bound: 3,
            })
        );
    }

    #[test]
    fn matrices() {
        assert_eq!(identity_2x2::<i32>(), Matrix::from_rows([[1, 0], [0, 1]]));
        assert_eq!(zero_3x3::<i32>(), Mat3::ZERO);
        assert_eq!(
            identity_transform_3x2::<i32>(),
            Matrix::from_rows([[1, 0], [0, 1], [0, 0]])
        );
        assert_eq!(
            identity_transform_3x4::<i32>(),
            Matrix::from_rows([[1, 0, 0, 0], [0, 1, 0, 0], [0, 0, 1, 0]])
        );
    }

    #[test]
    fn identity_is_neutral() {
        let m = Matrix::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        let i = identity_3x3::<i32>();
        assert_eq!(Matrix::from_expr(&m * &i).unwrap(), m);
        assert_eq!(Matrix::from_expr(&i * &m).unwrap(), m);

        // Embedding into 4D and projecting back is lossless.
        let v = vec3(1, 2, 3);
        let up = identity_transform_4x3::<i32>();
        let down = identity_transform_3x4::<i32>();
        assert_eq!(Vector::from_expr(&down * (&up * &v)).unwrap(), v);
    }
}
