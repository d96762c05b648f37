//! Run-time failures of expression evaluation.
//!
//! Everything that can be decided from the expression types alone (mismatched fixed sizes,
//! missing element traits, non-3D cross product operands) is rejected by the compiler instead.

/// Errors raised when a shape or index check fails at run time.
///
/// Checks always happen before the first element is written, so a destination is left untouched
/// when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Two vector extents that must agree do not.
    #[error("size mismatch in {op}: expected {expected}, found {found}")]
    SizeMismatch {
        op: &'static str,
        expected: usize,
        found: usize,
    },

    /// Two matrix shapes that must agree do not.
    #[error(
        "shape mismatch in {op}: expected {expected_rows}x{expected_cols}, found {found_rows}x{found_cols}"
    )]
    ShapeMismatch {
        op: &'static str,
        expected_rows: usize,
        expected_cols: usize,
        found_rows: usize,
        found_cols: usize,
    },

    /// An index argument (axis selector, cardinal axis) is out of range.
    #[error("invalid index in {op}: {index} is not below {bound}")]
    InvalidIndex {
        op: &'static str,
        index: usize,
        bound: usize,
    },
}

/// Result type of the fallible operations in this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

pub(crate) fn check_size(op: &'static str, expected: usize, found: usize) -> Result<()> {
    if expected == found {
        return Ok(());
    }

    let err = Error::SizeMismatch {
        op,
        expected,
        found,
    };
    log::debug!("rejecting expression: {err}");
    Err(err)
}

pub(crate) fn check_shape(
    op: &'static str,
    (expected_rows, expected_cols): (usize, usize),
    (found_rows, found_cols): (usize, usize),
) -> Result<()> {
    if expected_rows == found_rows && expected_cols == found_cols {
        return Ok(());
    }

    let err = Error::ShapeMismatch {
        op,
        expected_rows,
        expected_cols,
        found_rows,
        found_cols,
    };
    log::debug!("rejecting expression: {err}");
    Err(err)
}

pub(crate) fn check_index(op: &'static str, index: usize, bound: usize) -> Result<()> {
    if index < bound {
        return Ok(());
    }

    let err = Error::InvalidIndex { op, index, bound };
    log::debug!("rejecting argument: {err}");
    Err(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            check_size("add", 3, 4).unwrap_err().to_string(),
            "size mismatch in add: expected 3, found 4"
        );
        assert_eq!(
            check_shape("assign", (2, 3), (3, 2)).unwrap_err().to_string(),
            "shape mismatch in assign: expected 2x3, found 3x2"
        );
        assert_eq!(
            check_index("axis", 3, 3).unwrap_err().to_string(),
            "invalid index in axis: 3 is not below 3"
        );
    }

    #[test]
    fn passing_checks() {
        assert_eq!(check_size("add", 5, 5), Ok(()));
        assert_eq!(check_shape("add", (1, 2), (1, 2)), Ok(()));
        assert_eq!(check_index("axis", 2, 3), Ok(()));
    }
}
