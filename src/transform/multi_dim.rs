//! 2-D and 3-D extensions of any 1-D [`Transform`].
//!
//! Forward runs the 1-D transform along the last axis first and then along the
//! remaining axes; reverse undoes the passes in the opposite order. Lanes are
//! independent, so each pass runs in parallel.

use super::Transform;
use crate::error::{TransformError, TransformResult};
use ndarray::{Array2, Array3, ArrayViewMut1, Axis};
use rayon::prelude::*;

fn check_shape(shape: &[usize]) -> TransformResult<()> {
    if shape.iter().any(|&d| d == 0) {
        return Err(TransformError::EmptyAxis {
            shape: shape.to_vec(),
        });
    }
    Ok(())
}

fn apply_lane<F>(mut lane: ArrayViewMut1<f64>, op: &F) -> TransformResult<()>
where
    F: Fn(&[f64]) -> TransformResult<Vec<f64>> + Sync,
{
    let values = lane.to_vec();
    let out = op(&values)?;
    for (dst, src) in lane.iter_mut().zip(out) {
        *dst = src;
    }
    Ok(())
}

/// Applies `op` to every 1-D lane that runs along `axis`.
fn apply_along_2d<F>(data: &mut Array2<f64>, axis: Axis, op: &F) -> TransformResult<()>
where
    F: Fn(&[f64]) -> TransformResult<Vec<f64>> + Sync,
{
    // Axis(1) 레인(행)은 Axis(0) 으로, Axis(0) 레인(열)은 Axis(1) 으로 순회
    let outer = Axis(1 - axis.index());
    data.axis_iter_mut(outer)
        .into_par_iter()
        .try_for_each(|lane| apply_lane(lane, op))
}

fn apply_along_3d<F>(data: &mut Array3<f64>, axis: Axis, op: &F) -> TransformResult<()>
where
    F: Fn(&[f64]) -> TransformResult<Vec<f64>> + Sync,
{
    // 나머지 두 축으로 평면을 순회한 뒤 각 평면에서 레인을 처리
    let (first, second) = match axis.index() {
        0 => (Axis(1), Axis(1)),
        1 => (Axis(0), Axis(1)),
        _ => (Axis(0), Axis(0)),
    };
    data.axis_iter_mut(first)
        .into_par_iter()
        .try_for_each(|mut plane| -> TransformResult<()> {
            for lane in plane.axis_iter_mut(second) {
                apply_lane(lane, op)?;
            }
            Ok(())
        })
}

/// 2-D forward: every row, then every column.
pub fn forward_2d<T: Transform + ?Sized>(
    transform: &T,
    matrix: &Array2<f64>,
    levels: Option<usize>,
) -> TransformResult<Array2<f64>> {
    check_shape(matrix.shape())?;
    let op = |lane: &[f64]| transform.forward_with(lane, levels);
    let mut out = matrix.clone();
    apply_along_2d(&mut out, Axis(1), &op)?;
    apply_along_2d(&mut out, Axis(0), &op)?;
    Ok(out)
}

/// 2-D reverse: every column, then every row.
pub fn reverse_2d<T: Transform + ?Sized>(
    transform: &T,
    matrix: &Array2<f64>,
    levels: Option<usize>,
) -> TransformResult<Array2<f64>> {
    check_shape(matrix.shape())?;
    let op = |lane: &[f64]| transform.reverse_with(lane, levels);
    let mut out = matrix.clone();
    apply_along_2d(&mut out, Axis(0), &op)?;
    apply_along_2d(&mut out, Axis(1), &op)?;
    Ok(out)
}

/// 3-D forward: the 2-D transform on each `[i, .., ..]` plane, then along axis 0.
pub fn forward_3d<T: Transform + ?Sized>(
    transform: &T,
    space: &Array3<f64>,
    levels: Option<usize>,
) -> TransformResult<Array3<f64>> {
    check_shape(space.shape())?;
    let op = |lane: &[f64]| transform.forward_with(lane, levels);
    let mut out = space.clone();
    apply_along_3d(&mut out, Axis(2), &op)?;
    apply_along_3d(&mut out, Axis(1), &op)?;
    apply_along_3d(&mut out, Axis(0), &op)?;
    Ok(out)
}

/// 3-D reverse, the exact mirror of [`forward_3d`].
pub fn reverse_3d<T: Transform + ?Sized>(
    transform: &T,
    space: &Array3<f64>,
    levels: Option<usize>,
) -> TransformResult<Array3<f64>> {
    check_shape(space.shape())?;
    let op = |lane: &[f64]| transform.reverse_with(lane, levels);
    let mut out = space.clone();
    apply_along_3d(&mut out, Axis(0), &op)?;
    apply_along_3d(&mut out, Axis(1), &op)?;
    apply_along_3d(&mut out, Axis(2), &op)?;
    Ok(out)
}
