//! Generalized axis moves for dynamic-dimensional arrays.
//!
//! ```
//! use ndarray as nd;
//! use hermite::axes::move_axes;
//!
//! let a: nd::ArrayD<f64> = nd::ArrayD::zeros(vec![11, 2, 3, 4]);
//! let b = move_axes(a, &[0, 1, 2, 3], &[3, 1, 0, 2]).unwrap();
//! assert_eq!(b.shape(), &[3, 2, 4, 11]);
//! ```

use ndarray as nd;
use crate::error::{ AxisError, LengthError };

pub type AxisResult<T> = Result<T, AxisError>;

/// A mapping from source to destination axis positions.
///
/// Negative indices count backward from the last axis, so that `-1` refers to
/// the last axis of whatever array the mapping is eventually applied to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AxisMap {
    source: Vec<isize>,
    destination: Vec<isize>,
}

impl AxisMap {
    /// Create a new `AxisMap`.
    ///
    /// Fails if `source` and `destination` have different lengths; all other
    /// checks are deferred to [`Self::resolve`], since they depend on the
    /// dimensionality of the target array.
    pub fn new(source: &[isize], destination: &[isize]) -> AxisResult<Self> {
        LengthError::check(source, destination)?;
        Ok(Self { source: source.to_vec(), destination: destination.to_vec() })
    }

    /// Get a reference to the source axes.
    pub fn source(&self) -> &[isize] { &self.source }

    /// Get a reference to the destination axes.
    pub fn destination(&self) -> &[isize] { &self.destination }

    /// Return `true` if the mapping moves no axes.
    pub fn is_empty(&self) -> bool { self.source.is_empty() }

    /// Return the full axis order, suitable for
    /// [`permuted_axes`][nd::ArrayBase::permuted_axes], produced by applying
    /// `self` to an array with `ndim` axes.
    pub fn resolve(&self, ndim: usize) -> AxisResult<Vec<usize>> {
        let source = normalize_axes(&self.source, ndim)?;
        let destination = normalize_axes(&self.destination, ndim)?;
        let mut order: Vec<usize>
            = (0..ndim).filter(|ax| !source.contains(ax)).collect();
        let mut moves: Vec<(usize, usize)>
            = destination.into_iter().zip(source).collect();
        moves.sort_unstable();
        for (dest, src) in moves {
            order.insert(dest, src);
        }
        Ok(order)
    }
}

fn normalize_axis(axis: isize, ndim: usize) -> AxisResult<usize> {
    let n = ndim as isize;
    (-n..n).contains(&axis)
        .then_some(if axis < 0 { (axis + n) as usize } else { axis as usize })
        .ok_or(AxisError::OutOfBounds { axis, ndim })
}

fn normalize_axes(axes: &[isize], ndim: usize) -> AxisResult<Vec<usize>> {
    let mut normalized: Vec<usize> = Vec::with_capacity(axes.len());
    for &axis in axes.iter() {
        let ax = normalize_axis(axis, ndim)?;
        if normalized.contains(&ax) { return Err(AxisError::Repeated(ax)); }
        normalized.push(ax);
    }
    Ok(normalized)
}

/// Move axes of an array to new positions.
///
/// The axis at position `source[i]` is moved to position `destination[i]`;
/// all other axes remain in their original relative order. This works for
/// owned arrays and views alike, and never copies data.
pub fn move_axes<S>(
    a: nd::ArrayBase<S, nd::IxDyn>,
    source: &[isize],
    destination: &[isize],
) -> AxisResult<nd::ArrayBase<S, nd::IxDyn>>
where S: nd::RawData
{
    let map = AxisMap::new(source, destination)?;
    move_axes_with(a, &map)
}

/// Like [`move_axes`], but using a pre-built [`AxisMap`].
pub fn move_axes_with<S>(a: nd::ArrayBase<S, nd::IxDyn>, map: &AxisMap)
    -> AxisResult<nd::ArrayBase<S, nd::IxDyn>>
where S: nd::RawData
{
    let order = map.resolve(a.ndim())?;
    Ok(a.permuted_axes(order))
}
