use crate::{error::TessResult, misc::FloatingPoint};

use super::{RawTrimCurve, TrimCurve};

/// A parsed trimming contour: the curves that together close one loop
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contour2D<T: FloatingPoint> {
    curves: Vec<RawTrimCurve<T>>,
}

impl<T: FloatingPoint> Contour2D<T> {
    pub fn new(curves: Vec<RawTrimCurve<T>>) -> Self {
        Self { curves }
    }

    pub fn curves(&self) -> &[RawTrimCurve<T>] {
        &self.curves
    }

    pub fn push(&mut self, curve: RawTrimCurve<T>) {
        self.curves.push(curve);
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Normalize every curve of the contour, failing on the first malformed one
    pub fn normalize(&self) -> TessResult<TrimLoop<T>> {
        self.curves
            .iter()
            .map(|c| c.normalize())
            .collect::<TessResult<Vec<_>>>()
            .map(TrimLoop::new)
    }
}

/// One closed trimming loop of normalized curves
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrimLoop<T: FloatingPoint>(Vec<TrimCurve<T>>);

impl<T: FloatingPoint> TrimLoop<T> {
    pub fn new(curves: Vec<TrimCurve<T>>) -> Self {
        Self(curves)
    }

    pub fn curves(&self) -> &[TrimCurve<T>] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrimCurve<T>> {
        self.0.iter()
    }
}

/// Normalize all trimming contours of a surface
/// Contours without curves carry no trimming information and are skipped
pub fn normalize_contours<T: FloatingPoint>(
    contours: &[Contour2D<T>],
) -> TessResult<Vec<TrimLoop<T>>> {
    contours
        .iter()
        .enumerate()
        .filter(|(i, contour)| {
            if contour.is_empty() {
                log::debug!("skipping trimming contour {} without curves", i);
            }
            !contour.is_empty()
        })
        .map(|(_, contour)| contour.normalize())
        .collect()
}
