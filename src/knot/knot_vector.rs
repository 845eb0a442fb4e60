use std::ops::Index;

use crate::misc::FloatingPoint;

/// Knot vector representation
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct KnotVector<T>(Vec<T>);

impl<T: FloatingPoint> KnotVector<T> {
    pub fn new(knots: Vec<T>) -> Self {
        Self(knots)
    }

    /// Create a clamped uniform knot vector for `n` control points
    /// `degree + 1` zeros, the interior integers `1..=n - degree`,
    /// then `degree + 1` copies of `n - degree + 1`.
    /// The resulting vector has `n + degree + 2` knots.
    ///
    /// Returns `None` when there are not more control points than the degree.
    /// # Example
    /// ```
    /// use trimtess::prelude::KnotVector;
    /// let knots: KnotVector<f64> = KnotVector::clamped_uniform(4, 1).unwrap();
    /// assert_eq!(knots.to_vec(), vec![0., 0., 1., 2., 3., 4., 4.]);
    /// ```
    pub fn clamped_uniform(n: usize, degree: usize) -> Option<Self> {
        if n <= degree {
            return None;
        }
        let interior = n - degree;
        let end = T::from_count(interior + 1);
        let mut knots = Vec::with_capacity(n + degree + 2);
        knots.extend(std::iter::repeat_n(T::zero(), degree + 1));
        knots.extend((1..=interior).map(T::from_count));
        knots.extend(std::iter::repeat_n(end, degree + 1));
        Some(Self(knots))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.0.clone()
    }

    pub fn first(&self) -> Option<T> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<T> {
        self.0.last().copied()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Check that no knot is smaller than its predecessor
    pub fn is_non_decreasing(&self) -> bool {
        self.0.windows(2).all(|w| w[0] <= w[1])
    }

    /// Check if the knot vector is clamped
    /// `clamped` means the first and last knots have a multiplicity greater than the degree
    /// e.g. [0, 0, 0, 1, 2, 3, 3, 3] with degree 2 is clamped
    pub fn is_clamped(&self, degree: usize) -> bool {
        let (Some(first), Some(last)) = (self.first(), self.last()) else {
            return false;
        };
        let eps = T::default_epsilon();
        let head = self.iter().take_while(|k| (**k - first).abs() <= eps).count();
        let tail = self
            .iter()
            .rev()
            .take_while(|k| (**k - last).abs() <= eps)
            .count();
        head > degree && tail > degree
    }
}

impl<T> Index<usize> for KnotVector<T> {
    type Output = T;
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T> FromIterator<T> for KnotVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> From<KnotVector<T>> for Vec<T> {
    fn from(value: KnotVector<T>) -> Self {
        value.0
    }
}
