use nalgebra::Point2;

use crate::{misc::FloatingPoint, trim::TrimCurve};

/// A trim curve as the tessellator expects it
/// Serialized positionally: `[last_index, degree, knots, control_points, weights]`
#[derive(Clone, Debug, PartialEq)]
pub struct TrimCurvePayload<T: FloatingPoint> {
    /// number of control points - 1
    pub last_index: usize,
    /// order - 1
    pub degree: usize,
    pub knots: Vec<T>,
    pub control_points: Vec<Point2<T>>,
    pub weights: Vec<T>,
}

impl<T: FloatingPoint> From<&TrimCurve<T>> for TrimCurvePayload<T> {
    fn from(curve: &TrimCurve<T>) -> Self {
        Self {
            last_index: curve.control_point_count() - 1,
            degree: curve.degree(),
            knots: curve.knots().to_vec(),
            control_points: curve.control_points().to_vec(),
            weights: curve.weights().to_vec(),
        }
    }
}

#[cfg(feature = "serde")]
impl<T> serde::Serialize for TrimCurvePayload<T>
where
    T: FloatingPoint + serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeTuple;
        let mut state = serializer.serialize_tuple(5)?;
        state.serialize_element(&self.last_index)?;
        state.serialize_element(&self.degree)?;
        state.serialize_element(&self.knots)?;
        state.serialize_element(&self.control_points)?;
        state.serialize_element(&self.weights)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for TrimCurvePayload<T>
where
    T: FloatingPoint + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{SeqAccess, Visitor};

        use super::positional::next_element;

        struct TrimCurvePayloadVisitor<T>(std::marker::PhantomData<T>);

        impl<'de, T> Visitor<'de> for TrimCurvePayloadVisitor<T>
        where
            T: FloatingPoint + serde::Deserialize<'de>,
        {
            type Value = TrimCurvePayload<T>;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a trim curve tuple of 5 elements")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                Ok(TrimCurvePayload {
                    last_index: next_element(&mut seq, 0, &self)?,
                    degree: next_element(&mut seq, 1, &self)?,
                    knots: next_element(&mut seq, 2, &self)?,
                    control_points: next_element(&mut seq, 3, &self)?,
                    weights: next_element(&mut seq, 4, &self)?,
                })
            }
        }

        deserializer.deserialize_tuple(5, TrimCurvePayloadVisitor(std::marker::PhantomData))
    }
}
