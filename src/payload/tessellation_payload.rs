use nalgebra::Point3;

use crate::{
    error::TessResult, misc::FloatingPoint, surface::SurfaceDefinition, trim::TrimLoop,
};

use super::TrimCurvePayload;

/// The message sent to a tessellation worker
///
/// Field order matches the tuple the tessellator reads:
/// `[u_last_index, v_last_index, u_degree, v_degree, u_knots, v_knots,
///   control_points, weights, u_tessellation, v_tessellation, trim_loops]`
#[derive(Clone, Debug, PartialEq)]
pub struct TessellationPayload<T: FloatingPoint> {
    /// u dimension - 1
    pub u_last_index: usize,
    /// v dimension - 1
    pub v_last_index: usize,
    /// u order - 1
    pub u_degree: usize,
    /// v order - 1
    pub v_degree: usize,
    pub u_knots: Vec<T>,
    pub v_knots: Vec<T>,
    pub control_points: Vec<Point3<T>>,
    pub weights: Vec<T>,
    pub u_tessellation: i32,
    pub v_tessellation: i32,
    /// one entry per trim loop, empty for an untrimmed surface
    pub trim_loops: Vec<Vec<TrimCurvePayload<T>>>,
}

impl<T: FloatingPoint> TessellationPayload<T> {
    /// Assemble a payload from a surface definition and its normalized trim loops
    pub fn new(definition: &SurfaceDefinition<T>, trim_loops: &[TrimLoop<T>]) -> Self {
        Self {
            u_last_index: definition.u_dimension.saturating_sub(1),
            v_last_index: definition.v_dimension.saturating_sub(1),
            u_degree: definition.u_order.saturating_sub(1),
            v_degree: definition.v_order.saturating_sub(1),
            u_knots: definition.u_knots.clone(),
            v_knots: definition.v_knots.clone(),
            control_points: definition.control_points.points().to_vec(),
            weights: definition.weights.clone(),
            u_tessellation: definition.u_tessellation,
            v_tessellation: definition.v_tessellation,
            trim_loops: trim_loops
                .iter()
                .map(|l| l.iter().map(TrimCurvePayload::from).collect())
                .collect(),
        }
    }

    /// Normalize the trimming contours of the definition and assemble a payload
    /// # Failures
    /// - if a trimming curve is malformed
    pub fn try_new(definition: &SurfaceDefinition<T>) -> TessResult<Self> {
        let trim_loops = definition.trim_loops()?;
        Ok(Self::new(definition, &trim_loops))
    }

    pub fn is_trimmed(&self) -> bool {
        !self.trim_loops.is_empty()
    }
}

#[cfg(feature = "serde")]
impl<T> serde::Serialize for TessellationPayload<T>
where
    T: FloatingPoint + serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeTuple;
        let mut state = serializer.serialize_tuple(11)?;
        state.serialize_element(&self.u_last_index)?;
        state.serialize_element(&self.v_last_index)?;
        state.serialize_element(&self.u_degree)?;
        state.serialize_element(&self.v_degree)?;
        state.serialize_element(&self.u_knots)?;
        state.serialize_element(&self.v_knots)?;
        state.serialize_element(&self.control_points)?;
        state.serialize_element(&self.weights)?;
        state.serialize_element(&self.u_tessellation)?;
        state.serialize_element(&self.v_tessellation)?;
        state.serialize_element(&self.trim_loops)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for TessellationPayload<T>
where
    T: FloatingPoint + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{SeqAccess, Visitor};

        use super::positional::next_element;

        struct TessellationPayloadVisitor<T>(std::marker::PhantomData<T>);

        impl<'de, T> Visitor<'de> for TessellationPayloadVisitor<T>
        where
            T: FloatingPoint + serde::Deserialize<'de>,
        {
            type Value = TessellationPayload<T>;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a tessellation payload tuple of 11 elements")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                Ok(TessellationPayload {
                    u_last_index: next_element(&mut seq, 0, &self)?,
                    v_last_index: next_element(&mut seq, 1, &self)?,
                    u_degree: next_element(&mut seq, 2, &self)?,
                    v_degree: next_element(&mut seq, 3, &self)?,
                    u_knots: next_element(&mut seq, 4, &self)?,
                    v_knots: next_element(&mut seq, 5, &self)?,
                    control_points: next_element(&mut seq, 6, &self)?,
                    weights: next_element(&mut seq, 7, &self)?,
                    u_tessellation: next_element(&mut seq, 8, &self)?,
                    v_tessellation: next_element(&mut seq, 9, &self)?,
                    trim_loops: next_element(&mut seq, 10, &self)?,
                })
            }
        }

        deserializer.deserialize_tuple(11, TessellationPayloadVisitor(std::marker::PhantomData))
    }
}
