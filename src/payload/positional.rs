use serde::de::{Error, Expected, SeqAccess};

/// Read the element at `index` of a positional record
pub(crate) fn next_element<'de, A, V>(
    seq: &mut A,
    index: usize,
    expected: &dyn Expected,
) -> Result<V, A::Error>
where
    A: SeqAccess<'de>,
    V: serde::Deserialize<'de>,
{
    seq.next_element()?
        .ok_or_else(|| A::Error::invalid_length(index, expected))
}
