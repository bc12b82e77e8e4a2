use seqrec_dtype::Value;

/// The decoded result of one record read.
///
/// A payload holding exactly one element is unwrapped to `Scalar`; anything
/// else, including the empty record, is `Values` in file order. Records
/// are not self-describing, so a one-element array and a true scalar are
/// indistinguishable on disk; the unwrap is the contract callers rely on.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Scalar(Value),
    Values(Vec<Value>),
}

impl Record {
    /// Number of elements in the record.
    pub fn len(&self) -> usize {
        match self {
            Record::Scalar(_) => 1,
            Record::Values(values) => values.len(),
        }
    }

    /// True for the zero-length record.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The bare value if this record was unwrapped to a scalar.
    pub fn as_scalar(&self) -> Option<Value> {
        match self {
            Record::Scalar(value) => Some(*value),
            Record::Values(_) => None,
        }
    }

    /// Flatten to a vector regardless of shape.
    pub fn into_values(self) -> Vec<Value> {
        match self {
            Record::Scalar(value) => vec![value],
            Record::Values(values) => values,
        }
    }
}
