/// Kind of bound placed on a row or column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BoundType {
    /// -inf < x < +inf
    Free,
    /// lb <= x < +inf
    Lower,
    /// -inf < x <= ub
    Upper,
    /// lb <= x <= ub
    Double,
    /// lb == x == ub
    Fixed,
}

impl BoundType {
    /// Classify a pair of limits, where an infinite limit means "no bound".
    ///
    /// Returns `None` for NaN, for `lower > upper`, and for limits pointing the
    /// wrong way (`lower == +inf` or `upper == -inf`).
    pub fn classify(lower: f64, upper: f64) -> Option<BoundType> {
        if lower.is_nan() || upper.is_nan() {
            return None;
        }
        if lower == f64::INFINITY || upper == f64::NEG_INFINITY || lower > upper {
            return None;
        }
        let kind = match (lower.is_finite(), upper.is_finite()) {
            (false, false) => BoundType::Free,
            (true, false) => BoundType::Lower,
            (false, true) => BoundType::Upper,
            (true, true) if lower == upper => BoundType::Fixed,
            (true, true) => BoundType::Double,
        };
        Some(kind)
    }

    pub fn has_lower(self) -> bool {
        matches!(self, BoundType::Lower | BoundType::Double | BoundType::Fixed)
    }

    pub fn has_upper(self) -> bool {
        matches!(self, BoundType::Upper | BoundType::Double | BoundType::Fixed)
    }
}
