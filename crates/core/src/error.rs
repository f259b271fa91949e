#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// `sort_by` value outside the allow-list.
    #[error("Unable to sort. Sorting by {0} is an invalid request.")]
    InvalidSortColumn(String),

    /// `order` value other than `asc` / `desc`.
    #[error("Unable to order. Ordering by {0} is an invalid request.")]
    InvalidSortOrder(String),

    /// `limit` or `p` did not parse as an integer.
    #[error("Bad request.")]
    MalformedListParam,

    /// `limit` is negative, or `p` is zero or negative.
    #[error("Limit and p must be positive integers.")]
    ListParamOutOfRange,
}
