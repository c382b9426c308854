use crate::error::PlankError;

pub type PlankResult<T> = Result<T, PlankError>;
