use crate::BoardError;

pub type BoardResult<T> = Result<T, BoardError>;
