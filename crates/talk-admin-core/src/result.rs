use crate::error::AdminError;

pub type AdminResult<T> = Result<T, AdminError>;
