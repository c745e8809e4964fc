#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderError {
    InvalidType,
    InvalidSize,
    InvalidQuantity,
}

impl std::fmt::Display for OrderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderError::InvalidType => write!(f, "Wrong type"),
            OrderError::InvalidSize => write!(f, "Wrong size"),
            OrderError::InvalidQuantity => write!(f, "Wrong amount"),
        }
    }
}

impl std::error::Error for OrderError {}

pub type OrderResult<T> = Result<T, OrderError>;
