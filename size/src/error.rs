use crate::Unit;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{value} {unit} does not fit in 64 bits")]
    Overflow { value: u64, unit: Unit },

    #[error("invalid size {0}")]
    Parse(#[from] human_size::ParsingError),

    #[error("{0} is not a whole number of bytes")]
    Fractional(f64),

    #[error("{0} bytes is out of range")]
    OutOfRange(f64),
}
