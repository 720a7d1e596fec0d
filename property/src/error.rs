#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("property bound to a null pointer")]
    NullPointer,
}
