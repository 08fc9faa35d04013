#[derive(Debug, PartialEq, Eq)]
pub enum CoffeeMakerError {
    FileReaderError,
}

impl From<std::io::Error> for CoffeeMakerError {
    fn from(_: std::io::Error) -> Self {
        CoffeeMakerError::FileReaderError
    }
}

impl From<serde_json::Error> for CoffeeMakerError {
    fn from(_: serde_json::Error) -> Self {
        CoffeeMakerError::FileReaderError
    }
}
