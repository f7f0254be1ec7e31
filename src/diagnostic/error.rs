use std::time::Duration;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Mongo(mongodb::error::Error),
    Decode(mongodb::bson::de::Error),
    Timeout(Duration),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl From<mongodb::error::Error> for Error {
    fn from(value: mongodb::error::Error) -> Self {
        Self::Mongo(value)
    }
}

impl From<mongodb::bson::de::Error> for Error {
    fn from(value: mongodb::bson::de::Error) -> Self {
        Self::Decode(value)
    }
}

impl std::error::Error for Error {}
