use super::*;

/// The custom errors the contract can produce.
///
/// The variant order is part of the contract interface: reject codes are
/// assigned from the order below, starting at -1.
#[derive(Serialize, Debug, PartialEq, Eq, Reject, SchemaType)]
pub enum CustomContractError {
    /// The record name is empty (Error code: -1).
    EmptyName,
    /// The record image url is empty (Error code: -2).
    EmptyImageUrl,
    /// Length of the names array does not match the declared quantity
    /// (Error code: -3).
    InvalidNamesLength,
    /// Length of the descriptions array does not match the declared
    /// quantity (Error code: -4).
    InvalidDescriptionsLength,
    /// Length of the image urls array does not match the declared quantity
    /// (Error code: -5).
    InvalidImageUrlsLength,
    /// Failed parsing the parameter (Error code: -6).
    #[from(ParseError)]
    ParseParams,
    /// Failed logging: Log is full (Error code: -7).
    LogFull,
    /// Failed logging: Log is malformed (Error code: -8).
    LogMalformed,
}

/// Mapping the logging errors to CustomContractError.
impl From<LogError> for CustomContractError {
    fn from(le: LogError) -> Self {
        match le {
            LogError::Full => Self::LogFull,
            LogError::Malformed => Self::LogMalformed,
        }
    }
}

/// Mapping CustomContractError to ContractError.
impl From<CustomContractError> for ContractError {
    fn from(c: CustomContractError) -> Self {
        Cis2Error::Custom(c)
    }
}
