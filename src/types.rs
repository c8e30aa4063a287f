use super::*;

pub type ContractResult<A> = Result<A, ContractError>;

/// Contract token ID type.
/// Identities are handed out by a monotonic counter, so the fixed width
/// 64-bit token ID representation is used.
pub type ContractTokenId = TokenIdU64;

/// Contract token amount type.
/// Every record is a unique item, so an amount is only ever zero or one.
pub type ContractTokenAmount = TokenAmountU8;

/// Wrapping the custom errors in a type with CIS2 errors.
pub type ContractError = Cis2Error<CustomContractError>;
