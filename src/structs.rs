use super::*;

/// Data of one issued record. Every field is set when the record is minted
/// and never changes afterwards.
#[derive(Serialize, Clone, Eq, PartialEq)]
pub struct TokenData {
    /// Name of the record, never empty.
    pub name: String,
    /// Description of the record, may be empty.
    pub description: String,
    /// Url or content identifier of the record image, never empty.
    pub image_url: String,
    /// Address of the account that minted the record.
    pub creator: Address,
}

/// The display template registration for this contract.
///
/// Field names and template strings are positionally paired. `version`
/// starts at zero and is bumped once on activation during initialization.
#[derive(Serialize, Clone, Eq, PartialEq)]
pub struct TokenDisplay {
    /// Ordered display field names.
    pub field_names: Vec<String>,
    /// Template strings paired with `field_names`.
    pub field_templates: Vec<String>,
    /// Registration version, non-zero once activated.
    pub version: u32,
}

/// The contract state.
#[derive(Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Account that deployed the instance and holds the template authority.
    pub publisher: Address,
    /// The active display template registration.
    pub display: TokenDisplay,
    /// Next token identity to hand out. Only ever incremented.
    pub next_token_id: u64,
    /// Record data for every issued token.
    pub tokens: StateMap<ContractTokenId, TokenData, S>,
    /// Token IDs currently held by each address.
    pub owned_tokens: StateMap<Address, StateSet<ContractTokenId, S>, S>,
}

/// Parameter for the contract function `mint`.
#[derive(Serialize, SchemaType, Clone)]
pub struct MintParams {
    /// Name of the record, must not be empty.
    pub name: String,
    /// Description of the record, may be empty.
    pub description: String,
    /// Url of the record image, must not be empty.
    pub image_url: String,
}

/// Parameter for the contract function `mintBulk`.
///
/// All three arrays must have exactly `quantity` elements.
#[derive(Serialize, SchemaType)]
pub struct MintBulkParams {
    /// Number of records to mint.
    pub quantity: u32,
    /// Names of the records.
    pub names: Vec<String>,
    /// Descriptions of the records.
    pub descriptions: Vec<String>,
    /// Image urls of the records.
    pub image_urls: Vec<String>,
}

/// Return type of the contract function `view`.
#[derive(Serialize, SchemaType, Debug, PartialEq, Eq)]
pub struct TokenView {
    /// Name of the record.
    pub name: String,
    /// Description of the record.
    pub description: String,
    /// Url of the record image.
    pub image_url: String,
    /// Address of the account that minted the record.
    pub creator: Address,
}

/// Return type of the contract function `viewDisplay`.
#[derive(Serialize, SchemaType, Debug, PartialEq, Eq)]
pub struct DisplayView {
    /// Ordered display field names.
    pub field_names: Vec<String>,
    /// Template strings paired with `field_names`.
    pub field_templates: Vec<String>,
    /// Registration version.
    pub version: u32,
    /// Holder of the template authority.
    pub publisher: Address,
}

/// Return type of the contract function `viewOwnedTokens`.
#[derive(Serialize, SchemaType, Debug, PartialEq, Eq)]
pub struct OwnedTokensView {
    /// Token IDs held by the queried address.
    pub tokens: Vec<ContractTokenId>,
}
