use super::*;

impl TokenDisplay {
    /// Build the fixed display registration from the constant tables.
    /// The registration starts inactive with version zero.
    pub fn register() -> Self {
        Self {
            field_names: DISPLAY_FIELD_NAMES.iter().map(|s| String::from(*s)).collect(),
            field_templates: DISPLAY_FIELD_TEMPLATES
                .iter()
                .map(|s| String::from(*s))
                .collect(),
            version: 0,
        }
    }

    /// Activate the registration by bumping the version.
    pub fn activate(&mut self) {
        self.version += 1;
    }
}

impl TokenData {
    pub fn as_token_view(&self) -> TokenView {
        TokenView {
            name: self.name.clone(),
            description: self.description.clone(),
            image_url: self.image_url.clone(),
            creator: self.creator,
        }
    }
}

// Functions for creating, updating and querying the contract state.
impl<S: HasStateApi> State<S> {
    /// Creates the state for a fresh instance with no tokens: the display
    /// template is registered and activated, and the deploying address is
    /// recorded as the publisher holding the template authority.
    pub fn new(state_builder: &mut StateBuilder<S>, publisher: Address) -> Self {
        let mut display = TokenDisplay::register();
        display.activate();
        State {
            publisher,
            display,
            next_token_id: 0,
            tokens: state_builder.new_map(),
            owned_tokens: state_builder.new_map(),
        }
    }

    /// Hand out a fresh token identity. Identities are never reused.
    fn allocate_token_id(&mut self) -> ContractTokenId {
        let token_id = TokenIdU64(self.next_token_id);
        self.next_token_id += 1;
        token_id
    }

    /// Mint a new record held by `issuer`.
    ///
    /// Validation runs before an identity is allocated, so a rejected mint
    /// does not consume a token ID. Fields are checked in a fixed order:
    /// name first, image url second, the description is never validated.
    pub fn mint(
        &mut self,
        params: MintParams,
        issuer: Address,
        state_builder: &mut StateBuilder<S>,
    ) -> ContractResult<ContractTokenId> {
        ensure!(
            is_non_empty(&params.name),
            CustomContractError::EmptyName.into()
        );
        ensure!(
            is_non_empty(&params.image_url),
            CustomContractError::EmptyImageUrl.into()
        );

        let token_id = self.allocate_token_id();
        self.tokens.insert(
            token_id,
            TokenData {
                name: params.name,
                description: params.description,
                image_url: params.image_url,
                creator: issuer,
            },
        );

        let mut owned = self
            .owned_tokens
            .entry(issuer)
            .or_insert_with(|| state_builder.new_set());
        owned.insert(token_id);

        Ok(token_id)
    }

    /// Look up the record data for a token ID.
    /// Results in an error if the token ID does not exist in the state.
    pub fn view_token(&self, token_id: &ContractTokenId) -> ContractResult<TokenView> {
        let data = self
            .tokens
            .get(token_id)
            .ok_or(ContractError::InvalidTokenId)?;
        Ok(data.as_token_view())
    }

    /// Token IDs currently held by the given address.
    pub fn tokens_of(&self, address: &Address) -> Vec<ContractTokenId> {
        self.owned_tokens
            .get(address)
            .map(|owned| owned.iter().map(|id| *id).collect())
            .unwrap_or_default()
    }

    /// The active display registration together with its publisher.
    pub fn display_view(&self) -> DisplayView {
        DisplayView {
            field_names: self.display.field_names.clone(),
            field_templates: self.display.field_templates.clone(),
            version: self.display.version,
            publisher: self.publisher,
        }
    }
}
