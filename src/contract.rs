use super::*;

/// Initialize the contract instance.
///
/// Registers and activates the display template and records the deploying
/// account as the publisher holding the template authority. Initialization
/// runs exactly once per instance; there is no entrypoint to run it again,
/// so the authority claim cannot be repeated.
#[init(contract = "AssetNFT")]
fn init<S: HasStateApi>(
    ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    let publisher = Address::Account(ctx.init_origin());
    Ok(State::new(state_builder, publisher))
}

/// Mint one record held by the invoker.
/// Logs a `Mint` and a `TokenMetadata` event for the minted record.
///
/// Open to any account; the invoker becomes both creator and initial
/// holder of the record.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The name is empty.
/// - The image url is empty.
/// - Fails to log Mint event.
/// - Fails to log TokenMetadata event.
#[receive(
    contract = "AssetNFT",
    name = "mint",
    parameter = "MintParams",
    mutable,
    enable_logger
)]
fn mint<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    // Parse the parameter.
    let params: MintParams = ctx.parameter_cursor().get()?;

    let issuer = Address::Account(ctx.invoker());
    let (state, state_builder) = host.state_and_builder();

    // Mint the record in the state.
    let token_id = state.mint(params, issuer, state_builder)?;

    // Event for the minted record.
    logger.log(&Cis2Event::Mint(MintEvent {
        token_id,
        amount: ContractTokenAmount::from(1),
        owner: issuer,
    }))?;

    // Metadata URL for the record.
    logger.log(&token_metadata_event(token_id))?;

    Ok(())
}

/// Mint `quantity` records held by the invoker.
/// Logs a `Mint` and a `TokenMetadata` event for each minted record.
///
/// The input arrays are drained from the tail, so records are produced in
/// the reverse of the supplied order. Callers must not rely on allocated
/// identities matching the input order.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - Any input array length differs from `quantity`, with a distinct
///   error per array. No record is minted in that case.
/// - Any single element fails `mint` validation, which rejects the whole
///   invocation.
/// - Fails to log Mint event.
/// - Fails to log TokenMetadata event.
///
/// Note: Can at most mint 32 records in one call due to the limit on the
/// number of logs a smart contract can produce on each function call.
#[receive(
    contract = "AssetNFT",
    name = "mintBulk",
    parameter = "MintBulkParams",
    mutable,
    enable_logger
)]
fn mint_bulk<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    // Parse the parameter.
    let MintBulkParams {
        quantity,
        mut names,
        mut descriptions,
        mut image_urls,
    } = ctx.parameter_cursor().get()?;

    // Arity checks run before any record is minted.
    ensure!(
        names.len() == quantity as usize,
        CustomContractError::InvalidNamesLength.into()
    );
    ensure!(
        descriptions.len() == quantity as usize,
        CustomContractError::InvalidDescriptionsLength.into()
    );
    ensure!(
        image_urls.len() == quantity as usize,
        CustomContractError::InvalidImageUrlsLength.into()
    );

    let issuer = Address::Account(ctx.invoker());

    while let (Some(name), Some(description), Some(image_url)) =
        (names.pop(), descriptions.pop(), image_urls.pop())
    {
        let (state, state_builder) = host.state_and_builder();
        let token_id = state.mint(
            MintParams {
                name,
                description,
                image_url,
            },
            issuer,
            state_builder,
        )?;

        // Event for the minted record.
        logger.log(&Cis2Event::Mint(MintEvent {
            token_id,
            amount: ContractTokenAmount::from(1),
            owner: issuer,
        }))?;

        // Metadata URL for the record.
        logger.log(&token_metadata_event(token_id))?;
    }

    Ok(())
}

/// View the record data for a token ID.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The token ID does not exist.
#[receive(
    contract = "AssetNFT",
    name = "view",
    parameter = "ContractTokenId",
    return_value = "TokenView"
)]
fn view<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<TokenView> {
    // Parse the parameter.
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;

    Ok(host.state().view_token(&token_id)?)
}

/// View the active display template registration and its publisher.
#[receive(contract = "AssetNFT", name = "viewDisplay", return_value = "DisplayView")]
fn view_display<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<DisplayView> {
    Ok(host.state().display_view())
}

/// View tokens held by a particular address.
#[receive(
    contract = "AssetNFT",
    name = "viewOwnedTokens",
    parameter = "Address",
    return_value = "OwnedTokensView"
)]
fn view_owned_tokens<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<OwnedTokensView> {
    // Parse the parameter.
    let address: Address = ctx.parameter_cursor().get()?;

    Ok(OwnedTokensView {
        tokens: host.state().tokens_of(&address),
    })
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const ACCOUNT_0: AccountAddress = AccountAddress([0u8; 32]);
    const ADDRESS_0: Address = Address::Account(ACCOUNT_0);
    const ACCOUNT_1: AccountAddress = AccountAddress([1u8; 32]);
    const ADDRESS_1: Address = Address::Account(ACCOUNT_1);

    fn token(id: u64) -> ContractTokenId {
        TokenIdU64(id)
    }

    fn mint_params(name: &str, description: &str, image_url: &str) -> MintParams {
        MintParams {
            name: String::from(name),
            description: String::from(description),
            image_url: String::from(image_url),
        }
    }

    /// Test helper function which creates an initialized contract host with
    /// `ADDRESS_0` as the publisher and no tokens.
    fn new_host() -> TestHost<State<TestStateApi>> {
        let mut state_builder = TestStateBuilder::new();
        let state = State::new(&mut state_builder, ADDRESS_0);
        TestHost::new(state, state_builder)
    }

    /// Test initialization succeeds, registers the display template and
    /// records the deploying account as publisher.
    #[concordium_test]
    fn test_init() {
        // Setup the context
        let mut ctx = TestInitContext::empty();
        ctx.set_init_origin(ACCOUNT_0);

        let mut builder = TestStateBuilder::new();

        // Call the contract function.
        let result = init(&ctx, &mut builder);

        // Check the result
        let state = result.expect_report("Contract initialization failed");

        // Check the state
        claim_eq!(
            state.tokens.iter().count(),
            0,
            "No token should be initialized"
        );
        claim_eq!(state.next_token_id, 0, "Identity counter should start at 0");
        claim_eq!(state.publisher, ADDRESS_0, "Deployer should hold the authority");
        claim_eq!(
            state.display.version,
            1,
            "Display registration should be activated"
        );
        claim_eq!(
            state.display.field_names,
            vec![
                String::from("name"),
                String::from("description"),
                String::from("image_url"),
                String::from("link"),
            ],
            "Unexpected display field names"
        );
        claim_eq!(
            state.display.field_templates,
            vec![
                String::from("{name}"),
                String::from("{description}"),
                String::from("{image_url}"),
                String::from("{link}"),
            ],
            "Unexpected display templates"
        );
    }

    /// Test minting, ensuring the new record holds the supplied fields
    /// verbatim, is owned by the invoker and the appropriate events are
    /// logged.
    #[concordium_test]
    fn test_mint() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);
        ctx.set_invoker(ACCOUNT_0);

        let parameter_bytes = to_bytes(&mint_params("alpha", "first record", "ipfs://a"));
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut host = new_host();

        // Call the contract function.
        let result: ContractResult<()> = mint(&ctx, &mut host, &mut logger);

        // Check the result
        claim!(result.is_ok(), "Results in rejection");

        // Check the state
        claim_eq!(
            host.state().tokens.iter().count(),
            1,
            "Expected one token in the state."
        );

        let record = host
            .state()
            .view_token(&token(0))
            .expect_report("Token is expected to exist");
        claim_eq!(record.name, "alpha", "Name should match the input");
        claim_eq!(
            record.description,
            "first record",
            "Description should match the input"
        );
        claim_eq!(record.image_url, "ipfs://a", "Image url should match the input");
        claim_eq!(record.creator, ADDRESS_0, "Creator should be the invoker");

        claim_eq!(
            host.state().tokens_of(&ADDRESS_0),
            vec![token(0)],
            "Record should be held by the invoker"
        );

        // Check the logs
        claim!(
            logger.logs.contains(&to_bytes(&Cis2Event::Mint(MintEvent {
                owner: ADDRESS_0,
                token_id: token(0),
                amount: ContractTokenAmount::from(1),
            }))),
            "Expected an event for minting token 0"
        );
        claim!(
            logger.logs.contains(&to_bytes(&token_metadata_event(token(0)))),
            "Expected a metadata event for token 0"
        );
    }

    /// An empty description is legal.
    #[concordium_test]
    fn test_mint_empty_description() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_1);
        ctx.set_invoker(ACCOUNT_1);

        let parameter_bytes = to_bytes(&mint_params("alpha", "", "ipfs://a"));
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut host = new_host();

        // Call the contract function.
        let result: ContractResult<()> = mint(&ctx, &mut host, &mut logger);

        claim!(result.is_ok(), "Results in rejection");

        let record = host
            .state()
            .view_token(&token(0))
            .expect_report("Token is expected to exist");
        claim_eq!(record.description, "", "Description should stay empty");
        claim_eq!(record.creator, ADDRESS_1, "Creator should be the invoker");
    }

    /// Test minting with an empty name fails and produces no record.
    #[concordium_test]
    fn test_mint_empty_name() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);
        ctx.set_invoker(ACCOUNT_0);

        let parameter_bytes = to_bytes(&mint_params("", "d", "ipfs://a"));
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut host = new_host();

        // Call the contract function.
        let result: ContractResult<()> = mint(&ctx, &mut host, &mut logger);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            CustomContractError::EmptyName.into(),
            "Error is expected to be EmptyName"
        );
        claim_eq!(
            host.state().tokens.iter().count(),
            0,
            "No record should be produced."
        );
    }

    /// Test minting with an empty image url fails and produces no record.
    #[concordium_test]
    fn test_mint_empty_image_url() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);
        ctx.set_invoker(ACCOUNT_0);

        let parameter_bytes = to_bytes(&mint_params("alpha", "d", ""));
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut host = new_host();

        // Call the contract function.
        let result: ContractResult<()> = mint(&ctx, &mut host, &mut logger);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            CustomContractError::EmptyImageUrl.into(),
            "Error is expected to be EmptyImageUrl"
        );
        claim_eq!(
            host.state().tokens.iter().count(),
            0,
            "No record should be produced."
        );
    }

    /// A rejected mint must not consume a token identity: the next
    /// successful mint gets the identity the failed one would have had.
    #[concordium_test]
    fn test_failed_mint_consumes_no_identity() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);
        ctx.set_invoker(ACCOUNT_0);

        let mut logger = TestLogger::init();
        let mut host = new_host();

        let parameter_bytes = to_bytes(&mint_params("", "d", "ipfs://a"));
        ctx.set_parameter(&parameter_bytes);

        // Call the contract function.
        let result: ContractResult<()> = mint(&ctx, &mut host, &mut logger);
        claim!(result.is_err(), "Expected to fail");

        let parameter_bytes = to_bytes(&mint_params("alpha", "d", "ipfs://a"));
        ctx.set_parameter(&parameter_bytes);

        // Call the contract function.
        let result: ContractResult<()> = mint(&ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Results in rejection");

        claim!(
            host.state().view_token(&token(0)).is_ok(),
            "Successful mint should receive identity 0"
        );
        claim_eq!(host.state().next_token_id, 1, "Only one identity consumed");
    }

    /// Test bulk minting, ensuring every supplied (name, image url) pair is
    /// produced and that the inputs are consumed from the tail.
    #[concordium_test]
    fn test_mint_bulk() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);
        ctx.set_invoker(ACCOUNT_0);

        let params = MintBulkParams {
            quantity: 3,
            names: vec![
                String::from("n1"),
                String::from("n2"),
                String::from("n3"),
            ],
            descriptions: vec![
                String::from("d1"),
                String::from("d2"),
                String::from("d3"),
            ],
            image_urls: vec![
                String::from("u1"),
                String::from("u2"),
                String::from("u3"),
            ],
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut host = new_host();

        // Call the contract function.
        let result: ContractResult<()> = mint_bulk(&ctx, &mut host, &mut logger);

        // Check the result
        claim!(result.is_ok(), "Results in rejection");

        // Check the state
        claim_eq!(
            host.state().tokens.iter().count(),
            3,
            "Expected three tokens in the state."
        );
        claim_eq!(
            host.state().tokens_of(&ADDRESS_0).len(),
            3,
            "All records should be held by the invoker"
        );

        // Inputs are drained from the tail: the first allocated identity
        // carries the last supplied element.
        for (id, suffix) in [(0u64, "3"), (1, "2"), (2, "1")] {
            let record = host
                .state()
                .view_token(&token(id))
                .expect_report("Token is expected to exist");
            let mut name = String::from("n");
            name.push_str(suffix);
            let mut description = String::from("d");
            description.push_str(suffix);
            let mut image_url = String::from("u");
            image_url.push_str(suffix);
            claim_eq!(record.name, name, "Unexpected name for bulk record");
            claim_eq!(
                record.description,
                description,
                "Unexpected description for bulk record"
            );
            claim_eq!(
                record.image_url,
                image_url,
                "Unexpected image url for bulk record"
            );
            claim_eq!(record.creator, ADDRESS_0, "Creator should be the invoker");
        }

        // Check the logs: one Mint and one TokenMetadata event per record.
        claim_eq!(logger.logs.len(), 6, "Six events should be logged");
        for id in 0..3u64 {
            claim!(
                logger.logs.contains(&to_bytes(&Cis2Event::Mint(MintEvent {
                    owner: ADDRESS_0,
                    token_id: token(id),
                    amount: ContractTokenAmount::from(1),
                }))),
                "Expected a mint event for each bulk token"
            );
        }
    }

    /// Test bulk minting rejects on a names length mismatch before any
    /// record is produced.
    #[concordium_test]
    fn test_mint_bulk_invalid_names_length() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);
        ctx.set_invoker(ACCOUNT_0);

        let params = MintBulkParams {
            quantity: 2,
            names: vec![String::from("n1")],
            descriptions: vec![String::from("d1")],
            image_urls: vec![String::from("u1")],
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut host = new_host();

        // Call the contract function.
        let result: ContractResult<()> = mint_bulk(&ctx, &mut host, &mut logger);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            CustomContractError::InvalidNamesLength.into(),
            "Error is expected to be InvalidNamesLength"
        );
        claim_eq!(
            host.state().tokens.iter().count(),
            0,
            "No record should be produced."
        );
    }

    /// Test bulk minting rejects on a descriptions length mismatch.
    #[concordium_test]
    fn test_mint_bulk_invalid_descriptions_length() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);
        ctx.set_invoker(ACCOUNT_0);

        let params = MintBulkParams {
            quantity: 2,
            names: vec![String::from("n1"), String::from("n2")],
            descriptions: vec![String::from("d1")],
            image_urls: vec![String::from("u1"), String::from("u2")],
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut host = new_host();

        // Call the contract function.
        let result: ContractResult<()> = mint_bulk(&ctx, &mut host, &mut logger);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            CustomContractError::InvalidDescriptionsLength.into(),
            "Error is expected to be InvalidDescriptionsLength"
        );
        claim_eq!(
            host.state().tokens.iter().count(),
            0,
            "No record should be produced."
        );
    }

    /// Test bulk minting rejects on an image urls length mismatch.
    #[concordium_test]
    fn test_mint_bulk_invalid_image_urls_length() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);
        ctx.set_invoker(ACCOUNT_0);

        let params = MintBulkParams {
            quantity: 2,
            names: vec![String::from("n1"), String::from("n2")],
            descriptions: vec![String::from("d1"), String::from("d2")],
            image_urls: vec![String::from("u1")],
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut host = new_host();

        // Call the contract function.
        let result: ContractResult<()> = mint_bulk(&ctx, &mut host, &mut logger);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            CustomContractError::InvalidImageUrlsLength.into(),
            "Error is expected to be InvalidImageUrlsLength"
        );
        claim_eq!(
            host.state().tokens.iter().count(),
            0,
            "No record should be produced."
        );
    }

    /// A single invalid element rejects the whole bulk invocation with the
    /// per-element error. Rolling back records minted before the failing
    /// element is the chain's transaction semantics, not contract logic.
    #[concordium_test]
    fn test_mint_bulk_aborts_on_invalid_element() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_0);
        ctx.set_invoker(ACCOUNT_0);

        // Elements are processed from the tail, so the empty name is hit on
        // the second iteration.
        let params = MintBulkParams {
            quantity: 3,
            names: vec![String::from("n1"), String::new(), String::from("n3")],
            descriptions: vec![
                String::from("d1"),
                String::from("d2"),
                String::from("d3"),
            ],
            image_urls: vec![
                String::from("u1"),
                String::from("u2"),
                String::from("u3"),
            ],
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut host = new_host();

        // Call the contract function.
        let result: ContractResult<()> = mint_bulk(&ctx, &mut host, &mut logger);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            CustomContractError::EmptyName.into(),
            "Error is expected to be EmptyName"
        );
    }

    /// Test viewing an unknown token rejects with InvalidTokenId.
    #[concordium_test]
    fn test_view_unknown_token() {
        let host = new_host();

        let result = host.state().view_token(&token(42));
        claim_eq!(
            result,
            Err(ContractError::InvalidTokenId),
            "Error is expected to be InvalidTokenId"
        );
    }

    /// Test the display view returns the registered template and publisher.
    #[concordium_test]
    fn test_view_display() {
        // Setup the context
        let ctx = TestReceiveContext::empty();
        let host = new_host();

        // Call the contract function.
        let result: ReceiveResult<DisplayView> = view_display(&ctx, &host);

        // Check the result
        let display = result.expect_report("Results in rejection");
        claim_eq!(display.version, 1, "Display registration should be active");
        claim_eq!(display.publisher, ADDRESS_0, "Unexpected publisher");
        claim_eq!(
            display.field_names.len(),
            display.field_templates.len(),
            "Field names and templates must pair up"
        );
    }

    /// Test viewing owned tokens for an address without any.
    #[concordium_test]
    fn test_view_owned_tokens_empty() {
        // Setup the context
        let mut ctx = TestReceiveContext::empty();
        let parameter_bytes = to_bytes(&ADDRESS_1);
        ctx.set_parameter(&parameter_bytes);

        let host = new_host();

        // Call the contract function.
        let result: ReceiveResult<OwnedTokensView> = view_owned_tokens(&ctx, &host);

        // Check the result
        let view = result.expect_report("Results in rejection");
        claim!(view.tokens.is_empty(), "No tokens should be owned");
    }
}
