use super::*;

/// Pure predicate over raw text fields.
#[inline(always)]
pub fn is_non_empty(text: &str) -> bool {
    !text.is_empty()
}

/// Build a string from TOKEN_METADATA_BASE_URL appended with the token ID
/// encoded as hex.
pub fn build_token_metadata_url(token_id: &ContractTokenId) -> String {
    let mut token_metadata_url = String::from(TOKEN_METADATA_BASE_URL);
    push_token_id(&mut token_metadata_url, token_id);
    token_metadata_url
}

/// Append the token ID as lowercase hex of its serialized bytes.
pub fn push_token_id(string: &mut String, token_id: &ContractTokenId) {
    for byte in &token_id.0.to_le_bytes() {
        string.push(bits_to_hex_char(byte >> 4));
        string.push(bits_to_hex_char(byte & 0xF));
    }
}

pub fn bits_to_hex_char(bits: u8) -> char {
    match bits & 0xF {
        0x0..=0x9 => (bits + b'0') as char,
        0xA..=0xF => (bits - 10 + b'a') as char,
        _ => unreachable!(),
    }
}

pub fn token_metadata_event(
    token_id: ContractTokenId,
) -> Cis2Event<ContractTokenId, ContractTokenAmount> {
    let token_metadata_url = build_token_metadata_url(&token_id);
    Cis2Event::TokenMetadata(TokenMetadataEvent {
        token_id,
        metadata_url: MetadataUrl {
            url: token_metadata_url,
            hash: None,
        },
    })
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    #[concordium_test]
    fn token_id_formatting() {
        let mut token_id_string = String::new();
        push_token_id(&mut token_id_string, &TokenIdU64(0x1A));
        claim_eq!(token_id_string, "1a00000000000000");

        let mut token_id_string = String::new();
        push_token_id(&mut token_id_string, &TokenIdU64(u64::MAX));
        claim_eq!(token_id_string, "ffffffffffffffff");
    }

    #[concordium_test]
    fn metadata_url_prefix() {
        let url = build_token_metadata_url(&TokenIdU64(0));
        claim!(url.starts_with(TOKEN_METADATA_BASE_URL));
        claim_eq!(url.len(), TOKEN_METADATA_BASE_URL.len() + 16);
    }

    #[concordium_test]
    fn non_empty_predicate() {
        claim!(is_non_empty("x"));
        claim!(is_non_empty(" "));
        claim!(!is_non_empty(""));
    }
}
