/// The baseurl for the token metadata, gets appended with the token ID as
/// hex encoding before emitted in the TokenMetadata event.
pub const TOKEN_METADATA_BASE_URL: &str = "https://nft.assethub.io/metadata/";

/// Display field names registered on initialization, in order.
///
/// `link` has no backing attribute on the record data and renders to an
/// empty value. It is registered anyway so viewers that expect the field
/// keep a stable key set.
pub const DISPLAY_FIELD_NAMES: [&str; 4] = ["name", "description", "image_url", "link"];

/// Template strings positionally paired with `DISPLAY_FIELD_NAMES`.
pub const DISPLAY_FIELD_TEMPLATES: [&str; 4] =
    ["{name}", "{description}", "{image_url}", "{link}"];
