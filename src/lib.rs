//! An asset issuance smart contract with a registered display template.
//!
//! # Description
//! An instance of this smart contract issues uniquely identified asset
//! records on behalf of the invoking account. Each record carries a name,
//! a description, an image url and the address of its creator, all fixed
//! at mint time. Token identities come from a monotonic counter in the
//! contract state, so no two records ever share an identity.
//!
//! On initialization the contract registers a display template: an ordered
//! mapping from display field names to template strings that viewers use
//! to render record metadata. The deploying account is recorded as the
//! publisher holding the template authority. Initialization runs exactly
//! once per instance, there is no entrypoint to repeat it.
//!
//! Records can be minted one at a time through `mint` or in batches
//! through `mintBulk`. Both are open to any account; restricting minters
//! is a concern for a layer above this contract.
//!
//! Note: The word 'address' refers to either an account address or a
//! contract address.

#![cfg_attr(not(feature = "std"), no_std)]
use crate::{constants::*, errors::*, helper::*, structs::*, types::*};
use concordium_cis2::*;
use concordium_std::*;

mod constants;
mod contract;
mod errors;
mod helper;
mod impls;
mod structs;
mod types;
