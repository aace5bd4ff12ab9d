use solana_sdk::pubkey::{ParsePubkeyError, Pubkey};
use std::str::FromStr;

/// Metaplex Token Metadata program.
pub const METADATA_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s");

/// Derives the metadata account address for an SPL token mint.
///
/// The address is the program-derived address of the Token Metadata program
/// seeded with `"metadata"`, the program id and the mint key.
///
/// # Arguments
///
/// * `mint` - Base58 key of the SPL token mint.
///
/// # Returns
///
/// The metadata account `Pubkey`, or a `ParsePubkeyError` when `mint` is not
/// a valid base58 key.
pub fn derive_metadata_address(mint: &str) -> Result<Pubkey, ParsePubkeyError> {
    let mint_key = Pubkey::from_str(mint)?;
    let (address, _bump) = Pubkey::find_program_address(
        &[
            b"metadata",
            METADATA_PROGRAM_ID.as_ref(),
            mint_key.as_ref(),
        ],
        &METADATA_PROGRAM_ID,
    );
    Ok(address)
}
