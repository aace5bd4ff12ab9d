use super::errors::MetadataError;
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

/// The only Metaplex Token Metadata account discriminant this decoder accepts.
pub const METADATA_SCHEMA_VERSION: u8 = 4;

/// Decoded on-chain Metaplex Token Metadata account.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct MetadataAccount {
    /// Base58 key of the authority allowed to update the account
    pub update_authority: String,
    /// Base58 key of the mint this metadata describes
    pub mint: String,
    /// Token name, trailing NUL padding trimmed
    pub name: String,
    /// Token symbol, trailing NUL padding trimmed
    pub symbol: String,
    /// Off-chain metadata URI, trailing NUL padding trimmed
    pub uri: String,
    /// Royalty in basis points
    pub seller_fee_basis_points: i16,
    /// Creator list in on-chain order, empty when the flag byte is unset
    pub creators: Vec<Creator>,
    pub primary_sale_happened: bool,
    pub is_mutable: bool,
}

/// One entry of the metadata creator list.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Creator {
    /// Base58 key of the creator
    pub address: String,
    pub verified: bool,
    /// Royalty share, nominally 0-100
    pub share: u8,
}

/// Forward-only reader over the raw account bytes. Every read moves the
/// offset; reads past the end fail with `TruncatedBuffer` and leave no way
/// to produce a partially decoded record.
struct Cursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], MetadataError> {
        let end = self.offset + len;
        let bytes = self
            .data
            .get(self.offset..end)
            .ok_or(MetadataError::TruncatedBuffer {
                offset: self.offset,
                needed: len,
            })?;
        self.offset = end;
        Ok(bytes)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], MetadataError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    fn read_u8(&mut self) -> Result<u8, MetadataError> {
        Ok(self.take(1)?[0])
    }

    fn read_bool(&mut self) -> Result<bool, MetadataError> {
        Ok(self.read_u8()? != 0)
    }

    fn read_u32(&mut self) -> Result<u32, MetadataError> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    fn read_i16(&mut self) -> Result<i16, MetadataError> {
        Ok(i16::from_le_bytes(self.read_array()?))
    }

    fn read_pubkey(&mut self) -> Result<String, MetadataError> {
        Ok(Pubkey::new_from_array(self.read_array()?).to_string())
    }

    /// `u32` length prefix followed by that many UTF-8 bytes. The on-chain
    /// writer pads fixed-capacity fields with NUL, so trailing NULs are
    /// trimmed here.
    fn read_string(&mut self) -> Result<String, MetadataError> {
        let len = self.read_u32()? as usize;
        let text = String::from_utf8(self.take(len)?.to_vec())?;
        Ok(text.trim_end_matches('\0').to_string())
    }
}

/// Decodes a raw Metaplex Token Metadata account.
///
/// Purely structural: no validation of creator shares or any other business
/// invariant. Bytes past the last field are ignored as forward-compatible
/// padding.
pub fn decode_metadata(data: &[u8]) -> Result<MetadataAccount, MetadataError> {
    let mut cursor = Cursor::new(data);

    let version = cursor.read_u8()?;
    if version != METADATA_SCHEMA_VERSION {
        return Err(MetadataError::UnsupportedSchemaVersion(version));
    }

    let update_authority = cursor.read_pubkey()?;
    let mint = cursor.read_pubkey()?;
    let name = cursor.read_string()?;
    let symbol = cursor.read_string()?;
    let uri = cursor.read_string()?;
    let seller_fee_basis_points = cursor.read_i16()?;

    let mut creators = Vec::new();
    if cursor.read_bool()? {
        let count = cursor.read_u32()?;
        for _ in 0..count {
            creators.push(Creator {
                address: cursor.read_pubkey()?,
                verified: cursor.read_u8()? != 0,
                share: cursor.read_u8()?,
            });
        }
    }

    let primary_sale_happened = cursor.read_bool()?;
    let is_mutable = cursor.read_bool()?;

    Ok(MetadataAccount {
        update_authority,
        mint,
        name,
        symbol,
        uri,
        seller_fee_basis_points,
        creators,
        primary_sale_happened,
        is_mutable,
    })
}
