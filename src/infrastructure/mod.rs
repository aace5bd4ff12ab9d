pub mod bc_client;
pub mod json_sink;
pub mod metaplex;
pub mod solana_client;
