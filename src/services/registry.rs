//! # Coin Registry
//!
//! A compiled-in, read-only table of exactly 54 chains. Adding a chain is a
//! three-step edit: a row here, a codec function under
//! [`crate::services::codecs`], and a dispatch arm in
//! [`crate::services::codecs::encode`].

use crate::models::address::{Category, KeyType};

/// Which codec family (and family-specific parameters) a registry entry dispatches to.
#[derive(Debug, Clone, Copy)]
pub enum FormatterId {
    /// Bitcoin-style P2PKH Base58Check, with the network's version byte.
    P2pkhBase58Check {
        /// Pubkey-hash version byte prepended before the Base58Check checksum.
        version: u8,
    },
    /// Keccak-256 EVM addressing shared by every EVM-compatible chain.
    KeccakEvm,
    /// Bech32 / Cosmos ADR-028 addressing, with the chain's human-readable prefix.
    Bech32Cosmos {
        /// Bech32 human-readable prefix, e.g. `"cosmos"`.
        hrp: &'static str,
    },
    /// Substrate SS58 addressing, with the chain's network prefix byte.
    Ss58 {
        /// SS58 network prefix (e.g. `0` for Polkadot, `2` for Kusama).
        prefix: u16,
    },
    /// Solana's raw-Base58 Ed25519 public key encoding.
    Ed25519Solana,
    /// Tezos `tz1` Ed25519 encoding (Blake2b-160 then Base58Check).
    Ed25519Tezos,
    /// Stellar `G...` Ed25519 encoding (version byte, Base32, CRC16-XModem).
    Ed25519Stellar,
    /// SHA3-256-truncated addressing (ICON's `hx...`).
    Sha3Trunc,
    /// EIP-2645 Starknet grindKey addressing.
    Eip2645Starknet,
    /// Ripple's Base58Check alphabet and checksum.
    RippleBase58Check,
    /// TRON's Base58Check with the `0x41` version byte.
    TronBase58Check,
}

/// One row of the coin registry.
#[derive(Debug, Clone, Copy)]
pub struct RegistryEntry {
    /// 1-based market-cap-ish rank; the sort key for `AddressBook`.
    pub rank: u32,
    /// Uppercase ticker symbol.
    pub symbol: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Registry category.
    pub category: Category,
    /// BIP44 coin-type integer, unique within the table.
    pub coin_type: u32,
    /// An alternate, ecosystem-observed coin-type value, where the
    /// SLIP-44-registered value and real-world usage disagree (ICON).
    pub coin_type_alt: Option<u32>,
    /// Signature scheme this chain's key uses.
    pub key_type: KeyType,
    /// Which codec to dispatch to.
    pub formatter: FormatterId,
}

/// The 54-entry compiled-in table, in `rank` ascending order.
pub const ENTRIES: &[RegistryEntry] = &[
    // --- P2PKH Base58Check (12) ---
    RegistryEntry { rank: 1, symbol: "BTC", name: "Bitcoin", category: Category::Base, coin_type: 0, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::P2pkhBase58Check { version: 0x00 } },
    RegistryEntry { rank: 2, symbol: "LTC", name: "Litecoin", category: Category::Base, coin_type: 2, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::P2pkhBase58Check { version: 0x30 } },
    RegistryEntry { rank: 3, symbol: "DOGE", name: "Dogecoin", category: Category::Base, coin_type: 3, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::P2pkhBase58Check { version: 0x1e } },
    RegistryEntry { rank: 4, symbol: "DASH", name: "Dash", category: Category::Base, coin_type: 5, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::P2pkhBase58Check { version: 0x4c } },
    RegistryEntry { rank: 5, symbol: "BCH", name: "Bitcoin Cash", category: Category::Base, coin_type: 145, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::P2pkhBase58Check { version: 0x00 } },
    RegistryEntry { rank: 6, symbol: "ZEC", name: "Zcash", category: Category::Base, coin_type: 133, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::P2pkhBase58Check { version: 0x1c } },
    RegistryEntry { rank: 7, symbol: "QTUM", name: "Qtum", category: Category::Base, coin_type: 2301, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::P2pkhBase58Check { version: 0x3a } },
    RegistryEntry { rank: 8, symbol: "VTC", name: "Vertcoin", category: Category::Base, coin_type: 28, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::P2pkhBase58Check { version: 0x47 } },
    RegistryEntry { rank: 9, symbol: "DGB", name: "DigiByte", category: Category::Base, coin_type: 20, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::P2pkhBase58Check { version: 0x1e } },
    RegistryEntry { rank: 10, symbol: "RVN", name: "Ravencoin", category: Category::Base, coin_type: 175, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::P2pkhBase58Check { version: 0x3c } },
    RegistryEntry { rank: 11, symbol: "PIVX", name: "PIVX", category: Category::Base, coin_type: 119, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::P2pkhBase58Check { version: 0x1e } },
    RegistryEntry { rank: 12, symbol: "SYS", name: "Syscoin", category: Category::Base, coin_type: 57, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::P2pkhBase58Check { version: 0x3f } },
    // --- Keccak-256 EVM (20) ---
    RegistryEntry { rank: 13, symbol: "ETH", name: "Ethereum", category: Category::Base, coin_type: 60, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::KeccakEvm },
    RegistryEntry { rank: 14, symbol: "ETC", name: "Ethereum Classic", category: Category::AltEvm, coin_type: 61, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::KeccakEvm },
    RegistryEntry { rank: 15, symbol: "BNB", name: "BNB Smart Chain", category: Category::AltEvm, coin_type: 9006, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::KeccakEvm },
    RegistryEntry { rank: 16, symbol: "MATIC", name: "Polygon", category: Category::Layer2, coin_type: 966, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::KeccakEvm },
    RegistryEntry { rank: 17, symbol: "AVAX", name: "Avalanche C-Chain", category: Category::AltEvm, coin_type: 9000, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::KeccakEvm },
    RegistryEntry { rank: 18, symbol: "FTM", name: "Fantom", category: Category::AltEvm, coin_type: 1007, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::KeccakEvm },
    RegistryEntry { rank: 19, symbol: "CELO", name: "Celo", category: Category::AltEvm, coin_type: 52752, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::KeccakEvm },
    RegistryEntry { rank: 20, symbol: "RBTC", name: "RSK", category: Category::AltEvm, coin_type: 137, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::KeccakEvm },
    RegistryEntry { rank: 21, symbol: "POA", name: "POA Network", category: Category::AltEvm, coin_type: 178, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::KeccakEvm },
    RegistryEntry { rank: 22, symbol: "TOMO", name: "TomoChain", category: Category::AltEvm, coin_type: 889, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::KeccakEvm },
    RegistryEntry { rank: 23, symbol: "GO", name: "GoChain", category: Category::AltEvm, coin_type: 6060, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::KeccakEvm },
    RegistryEntry { rank: 24, symbol: "CLO", name: "Callisto", category: Category::AltEvm, coin_type: 820, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::KeccakEvm },
    RegistryEntry { rank: 25, symbol: "CRO", name: "Cronos", category: Category::AltEvm, coin_type: 394, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::KeccakEvm },
    RegistryEntry { rank: 26, symbol: "GLMR", name: "Moonbeam", category: Category::AltEvm, coin_type: 1284, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::KeccakEvm },
    RegistryEntry { rank: 27, symbol: "KCS", name: "KuCoin Community Chain", category: Category::AltEvm, coin_type: 20_000_001, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::KeccakEvm },
    RegistryEntry { rank: 28, symbol: "XDAI", name: "Gnosis Chain", category: Category::AltEvm, coin_type: 20_000_002, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::KeccakEvm },
    RegistryEntry { rank: 29, symbol: "METIS", name: "Metis Andromeda", category: Category::Layer2, coin_type: 20_000_003, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::KeccakEvm },
    RegistryEntry { rank: 30, symbol: "BOBA", name: "Boba Network", category: Category::Layer2, coin_type: 20_000_004, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::KeccakEvm },
    RegistryEntry { rank: 31, symbol: "ARB", name: "Arbitrum One", category: Category::Layer2, coin_type: 20_000_005, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::KeccakEvm },
    RegistryEntry { rank: 32, symbol: "OP", name: "Optimism", category: Category::Layer2, coin_type: 20_000_006, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::KeccakEvm },
    // --- Bech32 / Cosmos ADR-028 (10) ---
    RegistryEntry { rank: 33, symbol: "ATOM", name: "Cosmos Hub", category: Category::Cosmos, coin_type: 118, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::Bech32Cosmos { hrp: "cosmos" } },
    RegistryEntry { rank: 34, symbol: "OSMO", name: "Osmosis", category: Category::Cosmos, coin_type: 20_000_101, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::Bech32Cosmos { hrp: "osmo" } },
    RegistryEntry { rank: 35, symbol: "JUNO", name: "Juno", category: Category::Cosmos, coin_type: 20_000_102, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::Bech32Cosmos { hrp: "juno" } },
    RegistryEntry { rank: 36, symbol: "EVMOS", name: "Evmos", category: Category::Cosmos, coin_type: 20_000_103, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::Bech32Cosmos { hrp: "evmos" } },
    RegistryEntry { rank: 37, symbol: "SCRT", name: "Secret Network", category: Category::Cosmos, coin_type: 20_000_104, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::Bech32Cosmos { hrp: "secret" } },
    RegistryEntry { rank: 38, symbol: "ONE", name: "Harmony", category: Category::Cosmos, coin_type: 1023, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::Bech32Cosmos { hrp: "one" } },
    RegistryEntry { rank: 39, symbol: "ZIL", name: "Zilliqa", category: Category::Cosmos, coin_type: 313, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::Bech32Cosmos { hrp: "zil" } },
    RegistryEntry { rank: 40, symbol: "KAVA", name: "Kava", category: Category::Cosmos, coin_type: 459, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::Bech32Cosmos { hrp: "kava" } },
    RegistryEntry { rank: 41, symbol: "AKT", name: "Akash Network", category: Category::Cosmos, coin_type: 20_000_105, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::Bech32Cosmos { hrp: "akash" } },
    RegistryEntry { rank: 42, symbol: "XPRT", name: "Persistence", category: Category::Cosmos, coin_type: 20_000_106, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::Bech32Cosmos { hrp: "persistence" } },
    // --- SS58 (5) ---
    RegistryEntry { rank: 43, symbol: "DOT", name: "Polkadot", category: Category::Substrate, coin_type: 354, coin_type_alt: None, key_type: KeyType::Sr25519, formatter: FormatterId::Ss58 { prefix: 0 } },
    RegistryEntry { rank: 44, symbol: "KSM", name: "Kusama", category: Category::Substrate, coin_type: 434, coin_type_alt: None, key_type: KeyType::Sr25519, formatter: FormatterId::Ss58 { prefix: 2 } },
    RegistryEntry { rank: 45, symbol: "ASTR", name: "Astar", category: Category::Substrate, coin_type: 810, coin_type_alt: None, key_type: KeyType::Sr25519, formatter: FormatterId::Ss58 { prefix: 5 } },
    RegistryEntry { rank: 46, symbol: "MOVR", name: "Moonriver", category: Category::Substrate, coin_type: 1285, coin_type_alt: None, key_type: KeyType::Sr25519, formatter: FormatterId::Ss58 { prefix: 1285 } },
    RegistryEntry { rank: 47, symbol: "CFG", name: "Centrifuge", category: Category::Substrate, coin_type: 20_000_201, coin_type_alt: None, key_type: KeyType::Sr25519, formatter: FormatterId::Ss58 { prefix: 36 } },
    // --- Ed25519 textual (3) ---
    RegistryEntry { rank: 48, symbol: "SOL", name: "Solana", category: Category::Custom, coin_type: 501, coin_type_alt: None, key_type: KeyType::Ed25519, formatter: FormatterId::Ed25519Solana },
    RegistryEntry { rank: 49, symbol: "XTZ", name: "Tezos", category: Category::Custom, coin_type: 1729, coin_type_alt: None, key_type: KeyType::Ed25519, formatter: FormatterId::Ed25519Tezos },
    RegistryEntry { rank: 50, symbol: "XLM", name: "Stellar", category: Category::Custom, coin_type: 148, coin_type_alt: None, key_type: KeyType::Ed25519, formatter: FormatterId::Ed25519Stellar },
    // --- SHA3-256 truncated (1) ---
    RegistryEntry { rank: 51, symbol: "ICX", name: "ICON", category: Category::Custom, coin_type: 74, coin_type_alt: Some(4_801_368), key_type: KeyType::Secp256k1, formatter: FormatterId::Sha3Trunc },
    // --- EIP-2645 Starknet (1) ---
    RegistryEntry { rank: 52, symbol: "STRK", name: "Starknet", category: Category::Layer2, coin_type: 9004, coin_type_alt: None, key_type: KeyType::SchnorrSecp256k1, formatter: FormatterId::Eip2645Starknet },
    // --- Ripple Base58Check (1) ---
    RegistryEntry { rank: 53, symbol: "XRP", name: "Ripple", category: Category::Base, coin_type: 144, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::RippleBase58Check },
    // --- TRON Base58Check (1) ---
    RegistryEntry { rank: 54, symbol: "TRX", name: "TRON", category: Category::Base, coin_type: 195, coin_type_alt: None, key_type: KeyType::Secp256k1, formatter: FormatterId::TronBase58Check },
];

/// All entries, already in `rank` ascending order.
pub fn all() -> &'static [RegistryEntry] {
    ENTRIES
}

/// Look up an entry by ticker symbol.
pub fn by_symbol(symbol: &str) -> Option<&'static RegistryEntry> {
    ENTRIES.iter().find(|e| e.symbol == symbol)
}

/// Look up an entry by its primary (SLIP-44-policy) coin type.
pub fn by_coin_type(coin_type: u32) -> Option<&'static RegistryEntry> {
    ENTRIES.iter().find(|e| e.coin_type == coin_type)
}
