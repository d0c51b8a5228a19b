//! # ethnote Provider
//!
//! Chain profiles and per-chain RPC endpoint selection.
//!
//! Two concerns live here. [`ChainProfile`] describes a network well enough
//! to display it and to build the standard `wallet_addEthereumChain`
//! parameter object (hex-encoded chain id, nested native-currency shape).
//! [`EndpointRegistry`] answers "which read endpoint serves chain N",
//! preferring a configured vendor (Infura or Alchemy, keyed through the
//! environment) and falling back to public endpoints.
//!
//! ## Example
//!
//! ```
//! use ethnote_provider::{EndpointRegistry, SEPOLIA};
//!
//! let registry = EndpointRegistry::with_defaults();
//! let url = registry.url_for(SEPOLIA).unwrap();
//! assert!(url.starts_with("https://"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use dashmap::DashMap;
use ethnote_error::{Error, Result};
use serde::Serialize;
use url::Url;

/// Ethereum Mainnet chain id.
pub const MAINNET: u64 = 1;

/// Sepolia testnet chain id.
pub const SEPOLIA: u64 = 11155111;

// ============================================================================
// Chain Profiles
// ============================================================================

/// Static description of a supported network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainProfile {
    /// Chain id
    pub chain_id: u64,
    /// Display name (e.g. "Ethereum Mainnet")
    pub name: String,
    /// Native currency name (e.g. "Ether")
    pub currency_name: String,
    /// Native currency symbol (e.g. "ETH")
    pub currency_symbol: String,
    /// Native currency decimals (18 for all EVM chains handled here)
    pub decimals: u8,
    /// Whether this is a testnet
    pub is_testnet: bool,
    /// Block explorer base URL
    pub explorer_url: Option<String>,
    /// Public (keyless) RPC endpoints for this chain
    pub public_rpc_urls: Vec<String>,
}

impl ChainProfile {
    /// Returns the chain id in the hex form wallet RPC methods expect.
    pub fn chain_id_hex(&self) -> String {
        format!("0x{:x}", self.chain_id)
    }

    /// Builds the `wallet_addEthereumChain` parameter object for this chain.
    pub fn add_chain_params(&self) -> AddChainParams {
        AddChainParams {
            chain_id: self.chain_id_hex(),
            chain_name: self.name.clone(),
            native_currency: NativeCurrency {
                name: self.currency_name.clone(),
                symbol: self.currency_symbol.clone(),
                decimals: self.decimals,
            },
            rpc_urls: self.public_rpc_urls.clone(),
            block_explorer_urls: self.explorer_url.iter().cloned().collect(),
        }
    }
}

/// Parameter object for `wallet_addEthereumChain`, in the wire shape wallet
/// extensions expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddChainParams {
    /// Hex-encoded chain id (`"0xaa36a7"` for Sepolia)
    pub chain_id: String,
    /// Display name of the chain
    pub chain_name: String,
    /// Native currency description
    pub native_currency: NativeCurrency,
    /// RPC endpoints the wallet should use
    pub rpc_urls: Vec<String>,
    /// Block explorer URLs
    pub block_explorer_urls: Vec<String>,
}

/// Native currency section of [`AddChainParams`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NativeCurrency {
    /// Currency name
    pub name: String,
    /// Currency symbol
    pub symbol: String,
    /// Decimal places
    pub decimals: u8,
}

/// Profile for Ethereum Mainnet.
pub fn mainnet_profile() -> ChainProfile {
    ChainProfile {
        chain_id: MAINNET,
        name: "Ethereum Mainnet".to_string(),
        currency_name: "Ether".to_string(),
        currency_symbol: "ETH".to_string(),
        decimals: 18,
        is_testnet: false,
        explorer_url: Some("https://etherscan.io".to_string()),
        public_rpc_urls: vec![
            "https://eth.llamarpc.com".to_string(),
            "https://ethereum.publicnode.com".to_string(),
        ],
    }
}

/// Profile for the Sepolia testnet.
pub fn sepolia_profile() -> ChainProfile {
    ChainProfile {
        chain_id: SEPOLIA,
        name: "Sepolia Testnet".to_string(),
        currency_name: "Sepolia ETH".to_string(),
        currency_symbol: "ETH".to_string(),
        decimals: 18,
        is_testnet: true,
        explorer_url: Some("https://sepolia.etherscan.io".to_string()),
        public_rpc_urls: vec![
            "https://ethereum-sepolia-rpc.publicnode.com".to_string(),
            "https://rpc.sepolia.org".to_string(),
        ],
    }
}

// ============================================================================
// Vendor Selection
// ============================================================================

/// Which RPC vendor endpoint URLs are built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcVendor {
    /// Infura, keyed through `ETHNOTE_INFURA_KEY`
    Infura,
    /// Alchemy, keyed through `ETHNOTE_ALCHEMY_KEY`
    Alchemy,
    /// Public keyless endpoints (rate limits apply)
    Public,
}

/// Environment variable naming the preferred vendor (`infura`, `alchemy`,
/// `public`).
pub const VENDOR_ENV: &str = "ETHNOTE_RPC_VENDOR";

/// Environment variable holding the Infura project key.
pub const INFURA_KEY_ENV: &str = "ETHNOTE_INFURA_KEY";

/// Environment variable holding the Alchemy API key.
pub const ALCHEMY_KEY_ENV: &str = "ETHNOTE_ALCHEMY_KEY";

impl RpcVendor {
    /// Picks the vendor from the environment.
    ///
    /// An explicit `ETHNOTE_RPC_VENDOR` wins; otherwise whichever API key is
    /// present decides, and with no key at all the public endpoints are used.
    pub fn from_env() -> RpcVendor {
        match std::env::var(VENDOR_ENV).ok().as_deref() {
            Some("infura") => return RpcVendor::Infura,
            Some("alchemy") => return RpcVendor::Alchemy,
            Some("public") => return RpcVendor::Public,
            _ => {}
        }
        if std::env::var(ALCHEMY_KEY_ENV).is_ok() {
            RpcVendor::Alchemy
        } else if std::env::var(INFURA_KEY_ENV).is_ok() {
            RpcVendor::Infura
        } else {
            tracing::warn!("no RPC API key configured, using public endpoints");
            RpcVendor::Public
        }
    }

    /// Builds this vendor's endpoint URL for a chain, or `None` when the
    /// vendor does not serve the chain or its key is missing.
    pub fn url_for(&self, chain_id: u64) -> Option<String> {
        match self {
            RpcVendor::Infura => {
                let key = std::env::var(INFURA_KEY_ENV).ok()?;
                let host = match chain_id {
                    MAINNET => "mainnet.infura.io",
                    SEPOLIA => "sepolia.infura.io",
                    _ => return None,
                };
                Some(format!("https://{host}/v3/{key}"))
            }
            RpcVendor::Alchemy => {
                let key = std::env::var(ALCHEMY_KEY_ENV).ok()?;
                let host = match chain_id {
                    MAINNET => "eth-mainnet.g.alchemy.com",
                    SEPOLIA => "eth-sepolia.g.alchemy.com",
                    _ => return None,
                };
                Some(format!("https://{host}/v2/{key}"))
            }
            RpcVendor::Public => None,
        }
    }
}

// ============================================================================
// Endpoint Configuration
// ============================================================================

/// Configuration for a chain's read endpoint.
#[derive(Debug, Clone)]
pub struct EndpointConfig {
    /// Primary RPC URL
    pub url: String,
    /// Fallback URLs
    pub fallback_urls: Vec<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl EndpointConfig {
    /// Creates a new endpoint configuration with the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            fallback_urls: Vec::new(),
            timeout_secs: 30,
        }
    }

    /// Adds a fallback URL.
    pub fn with_fallback(mut self, url: impl Into<String>) -> Self {
        self.fallback_urls.push(url.into());
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Validates every configured URL.
    pub fn validate(&self) -> Result<()> {
        for url in self.all_urls() {
            Url::parse(url).map_err(|e| Error::Config(format!("invalid URL '{url}': {e}")))?;
        }
        Ok(())
    }

    /// Returns all URLs (primary + fallbacks).
    pub fn all_urls(&self) -> Vec<&str> {
        let mut urls = vec![self.url.as_str()];
        urls.extend(self.fallback_urls.iter().map(|s| s.as_str()));
        urls
    }
}

/// Builds the endpoint configuration for a profile under a vendor
/// preference: the vendor URL leads when available, the profile's public
/// endpoints follow as fallbacks.
///
/// Fails when neither the vendor nor the profile contributes a URL.
pub fn endpoint_for(profile: &ChainProfile, vendor: RpcVendor) -> Result<EndpointConfig> {
    let mut urls = vendor.url_for(profile.chain_id).into_iter().collect::<Vec<_>>();
    urls.extend(profile.public_rpc_urls.iter().cloned());

    let mut urls = urls.into_iter();
    let primary = urls.next().ok_or_else(|| {
        Error::Config(format!("no endpoints available for chain {}", profile.chain_id))
    })?;

    let mut config = EndpointConfig::new(primary);
    for url in urls {
        config = config.with_fallback(url);
    }
    Ok(config)
}

// ============================================================================
// Registry
// ============================================================================

/// Registry mapping chain ids to profiles and read endpoints.
#[derive(Debug, Default)]
pub struct EndpointRegistry {
    profiles: DashMap<u64, ChainProfile>,
    endpoints: DashMap<u64, EndpointConfig>,
}

impl EndpointRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the built-in Mainnet and Sepolia profiles,
    /// using the vendor preference from the environment.
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        let vendor = RpcVendor::from_env();
        for profile in [mainnet_profile(), sepolia_profile()] {
            // built-in profiles always carry public URLs
            if let Ok(endpoint) = endpoint_for(&profile, vendor) {
                registry.register(profile, endpoint);
            }
        }
        registry
    }

    /// Registers a chain profile together with its read endpoint.
    pub fn register(&self, profile: ChainProfile, endpoint: EndpointConfig) {
        let chain_id = profile.chain_id;
        self.profiles.insert(chain_id, profile);
        self.endpoints.insert(chain_id, endpoint);
    }

    /// Returns the profile for a chain id.
    pub fn profile(&self, chain_id: u64) -> Option<ChainProfile> {
        self.profiles.get(&chain_id).map(|p| p.clone())
    }

    /// Returns the primary read endpoint URL for a chain id.
    pub fn url_for(&self, chain_id: u64) -> Result<String> {
        self.endpoints
            .get(&chain_id)
            .map(|e| e.url.clone())
            .ok_or(Error::UnsupportedNetwork { chain_id })
    }

    /// Returns the full endpoint configuration for a chain id.
    pub fn endpoint(&self, chain_id: u64) -> Result<EndpointConfig> {
        self.endpoints
            .get(&chain_id)
            .map(|e| e.clone())
            .ok_or(Error::UnsupportedNetwork { chain_id })
    }

    /// Builds `wallet_addEthereumChain` parameters for a chain id.
    pub fn add_chain_params(&self, chain_id: u64) -> Result<AddChainParams> {
        self.profile(chain_id)
            .map(|p| p.add_chain_params())
            .ok_or(Error::UnsupportedNetwork { chain_id })
    }

    /// Returns true if the registry knows the chain.
    pub fn supports(&self, chain_id: u64) -> bool {
        self.profiles.contains_key(&chain_id)
    }

    /// Returns all registered chain ids.
    pub fn chain_ids(&self) -> Vec<u64> {
        self.profiles.iter().map(|p| *p.key()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethnote_error::ErrorKind;

    #[test]
    fn test_chain_id_hex() {
        assert_eq!(mainnet_profile().chain_id_hex(), "0x1");
        assert_eq!(sepolia_profile().chain_id_hex(), "0xaa36a7");
    }

    #[test]
    fn test_add_chain_params_wire_shape() {
        let params = sepolia_profile().add_chain_params();
        let json = serde_json::to_value(&params).unwrap();

        assert_eq!(json["chainId"], "0xaa36a7");
        assert_eq!(json["chainName"], "Sepolia Testnet");
        assert_eq!(json["nativeCurrency"]["symbol"], "ETH");
        assert_eq!(json["nativeCurrency"]["decimals"], 18);
        assert!(json["rpcUrls"].as_array().unwrap().len() >= 1);
        assert_eq!(
            json["blockExplorerUrls"][0],
            "https://sepolia.etherscan.io"
        );
    }

    #[test]
    fn test_endpoint_config() {
        let config = EndpointConfig::new("https://eth.llamarpc.com")
            .with_fallback("https://ethereum.publicnode.com")
            .with_timeout(60);

        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.all_urls().len(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_url() {
        let config = EndpointConfig::new("not-a-valid-url");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_public_vendor_endpoint() {
        let config = endpoint_for(&mainnet_profile(), RpcVendor::Public).unwrap();
        assert_eq!(config.url, "https://eth.llamarpc.com");
        assert_eq!(config.fallback_urls.len(), 1);

        let mut bare = mainnet_profile();
        bare.public_rpc_urls.clear();
        assert!(endpoint_for(&bare, RpcVendor::Public).is_err());
    }

    #[test]
    fn test_registry_lookup() {
        let registry = EndpointRegistry::new();
        registry.register(
            sepolia_profile(),
            EndpointConfig::new("https://rpc.sepolia.org"),
        );

        assert!(registry.supports(SEPOLIA));
        assert!(!registry.supports(MAINNET));
        assert_eq!(registry.url_for(SEPOLIA).unwrap(), "https://rpc.sepolia.org");
        assert_eq!(registry.profile(SEPOLIA).unwrap().chain_id, SEPOLIA);
    }

    #[test]
    fn test_registry_unknown_chain() {
        let registry = EndpointRegistry::new();
        let err = registry.url_for(31337).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedNetwork);

        let err = registry.add_chain_params(31337).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedNetwork);
    }

    #[test]
    fn test_registry_defaults() {
        let registry = EndpointRegistry::with_defaults();
        assert!(registry.supports(MAINNET));
        assert!(registry.supports(SEPOLIA));
        assert_eq!(registry.chain_ids().len(), 2);

        for chain_id in registry.chain_ids() {
            assert!(registry.endpoint(chain_id).unwrap().validate().is_ok());
        }
    }
}
