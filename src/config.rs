// Copyright 2025 Crypto Devs.
//
// This Crypto Devs Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the Crypto Devs Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the Crypto Devs Software.

use crate::common::Address;
use crate::Network;
use alloy::transports::http::reqwest;
use std::env;
use std::str::FromStr;

/// environment variable to select a built-in EVM network by identifier
pub const EVM_NETWORK: &str = "EVM_NETWORK";
/// environment variable to connect to a custom EVM network
pub const RPC_URL: &str = "RPC_URL";
const RPC_URL_BUILD_TIME_VAL: Option<&str> = option_env!("RPC_URL");
pub const NFT_CONTRACT_ADDRESS: &str = "NFT_CONTRACT_ADDRESS";
const NFT_CONTRACT_ADDRESS_BUILD_TIME_VAL: Option<&str> = option_env!("NFT_CONTRACT_ADDRESS");
pub const DEPLOYER_PRIVATE_KEY: &str = "DEPLOYER_PRIVATE_KEY";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Missing environment variable: {0}")]
    MissingVar(&'static str),
    #[error("Unknown EVM network: {0}")]
    UnknownNetwork(String),
    #[error("Invalid RPC URL: {0}")]
    InvalidRpcUrl(String),
    #[error("Invalid NFT contract address: {0}")]
    InvalidNftContractAddress(String),
}

/// Configuration for a single deployment run, loaded once at process start and
/// passed explicitly to the deployer.
#[derive(Clone, Debug)]
pub struct DeployerConfig {
    pub network: Network,
    pub deployer_private_key: String,
}

impl DeployerConfig {
    /// Load the configuration from a `.env` file in the working directory and the
    /// process environment.
    ///
    /// A missing or unreadable `.env` file is ignored; the variables it defines are
    /// merged into the process environment before any lookup happens. `EVM_NETWORK`
    /// selects a built-in network by identifier. Without it, `RPC_URL` and
    /// `NFT_CONTRACT_ADDRESS` configure a custom network; when neither is set the
    /// built-in Sepolia constants are used. `DEPLOYER_PRIVATE_KEY` is always
    /// required.
    pub fn from_env() -> Result<Self, Error> {
        let _ = dotenvy::dotenv();

        Self::from_vars(
            env::var(EVM_NETWORK).ok(),
            env::var(RPC_URL)
                .ok()
                .or_else(|| RPC_URL_BUILD_TIME_VAL.map(|s| s.to_string())),
            env::var(NFT_CONTRACT_ADDRESS)
                .ok()
                .or_else(|| NFT_CONTRACT_ADDRESS_BUILD_TIME_VAL.map(|s| s.to_string())),
            env::var(DEPLOYER_PRIVATE_KEY).ok(),
        )
    }

    fn from_vars(
        network_name: Option<String>,
        rpc_url: Option<String>,
        nft_contract_address: Option<String>,
        deployer_private_key: Option<String>,
    ) -> Result<Self, Error> {
        let deployer_private_key =
            deployer_private_key.ok_or(Error::MissingVar(DEPLOYER_PRIVATE_KEY))?;
        let network = resolve_network(network_name.as_deref(), rpc_url, nft_contract_address)?;

        Ok(DeployerConfig {
            network,
            deployer_private_key,
        })
    }
}

fn resolve_network(
    network_name: Option<&str>,
    rpc_url: Option<String>,
    nft_contract_address: Option<String>,
) -> Result<Network, Error> {
    match network_name {
        Some(name) if name == Network::Sepolia.identifier() => {
            info!("Using Sepolia EVM network as {EVM_NETWORK} is set to '{name}'");
            Ok(Network::Sepolia)
        }
        Some(other) => {
            error!("Unknown EVM network requested through {EVM_NETWORK}: {other}");
            Err(Error::UnknownNetwork(other.to_string()))
        }
        None if rpc_url.is_none() && nft_contract_address.is_none() => {
            info!("Using Sepolia EVM network constants");
            Ok(Network::Sepolia)
        }
        None => {
            info!("Using custom EVM network from environment variables");
            let rpc_url = rpc_url.ok_or(Error::MissingVar(RPC_URL))?;
            let rpc_url = reqwest::Url::parse(&rpc_url)
                .map_err(|err| Error::InvalidRpcUrl(format!("{rpc_url}: {err}")))?;

            // The deployment must never be attempted with an empty or malformed
            // NFT contract address, so it is parsed into a typed address here.
            let nft_contract_address =
                nft_contract_address.ok_or(Error::MissingVar(NFT_CONTRACT_ADDRESS))?;
            let nft_contract_address = Address::from_str(nft_contract_address.trim())
                .map_err(|err| Error::InvalidNftContractAddress(format!("{err}")))?;

            Ok(Network::new_custom(rpc_url, nft_contract_address))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::dummy_address;

    #[test]
    fn missing_private_key_is_rejected() {
        let result = DeployerConfig::from_vars(None, None, None, None);
        assert!(matches!(result, Err(Error::MissingVar(DEPLOYER_PRIVATE_KEY))));
    }

    #[test]
    fn defaults_to_sepolia_constants() {
        let config = DeployerConfig::from_vars(None, None, None, Some("0xkey".to_string()))
            .expect("config should load");
        assert_eq!(config.network, Network::Sepolia);
    }

    #[test]
    fn selects_sepolia_by_identifier() {
        let config = DeployerConfig::from_vars(
            Some("sepolia".to_string()),
            None,
            None,
            Some("0xkey".to_string()),
        )
        .expect("config should load");
        assert_eq!(config.network, Network::Sepolia);
    }

    #[test]
    fn rejects_unknown_network_identifier() {
        let result = DeployerConfig::from_vars(
            Some("goerli".to_string()),
            None,
            None,
            Some("0xkey".to_string()),
        );
        assert!(matches!(result, Err(Error::UnknownNetwork(_))));
    }

    #[test]
    fn builds_custom_network_from_variables() {
        let nft_contract_address = dummy_address();
        let config = DeployerConfig::from_vars(
            None,
            Some("http://localhost:8545".to_string()),
            Some(nft_contract_address.to_string()),
            Some("0xkey".to_string()),
        )
        .expect("config should load");

        assert_eq!(config.network.nft_contract_address(), &nft_contract_address);
        assert_eq!(config.network.rpc_url().as_str(), "http://localhost:8545/");
    }

    #[test]
    fn custom_network_requires_nft_contract_address() {
        let result = DeployerConfig::from_vars(
            None,
            Some("http://localhost:8545".to_string()),
            None,
            Some("0xkey".to_string()),
        );
        assert!(matches!(
            result,
            Err(Error::MissingVar(NFT_CONTRACT_ADDRESS))
        ));
    }

    #[test]
    fn empty_nft_contract_address_fails_fast() {
        let result = DeployerConfig::from_vars(
            None,
            Some("http://localhost:8545".to_string()),
            Some(String::new()),
            Some("0xkey".to_string()),
        );
        assert!(matches!(result, Err(Error::InvalidNftContractAddress(_))));
    }

    #[test]
    fn malformed_nft_contract_address_fails_fast() {
        let result = DeployerConfig::from_vars(
            None,
            Some("http://localhost:8545".to_string()),
            Some("0xnot-an-address".to_string()),
            Some("0xkey".to_string()),
        );
        assert!(matches!(result, Err(Error::InvalidNftContractAddress(_))));
    }
}
