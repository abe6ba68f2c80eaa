// Copyright 2025 Crypto Devs.
//
// This Crypto Devs Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the Crypto Devs Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the Crypto Devs Software.

use crate::common::Address;
use alloy::primitives::address;
use alloy::transports::http::reqwest;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use std::sync::LazyLock;

#[macro_use]
extern crate tracing;

pub mod common;
pub mod config;
pub mod contract;
pub mod deployer;
pub mod testnet;
pub mod utils;

static PUBLIC_SEPOLIA_HTTP_RPC_URL: LazyLock<reqwest::Url> = LazyLock::new(|| {
    "https://rpc.sepolia.org"
        .parse()
        .expect("Invalid RPC URL")
});

/// Address of the Crypto Devs NFT contract deployed in the previous module of the project.
/// The token contract takes it as its sole constructor argument.
const SEPOLIA_CRYPTO_DEVS_NFT_ADDRESS: Address =
    address!("f8e81d47203a594245e36c48e151709f0c19fbe8");

#[serde_as]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CustomNetwork {
    #[serde_as(as = "DisplayFromStr")]
    pub rpc_url_http: reqwest::Url,
    pub nft_contract_address: Address,
}

impl CustomNetwork {
    pub fn new(rpc_url: reqwest::Url, nft_contract_address: Address) -> Self {
        Self {
            rpc_url_http: rpc_url,
            nft_contract_address,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Network {
    #[default]
    Sepolia,
    Custom(CustomNetwork),
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Network::Sepolia => write!(f, "evm-sepolia"),
            Network::Custom(_) => write!(f, "evm-custom"),
        }
    }
}

impl Network {
    pub fn new_custom(rpc_url: reqwest::Url, nft_contract_address: Address) -> Self {
        Self::Custom(CustomNetwork::new(rpc_url, nft_contract_address))
    }

    pub fn identifier(&self) -> &str {
        match self {
            Network::Sepolia => "sepolia",
            Network::Custom(_) => "custom",
        }
    }

    pub fn rpc_url(&self) -> &reqwest::Url {
        match self {
            Network::Sepolia => &PUBLIC_SEPOLIA_HTTP_RPC_URL,
            Network::Custom(custom) => &custom.rpc_url_http,
        }
    }

    pub fn nft_contract_address(&self) -> &Address {
        match self {
            Network::Sepolia => &SEPOLIA_CRYPTO_DEVS_NFT_ADDRESS,
            Network::Custom(custom) => &custom.nft_contract_address,
        }
    }
}
