// Copyright 2025 Crypto Devs.
//
// This Crypto Devs Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the Crypto Devs Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the Crypto Devs Software.

use crate::common::Address;
use crate::contract::crypto_dev_token::CryptoDevToken;
use crate::utils::dummy_address;
use crate::Network;
use alloy::hex::ToHexExt;
use alloy::network::{Ethereum, EthereumWallet};
use alloy::node_bindings::{Anvil, AnvilInstance};
use alloy::providers::fillers::{
    BlobGasFiller, ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller, WalletFiller,
};
use alloy::providers::{Identity, ProviderBuilder, RootProvider};
use alloy::signers::local::PrivateKeySigner;
use alloy::transports::http::reqwest::Url;

pub struct Testnet {
    anvil: AnvilInstance,
    rpc_url: Url,
    nft_contract_address: Address,
    token_address: Address,
}

impl Testnet {
    /// Starts an Anvil node and deploys the CryptoDevToken smart contract against a
    /// random NFT contract address.
    pub async fn new() -> Self {
        let (node, rpc_url) = start_node();

        let nft_contract_address = dummy_address();
        let token =
            deploy_crypto_dev_token_contract(&rpc_url, &node, nft_contract_address).await;

        Testnet {
            anvil: node,
            rpc_url,
            nft_contract_address,
            token_address: token.address(),
        }
    }

    pub fn to_network(&self) -> Network {
        Network::new_custom(self.rpc_url.clone(), self.nft_contract_address)
    }

    pub fn token_address(&self) -> Address {
        self.token_address
    }

    pub fn default_wallet_private_key(&self) -> String {
        // Fetches private key from the first default Anvil account (Alice).
        let signer: PrivateKeySigner = self.anvil.keys()[0].clone().into();
        signer.to_bytes().encode_hex_with_prefix()
    }
}

/// Runs a local Anvil node bound to a specified IP address.
///
/// The `AnvilInstance` `endpoint` function is hardcoded to return "localhost", so we must also
/// return the RPC URL if we want to listen on a different address.
///
/// The `anvil` binary respects the `ANVIL_IP_ADDR` environment variable, but defaults to "localhost".
pub fn start_node() -> (AnvilInstance, Url) {
    let host = std::env::var("ANVIL_IP_ADDR").unwrap_or_else(|_| "localhost".to_string());
    let port = std::env::var("ANVIL_PORT")
        .unwrap_or(0.to_string())
        .parse::<u16>()
        .expect("Invalid port number");

    let anvil = Anvil::new()
        .port(port)
        .try_spawn()
        .expect("Could not spawn Anvil node");

    // We have to manually return the RPC URL because the `anvil::endpoint_url()` always returns `localhost`
    let url = Url::parse(&format!("http://{host}:{}", anvil.port())).expect("Failed to parse URL");

    (anvil, url)
}

#[allow(clippy::type_complexity)]
pub async fn deploy_crypto_dev_token_contract(
    rpc_url: &Url,
    anvil: &AnvilInstance,
    nft_contract_address: Address,
) -> CryptoDevToken<
    FillProvider<
        JoinFill<
            JoinFill<
                Identity,
                JoinFill<GasFiller, JoinFill<BlobGasFiller, JoinFill<NonceFiller, ChainIdFiller>>>,
            >,
            WalletFiller<EthereumWallet>,
        >,
        RootProvider,
        Ethereum,
    >,
    Ethereum,
> {
    // Set up signer from the first default Anvil account (Alice).
    let signer: PrivateKeySigner = anvil.keys()[0].clone().into();
    let wallet = EthereumWallet::from(signer);

    let provider = ProviderBuilder::new()
        .wallet(wallet)
        .connect_http(rpc_url.clone());

    // Deploy the contract.
    CryptoDevToken::deploy(provider, nft_contract_address)
        .await
        .expect("Could not deploy contract, update anvil by running `foundryup` and try again")
}
