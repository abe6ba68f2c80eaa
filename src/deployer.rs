// Copyright 2025 Crypto Devs.
//
// This Crypto Devs Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the Crypto Devs Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the Crypto Devs Software.

use crate::common::Address;
use crate::config::DeployerConfig;
use crate::contract::crypto_dev_token::{self, CryptoDevToken};
use crate::contract::ContractId;
use alloy::network::EthereumWallet;
use alloy::providers::ProviderBuilder;
use alloy::signers::local::PrivateKeySigner;
use std::str::FromStr;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid deployer private key: {0}")]
    InvalidPrivateKey(#[from] alloy::signers::local::LocalSignerError),
    #[error("Failed to deploy {0}: {1}")]
    Deploy(ContractId, #[source] crypto_dev_token::Error),
}

/// Deploys the contract identified by `contract_id` on the configured network and
/// returns its on-chain address, unchanged.
///
/// The run is a single attempt: there are no retries and no additional timeouts
/// beyond what the provider applies to the deployment transaction itself.
pub async fn deploy_contract(
    config: &DeployerConfig,
    contract_id: ContractId,
) -> Result<Address, Error> {
    let signer = PrivateKeySigner::from_str(config.deployer_private_key.trim())?;
    let wallet = EthereumWallet::from(signer);

    let provider = ProviderBuilder::new()
        .wallet(wallet)
        .connect_http(config.network.rpc_url().clone());

    let nft_contract_address = *config.network.nft_contract_address();

    match contract_id {
        ContractId::CryptoDevToken => {
            info!(
                "Deploying {contract_id} on {} with NFT contract {nft_contract_address}",
                config.network
            );
            let token = CryptoDevToken::deploy(provider, nft_contract_address)
                .await
                .map_err(|err| Error::Deploy(contract_id, err))?;

            info!("Deployed {contract_id} at {}", token.address());
            Ok(token.address())
        }
    }
}
