// Copyright 2025 Crypto Devs.
//
// This Crypto Devs Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the Crypto Devs Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the Crypto Devs Software.

use crate::common::{Address, Amount};
use crate::contract::crypto_dev_token::CryptoDevTokenContract::CryptoDevTokenContractInstance;
use alloy::network::Network;
use alloy::providers::Provider;
use alloy::sol;

sol!(
    #[allow(clippy::too_many_arguments)]
    #[allow(missing_docs)]
    #[sol(rpc)]
    CryptoDevTokenContract,
    "artifacts/CryptoDevToken.json"
);

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    ContractError(#[from] alloy::contract::Error),
}

pub struct CryptoDevToken<P: Provider<N>, N: Network> {
    pub contract: CryptoDevTokenContractInstance<P, N>,
}

impl<P, N> CryptoDevToken<P, N>
where
    P: Provider<N>,
    N: Network,
{
    /// Create a handler for an already deployed CryptoDevToken contract.
    pub fn new(contract_address: Address, provider: P) -> Self {
        let contract = CryptoDevTokenContract::new(contract_address, provider);
        CryptoDevToken { contract }
    }

    /// Deploys the CryptoDevToken smart contract to the network of the provider,
    /// passing the Crypto Devs NFT contract address as the sole constructor argument.
    pub async fn deploy(provider: P, nft_contract_address: Address) -> Result<Self, Error> {
        debug!("Deploying CryptoDevToken with NFT contract {nft_contract_address}");
        let contract = CryptoDevTokenContract::deploy(provider, nft_contract_address).await?;
        Ok(CryptoDevToken { contract })
    }

    /// On-chain address of the contract.
    pub fn address(&self) -> Address {
        *self.contract.address()
    }

    /// Get the raw token balance of an address.
    pub async fn balance_of(&self, account: Address) -> Result<Amount, Error> {
        debug!("Getting balance of account: {account:?}");
        let balance = self.contract.balanceOf(account).call().await?;
        debug!("Balance of account {account} is {balance}");
        Ok(balance)
    }

    /// Amount of tokens minted so far.
    pub async fn total_supply(&self) -> Result<Amount, Error> {
        let total_supply = self.contract.totalSupply().call().await?;
        Ok(total_supply)
    }
}
