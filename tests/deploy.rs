// Copyright 2025 Crypto Devs.
//
// This Crypto Devs Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the Crypto Devs Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the Crypto Devs Software.

use alloy::transports::http::reqwest::Url;
use cryptodevs_deployer::common::{Address, Amount};
use cryptodevs_deployer::config::DeployerConfig;
use cryptodevs_deployer::contract::crypto_dev_token::CryptoDevToken;
use cryptodevs_deployer::contract::ContractId;
use cryptodevs_deployer::deployer;
use cryptodevs_deployer::testnet::{deploy_crypto_dev_token_contract, start_node, Testnet};
use cryptodevs_deployer::utils::{dummy_address, http_provider};
use cryptodevs_deployer::Network;

// First default Anvil account (Alice).
const ANVIL_ALICE_PRIVATE_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

#[tokio::test]
async fn deploys_token_and_returns_its_address() {
    let testnet = Testnet::new().await;

    let config = DeployerConfig {
        network: testnet.to_network(),
        deployer_private_key: testnet.default_wallet_private_key(),
    };

    let address = deployer::deploy_contract(&config, ContractId::CryptoDevToken)
        .await
        .expect("deployment should succeed");

    assert_ne!(address, Address::ZERO);
    // A fresh deployment, not the one the testnet harness already made.
    assert_ne!(address, testnet.token_address());

    // The returned address is usable as-is to attach a handler.
    let provider = http_provider(config.network.rpc_url().clone());
    let token = CryptoDevToken::new(address, provider);
    assert_eq!(token.address(), address);
}

#[tokio::test]
async fn fresh_deployment_starts_with_zero_supply() {
    let (node, rpc_url) = start_node();
    let token = deploy_crypto_dev_token_contract(&rpc_url, &node, dummy_address()).await;

    let total_supply = token.total_supply().await.expect("call should succeed");
    assert_eq!(total_supply, Amount::ZERO);

    let balance = token
        .balance_of(dummy_address())
        .await
        .expect("call should succeed");
    assert_eq!(balance, Amount::ZERO);
}

#[tokio::test]
async fn distinct_deployments_get_distinct_addresses() {
    let (node, rpc_url) = start_node();

    let nft_contract_address = dummy_address();
    let first = deploy_crypto_dev_token_contract(&rpc_url, &node, nft_contract_address).await;
    let second = deploy_crypto_dev_token_contract(&rpc_url, &node, nft_contract_address).await;

    assert_ne!(first.address(), second.address());
}

#[tokio::test]
async fn invalid_private_key_is_rejected_before_any_deployment() {
    // No node is listening on this URL; the key is rejected before it matters.
    let network = Network::new_custom(
        Url::parse("http://127.0.0.1:1").expect("valid url"),
        dummy_address(),
    );
    let config = DeployerConfig {
        network,
        deployer_private_key: "not-a-key".to_string(),
    };

    let result = deployer::deploy_contract(&config, ContractId::CryptoDevToken).await;
    assert!(matches!(result, Err(deployer::Error::InvalidPrivateKey(_))));
}

#[tokio::test]
async fn unreachable_rpc_fails_the_deployment() {
    let network = Network::new_custom(
        Url::parse("http://127.0.0.1:1").expect("valid url"),
        dummy_address(),
    );
    let config = DeployerConfig {
        network,
        deployer_private_key: ANVIL_ALICE_PRIVATE_KEY.to_string(),
    };

    let result = deployer::deploy_contract(&config, ContractId::CryptoDevToken).await;
    assert!(matches!(result, Err(deployer::Error::Deploy(_, _))));
}
