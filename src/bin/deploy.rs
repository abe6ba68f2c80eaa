// Copyright 2025 Crypto Devs.
//
// This Crypto Devs Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the Crypto Devs Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the Crypto Devs Software.

#[macro_use]
extern crate tracing;

use cryptodevs_deployer::config::DeployerConfig;
use cryptodevs_deployer::contract::ContractId;
use cryptodevs_deployer::deployer;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout carries nothing but the deployed address line.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = match DeployerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    info!("Deploying on network {}", config.network);

    match deployer::deploy_contract(&config, ContractId::CryptoDevToken).await {
        Ok(address) => {
            println!("Crypto Devs Token Contract {address}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
