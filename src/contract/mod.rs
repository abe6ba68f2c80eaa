// Copyright 2025 Crypto Devs.
//
// This Crypto Devs Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the Crypto Devs Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the Crypto Devs Software.

pub mod crypto_dev_token;

/// Identifier of a contract this crate knows how to deploy. Each variant maps to
/// bindings generated at build time from the compiled artifact, so there is no
/// name-keyed registry lookup at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContractId {
    CryptoDevToken,
}

impl ContractId {
    pub fn name(&self) -> &str {
        match self {
            ContractId::CryptoDevToken => "CryptoDevToken",
        }
    }
}

impl std::fmt::Display for ContractId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
