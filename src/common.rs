// Copyright 2025 Crypto Devs.
//
// This Crypto Devs Software is licensed to you under The General Public License (GPL), version 3.
// Unless required by applicable law or agreed to in writing, the Crypto Devs Software distributed
// under the GPL Licence is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied. Please review the Licences for the specific language governing
// permissions and limitations relating to use of the Crypto Devs Software.

pub type Address = alloy::primitives::Address;
pub type Amount = alloy::primitives::U256;
