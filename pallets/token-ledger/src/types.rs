//! Ledger records and the amount validation policy.

use codec::{Decode, Encode, MaxEncodedLen};
use frame_support::{traits::ConstU32, BoundedVec};
use sp_runtime::RuntimeDebug;
use scale_info::TypeInfo;

/// Signed token amount. Balances and allowances share this type.
pub type Amount = i128;

/// Maximum length of the token name in bytes.
pub type MaxNameLen = ConstU32<64>;

/// Maximum length of the token symbol in bytes.
pub type MaxSymbolLen = ConstU32<16>;

/// Token metadata, written once by `initialize` (or genesis).
#[derive(Clone, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct TokenMetadata {
    #[cfg_attr(feature = "std", serde(with = "utf8"))]
    pub name: BoundedVec<u8, MaxNameLen>,
    #[cfg_attr(feature = "std", serde(with = "utf8"))]
    pub symbol: BoundedVec<u8, MaxSymbolLen>,
    pub decimals: u8,
    pub total_supply: Amount,
}

/// Bounded byte strings as JSON strings. Non-UTF-8 bytes fail to serialize.
#[cfg(feature = "std")]
mod utf8 {
    use frame_support::{traits::Get, BoundedVec};
    use serde::{de::Error as _, ser::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S, B>(bytes: &BoundedVec<u8, B>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let text = core::str::from_utf8(bytes).map_err(S::Error::custom)?;
        serializer.serialize_str(text)
    }

    pub fn deserialize<'de, D, B>(deserializer: D) -> Result<BoundedVec<u8, B>, D::Error>
    where
        D: Deserializer<'de>,
        B: Get<u32>,
    {
        let text = String::deserialize(deserializer)?;
        BoundedVec::try_from(text.into_bytes())
            .map_err(|_| D::Error::custom(format_args!("longer than {} bytes", B::get())))
    }
}

/// Balance record of a single account.
///
/// An account without a stored record is treated as holding this type's
/// default, i.e. a zero balance.
#[derive(
    Clone,
    Copy,
    Default,
    Encode,
    Decode,
    Eq,
    PartialEq,
    RuntimeDebug,
    TypeInfo,
    MaxEncodedLen,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct AccountRecord {
    pub balance: Amount,
}

/// Spending limit granted by `owner` to `spender`.
///
/// Stored under the `(owner, spender)` key; the fields repeat the key so a
/// record read on its own is self-describing.
#[derive(Clone, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct AllowanceRecord<AccountId> {
    pub owner: AccountId,
    pub spender: AccountId,
    pub allowance: Amount,
}

/// Bound checks applied to the amounts passed to `mint`, `burn` and
/// `approve`. Transfers reject negative amounts regardless of the policy.
#[derive(Clone, Copy, Default, Eq, PartialEq, RuntimeDebug)]
pub enum AmountPolicy {
    /// Any amount is accepted. `burn` may drive the admin balance below zero
    /// and `approve` may store a negative allowance.
    #[default]
    Unchecked,
    /// Negative amounts are rejected by every amount-taking call, and `burn` may
    /// not leave the admin balance below zero.
    RejectNegative,
}

impl AmountPolicy {
    pub fn rejects_negative(&self) -> bool {
        matches!(self, AmountPolicy::RejectNegative)
    }
}
