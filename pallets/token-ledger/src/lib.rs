#![cfg_attr(not(feature = "std"), no_std)]

//! # Token Ledger Pallet
//!
//! Single-asset fungible token ledger: per-account balances, owner-approved
//! spending allowances, and the administrator's supply operations.
//!
//! Every call checks its caller before touching storage and runs inside a
//! transactional storage layer, so a call that fails leaves no partial writes
//! behind. That includes `transfer_from` failing on the owner's balance
//! after its allowance has been debited.

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*, traits::EnsureOrigin};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_std::prelude::*;

pub use pallet::*;
pub use types::*;
pub use weights::WeightInfo;

mod types;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

const LOG_TARGET: &str = "runtime::token-ledger";

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// Origin allowed to initialize the ledger and to mint or burn supply.
        /// Its success value is the administrator account holding that supply.
        type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin, Success = Self::AccountId>;

        /// Total supply credited to the administrator by `initialize`.
        #[pallet::constant]
        type InitialSupply: Get<Amount>;

        #[pallet::constant]
        type Decimals: Get<u8>;

        /// Token name, truncated to 64 bytes.
        type TokenName: Get<&'static [u8]>;

        /// Token symbol, truncated to 16 bytes.
        type TokenSymbol: Get<&'static [u8]>;

        /// Bound checks for caller-supplied amounts.
        type ValidationPolicy: Get<AmountPolicy>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    pub struct Pallet<T>(_);

    /// Token metadata, absent until the ledger is initialized.
    #[pallet::storage]
    pub type Metadata<T> = StorageValue<_, TokenMetadata, OptionQuery>;

    /// Account balances. A missing entry is a zero balance.
    #[pallet::storage]
    pub type Accounts<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, AccountRecord, OptionQuery>;

    /// Allowances keyed by (owner, spender), in that order.
    #[pallet::storage]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        AllowanceRecord<T::AccountId>,
        OptionQuery,
    >;

    #[pallet::error]
    pub enum Error<T> {
        /// The caller is not the principal this call requires.
        Unauthorized,
        /// The debited account holds less than the requested amount.
        InsufficientBalance,
        /// The spender's allowance is smaller than the requested amount.
        InsufficientAllowance,
        /// No readable allowance exists for this (owner, spender) pair.
        NoSuchAllowance,
        /// A stored record exists but could not be decoded.
        StoreError,
        /// Negative amount. Always rejected by `transfer` and `transfer_from`,
        /// and by the other calls under `AmountPolicy::RejectNegative`.
        NegativeAmount,
        Overflow,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Write the token metadata and credit the full initial supply to the
        /// administrator.
        ///
        /// Dispatching this again resets both the metadata and the
        /// administrator balance; other accounts and allowances are kept.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::initialize())]
        pub fn initialize(origin: OriginFor<T>) -> DispatchResult {
            let admin = Self::ensure_admin(origin)?;
            Self::seed_ledger(&admin);
            Ok(())
        }

        /// Credit `amount` to the administrator account.
        ///
        /// The metadata total supply is not adjusted.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(origin: OriginFor<T>, amount: Amount) -> DispatchResult {
            let admin = Self::ensure_admin(origin)?;
            Self::ensure_valid_amount(amount)?;

            let mut record = Self::read_account(&admin)?;
            record.balance = record.balance.checked_add(amount).ok_or(Error::<T>::Overflow)?;
            Accounts::<T>::insert(&admin, record);

            log::debug!(target: LOG_TARGET, "minted {amount}, admin balance {}", record.balance);
            Ok(())
        }

        /// Debit `amount` from the administrator account.
        ///
        /// Under `AmountPolicy::Unchecked` the balance may go negative.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(origin: OriginFor<T>, amount: Amount) -> DispatchResult {
            let admin = Self::ensure_admin(origin)?;
            Self::ensure_valid_amount(amount)?;

            let mut record = Self::read_account(&admin)?;
            let remaining = record.balance.checked_sub(amount).ok_or(Error::<T>::Overflow)?;
            if T::ValidationPolicy::get().rejects_negative() {
                ensure!(remaining >= 0, Error::<T>::InsufficientBalance);
            }
            record.balance = remaining;
            Accounts::<T>::insert(&admin, record);

            log::debug!(target: LOG_TARGET, "burned {amount}, admin balance {remaining}");
            Ok(())
        }

        /// Move `amount` from `from` to `to`. Must be signed by `from`.
        ///
        /// Negative amounts are rejected under every `AmountPolicy`.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            amount: Amount,
        ) -> DispatchResult {
            Self::ensure_caller_is(origin, &from)?;
            ensure!(amount >= 0, Error::<T>::NegativeAmount);
            Self::move_balance(&from, &to, amount)
        }

        /// Set the allowance of `spender` over `owner`'s balance to exactly
        /// `amount`, replacing any earlier approval. Must be signed by `owner`.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(
            origin: OriginFor<T>,
            owner: T::AccountId,
            spender: T::AccountId,
            amount: Amount,
        ) -> DispatchResult {
            Self::ensure_caller_is(origin, &owner)?;
            Self::ensure_valid_amount(amount)?;

            let record = AllowanceRecord {
                owner: owner.clone(),
                spender: spender.clone(),
                allowance: amount,
            };
            Allowances::<T>::insert(&owner, &spender, record);
            Ok(())
        }

        /// Spend `amount` of `owner`'s balance on behalf of `spender`, crediting
        /// `recipient`. Must be signed by `spender`.
        ///
        /// Negative amounts are rejected under every `AmountPolicy`.
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            owner: T::AccountId,
            spender: T::AccountId,
            recipient: T::AccountId,
            amount: Amount,
        ) -> DispatchResult {
            Self::ensure_caller_is(origin, &spender)?;
            ensure!(amount >= 0, Error::<T>::NegativeAmount);

            let mut approval =
                Allowances::<T>::get(&owner, &spender).ok_or(Error::<T>::NoSuchAllowance)?;
            ensure!(approval.allowance >= amount, Error::<T>::InsufficientAllowance);
            approval.allowance =
                approval.allowance.checked_sub(amount).ok_or(Error::<T>::Overflow)?;
            Allowances::<T>::insert(&owner, &spender, &approval);

            // Any failure below also discards the allowance write above.
            Self::move_balance(&owner, &recipient, amount)?;

            log::debug!(
                target: LOG_TARGET,
                "{spender:?} spent {amount} of {owner:?}'s balance, {} left",
                approval.allowance
            );
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Administrator to seed with the initial supply. With `None` the
        /// ledger stays empty until `initialize` is dispatched.
        pub admin: Option<T::AccountId>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            if let Some(ref admin) = self.admin {
                Pallet::<T>::seed_ledger(admin);
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Balance of `who`; accounts without a record hold zero.
    pub fn balance_of(who: &T::AccountId) -> Amount {
        Accounts::<T>::get(who).unwrap_or_default().balance
    }

    /// Remaining allowance of `spender` over `owner`'s balance, if one was
    /// ever approved.
    pub fn allowance(owner: &T::AccountId, spender: &T::AccountId) -> Option<Amount> {
        Allowances::<T>::get(owner, spender).map(|record| record.allowance)
    }

    pub fn metadata() -> Option<TokenMetadata> {
        Metadata::<T>::get()
    }

    /// Total supply recorded at initialization, zero before that.
    pub fn total_supply() -> Amount {
        Self::metadata().map(|m| m.total_supply).unwrap_or_default()
    }

    /// Check that every allowance record matches its key and, when negative
    /// amounts are rejected, that no balance or allowance is negative.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), DispatchError> {
        for (owner, spender, record) in Allowances::<T>::iter() {
            ensure!(
                record.owner == owner && record.spender == spender,
                "allowance record does not match its key"
            );
        }

        if T::ValidationPolicy::get().rejects_negative() {
            ensure!(
                Accounts::<T>::iter_values().all(|record| record.balance >= 0),
                "negative balance stored under RejectNegative"
            );
            ensure!(
                Allowances::<T>::iter_values().all(|record| record.allowance >= 0),
                "negative allowance stored under RejectNegative"
            );
        }
        Ok(())
    }

    fn ensure_admin(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
        T::AdminOrigin::ensure_origin(origin).map_err(|_| {
            log::trace!(target: LOG_TARGET, "rejected non-admin origin");
            Error::<T>::Unauthorized.into()
        })
    }

    fn ensure_caller_is(origin: OriginFor<T>, principal: &T::AccountId) -> DispatchResult {
        let caller = ensure_signed(origin).map_err(|_| Error::<T>::Unauthorized)?;
        if &caller != principal {
            log::trace!(target: LOG_TARGET, "{caller:?} is not {principal:?}");
            return Err(Error::<T>::Unauthorized.into());
        }
        Ok(())
    }

    /// Amount check for the admin calls and `approve`.
    fn ensure_valid_amount(amount: Amount) -> DispatchResult {
        if T::ValidationPolicy::get().rejects_negative() {
            ensure!(amount >= 0, Error::<T>::NegativeAmount);
        }
        Ok(())
    }

    /// Read the account record of `who`, treating a missing record as zero.
    fn read_account(who: &T::AccountId) -> Result<AccountRecord, DispatchError> {
        match Accounts::<T>::try_get(who) {
            Ok(record) => Ok(record),
            Err(()) if Accounts::<T>::contains_key(who) => Err(Error::<T>::StoreError.into()),
            Err(()) => Ok(AccountRecord::default()),
        }
    }

    /// Debit `from` and credit `to` after checking that `from` covers `amount`.
    fn move_balance(from: &T::AccountId, to: &T::AccountId, amount: Amount) -> DispatchResult {
        let mut source = Self::read_account(from)?;
        let mut destination = Self::read_account(to)?;
        ensure!(source.balance >= amount, Error::<T>::InsufficientBalance);

        if from == to {
            return Ok(());
        }

        source.balance = source.balance.checked_sub(amount).ok_or(Error::<T>::Overflow)?;
        destination.balance =
            destination.balance.checked_add(amount).ok_or(Error::<T>::Overflow)?;
        Accounts::<T>::insert(from, source);
        Accounts::<T>::insert(to, destination);
        Ok(())
    }

    pub(crate) fn seed_ledger(admin: &T::AccountId) {
        let metadata = TokenMetadata {
            name: BoundedVec::truncate_from(T::TokenName::get().to_vec()),
            symbol: BoundedVec::truncate_from(T::TokenSymbol::get().to_vec()),
            decimals: T::Decimals::get(),
            total_supply: T::InitialSupply::get(),
        };
        let supply = metadata.total_supply;
        Metadata::<T>::put(metadata);
        Accounts::<T>::insert(admin, AccountRecord { balance: supply });

        log::info!(target: LOG_TARGET, "ledger initialized, {admin:?} holds {supply}");
    }
}
