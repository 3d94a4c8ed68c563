//! Benchmarking setup for pallet-token-ledger

use super::*;

#[allow(unused)]
use crate::Pallet as TokenLedger;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

fn admin_origin<T: Config>() -> Result<(T::RuntimeOrigin, T::AccountId), BenchmarkError> {
    let origin = T::AdminOrigin::try_successful_origin().map_err(|_| BenchmarkError::Weightless)?;
    let admin =
        T::AdminOrigin::ensure_origin(origin.clone()).map_err(|_| BenchmarkError::Weightless)?;
    Ok((origin, admin))
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn initialize() -> Result<(), BenchmarkError> {
        let (origin, admin) = admin_origin::<T>()?;

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin);

        assert_eq!(Pallet::<T>::balance_of(&admin), T::InitialSupply::get());
        Ok(())
    }

    #[benchmark]
    fn mint() -> Result<(), BenchmarkError> {
        let (origin, admin) = admin_origin::<T>()?;
        Accounts::<T>::insert(&admin, AccountRecord { balance: 1_000 });

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, 1_000_000);

        assert_eq!(Pallet::<T>::balance_of(&admin), 1_001_000);
        Ok(())
    }

    #[benchmark]
    fn burn() -> Result<(), BenchmarkError> {
        let (origin, admin) = admin_origin::<T>()?;
        Accounts::<T>::insert(&admin, AccountRecord { balance: 10_000_000 });

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, 1_000_000);

        assert_eq!(Pallet::<T>::balance_of(&admin), 9_000_000);
        Ok(())
    }

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        Accounts::<T>::insert(&caller, AccountRecord { balance: 10_000_000 });
        Accounts::<T>::insert(&recipient, AccountRecord { balance: 1 });

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), caller.clone(), recipient.clone(), 1_000_000);

        assert_eq!(Pallet::<T>::balance_of(&recipient), 1_000_001);
    }

    #[benchmark]
    fn approve() {
        let owner: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner.clone()), owner.clone(), spender.clone(), 1_000_000);

        assert_eq!(Pallet::<T>::allowance(&owner, &spender), Some(1_000_000));
    }

    #[benchmark]
    fn transfer_from() {
        let owner: T::AccountId = account("owner", 0, 0);
        let spender: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        Accounts::<T>::insert(&owner, AccountRecord { balance: 10_000_000 });
        Accounts::<T>::insert(&recipient, AccountRecord { balance: 1 });
        Allowances::<T>::insert(
            &owner,
            &spender,
            AllowanceRecord {
                owner: owner.clone(),
                spender: spender.clone(),
                allowance: 5_000_000,
            },
        );

        #[extrinsic_call]
        _(
            RawOrigin::Signed(spender.clone()),
            owner.clone(),
            spender.clone(),
            recipient.clone(),
            1_000_000,
        );

        assert_eq!(Pallet::<T>::allowance(&owner, &spender), Some(4_000_000));
        assert_eq!(Pallet::<T>::balance_of(&recipient), 1_000_001);
    }

    impl_benchmark_test_suite!(TokenLedger, crate::mock::new_test_ext(), crate::mock::Test);
}
