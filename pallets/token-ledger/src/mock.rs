use crate as pallet_token_ledger;
use crate::{Amount, AmountPolicy};
use frame_support::{
    derive_impl, parameter_types,
    traits::{ConstU32, ConstU64},
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        TokenLedger: pallet_token_ledger,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type PalletInfo = PalletInfo;
    type AccountData = ();
    type MaxConsumers = ConstU32<16>;
}

/// Administrator principal; also holds the initial supply.
pub const USER_A: u64 = 1;
pub const USER_B: u64 = 2;
pub const USER_C: u64 = 3;

pub const INITIAL_SUPPLY: Amount = 200_000_000;

parameter_types! {
    pub const AdminAccount: u64 = USER_A;
    pub const InitialSupply: Amount = INITIAL_SUPPLY;
    pub const Decimals: u8 = 18;
    pub const TokenName: &'static [u8] = b"BNB-Token";
    pub const TokenSymbol: &'static [u8] = b"BNB";
}

parameter_types! {
    // Switched per test with `Policy::set`.
    pub static Policy: AmountPolicy = AmountPolicy::Unchecked;
}

pub struct EnsureAdmin;
impl frame_support::traits::EnsureOrigin<RuntimeOrigin> for EnsureAdmin {
    type Success = u64;

    fn try_origin(o: RuntimeOrigin) -> Result<Self::Success, RuntimeOrigin> {
        match o.clone().into() {
            Ok(frame_system::RawOrigin::Signed(account)) if account == AdminAccount::get() => {
                Ok(account)
            }
            _ => Err(o),
        }
    }

    #[cfg(feature = "runtime-benchmarks")]
    fn try_successful_origin() -> Result<RuntimeOrigin, ()> {
        Ok(RuntimeOrigin::signed(AdminAccount::get()))
    }
}

impl pallet_token_ledger::Config for Test {
    type AdminOrigin = EnsureAdmin;
    type InitialSupply = InitialSupply;
    type Decimals = Decimals;
    type TokenName = TokenName;
    type TokenSymbol = TokenSymbol;
    type ValidationPolicy = Policy;
    type WeightInfo = ();
}

/// Externalities with the ledger seeded at genesis: `USER_A` holds the
/// initial supply.
pub fn new_test_ext() -> sp_io::TestExternalities {
    build_ext(Some(USER_A))
}

/// Externalities with no ledger state at all.
pub fn new_uninitialized_ext() -> sp_io::TestExternalities {
    build_ext(None)
}

fn build_ext(admin: Option<u64>) -> sp_io::TestExternalities {
    Policy::set(AmountPolicy::Unchecked);

    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_token_ledger::GenesisConfig::<Test> { admin }.assimilate_storage(&mut t).unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| System::set_block_number(1));
    ext
}
