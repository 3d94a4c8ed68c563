//! Weights for pallet-token-ledger.
//!
//! Hand-written: a flat base per call plus its storage accesses. Replace
//! with `frame-benchmarking` output once the benchmarks in
//! `benchmarking.rs` have been run on reference hardware.

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, RuntimeDbWeight, Weight},
};

/// Flat execution cost charged on top of storage accesses.
const BASE: Weight = Weight::from_parts(10_000, 0);

/// Weight functions needed for pallet-token-ledger.
pub trait WeightInfo {
    fn initialize() -> Weight;
    fn mint() -> Weight;
    fn burn() -> Weight;
    fn transfer() -> Weight;
    fn approve() -> Weight;
    fn transfer_from() -> Weight;
}

fn accesses(db: RuntimeDbWeight, reads: u64, writes: u64) -> Weight {
    BASE.saturating_add(db.reads_writes(reads, writes))
}

/// Weights for pallet-token-ledger using the runtime's `DbWeight`.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    /// Writes `Metadata` and one `Accounts` entry.
    fn initialize() -> Weight {
        accesses(T::DbWeight::get(), 0, 2)
    }
    fn mint() -> Weight {
        accesses(T::DbWeight::get(), 1, 1)
    }
    fn burn() -> Weight {
        accesses(T::DbWeight::get(), 1, 1)
    }
    fn transfer() -> Weight {
        accesses(T::DbWeight::get(), 2, 2)
    }
    fn approve() -> Weight {
        accesses(T::DbWeight::get(), 0, 1)
    }
    /// One `Allowances` entry and two `Accounts` entries, each read and written.
    fn transfer_from() -> Weight {
        accesses(T::DbWeight::get(), 3, 3)
    }
}

// For tests.
impl WeightInfo for () {
    fn initialize() -> Weight {
        accesses(RocksDbWeight::get(), 0, 2)
    }
    fn mint() -> Weight {
        accesses(RocksDbWeight::get(), 1, 1)
    }
    fn burn() -> Weight {
        accesses(RocksDbWeight::get(), 1, 1)
    }
    fn transfer() -> Weight {
        accesses(RocksDbWeight::get(), 2, 2)
    }
    fn approve() -> Weight {
        accesses(RocksDbWeight::get(), 0, 1)
    }
    fn transfer_from() -> Weight {
        accesses(RocksDbWeight::get(), 3, 3)
    }
}
