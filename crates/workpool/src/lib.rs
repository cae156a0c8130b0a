#![deny(missing_docs)]
#![doc = include_str!("../../../README.md")]

mod factory;
mod idle;
mod pool;
mod worker;

pub use factory::Factory;
pub use pool::{Pool, PoolConfig, PoolError, PoolResult, PooledWorker};
pub use worker::Worker;
