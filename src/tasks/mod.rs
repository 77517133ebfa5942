//! Background Tasks Module
//!
//! Contains background tasks that run periodically while a cache is open.
//!
//! # Tasks
//! - Expiry sweeper: removes expired entries from every shard each tick

mod sweeper;

pub use sweeper::{spawn_sweeper, sweep_shards};
