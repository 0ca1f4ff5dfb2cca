//! `fairshare-core` — shared kernel for the splitting/netting engine.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{EngineError, EngineResult};
pub use id::{ExpenseId, GroupId, MemberId};
pub use value_object::ValueObject;
