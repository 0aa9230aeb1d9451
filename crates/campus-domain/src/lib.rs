//! Domain types shared across the campus tickets workspace.
//!
//! This crate contains only pure types and pure functions with no framework
//! dependencies. Import in `usecase/` and `domain/` layers; never in `infra/`
//! or `handlers/`.

pub mod activity;
pub mod pagination;
pub mod recommend;
pub mod user;
