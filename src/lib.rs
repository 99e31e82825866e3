//! OrgSynth - Synthetic Company Generator
//!
//! This crate synthesizes a fake company: an organization chart of employees
//! with levels, departments, roles, reporting lines and technology skill
//! sets, plus a set of projects staffed from that employee pool, with all
//! cross-references kept internally consistent.

pub mod config;
pub mod domain;
pub mod generator;
pub mod lexicon;
