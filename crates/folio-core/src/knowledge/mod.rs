//! Knowledge Store: the immutable portfolio profile answered from memory.
//!
//! | Section      | Answered by rule | Shape                                |
//! |--------------|------------------|--------------------------------------|
//! | `links`      | links            | ordered `platform -> url` pairs      |
//! | `skills`     | skills           | ordered list, comma-joined           |
//! | `about`      | about            | verbatim paragraph                   |
//! | `experience` | experience       | ordered list, joined with `". "`     |
//!
//! The profile is built once at startup and shared behind an `Arc`; nothing
//! mutates it afterwards, so any number of requests may read it concurrently.

mod profile;

pub use profile::{PortfolioProfile, ProfileError, SocialLink};
