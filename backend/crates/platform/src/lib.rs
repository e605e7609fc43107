//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password policy and hashing (Argon2id, NFKC-normalized, zeroized)

pub mod password;
