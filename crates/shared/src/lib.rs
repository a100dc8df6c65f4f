//! Shared utilities and common types for the corporate site backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Cryptographic utilities (API key generation and hashing)
//! - Korean phone number formatting
//! - Common validation logic
//! - Trimming deserializers for request payloads

pub mod crypto;
pub mod phone;
pub mod serde_helpers;
pub mod validation;
