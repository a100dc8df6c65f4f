//! Domain layer for the corporate site backend.
//!
//! This crate contains:
//! - Domain models (Announcement, Inquiry, Post, Praise) and their wire shapes
//! - Inquiry notification composition
//! - Inquiry CSV export

pub mod models;
pub mod services;
