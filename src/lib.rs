//! Gatherly - Events Platform Backend
//!
//! This crate implements the participation-request moderation core of an
//! events/listings platform: capacity-limited admission of participants to
//! published events, with owner-driven bulk approval and cascading rejection
//! once the participant limit is exhausted.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
