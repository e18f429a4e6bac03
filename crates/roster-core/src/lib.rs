//! # roster-core
//!
//! Core types shared by every roster crate.
//!
//! This crate provides:
//! - Person records ([`entities::Fellow`], [`entities::Alumnus`]) and the
//!   linked [`entities::CheckIn`] / [`entities::StatusReport`] records
//! - The authoritative [`enums::FellowStatus`] with pass-through of unknown values
//! - The [`person::Person`] trait the query engine filters and sorts over
//! - Lenient and strict calendar-date parsing
//! - The bundled sample roster used by the static record source
//! - Cross-cutting error types

pub mod dates;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod person;
pub mod sample;
