//! Pipedeck Core
//!
//! Core types shared by the Pipedeck web application, client and CLI.
//!
//! This crate contains:
//! - Domain types: pipelines, template descriptors and editor designs
//! - DTOs: request and response bodies of the HTTP API
//! - Catalog: the static template data served to the visual editor

pub mod catalog;
pub mod domain;
pub mod dto;
