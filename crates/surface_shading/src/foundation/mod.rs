//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the crate:
//! - Math types and scalar shading helpers
//! - Hex color conversion
//! - Logging utilities

pub mod color;
pub mod logging;
pub mod math;
