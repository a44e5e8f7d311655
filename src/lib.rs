//! tabindent
//!
//! Keyboard indentation for plain-text comment boxes: Tab and Shift+Tab
//! indent or unindent every touched line while keeping the selection on the
//! same characters, Escape releases focus, and Enter continues Markdown list
//! and quote prefixes.

pub mod config;
pub mod editor;
pub mod error;
pub mod string_utils;
