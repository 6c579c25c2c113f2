//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the logic behind form actions so route handlers stay
//! focused on request decoding and HTML responses.

pub mod contact;
