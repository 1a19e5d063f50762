//! # Magdalene Shared
//!
//! Request payloads posted by the storefront forms, and the fixed bodies the
//! backend answers with.

pub mod dto;
pub mod response;

pub use response::{
    BOOKING_SUCCESS, INTERNAL_ERROR, LOGIN_FAILED, LOGIN_REDIRECT, PURCHASE_SUCCESS, QUOTE_SUCCESS,
};
