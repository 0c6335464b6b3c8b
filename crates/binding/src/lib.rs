//! Contract bindings for the token contracts read by the bot.
//!
//! Bindings are generated using alloy's `sol!` macro.

pub mod token;
