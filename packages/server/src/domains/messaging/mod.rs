//! Messaging domain - bulk WhatsApp click-to-chat links

pub mod actions;
pub mod data;
pub mod edges;
pub mod whatsapp;
