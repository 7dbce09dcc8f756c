// Interface adapters: encoder, HTML rendering, wire protocol, and HTTP handling.

pub mod encoder;
pub mod field;
pub mod handlers;
pub mod html;
pub mod protocol;
pub mod routes;
pub mod state;
