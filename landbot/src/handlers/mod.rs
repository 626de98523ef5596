//! Chat handlers run by the handler chain for every inbound message.

mod command_handler;
mod self_filter;
mod trigger_handler;

pub use command_handler::CommandHandler;
pub use self_filter::SelfMessageFilter;
pub use trigger_handler::TriggerHandler;
