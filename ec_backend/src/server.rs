pub mod app_state;
pub mod chatbot;
pub mod form;
pub mod http_server;
pub mod ping;
