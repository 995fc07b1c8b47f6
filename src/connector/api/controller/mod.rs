pub mod cat_controller;
pub mod chat_controller;
pub mod conversation_controller;
pub mod run_controller;
