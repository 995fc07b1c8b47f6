mod add_message;
mod chat_completion;
mod fetch_cat_images;
mod list_messages;
mod poll_run;
mod start_conversation;
mod submit_tool_outputs;

pub use add_message::*;
pub use chat_completion::*;
pub use fetch_cat_images::*;
pub use list_messages::*;
pub use poll_run::*;
pub use start_conversation::*;
pub use submit_tool_outputs::*;
