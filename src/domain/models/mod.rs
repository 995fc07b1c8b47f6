mod cat_query;
mod handle;
mod message;
mod tool_output;

pub use cat_query::*;
pub use handle::*;
pub use message::*;
pub use tool_output::*;
