mod assistant_client;
mod cat_image_search;
mod completion_client;

pub use assistant_client::*;
pub use cat_image_search::*;
pub use completion_client::*;
