mod cat_api_client;
mod mock_assistant_client;
mod mock_cat_image_search;
mod mock_completion_client;
mod openai_assistant_client;
mod openai_completion_client;
mod upstream_response;

pub use cat_api_client::*;
pub use mock_assistant_client::*;
pub use mock_cat_image_search::*;
pub use mock_completion_client::*;
pub use openai_assistant_client::*;
pub use openai_completion_client::*;
