pub mod catalogs;
pub mod openai_chat_http;
pub mod report_file;
pub mod template;
