mod fake_chat_model;

pub use fake_chat_model::FakeChatModel;
