mod message_consumer;

pub use message_consumer::{IncomingMessage, MessageConsumer, MessageHandler};
