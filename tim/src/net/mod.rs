use async_trait::async_trait;
use tim_util::text::TextComponent;

/// The way back to a player's client.
#[async_trait]
pub trait ClientConnection: Send + Sync {
    async fn send_system_message(&self, text: &TextComponent);
}

/// A client sitting in the same terminal as the server.
pub struct ConsoleClient;

#[async_trait]
impl ClientConnection for ConsoleClient {
    async fn send_system_message(&self, text: &TextComponent) {
        println!("{}", text.to_pretty_console());
    }
}

#[cfg(test)]
pub use recording::RecordingClient;

#[cfg(test)]
mod recording {
    use async_trait::async_trait;
    use tim_util::text::TextComponent;
    use tokio::sync::Mutex;

    use super::ClientConnection;

    /// Keeps every message so tests can look at them.
    #[derive(Default)]
    pub struct RecordingClient {
        messages: Mutex<Vec<TextComponent>>,
    }

    impl RecordingClient {
        pub async fn take_messages(&self) -> Vec<TextComponent> {
            std::mem::take(&mut *self.messages.lock().await)
        }
    }

    #[async_trait]
    impl ClientConnection for RecordingClient {
        async fn send_system_message(&self, text: &TextComponent) {
            self.messages.lock().await.push(text.clone());
        }
    }
}
