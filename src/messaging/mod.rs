// Messaging - outbound engine notifications
// The engine itself is synchronous; hosts that tick from another
// context can move notifications through the lock-free channel.

pub mod channels;
pub mod notification;

pub use channels::{NotificationConsumer, NotificationProducer, create_notification_channel};
pub use notification::Notification;
