use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

use log::info;

/// Toasts beyond this many are dropped, oldest first
const MAX_VISIBLE: usize = 5;

pub struct Notification {
    pub message: String,
    pub created: Instant,
}

/// Short-lived success messages, shown in a corner of the window
pub struct Notifications {
    items: VecDeque<Notification>,
    lifetime: Duration,
}

impl Notifications {
    pub fn new(lifetime: Duration) -> Self {
        Notifications {
            items: VecDeque::new(),
            lifetime,
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        let message = message.into();
        info!("{}", &message);
        self.items.push_back(Notification {
            message,
            created: Instant::now(),
        });
        while self.items.len() > MAX_VISIBLE {
            self.items.pop_front();
        }
    }

    /// Drop anything older than the configured lifetime
    pub fn expire(&mut self) {
        self.expire_at(Instant::now());
    }

    fn expire_at(&mut self, now: Instant) {
        let lifetime = self.lifetime;
        self.items
            .retain(|n| now.saturating_duration_since(n.created) < lifetime);
    }

    /// Remaining fraction of a notification's lifetime, in `[0,1]`
    pub fn remaining(&self, notification: &Notification) -> f32 {
        if self.lifetime.is_zero() {
            return 0.;
        }
        let elapsed = notification.created.elapsed().as_secs_f32();
        (1. - elapsed / self.lifetime.as_secs_f32()).clamp(0., 1.)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_messages_in_order() {
        let mut notifications = Notifications::new(Duration::from_secs(4));
        notifications.success("one");
        notifications.success(String::from("two"));
        let messages: Vec<&str> = notifications.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["one", "two"]);
    }

    #[test]
    fn expires_after_lifetime() {
        let mut notifications = Notifications::new(Duration::from_secs(4));
        notifications.success("hello");
        let created = notifications.iter().next().unwrap().created;

        notifications.expire_at(created + Duration::from_secs(1));
        assert_eq!(notifications.iter().count(), 1);

        notifications.expire_at(created + Duration::from_secs(5));
        assert!(notifications.is_empty());
    }

    #[test]
    fn caps_visible_count() {
        let mut notifications = Notifications::new(Duration::from_secs(4));
        for i in 0..(MAX_VISIBLE + 3) {
            notifications.success(format!("message {}", i));
        }
        assert_eq!(notifications.iter().count(), MAX_VISIBLE);
        assert_eq!(notifications.iter().next().unwrap().message, "message 3");
    }
}
