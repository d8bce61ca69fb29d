//! Transient user notifications.

/// How a notification is styled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    #[default]
    Info,
}

/// A single message shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    /// Queue-unique identifier, used for dismissal.
    pub id: u64,
    /// Plain text message (rendered as a text node).
    pub message: String,
    pub severity: Severity,
}

/// Bounded list of visible notifications, oldest first.
#[derive(Clone, Debug, Default)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    next_id: u64,
    capacity: usize,
}

impl NotificationQueue {
    /// Create a queue showing at most `capacity` notifications.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            next_id: 0,
            capacity: capacity.max(1),
        }
    }

    /// Add a notification and return its id.
    ///
    /// When full, the oldest notification is dropped.
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification {
            id,
            message: message.into(),
            severity,
        });
        if self.items.len() > self.capacity {
            let overflow = self.items.len() - self.capacity;
            self.items.drain(..overflow);
        }
        id
    }

    /// Remove a notification. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut queue = NotificationQueue::new(3);
        let a = queue.push("uploaded", Severity::Success);
        let b = queue.push("failed", Severity::Error);
        assert_ne!(a, b);
        assert_eq!(queue.items().len(), 2);

        queue.dismiss(a);
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].message, "failed");
        assert_eq!(queue.items()[0].severity, Severity::Error);

        queue.dismiss(a);
        queue.dismiss(b);
        assert!(queue.items().is_empty());
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut queue = NotificationQueue::new(2);
        queue.push("one", Severity::Info);
        queue.push("two", Severity::Info);
        let three = queue.push("three", Severity::Info);

        let messages: Vec<_> = queue.items().iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["two", "three"]);
        assert_eq!(queue.items()[1].id, three);
    }

    #[test]
    fn test_ids_not_reused_after_dismiss() {
        let mut queue = NotificationQueue::new(2);
        let a = queue.push("a", Severity::Info);
        queue.dismiss(a);
        let b = queue.push("b", Severity::Info);
        assert!(b > a);
    }
}
