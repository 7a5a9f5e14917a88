/// Pointer events the engine understands.
/// Touch hosts map touch-start/move/end onto the same three events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The pointer entered the interactive area (or a touch began).
    PointerEnter,
    /// The pointer left the interactive area (or the touch ended).
    PointerLeave,
    /// The pointer moved to (x, y) in the center's coordinate space.
    PointerMove { x: f64, y: f64 },
}

/// Pointer moves buffered between host callbacks, applied in arrival order.
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: Vec<InputEvent>,
}

impl InputQueue {
    pub fn push(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    /// Take every pending event, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_keeps_arrival_order_and_empties() {
        let mut queue = InputQueue::default();
        queue.push(InputEvent::PointerMove { x: 1.0, y: 2.0 });
        queue.push(InputEvent::PointerMove { x: 3.0, y: 4.0 });
        assert_eq!(
            queue.drain(),
            vec![
                InputEvent::PointerMove { x: 1.0, y: 2.0 },
                InputEvent::PointerMove { x: 3.0, y: 4.0 },
            ]
        );
        assert!(queue.drain().is_empty());
    }
}
