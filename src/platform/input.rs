//! Input sources
//!
//! Producers may live on other threads; the frame loop only ever sees the
//! batch returned by `drain`, taken once at the top of each frame.

use std::collections::VecDeque;
use std::io::BufRead;

use crossbeam_channel::{Receiver, Sender, TryRecvError, bounded};

use crate::consts::INPUT_QUEUE_CAPACITY;
use crate::sim::InputEvent;

/// Source of pending input commands
pub trait InputSource {
    /// Take every command that arrived since the last call, oldest first
    fn drain(&mut self) -> Vec<InputEvent>;
}

/// Receiving end of the input queue
#[derive(Debug)]
pub struct ChannelInput {
    rx: Receiver<InputEvent>,
    closed: bool,
}

/// Bounded input queue: producers keep the sender, the loop drains the receiver
pub fn input_channel() -> (Sender<InputEvent>, ChannelInput) {
    let (tx, rx) = bounded(INPUT_QUEUE_CAPACITY);
    (tx, ChannelInput { rx, closed: false })
}

impl InputSource for ChannelInput {
    fn drain(&mut self) -> Vec<InputEvent> {
        let mut batch = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(event) => batch.push(event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    // A vanished producer can never send quit, so quit for it
                    if !self.closed {
                        log::info!("Input closed, quitting");
                        self.closed = true;
                        batch.push(InputEvent::Quit);
                    }
                    break;
                }
            }
        }
        batch
    }
}

/// Pre-recorded batches, one per frame; empty once exhausted
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Frames not yet drained
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn drain(&mut self) -> Vec<InputEvent> {
        self.frames.pop_front().unwrap_or_default()
    }
}

/// Read whitespace-separated key names from `reader` and send their
/// commands to `tx`. Unknown keys are skipped. Sends `Quit` at end of input.
/// Returns how many commands were sent.
pub fn forward_keys<R: BufRead>(reader: R, tx: &Sender<InputEvent>) -> usize {
    let mut sent = 0;
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::warn!("Input read failed: {}", e);
                break;
            }
        };
        for key in line.split_whitespace() {
            let Some(event) = InputEvent::from_key(key) else {
                log::debug!("Ignoring key {:?}", key);
                continue;
            };
            if tx.send(event).is_err() {
                return sent;
            }
            sent += 1;
            if event == InputEvent::Quit {
                return sent;
            }
        }
    }
    if tx.send(InputEvent::Quit).is_ok() {
        sent += 1;
    }
    sent
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_channel_drains_in_order() {
        let (tx, mut input) = input_channel();
        assert!(input.drain().is_empty());

        tx.send(InputEvent::StartOrRestart).unwrap();
        tx.send(InputEvent::MoveUp).unwrap();
        tx.send(InputEvent::PauseToggle).unwrap();
        assert_eq!(
            input.drain(),
            vec![
                InputEvent::StartOrRestart,
                InputEvent::MoveUp,
                InputEvent::PauseToggle
            ]
        );
        assert!(input.drain().is_empty());
    }

    #[test]
    fn test_disconnect_quits_once() {
        let (tx, mut input) = input_channel();
        tx.send(InputEvent::MoveUp).unwrap();
        drop(tx);

        assert_eq!(input.drain(), vec![InputEvent::MoveUp, InputEvent::Quit]);
        assert!(input.drain().is_empty());
    }

    #[test]
    fn test_scripted_batches() {
        let mut input = ScriptedInput::new([
            vec![InputEvent::StartOrRestart],
            vec![],
            vec![InputEvent::MoveUp, InputEvent::MoveUp],
        ]);
        assert_eq!(input.remaining(), 3);
        assert_eq!(input.drain(), vec![InputEvent::StartOrRestart]);
        assert!(input.drain().is_empty());
        assert_eq!(input.drain().len(), 2);
        assert!(input.drain().is_empty());
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn test_forward_keys() {
        let (tx, mut input) = input_channel();
        let text = "space\nup w  bogus\n\np\n";
        assert_eq!(forward_keys(Cursor::new(text), &tx), 5);
        assert_eq!(
            input.drain(),
            vec![
                InputEvent::StartOrRestart,
                InputEvent::MoveUp,
                InputEvent::MoveUp,
                InputEvent::PauseToggle,
                InputEvent::Quit
            ]
        );
    }

    #[test]
    fn test_forward_keys_stops_at_quit() {
        let (tx, mut input) = input_channel();
        assert_eq!(forward_keys(Cursor::new("up q up up"), &tx), 2);
        assert_eq!(input.drain(), vec![InputEvent::MoveUp, InputEvent::Quit]);
    }
}
