//! Control-to-audio hand-off over lock-free SPSC queues.
//!
//! A component's state must only ever be touched by one context at a time.
//! The control side therefore never writes to audio-side state directly: it
//! computes new `*Params` (or envelope events) and pushes them into a queue,
//! and the audio side drains the queue at the start of each block.
//!
//! Sending never blocks. A full queue drops the update and logs a warning;
//! the next update carries the current value anyway.

use std::collections::VecDeque;
use std::fmt;
use std::marker::PhantomData;

use rtrb::{Consumer, Producer, PushError, RingBuffer};

use crate::dsp::envelope::{AdsrParams, AdsrState};

/// Anything the audio side can drain messages from.
pub trait MessageReceiver<T> {
    fn pop(&mut self) -> Option<T>;
}

impl<T> MessageReceiver<T> for Consumer<T> {
    fn pop(&mut self) -> Option<T> {
        Consumer::pop(self).ok()
    }
}

impl<T> MessageReceiver<T> for VecDeque<T> {
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendError {
    /// The queue is full and the update was dropped.
    Full,
    /// The receiving side has been dropped.
    Disconnected,
}

impl fmt::Display for SendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SendError::Full => write!(f, "queue full, update dropped"),
            SendError::Disconnected => write!(f, "receiver disconnected"),
        }
    }
}

impl std::error::Error for SendError {}

fn push<T>(tx: &mut Producer<T>, value: T, what: &str) -> Result<(), SendError> {
    if tx.is_abandoned() {
        return Err(SendError::Disconnected);
    }
    match tx.push(value) {
        Ok(()) => Ok(()),
        Err(PushError::Full(_)) => {
            log::warn!("{} queue full, dropping update", what);
            Err(SendError::Full)
        }
    }
}

/// Constructor for a parameter queue.
pub struct ParamChannel<P>(PhantomData<P>);

impl<P> ParamChannel<P> {
    #[allow(clippy::new_ret_no_self)]
    pub fn new(capacity: usize) -> (ParamSender<P>, ParamReceiver<P>) {
        let (tx, rx) = RingBuffer::<P>::new(capacity);
        (ParamSender { tx }, ParamReceiver::from_receiver(rx))
    }
}

/// Control side of a parameter queue.
pub struct ParamSender<P> {
    tx: Producer<P>,
}

impl<P> ParamSender<P> {
    pub fn send(&mut self, params: P) -> Result<(), SendError> {
        push(&mut self.tx, params, "parameter")
    }
}

/// Audio side of a parameter queue.
pub struct ParamReceiver<P, R = Consumer<P>> {
    rx: R,
    _params: PhantomData<P>,
}

impl<P, R: MessageReceiver<P>> ParamReceiver<P, R> {
    pub fn from_receiver(rx: R) -> Self {
        Self {
            rx,
            _params: PhantomData,
        }
    }

    /// Drain the queue and return the newest value, if any arrived.
    pub fn latest(&mut self) -> Option<P> {
        let mut newest = None;
        while let Some(params) = self.rx.pop() {
            newest = Some(params);
        }
        newest
    }

    /// Overwrite `current` with the newest value. Returns `true` if it
    /// changed.
    pub fn update(&mut self, current: &mut P) -> bool {
        match self.latest() {
            Some(params) => {
                *current = params;
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeEvent {
    GateOn,
    GateOff,
    /// Restart the attack without touching the gate.
    Retrigger,
}

/// Control side of a [`SharedEnvelope`].
pub struct EnvelopeHandle {
    tx: Producer<EnvelopeEvent>,
}

impl EnvelopeHandle {
    pub fn gate_on(&mut self) -> Result<(), SendError> {
        push(&mut self.tx, EnvelopeEvent::GateOn, "envelope")
    }

    pub fn gate_off(&mut self) -> Result<(), SendError> {
        push(&mut self.tx, EnvelopeEvent::GateOff, "envelope")
    }

    pub fn retrigger(&mut self) -> Result<(), SendError> {
        push(&mut self.tx, EnvelopeEvent::Retrigger, "envelope")
    }
}

const ENVELOPE_QUEUE_SIZE: usize = 64;

/// ADSR owned by the audio side and driven by queued events.
///
/// Events are applied in order at the start of each block, so a gate-on
/// and gate-off that arrive within one block cancel out.
pub struct SharedEnvelope<R = Consumer<EnvelopeEvent>> {
    env: AdsrState,
    rx: R,
}

impl SharedEnvelope {
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> (Self, EnvelopeHandle) {
        let (tx, rx) = RingBuffer::<EnvelopeEvent>::new(ENVELOPE_QUEUE_SIZE);
        (Self::from_receiver(rx), EnvelopeHandle { tx })
    }
}

impl<R: MessageReceiver<EnvelopeEvent>> SharedEnvelope<R> {
    pub fn from_receiver(rx: R) -> Self {
        Self {
            env: AdsrState::new(),
            rx,
        }
    }

    pub fn state(&self) -> &AdsrState {
        &self.env
    }

    fn apply_events(&mut self) {
        while let Some(event) = self.rx.pop() {
            match event {
                EnvelopeEvent::GateOn => self.env.note_on(),
                EnvelopeEvent::GateOff => self.env.note_off(),
                EnvelopeEvent::Retrigger => self.env.trigger(),
            }
        }
    }

    pub fn render(&mut self, params: &AdsrParams, out: &mut [u16]) {
        self.apply_events();
        self.env.render(params, out);
    }
}
