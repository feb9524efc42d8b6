/// Identifies the load task currently allowed to publish into a slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LoadTicket(u64);

#[derive(Clone, Debug, PartialEq)]
pub enum PlaybackState<B> {
    Idle,
    Loading { url: String },
    Ready(B),
    Failed { url: String, reason: String },
    Cancelled,
}

/// Shared audio-buffer slot with a single writer.
///
/// Every `begin_load` issues a fresh ticket and revokes the previous one, so a
/// superseded or cancelled task can finish without clobbering newer state.
#[derive(Debug)]
pub struct PlaybackSlot<B> {
    state: PlaybackState<B>,
    current: Option<LoadTicket>,
    next_id: u64,
}

impl<B> Default for PlaybackSlot<B> {
    fn default() -> Self {
        Self {
            state: PlaybackState::Idle,
            current: None,
            next_id: 0,
        }
    }
}

impl<B> PlaybackSlot<B> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self, url: &str) -> LoadTicket {
        self.next_id += 1;
        let ticket = LoadTicket(self.next_id);
        self.current = Some(ticket);
        self.state = PlaybackState::Loading {
            url: url.to_string(),
        };
        ticket
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.current == Some(ticket)
    }

    /// Store a decoded buffer. Rejected (returns false) for stale tickets.
    pub fn publish(&mut self, ticket: LoadTicket, buffer: B) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.current = None;
        self.state = PlaybackState::Ready(buffer);
        true
    }

    /// Record a load failure. Rejected (returns false) for stale tickets.
    pub fn fail(&mut self, ticket: LoadTicket, reason: impl Into<String>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        let url = match &self.state {
            PlaybackState::Loading { url } => url.clone(),
            _ => String::new(),
        };
        self.current = None;
        self.state = PlaybackState::Failed {
            url,
            reason: reason.into(),
        };
        true
    }

    /// Revoke the in-flight ticket, if any. Returns true if one was revoked.
    pub fn cancel(&mut self) -> bool {
        match self.current.take() {
            Some(_) => {
                self.state = PlaybackState::Cancelled;
                true
            }
            None => false,
        }
    }

    pub fn state(&self) -> &PlaybackState<B> {
        &self.state
    }

    pub fn buffer(&self) -> Option<&B> {
        match &self.state {
            PlaybackState::Ready(b) => Some(b),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.current.is_some()
    }
}
