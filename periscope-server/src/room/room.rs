use periscope_core::ConnectionId;
use std::collections::HashSet;

/// One live signaling session: the host that created it, the join secret, and the
/// explicit broadcast group. The host is a member of its own group.
#[derive(Debug)]
pub struct Room {
    pub host: ConnectionId,
    pub password: Option<String>,
    pub members: HashSet<ConnectionId>,
}

impl Room {
    pub fn new(host: ConnectionId, password: Option<String>) -> Self {
        let mut members = HashSet::new();
        members.insert(host);

        Self {
            host,
            password,
            members,
        }
    }

    pub fn has_viewers(&self) -> bool {
        self.members.iter().any(|m| *m != self.host)
    }
}
