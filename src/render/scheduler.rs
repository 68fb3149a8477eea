//! Frame-Scheduling: entscheidet, wann die Render-Szene neu gebaut und ob
//! nach einem Frame ein weiterer angefordert wird.

use crate::shared::RedrawMode;

/// Verwaltet die ausstehende Frame-Anforderung.
///
/// `OnDemand` meldet nur dann Arbeit, wenn sich die beobachtete Revision seit
/// dem letzten gezeichneten Frame geändert hat. `Continuous` fordert nach
/// jedem Frame bedingungslos den nächsten an.
#[derive(Debug, Clone)]
pub struct FrameScheduler {
    mode: RedrawMode,
    pending: bool,
    painted_revision: Option<u64>,
}

impl FrameScheduler {
    /// Erstellt einen Scheduler; der erste Frame ist immer ausstehend.
    pub fn new(mode: RedrawMode) -> Self {
        Self {
            mode,
            pending: true,
            painted_revision: None,
        }
    }

    /// Fordert einen Frame an.
    pub fn request(&mut self) {
        self.pending = true;
    }

    /// Storniert eine ausstehende Anforderung.
    ///
    /// Idempotent: ohne ausstehenden Frame passiert nichts. Gibt zurück,
    /// ob tatsächlich etwas storniert wurde.
    pub fn cancel(&mut self) -> bool {
        std::mem::replace(&mut self.pending, false)
    }

    /// Meldet die aktuelle Zustands-Revision; bei Änderung wird ein Frame angefordert.
    pub fn observe(&mut self, revision: u64) {
        if self.painted_revision != Some(revision) {
            self.request();
        }
    }

    /// Beginnt einen Frame: beobachtet die Revision und gibt zurück, ob die
    /// Szene neu gebaut werden muss.
    pub fn begin_frame(&mut self, revision: u64) -> bool {
        self.observe(revision);
        self.pending
    }

    /// Meldet einen synchron gezeichneten Frame.
    ///
    /// Storniert die ausstehende Anforderung (kein doppeltes Zeichnen) und
    /// re-armiert im `Continuous`-Modus sofort den nächsten Frame.
    pub fn frame_painted(&mut self, revision: u64) {
        self.cancel();
        self.painted_revision = Some(revision);
        if self.mode == RedrawMode::Continuous {
            self.request();
        }
    }

    /// Gibt `true` zurück, wenn ein weiterer Frame angefordert werden soll.
    pub fn wants_frame(&self) -> bool {
        self.pending
    }
}
