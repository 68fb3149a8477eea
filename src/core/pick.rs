//! Hit-Test für Kontrollpunkte (Pick-Radius in Pixeln).

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Welcher Punkt wird gegriffen, wenn mehrere im Pick-Radius liegen?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickPolicy {
    /// Erster Treffer in Listenreihenfolge (nicht zwingend der nächste)
    #[default]
    FirstMatch,
    /// Nächster Treffer; bei Gleichstand gewinnt der kleinere Index
    Nearest,
}

/// Ergebnis eines Hit-Tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMatch {
    /// Index des Punkts in der Kontrollpunktliste
    pub index: usize,
    /// Euklidische Distanz zur Zeigerposition
    pub distance: f64,
}

/// Sucht einen Kontrollpunkt mit Distanz ≤ `radius` (inklusive) zu `pos`.
pub fn pick_point(
    points: &[DVec2],
    pos: DVec2,
    radius: f64,
    policy: PickPolicy,
) -> Option<PointMatch> {
    let mut hits = points
        .iter()
        .enumerate()
        .map(|(index, p)| PointMatch {
            index,
            distance: p.distance(pos),
        })
        .filter(|hit| hit.distance <= radius);

    match policy {
        PickPolicy::FirstMatch => hits.next(),
        PickPolicy::Nearest => hits.fold(None, |best: Option<PointMatch>, hit| match best {
            Some(b) if b.distance <= hit.distance => Some(b),
            _ => Some(hit),
        }),
    }
}
