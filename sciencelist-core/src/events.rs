/// Domain notifications delivered by the host's event bus.
///
/// Each variant corresponds to one host-side subscription; the addon reacts
/// to all of them through a single dispatch point rather than one handler
/// per event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    VesselModified,
    VesselSelected,
    EditorShipModified,
    GameStateSaved,
    PartPurchased,
    ResearchCompleted { successful: bool },
    ScienceChanged,
    ScienceReceived,
    VesselRenamed,
    FacilityUpgraded,
}

/// What the lifecycle controller does in response to a [`HostEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventAction {
    /// The set of entities shown in the window may have changed; flag the
    /// filtered list for a rate-limited refresh.
    RefreshFilter,
    /// The experiment catalog or its completion status may have changed;
    /// schedule a coalesced update. A full rebuild replaces the cached
    /// catalog, an incremental update only re-reads completion state.
    ScheduleUpdate { full_rebuild: bool },
    /// No reaction.
    Ignore,
}

impl HostEvent {
    /// Classifies the event. Purchase, research and facility events invalidate
    /// the catalog itself and therefore demand a full rebuild; the remaining
    /// update-worthy events only touch completion status.
    pub fn action(self) -> EventAction {
        match self {
            HostEvent::VesselModified
            | HostEvent::VesselSelected
            | HostEvent::EditorShipModified => EventAction::RefreshFilter,
            HostEvent::PartPurchased | HostEvent::FacilityUpgraded => {
                EventAction::ScheduleUpdate { full_rebuild: true }
            }
            HostEvent::ResearchCompleted { successful } => {
                if successful {
                    EventAction::ScheduleUpdate { full_rebuild: true }
                } else {
                    EventAction::Ignore
                }
            }
            HostEvent::GameStateSaved
            | HostEvent::ScienceChanged
            | HostEvent::ScienceReceived
            | HostEvent::VesselRenamed => EventAction::ScheduleUpdate {
                full_rebuild: false,
            },
        }
    }
}
