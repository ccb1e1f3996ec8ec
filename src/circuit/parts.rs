//! The fixed pieces and slots of the series-circuit board

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Battery,
    Resistor,
    Led,
    Wire,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentDescriptor {
    pub id: &'static str,
    pub kind: ComponentKind,
    pub symbol: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotDescriptor {
    pub id: &'static str,
    /// Board position, left to right along the wire.
    pub position: (u16, u16),
    pub accepts: ComponentKind,
    pub label: &'static str,
}

pub static COMPONENTS: [ComponentDescriptor; 4] = [
    ComponentDescriptor { id: "battery1", kind: ComponentKind::Battery, symbol: "🔋", name: "Battery" },
    ComponentDescriptor { id: "resistor1", kind: ComponentKind::Resistor, symbol: "⚡", name: "Resistor" },
    ComponentDescriptor { id: "led1", kind: ComponentKind::Led, symbol: "💡", name: "LED" },
    ComponentDescriptor { id: "wire1", kind: ComponentKind::Wire, symbol: "━", name: "Wire" },
];

// Series order: power source, connection, resistance, load.
pub static SLOTS: [SlotDescriptor; 4] = [
    SlotDescriptor { id: "slot1", position: (100, 100), accepts: ComponentKind::Battery, label: "Power Source" },
    SlotDescriptor { id: "slot2", position: (200, 100), accepts: ComponentKind::Wire, label: "Connection" },
    SlotDescriptor { id: "slot3", position: (300, 100), accepts: ComponentKind::Resistor, label: "Resistance" },
    SlotDescriptor { id: "slot4", position: (400, 100), accepts: ComponentKind::Led, label: "Load" },
];

pub fn component(id: &str) -> Option<&'static ComponentDescriptor> {
    COMPONENTS.iter().find(|c| c.id == id)
}

pub fn slot(id: &str) -> Option<&'static SlotDescriptor> {
    SLOTS.iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_exactly_one_slot() {
        for c in COMPONENTS {
            assert_eq!(SLOTS.iter().filter(|s| s.accepts == c.kind).count(), 1);
        }
    }

    #[test]
    fn test_slots_ordered_left_to_right() {
        assert!(SLOTS.windows(2).all(|w| w[0].position.0 < w[1].position.0));
        assert_eq!(SLOTS[0].accepts, ComponentKind::Battery);
        assert_eq!(SLOTS[3].accepts, ComponentKind::Led);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(component("led1").map(|c| c.name), Some("LED"));
        assert_eq!(slot("slot2").map(|s| s.label), Some("Connection"));
        assert!(component("capacitor1").is_none());
        assert!(slot("slot9").is_none());
    }
}
