//! Per-device wire configuration.
//!
//! Device variants share the same engine but disagree on which header bits
//! select which groups, and even on how the header itself is laid out. A
//! [`Profile`] captures both as plain data so supporting a new variant is a
//! table, not new control flow.

/// How the leading header bitmask is laid out on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderMode {
    /// One byte; if bit 7 is set a second byte follows, extending the mask
    /// to 16 bits. Bit 7 itself never selects a group.
    Extendable,
    /// Unconditional 16-bit little-endian mask.
    Wide,
    /// No header; every table entry decodes unconditionally in order.
    None,
}

/// A sensor field group selectable by a header bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Group {
    Battery,
    Orientation,
    Thermometer,
    AirQuality,
    Hygrometer,
    W1Thermometers,
    RtdThermometers,
    TcThermometers,
    BleTags,
    SoilSensors,
    Weather,
    Barometer,
    Backup,
    Buttons,
    /// One current-monitor channel; the 1-based channel number comes from
    /// the profile table, derived from the bit position.
    AnalogChannel(u8),
    LoadCell,
    InputStatus,
}

/// Bit-to-group table and header layout for one device variant.
///
/// Entries must be sorted by ascending bit. A bit may carry more than one
/// group; its groups decode in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub header: HeaderMode,
    pub entries: &'static [(u8, Group)],
}

/// Environmental monitor: thermometer arrays, air quality, soil sensors.
pub const ENVIRONMENT: Profile = Profile {
    name: "environment",
    header: HeaderMode::Extendable,
    entries: &[
        (0, Group::Battery),
        (1, Group::Orientation),
        (2, Group::Thermometer),
        (3, Group::AirQuality),
        (4, Group::Hygrometer),
        (5, Group::W1Thermometers),
        (6, Group::RtdThermometers),
        (8, Group::BleTags),
        (9, Group::SoilSensors),
        (10, Group::TcThermometers),
    ],
};

/// Weather station: wind, rain, and an external barometer tag.
pub const WEATHER: Profile = Profile {
    name: "weather",
    header: HeaderMode::Extendable,
    entries: &[
        (0, Group::Battery),
        (1, Group::Orientation),
        (2, Group::Thermometer),
        (3, Group::Weather),
        (4, Group::Hygrometer),
        (5, Group::W1Thermometers),
        (6, Group::BleTags),
        (8, Group::Barometer),
        (9, Group::SoilSensors),
    ],
};

/// Push-button panel. One bit carries both the backup supply state and the
/// button counters.
pub const PUSH: Profile = Profile {
    name: "push",
    header: HeaderMode::Extendable,
    entries: &[
        (0, Group::Battery),
        (1, Group::Orientation),
        (2, Group::Thermometer),
        (3, Group::Backup),
        (3, Group::Buttons),
    ],
};

/// Load-cell scale.
pub const SCALE: Profile = Profile {
    name: "scale",
    header: HeaderMode::Extendable,
    entries: &[
        (0, Group::Battery),
        (1, Group::Orientation),
        (2, Group::Thermometer),
        (6, Group::LoadCell),
    ],
};

/// Four-channel current monitor. Uses the wide header; bits 5..=8 select
/// analog channels 1..=4.
pub const CURRENT: Profile = Profile {
    name: "current",
    header: HeaderMode::Wide,
    entries: &[
        (0, Group::Battery),
        (1, Group::Orientation),
        (2, Group::Thermometer),
        (3, Group::W1Thermometers),
        (4, Group::Backup),
        (5, Group::AnalogChannel(1)),
        (6, Group::AnalogChannel(2)),
        (7, Group::AnalogChannel(3)),
        (8, Group::AnalogChannel(4)),
    ],
};

/// Digital-input tracker. Sends a fixed status frame with no header.
pub const INPUT: Profile = Profile {
    name: "input",
    header: HeaderMode::None,
    entries: &[(0, Group::InputStatus)],
};

#[cfg(test)]
mod tests {
    use super::*;

    const BUILTIN: [&Profile; 6] = [&ENVIRONMENT, &WEATHER, &PUSH, &SCALE, &CURRENT, &INPUT];

    #[test]
    fn entries_sorted_by_bit() {
        for profile in BUILTIN {
            let bits: Vec<u8> = profile.entries.iter().map(|&(b, _)| b).collect();
            let mut sorted = bits.clone();
            sorted.sort_unstable();
            assert_eq!(bits, sorted, "{} table out of order", profile.name);
        }
    }

    #[test]
    fn extendable_profiles_never_assign_bit_seven() {
        for profile in BUILTIN {
            if profile.header == HeaderMode::Extendable {
                assert!(
                    profile.entries.iter().all(|&(b, _)| b != 7),
                    "{} assigns the extension bit",
                    profile.name
                );
            }
        }
    }
}
