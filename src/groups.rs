//! Field decoders, one per sensor group.
//!
//! Each decoder consumes exactly its group's wire layout from the shared
//! cursor and returns a typed sub-record. Sentinel checks and fixed-point
//! scaling go through [`crate::sentinel`]; nothing here reads past the
//! cursor's bounds checks.

use crate::bytes::Cursor;
use crate::record::{
    AirQuality, AnalogChannel, Backup, BackupState, Battery, BleTag, Button, Hygrometer,
    InputEdges, InputEvents, InputStates, InputStatus, LoadCellChannel, SoilSensor, Weather,
};
use crate::sentinel::{norm_i16, norm_i32, norm_u16, norm_u32, norm_u8};
use crate::sentinel::{I16_NONE, I32_NONE, U16_NONE, U32_NONE, U8_NONE};
use crate::Result;

pub(crate) fn battery(cur: &mut Cursor) -> Result<Battery> {
    let rest = cur.read_u16()?;
    let load = cur.read_u16()?;
    let current = cur.read_u8()?;
    Ok(Battery {
        voltage_rest: norm_u16(rest, U16_NONE, 1000.0),
        voltage_load: norm_u16(load, U16_NONE, 1000.0),
        current_load: (current != U8_NONE).then_some(current),
    })
}

pub(crate) fn orientation(cur: &mut Cursor) -> Result<Option<u8>> {
    let raw = cur.read_u8()?;
    Ok((raw != U8_NONE).then_some(raw))
}

pub(crate) fn thermometer(cur: &mut Cursor) -> Result<Option<f64>> {
    Ok(norm_i16(cur.read_i16()?, I16_NONE, 100.0))
}

pub(crate) fn air_quality(cur: &mut Cursor) -> Result<AirQuality> {
    Ok(AirQuality {
        temperature: norm_i16(cur.read_i16()?, I16_NONE, 100.0),
        humidity: norm_u16(cur.read_u16()?, U16_NONE, 100.0),
        altitude: norm_u16(cur.read_u16()?, U16_NONE, 100.0),
        co2: norm_u16(cur.read_u16()?, U16_NONE, 100.0),
        illuminance: norm_u16(cur.read_u16()?, U16_NONE, 100.0),
        pressure: norm_u16(cur.read_u16()?, U16_NONE, 100.0),
    })
}

pub(crate) fn hygrometer(cur: &mut Cursor) -> Result<Hygrometer> {
    Ok(Hygrometer {
        temperature: norm_i16(cur.read_i16()?, I16_NONE, 100.0),
        humidity: norm_u8(cur.read_u8()?, U8_NONE, 2.0),
    })
}

/// Counted array of centidegree probe temperatures, shared by the W1, RTD,
/// and thermocouple groups.
pub(crate) fn thermometer_array(cur: &mut Cursor) -> Result<Vec<Option<f64>>> {
    let count = cur.read_u8()?;
    let mut temps = Vec::with_capacity(count.into());
    for _ in 0..count {
        temps.push(norm_i16(cur.read_i16()?, I16_NONE, 100.0));
    }
    Ok(temps)
}

pub(crate) fn ble_tags(cur: &mut Cursor) -> Result<Vec<BleTag>> {
    let count = cur.read_u8()?;
    let mut tags = Vec::with_capacity(count.into());
    for _ in 0..count {
        tags.push(BleTag {
            temperature: norm_i16(cur.read_i16()?, I16_NONE, 100.0),
            humidity: norm_u8(cur.read_u8()?, U8_NONE, 2.0),
        });
    }
    Ok(tags)
}

pub(crate) fn soil_sensors(cur: &mut Cursor) -> Result<Vec<SoilSensor>> {
    let count = cur.read_u8()?;
    let mut sensors = Vec::with_capacity(count.into());
    for _ in 0..count {
        let temperature = norm_i16(cur.read_i16()?, I16_NONE, 100.0);
        let moisture = cur.read_u16()?;
        sensors.push(SoilSensor {
            temperature,
            moisture: (moisture != U16_NONE).then_some(moisture),
        });
    }
    Ok(sensors)
}

pub(crate) fn weather(cur: &mut Cursor) -> Result<Weather> {
    let wind_speed = norm_u16(cur.read_u16()?, U16_NONE, 100.0);
    let wind_direction = cur.read_u16()?;
    let rainfall = norm_u16(cur.read_u16()?, U16_NONE, 100.0);
    Ok(Weather {
        wind_speed,
        wind_direction: (wind_direction != U16_NONE).then_some(wind_direction),
        rainfall,
    })
}

pub(crate) fn barometer(cur: &mut Cursor) -> Result<Option<f64>> {
    Ok(norm_u32(cur.read_u32()?, U32_NONE, 1000.0))
}

pub(crate) fn backup(cur: &mut Cursor) -> Result<Backup> {
    let line = cur.read_u16()?;
    let batt = cur.read_u16()?;
    let state = if cur.read_u8()? != 0 {
        BackupState::Connected
    } else {
        BackupState::Disconnected
    };
    Ok(Backup {
        line_voltage: norm_u16(line, U16_NONE, 1000.0),
        battery_voltage: norm_u16(batt, U16_NONE, 1000.0),
        state,
    })
}

const BUTTON_CHANNELS: [char; 5] = ['x', '1', '2', '3', '4'];

/// Five button channels of press/hold counters followed by a 16-bit event
/// word, two bits per channel in channel order from bit 0.
pub(crate) fn buttons(cur: &mut Cursor) -> Result<Vec<Button>> {
    let mut counts = [(0u16, 0u16); 5];
    for c in &mut counts {
        c.0 = cur.read_u16()?;
        c.1 = cur.read_u16()?;
    }
    let events = cur.read_u16()?;

    Ok(BUTTON_CHANNELS
        .iter()
        .zip(counts)
        .enumerate()
        .map(|(i, (&channel, (press_count, hold_count)))| Button {
            channel,
            press_count,
            hold_count,
            press_event: events & (1 << (2 * i)) != 0,
            hold_event: events & (1 << (2 * i + 1)) != 0,
        })
        .collect())
}

pub(crate) fn analog_channel(cur: &mut Cursor, channel: u8) -> Result<AnalogChannel> {
    Ok(AnalogChannel {
        channel,
        mean_avg: norm_i32(cur.read_i32()?, I32_NONE, 1000.0),
        rms_avg: norm_i32(cur.read_i32()?, I32_NONE, 1000.0),
    })
}

const LOAD_CELL_CHANNELS: [&str; 4] = ["a1", "a2", "b1", "b2"];

/// Active-channel bitmask followed by all four raw bridge conversions. Raw
/// words are transmitted even for inactive channels.
pub(crate) fn load_cell(cur: &mut Cursor) -> Result<Vec<LoadCellChannel>> {
    let mask = cur.read_u8()?;
    let mut channels = Vec::with_capacity(LOAD_CELL_CHANNELS.len());
    for (i, &channel) in LOAD_CELL_CHANNELS.iter().enumerate() {
        let raw = cur.read_i32()?;
        channels.push(LoadCellChannel {
            channel,
            active: mask & (1 << i) != 0,
            raw: (raw != I32_NONE).then_some(raw),
        });
    }
    Ok(channels)
}

/// Fixed status frame from the digital-input device.
///
/// Input states in the flags word are wired active-low: a set state bit
/// means the input is inactive. Bits 8..=15 mark inputs the hardware does
/// not report, forcing the state to `None` regardless of the raw bit.
pub(crate) fn input_status(cur: &mut Cursor) -> Result<InputStatus> {
    let seconds = cur.read_u32()?;
    let millis = cur.read_u16()?;
    let flags = cur.read_u32()?;

    let orientation = cur.read_u8()?;
    let int_temperature = norm_i16(cur.read_i16()?, I16_NONE, 100.0);
    let ext_temperature = norm_i16(cur.read_i16()?, I16_NONE, 100.0);
    let ext_humidity = norm_u8(cur.read_u8()?, U8_NONE, 2.0);

    let mut inputs = [None; 8];
    for (k, input) in inputs.iter_mut().enumerate() {
        let reported = flags & (1 << (k + 8)) == 0;
        *input = reported.then(|| flags & (1 << k) == 0);
    }
    let line_present = flags & (1 << 30) != 0;

    let line_voltage = norm_u16(cur.read_u16()?, U16_NONE, 1000.0);
    let backup_voltage = norm_u16(cur.read_u16()?, U16_NONE, 1000.0);
    let batt_voltage_rest = norm_u16(cur.read_u16()?, U16_NONE, 1000.0);
    let batt_voltage_load = norm_u16(cur.read_u16()?, U16_NONE, 1000.0);
    let batt_current_load = norm_u16(cur.read_u16()?, U16_NONE, 1000.0);

    let device_boot = cur.read_u16()?;
    let device_tilt = cur.read_u16()?;
    let mut edges = [InputEdges::default(); 8];
    for edge in &mut edges {
        edge.deactivations = cur.read_u8()?;
        edge.activations = cur.read_u8()?;
    }

    Ok(InputStatus {
        timestamp: f64::from(seconds) + f64::from(millis) / 1000.0,
        states: InputStates {
            orientation: (orientation != 0).then_some(orientation),
            int_temperature,
            ext_temperature,
            ext_humidity,
            inputs,
            line_present,
            line_voltage,
            backup_voltage,
            batt_voltage_rest,
            batt_voltage_load,
            batt_current_load,
        },
        events: InputEvents {
            device_boot,
            device_tilt,
            inputs: edges,
        },
    })
}
