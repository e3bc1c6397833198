//! Decoded payload model.
//!
//! A [`Record`] holds at most one instance of each sensor group. Groups the
//! payload header did not select stay `None` and are omitted when the record
//! is serialized; fields a present group reported as invalid serialize as
//! `null`.

use serde::Serialize;

/// One fully decoded uplink payload.
#[derive(Serialize, Debug, Default, Clone, PartialEq)]
pub struct Record {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battery: Option<Battery>,
    /// Device orientation code from the accelerometer, 1 through 6.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Option<u8>>,
    /// Internal thermometer temperature in degrees Celsius.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thermometer: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub air_quality: Option<AirQuality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hygrometer: Option<Hygrometer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub w1_thermometers: Option<Vec<Option<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtd_thermometers: Option<Vec<Option<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tc_thermometers: Option<Vec<Option<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ble_tags: Option<Vec<BleTag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soil_sensors: Option<Vec<SoilSensor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<Weather>,
    /// Barometric pressure in kilopascals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barometer: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup: Option<Backup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buttons: Option<Vec<Button>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analog_channels: Option<Vec<AnalogChannel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_cell: Option<Vec<LoadCellChannel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InputStatus>,
}

/// Primary cell voltages and load current.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Battery {
    /// Open-circuit voltage in volts.
    pub voltage_rest: Option<f64>,
    /// Voltage under transmit load in volts.
    pub voltage_load: Option<f64>,
    /// Load current in milliamps.
    pub current_load: Option<u8>,
}

/// Indoor air quality cluster readings, all in centi-units on the wire.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AirQuality {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub altitude: Option<f64>,
    pub co2: Option<f64>,
    pub illuminance: Option<f64>,
    pub pressure: Option<f64>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Hygrometer {
    /// Temperature in degrees Celsius.
    pub temperature: Option<f64>,
    /// Relative humidity in percent, half-percent resolution.
    pub humidity: Option<f64>,
}

/// One tag from a BLE beacon scan.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BleTag {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SoilSensor {
    pub temperature: Option<f64>,
    /// Raw moisture reading, unscaled.
    pub moisture: Option<u16>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Weather {
    /// Wind speed in meters per second.
    pub wind_speed: Option<f64>,
    /// Wind direction in degrees.
    pub wind_direction: Option<u16>,
    /// Rainfall in millimeters.
    pub rainfall: Option<f64>,
}

/// Backup power supply state.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Backup {
    /// External line voltage in volts.
    pub line_voltage: Option<f64>,
    /// Backup battery voltage in volts.
    pub battery_voltage: Option<f64>,
    pub state: BackupState,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BackupState {
    Connected,
    Disconnected,
}

/// Press/hold counters and last-transmission events for one button channel.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Button {
    /// Channel label: `x` for the built-in button, `1` through `4` for
    /// external ones.
    pub channel: char,
    pub press_count: u16,
    pub hold_count: u16,
    pub press_event: bool,
    pub hold_event: bool,
}

/// Averaged measurements for one current-monitor channel.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AnalogChannel {
    /// 1-based channel number, derived from the header bit position.
    pub channel: u8,
    pub mean_avg: Option<f64>,
    pub rms_avg: Option<f64>,
}

/// One load-cell bridge channel.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LoadCellChannel {
    pub channel: &'static str,
    pub active: bool,
    /// Raw ADC conversion, unscaled; tare and span live server-side.
    pub raw: Option<i32>,
}

/// Fixed status frame from the digital-input device.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct InputStatus {
    /// Seconds since epoch with millisecond fraction.
    pub timestamp: f64,
    pub states: InputStates,
    pub events: InputEvents,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct InputStates {
    pub orientation: Option<u8>,
    pub int_temperature: Option<f64>,
    pub ext_temperature: Option<f64>,
    pub ext_humidity: Option<f64>,
    /// Logical state per input 1..=8. `None` means the input is not
    /// reported by the hardware, distinct from present-and-inactive.
    pub inputs: [Option<bool>; 8],
    pub line_present: bool,
    pub line_voltage: Option<f64>,
    pub backup_voltage: Option<f64>,
    pub batt_voltage_rest: Option<f64>,
    pub batt_voltage_load: Option<f64>,
    pub batt_current_load: Option<f64>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct InputEvents {
    pub device_boot: u16,
    pub device_tilt: u16,
    /// Edge counters per input 1..=8.
    pub inputs: [InputEdges; 8],
}

#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InputEdges {
    pub activations: u8,
    pub deactivations: u8,
}
