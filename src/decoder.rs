use tracing::{debug, trace};
use typed_builder::TypedBuilder;

use crate::bytes::Cursor;
use crate::profile::{Group, HeaderMode, Profile};
use crate::record::Record;
use crate::{groups, Error, Result};

/// Header-driven payload decoder for one device profile.
///
/// Decoding is all-or-nothing: a payload either produces a complete
/// [`Record`] or an error, never a partial result. Each call owns its own
/// cursor, so a single `Decoder` may be shared across threads.
///
/// # Example
/// ```
/// use lrw_codec::{profile, Decoder};
///
/// let decoder = Decoder::builder().profile(profile::WEATHER).build();
/// let record = decoder.decode(&[0x04, 0x64, 0x00]).unwrap();
/// assert_eq!(record.thermometer, Some(Some(1.0)));
/// ```
#[derive(Debug, TypedBuilder)]
pub struct Decoder {
    profile: Profile,
    /// When true, a set header bit with no entry in the profile table is an
    /// error. The default ignores unknown bits so payloads from newer
    /// firmware still decode.
    #[builder(default = false)]
    strict: bool,
}

impl Decoder {
    /// Decode one uplink payload.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if the header selects more data than the
    /// payload carries, or [`Error::UnsupportedHeaderBit`] in strict mode.
    pub fn decode(&self, buf: &[u8]) -> Result<Record> {
        let mut cur = Cursor::new(buf);
        let mut rec = Record::default();

        if self.profile.header == HeaderMode::None {
            for &(_, group) in self.profile.entries {
                trace!(offset = cur.offset(), ?group, "decoding group");
                decode_group(group, &mut cur, &mut rec)?;
            }
            return Ok(rec);
        }

        let header = read_header(self.profile.header, &mut cur)?;
        debug!(
            profile = self.profile.name,
            header = format_args!("{header:#06x}"),
            "payload header"
        );

        for bit in 0..16u8 {
            if header & (1 << bit) == 0 {
                continue;
            }
            if self.profile.header == HeaderMode::Extendable && bit == 7 {
                // extension marker, not a selector
                continue;
            }

            let mut matched = false;
            for &(_, group) in self.profile.entries.iter().filter(|&&(b, _)| b == bit) {
                trace!(bit, offset = cur.offset(), ?group, "decoding group");
                decode_group(group, &mut cur, &mut rec)?;
                matched = true;
            }
            if !matched {
                if self.strict {
                    return Err(Error::UnsupportedHeaderBit { bit });
                }
                trace!(bit, "ignoring unknown header bit");
            }
        }

        Ok(rec)
    }
}

/// Decode one uplink payload against `profile` with default options.
///
/// # Errors
/// See [`Decoder::decode`].
pub fn decode(profile: Profile, buf: &[u8]) -> Result<Record> {
    Decoder::builder().profile(profile).build().decode(buf)
}

fn read_header(mode: HeaderMode, cur: &mut Cursor) -> Result<u16> {
    match mode {
        HeaderMode::Extendable => {
            let lo = cur.read_u8()?;
            if lo & 0x80 != 0 {
                let hi = cur.read_u8()?;
                Ok(u16::from(lo) | u16::from(hi) << 8)
            } else {
                Ok(lo.into())
            }
        }
        HeaderMode::Wide => cur.read_u16(),
        HeaderMode::None => Ok(0),
    }
}

fn decode_group(group: Group, cur: &mut Cursor, rec: &mut Record) -> Result<()> {
    match group {
        Group::Battery => rec.battery = Some(groups::battery(cur)?),
        Group::Orientation => rec.orientation = Some(groups::orientation(cur)?),
        Group::Thermometer => rec.thermometer = Some(groups::thermometer(cur)?),
        Group::AirQuality => rec.air_quality = Some(groups::air_quality(cur)?),
        Group::Hygrometer => rec.hygrometer = Some(groups::hygrometer(cur)?),
        Group::W1Thermometers => rec.w1_thermometers = Some(groups::thermometer_array(cur)?),
        Group::RtdThermometers => rec.rtd_thermometers = Some(groups::thermometer_array(cur)?),
        Group::TcThermometers => rec.tc_thermometers = Some(groups::thermometer_array(cur)?),
        Group::BleTags => rec.ble_tags = Some(groups::ble_tags(cur)?),
        Group::SoilSensors => rec.soil_sensors = Some(groups::soil_sensors(cur)?),
        Group::Weather => rec.weather = Some(groups::weather(cur)?),
        Group::Barometer => rec.barometer = Some(groups::barometer(cur)?),
        Group::Backup => rec.backup = Some(groups::backup(cur)?),
        Group::Buttons => rec.buttons = Some(groups::buttons(cur)?),
        Group::AnalogChannel(channel) => rec
            .analog_channels
            .get_or_insert_with(Vec::new)
            .push(groups::analog_channel(cur, channel)?),
        Group::LoadCell => rec.load_cell = Some(groups::load_cell(cur)?),
        Group::InputStatus => rec.status = Some(groups::input_status(cur)?),
    }
    Ok(())
}
