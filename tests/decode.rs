use lrw_codec::record::{BackupState, Record};
use lrw_codec::{decode, profile, Decoder, Error, Profile};
use serde_json::json;

fn payload(s: &str) -> Vec<u8> {
    hex::decode(s).expect("fixture hex should be valid")
}

#[test]
fn weather_station_payload() {
    // bits 0..=3: battery, orientation, thermometer, wind/rain
    let dat = payload("0fb20c620c320229090d02b4009600");
    let rec = decode(profile::WEATHER, &dat).unwrap();

    let battery = rec.battery.unwrap();
    assert_eq!(battery.voltage_rest, Some(3.25));
    assert_eq!(battery.voltage_load, Some(3.17));
    assert_eq!(battery.current_load, Some(50));

    assert_eq!(rec.orientation, Some(Some(2)));
    assert_eq!(rec.thermometer, Some(Some(23.45)));

    let weather = rec.weather.unwrap();
    assert_eq!(weather.wind_speed, Some(5.25));
    assert_eq!(weather.wind_direction, Some(180));
    assert_eq!(weather.rainfall, Some(1.5));

    assert!(rec.hygrometer.is_none());
    assert!(rec.barometer.is_none());
}

#[test]
fn push_panel_backup_and_buttons_share_a_bit() {
    let dat = payload(concat!(
        "08",         // header: bit 3
        "e02e100e01", // backup: 12 V line, 3.6 V battery, connected
        "02000100",   // button x: 2 presses, 1 hold
        "01000000",   // button 1
        "00000000",   // button 2
        "00000000",   // button 3
        "05000200",   // button 4
        "0102",       // events: x press, 4 hold
    ));
    let rec = decode(profile::PUSH, &dat).unwrap();

    let backup = rec.backup.unwrap();
    assert_eq!(backup.line_voltage, Some(12.0));
    assert_eq!(backup.battery_voltage, Some(3.6));
    assert_eq!(backup.state, BackupState::Connected);

    let buttons = rec.buttons.unwrap();
    assert_eq!(buttons.len(), 5);
    assert_eq!(buttons[0].channel, 'x');
    assert_eq!(buttons[0].press_count, 2);
    assert!(buttons[0].press_event);
    assert!(!buttons[0].hold_event);
    assert_eq!(buttons[4].channel, '4');
    assert_eq!(buttons[4].hold_count, 2);
    assert!(buttons[4].hold_event);
    assert!(!buttons[1].press_event);
}

#[test]
fn environment_soil_sensors_behind_extended_header() {
    let dat = payload(concat!(
        "8002",     // extended header: bit 9
        "02",       // two sensors
        "64002301", // 1.0 C, moisture 291
        "ff7fffff", // both invalid
    ));
    let rec = decode(profile::ENVIRONMENT, &dat).unwrap();

    let sensors = rec.soil_sensors.unwrap();
    assert_eq!(sensors.len(), 2);
    assert_eq!(sensors[0].temperature, Some(1.0));
    assert_eq!(sensors[0].moisture, Some(291));
    assert_eq!(sensors[1].temperature, None);
    assert_eq!(sensors[1].moisture, None);
}

#[test]
fn input_tracker_status_frame() {
    let dat = payload(concat!(
        "00f15365", // seconds
        "fa00",     // milliseconds
        "01040040", // flags: input 1 inactive, input 3 unreported, line present
        "03",       // orientation
        "c409",     // internal temperature 25.00
        "ff7f",     // external temperature invalid
        "64",       // external humidity 50.0
        "c05d",     // line voltage 24 V
        "740e",     // backup voltage 3.7 V
        "e40c",     // battery rest 3.3 V
        "b20c",     // battery load 3.25 V
        "3200",     // load current 0.05 A
        "0100",     // boot events
        "0000",     // tilt events
        "0203",     // input 1 edges: 2 deactivations, 3 activations
        "0000000000000000000000000000",
    ));
    let rec = decode(profile::INPUT, &dat).unwrap();

    let status = rec.status.unwrap();
    assert_eq!(status.timestamp, 1_700_000_000.25);

    let states = &status.states;
    assert_eq!(states.orientation, Some(3));
    assert_eq!(states.int_temperature, Some(25.0));
    assert_eq!(states.ext_temperature, None);
    assert_eq!(states.ext_humidity, Some(50.0));
    assert_eq!(
        states.inputs,
        [
            Some(false), // active-low: flag bit set means inactive
            Some(true),
            None, // unreported, not the same as inactive
            Some(true),
            Some(true),
            Some(true),
            Some(true),
            Some(true),
        ]
    );
    assert!(states.line_present);
    assert_eq!(states.line_voltage, Some(24.0));
    assert_eq!(states.backup_voltage, Some(3.7));
    assert_eq!(states.batt_voltage_rest, Some(3.3));
    assert_eq!(states.batt_voltage_load, Some(3.25));
    assert_eq!(states.batt_current_load, Some(0.05));

    let events = &status.events;
    assert_eq!(events.device_boot, 1);
    assert_eq!(events.device_tilt, 0);
    assert_eq!(events.inputs[0].deactivations, 2);
    assert_eq!(events.inputs[0].activations, 3);
    assert_eq!(events.inputs[7].activations, 0);
}

#[test]
fn every_proper_prefix_fails_out_of_range() {
    let fixtures: [(Profile, Vec<u8>); 3] = [
        (profile::WEATHER, payload("0fb20c620c320229090d02b4009600")),
        (
            profile::ENVIRONMENT,
            payload("80020264002301ff7fffff"),
        ),
        (
            profile::SCALE,
            payload("400540e20100ffffff7fffffffff00000000"),
        ),
    ];

    for (profile, dat) in &fixtures {
        for end in 0..dat.len() {
            let err = decode(*profile, &dat[..end]).unwrap_err();
            assert!(
                matches!(err, Error::OutOfRange { .. }),
                "{} prefix of {end} bytes should be out of range",
                profile.name
            );
        }
    }
}

#[test]
fn serialization_omits_absent_groups_and_nulls_absent_fields() {
    let rec = decode(profile::ENVIRONMENT, &[0x01, 0xff, 0xff, 0xff, 0xff, 0xff]).unwrap();
    assert_eq!(
        serde_json::to_value(&rec).unwrap(),
        json!({
            "battery": {
                "voltage_rest": null,
                "voltage_load": null,
                "current_load": null,
            }
        })
    );

    let rec = decode(profile::ENVIRONMENT, &[0x06, 0xff, 0x64, 0x00]).unwrap();
    assert_eq!(
        serde_json::to_value(&rec).unwrap(),
        json!({
            "orientation": null,
            "thermometer": 1.0,
        })
    );
}

#[test]
fn load_cell_serialization() {
    let dat = payload("400540e20100ffffff7fffffffff00000000");
    let rec = decode(profile::SCALE, &dat).unwrap();

    assert_eq!(
        serde_json::to_value(&rec).unwrap(),
        json!({
            "load_cell": [
                {"channel": "a1", "active": true, "raw": 123_456},
                {"channel": "a2", "active": false, "raw": null},
                {"channel": "b1", "active": true, "raw": -1},
                {"channel": "b2", "active": false, "raw": 0},
            ]
        })
    );
}

#[test]
fn shared_decoder_across_threads() {
    let decoder = Decoder::builder().profile(profile::WEATHER).build();
    let dat = payload("0fb20c620c320229090d02b4009600");
    let expected = decoder.decode(&dat).unwrap();

    let records: Vec<Record> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| decoder.decode(&dat))).collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap().unwrap())
            .collect()
    });
    for rec in records {
        assert_eq!(rec, expected);
    }
}
