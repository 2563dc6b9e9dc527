use hs_model::{HeatModelParams, SimOptions, simulate_room_temperature};
use hs_results::{HEAT_CONTENT, HEAT_LOSS, ResultFrame, T_ROOM, write_csv};

#[test]
fn simulated_frame_exports_csv() {
    let t_out = [4.0, 3.0, 2.0, 1.0];
    let gain = [0.0, 5.0, 5.0, 5.0];
    let out = simulate_room_temperature(
        &t_out,
        &gain,
        20.0,
        HeatModelParams::new(0.2, 10.0),
        &SimOptions::expanded(),
    )
    .unwrap();

    let frame = ResultFrame::from_output(&out);
    let mut buf = Vec::new();
    write_csv(&frame, &mut buf).unwrap();

    let mut rdr = csv::Reader::from_reader(buf.as_slice());
    let headers: Vec<String> = rdr.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, vec![T_ROOM, HEAT_LOSS, HEAT_CONTENT]);

    let rows: Vec<csv::StringRecord> = rdr.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), t_out.len());
    let first_t: f64 = rows[0][0].parse().unwrap();
    assert_eq!(first_t, 20.0);
    for (row, t) in rows.iter().zip(&out.room_temp) {
        let parsed: f64 = row[0].parse().unwrap();
        assert_eq!(parsed, *t);
    }
}

#[test]
fn plain_run_exports_single_column() {
    let out = simulate_room_temperature(
        &[0.0, 0.0],
        &[0.0, 4.0],
        0.0,
        HeatModelParams::new(0.0, 2.0),
        &SimOptions::default(),
    )
    .unwrap();

    let mut buf = Vec::new();
    write_csv(&ResultFrame::from_output(&out), &mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "t_room\n0\n2\n");
}
