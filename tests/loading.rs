mod common;

use std::io::Write;

use sitescope::{DashboardConfig, Dataset, FilterState, Interval, Level, LoadError, Metric, Source, filter_rows, render};

#[test]
fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(common::SITES.as_bytes()).unwrap();

    let dataset = Dataset::read_csv(file.path(), &DashboardConfig::default()).unwrap();
    assert_eq!(dataset.len(), 5);
    assert_eq!(dataset.schema().levels().count(), Level::COUNT);
}

#[test]
fn loads_from_bytes() {
    let dataset = Dataset::load(Source::Bytes(common::SITES.as_bytes()), &DashboardConfig::default()).unwrap();
    assert_eq!(dataset.len(), 5);
}

#[test]
fn non_numeric_cell_becomes_zero_without_dropping_the_row() {
    let dataset = common::sites();
    assert_eq!(dataset.len(), 5);
    let chang_khlan = &dataset.records()[4];
    assert_eq!(chang_khlan.key(Level::Subsubregion), Some("Chang Khlan"));
    assert_eq!(chang_khlan.metric(Metric::NetAdd), 0.0);
    assert_eq!(chang_khlan.metric(Metric::PotentialScore), 70.0);
}

#[test]
fn bounds_and_sliders_follow_the_data() {
    let dataset = common::sites();
    assert_eq!(dataset.bounds(Metric::NetAdd), Interval::new(-2.0, 6.0));
    assert_eq!(dataset.bounds(Metric::Aging), Interval::new(0.0, 30.0));

    let sliders = dataset.sliders();
    assert_eq!(sliders.iter().map(|s| s.metric).collect::<Vec<_>>(), Metric::ranged().to_vec());
    let utilization = sliders.iter().find(|s| s.metric == Metric::PortUtilization).unwrap();
    assert_eq!((utilization.min, utilization.max), (0, 100));
}

#[test]
fn header_only_table_is_empty() {
    let dataset = common::with_rows(&[]);
    assert!(dataset.is_empty());
    assert_eq!(dataset.bounds(Metric::PortUse), Interval::new(0.0, 0.0));
    assert!(dataset.column_values(Level::Region).is_empty());
}

#[test]
fn blank_lines_and_empty_rows_are_not_records() {
    let blank_row = ",".repeat(20);
    let csv = format!(
        "{header}\n{first}\n\n{blank_row}\n{second}\n\n\n",
        header = common::HEADER,
        first = "Bangkok,Bang Rak,Si Lom,HB-001,13.7279,100.5241,4,82,75,31,28,30,9,0,48,1200,L2-A,64,16,500,1000",
        second = "Chiang Mai,Mueang,Si Phum,HB-101,18.7950,98.9860,0,55,12,18,41,30,11,13,6,400,L2-D,48,42,200,300",
    );
    let dataset = common::load(&csv);

    assert_eq!(dataset.len(), 2);
    let zones: Vec<&str> = dataset.records().iter().filter_map(|r| r.key(Level::Subsubregion)).collect();
    assert_eq!(zones, vec!["Si Lom", "Si Phum"]);
    assert!(dataset.records().iter().all(|r| r.latitude() != 0.0));
}

#[test]
fn all_blank_body_renders_empty_scene() {
    let csv = format!("{}\n{}\n\n", common::HEADER, ",".repeat(20));
    let dataset = common::load(&csv);
    assert!(dataset.is_empty());

    let scene = render(&filter_rows(&dataset, &FilterState::initial(&dataset)), &DashboardConfig::default());
    assert!(scene.empty);
    assert!(scene.points.is_empty());
}

#[test]
fn missing_required_column_is_a_load_error() {
    let csv = "Province,District,Sub-district,Latitude,Longitude\nNorth,N1,A,13.0,100.0\n";
    match Dataset::load(Source::Text(csv), &DashboardConfig::default()) {
        Err(LoadError::MissingColumns(missing)) => {
            assert!(missing.contains(&"Potential Score".to_string()));
            assert!(missing.contains(&"L2_Aging".to_string()));
            assert!(!missing.contains(&"Market Share AIS (%)".to_string()));
        }
        other => panic!("expected missing columns, got {other:?}"),
    }
}

#[test]
fn unreadable_source_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Dataset::read_csv(&dir.path().join("absent.csv"), &DashboardConfig::default()).unwrap_err();
    assert!(matches!(err, LoadError::Unreadable { .. }));
}

#[test]
fn config_file_remaps_columns() {
    let mut config_file = tempfile::NamedTempFile::new().unwrap();
    write!(config_file, r#"{{
        "columns": {{
            "levels": {{ "region": "Region", "subregion": "Area", "subsubregion": "Zone" }},
            "latitude": "lat",
            "longitude": "lon"
        }}
    }}"#).unwrap();
    let config = DashboardConfig::read_from_file(config_file.path()).unwrap();

    let csv = "\
Region,Area,Zone,lat,lon,Net Add,Potential Score,%Port_Utilize,Market Share True (%),L2_Aging,Port Use
East,E1,Z1,12.0,101.0,1,50,20,10,3,7
";
    let dataset = Dataset::load(Source::Text(csv), &config).unwrap();
    assert_eq!(dataset.records()[0].key(Level::Region), Some("East"));
    assert_eq!(dataset.records()[0].latitude(), 12.0);
    assert!(!dataset.schema().has_level(Level::CellBlock));
}
