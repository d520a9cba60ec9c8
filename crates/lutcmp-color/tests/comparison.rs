//! End-to-end comparison tests.

use approx::assert_abs_diff_eq;
use lutcmp_color::lut::{Extrapolation, LutError, TableKind, cube};
use lutcmp_color::primaries::ColorSpace;
use lutcmp_color::{ColorError, Comparison, LutStage, build_comparison_table};

const IDENTITY_1D: &str = "TITLE \"identity\"\nLUT_1D_SIZE 2\n0 0 0\n1 1 1\n";

const IDENTITY_3D: &str = "LUT_3D_SIZE 2\n\
    0 0 0\n1 0 0\n0 1 0\n1 1 0\n\
    0 0 1\n1 0 1\n0 1 1\n1 1 1\n";

/// 1D table that halves every code value, followed by an identity cube.
const HALF_THEN_CUBE: &str = "LUT_1D_SIZE 2\nLUT_3D_SIZE 2\n\
    0 0 0\n0.5 0.5 0.5\n\
    0 0 0\n1 0 0\n0 1 0\n1 1 0\n\
    0 0 1\n1 0 1\n0 1 1\n1 1 1\n";

#[test]
fn identity_1d_tracks_display_curve() {
    let doc = cube::parse(IDENTITY_1D).unwrap();
    for space in ColorSpace::ALL {
        let table = build_comparison_table(&doc, space.name()).unwrap();
        assert_eq!(table.len(), 20);
        assert_eq!(table.color_space(), space);
        assert_eq!(table.table(), TableKind::OneD);

        for (row, expected) in table.iter().zip((1..=96).step_by(5)) {
            assert_eq!(row.exposure_pct, expected);
            assert_eq!(row.color_space, space);
            assert_abs_diff_eq!(row.lut_pct, row.display_pct, epsilon = 1e-6);
        }
    }
}

#[test]
fn reference_columns() {
    let doc = cube::parse(IDENTITY_1D).unwrap();
    let table = build_comparison_table(&doc, "S-Gamut3").unwrap();
    let rows = table.rows();

    // 1% sits on the linear toe; its code decodes through the log branch.
    assert_abs_diff_eq!(rows[0].log_pct, 1.037584, epsilon = 1e-9);
    assert_abs_diff_eq!(rows[0].display_pct, 10.190607099277046, epsilon = 1e-9);

    assert_abs_diff_eq!(rows[19].log_pct, 64.91730496344683, epsilon = 1e-9);
    assert_abs_diff_eq!(rows[19].display_pct, 97.99957828569115, epsilon = 1e-9);
}

#[test]
fn identity_3d_tracks_display_curve() {
    let doc = cube::parse(IDENTITY_3D).unwrap();
    let table = Comparison::new(ColorSpace::SGamut3Cine)
        .with_extrapolation(Extrapolation::Clamp)
        .build(&doc)
        .unwrap();
    assert_eq!(table.table(), TableKind::ThreeD);
    for row in &table {
        assert_abs_diff_eq!(row.lut_pct, row.display_pct, epsilon = 1e-6);
    }
}

#[test]
fn stages_select_tables() {
    let doc = cube::parse(HALF_THEN_CUBE).unwrap();
    let space = ColorSpace::SGamut3;

    let auto = Comparison::new(space).build(&doc).unwrap();
    let one_d = Comparison::new(space).with_stage(LutStage::OneD).build(&doc).unwrap();
    let three_d = Comparison::new(space).with_stage(LutStage::ThreeD).build(&doc).unwrap();
    let chained = Comparison::new(space).with_stage(LutStage::Chained).build(&doc).unwrap();

    assert_eq!(auto.table(), TableKind::OneD);
    assert_eq!(auto.rows(), one_d.rows());
    assert_eq!(chained.table(), TableKind::Both);

    // The cube alone is identity; chaining it after the shaper is the shaper.
    for row in &three_d {
        assert_abs_diff_eq!(row.lut_pct, row.display_pct, epsilon = 1e-6);
    }
    for (a, b) in one_d.iter().zip(&chained) {
        assert_abs_diff_eq!(a.lut_pct, b.lut_pct, epsilon = 1e-9);
        assert!(a.lut_pct < a.display_pct);
    }
}

#[test]
fn missing_table_fails_whole_table() {
    let doc = cube::parse(IDENTITY_1D).unwrap();
    let err = Comparison::new(ColorSpace::SGamut3)
        .with_stage(LutStage::ThreeD)
        .build(&doc)
        .unwrap_err();
    assert!(matches!(err, ColorError::Lut(LutError::NoSuchTable(TableKind::ThreeD))));
}

#[test]
fn unsupported_space_is_rejected() {
    let doc = cube::parse(IDENTITY_1D).unwrap();
    let err = build_comparison_table(&doc, "Rec.2020").unwrap_err();
    assert!(matches!(err, ColorError::UnsupportedColorSpace(_)));
    assert!(err.to_string().contains("Rec.2020"));
}

#[test]
fn lut_output_is_clamped() {
    // Every code maps to full scale.
    let doc = cube::parse("LUT_1D_SIZE 2\n1 1 1\n1 1 1\n").unwrap();
    let table = build_comparison_table(&doc, "S-Gamut3").unwrap();
    assert!(table.iter().all(|row| row.lut_pct <= 100.0 && row.lut_pct >= 0.0));
}

#[test]
fn serializes_to_json() {
    let doc = cube::parse(IDENTITY_1D).unwrap();
    let table = build_comparison_table(&doc, "S-Gamut3.Cine").unwrap();
    let json = serde_json::to_value(&table).unwrap();

    assert_eq!(json["color_space"], "S-Gamut3.Cine");
    assert_eq!(json["table"], "1D");
    assert_eq!(json["rows"].as_array().map(Vec::len), Some(20));
    assert_eq!(json["rows"][1]["exposure_pct"], 6);
}
