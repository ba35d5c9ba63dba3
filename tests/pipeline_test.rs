//! Integration tests for the gridfill pipeline.
//!
//! These tests run the full load → interpolate → export sequence over
//! temporary files and assert on the bytes written out.

mod common;

use common::{config, write_input};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

use gridfill::{pipeline, GridfillError};

#[test]
fn fills_center_cell_with_orthogonal_mean() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, "in.csv", "1,2,3\n4,nan,6\n7,8,9\n");
    let output = dir.path().join("out.csv");

    pipeline::run(&config(false), &input, &output).unwrap();

    let content = std::fs::read_to_string(&output).unwrap();
    assert_eq!(content, "1.0,2.0,3.0\n4.0,5.0,6.0\n7.0,8.0,9.0\n");
}

#[test]
fn diagonal_mode_changes_asymmetric_result() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, "in.csv", "nan,1\n2,4\n");

    let ortho_out = dir.path().join("ortho.csv");
    pipeline::run(&config(false), &input, &ortho_out).unwrap();
    let ortho = std::fs::read_to_string(&ortho_out).unwrap();
    assert_eq!(ortho, "1.5,1.0\n2.0,4.0\n");

    let diag_out = dir.path().join("diag.csv");
    pipeline::run(&config(true), &input, &diag_out).unwrap();
    let diag = std::fs::read_to_string(&diag_out).unwrap();
    // (0,0) now averages 1, 2 and the diagonal 4
    assert_eq!(diag, "2.3333333,1.0\n2.0,4.0\n");
    assert_ne!(ortho, diag);
}

#[test]
fn in_place_propagation_feeds_later_cells() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, "in.csv", "nan,nan\n1,3\n");
    let output = dir.path().join("out.csv");

    pipeline::run(&config(false), &input, &output).unwrap();

    // (0,0) fills to 1.0 first; (0,1) then averages that fill with 3.0
    let content = std::fs::read_to_string(&output).unwrap();
    assert_eq!(content, "1.0,2.0\n1.0,3.0\n");
}

#[test]
fn complete_table_is_a_noop() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, "in.csv", "1.5,2.25\n3.0,4.125\n");
    let output = dir.path().join("out.csv");

    pipeline::run(&config(false), &input, &output).unwrap();

    let content = std::fs::read_to_string(&output).unwrap();
    assert_eq!(content, "1.5,2.25\n3.0,4.125\n");
}

#[test]
fn repeated_runs_are_deterministic() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, "in.csv", "nan,1,nan\n2,nan,3\nnan,4,nan\n");

    let out_a = dir.path().join("a.csv");
    let out_b = dir.path().join("b.csv");
    pipeline::run(&config(true), &input, &out_a).unwrap();
    pipeline::run(&config(true), &input, &out_b).unwrap();

    assert_eq!(
        std::fs::read_to_string(&out_a).unwrap(),
        std::fs::read_to_string(&out_b).unwrap()
    );
}

#[test]
fn export_rounds_to_configured_decimals() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, "in.csv", "1.23456789,2.0\n");
    let output = dir.path().join("out.csv");

    pipeline::run(&config(false), &input, &output).unwrap();

    let content = std::fs::read_to_string(&output).unwrap();
    assert_eq!(content, "1.2345679,2.0\n");
}

#[test]
fn round_trip_preserves_values() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, "in.csv", "0.1234567,9.75\n3.5,42.0\n");
    let first_out = dir.path().join("first.csv");
    let second_out = dir.path().join("second.csv");

    pipeline::run(&config(false), &input, &first_out).unwrap();
    pipeline::run(&config(false), &first_out, &second_out).unwrap();

    assert_eq!(
        std::fs::read_to_string(&first_out).unwrap(),
        std::fs::read_to_string(&second_out).unwrap()
    );
}

#[test]
fn refuses_existing_output_without_overwrite() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, "in.csv", "1,2\n3,4\n");
    let output = write_input(&dir, "out.csv", "precious");

    let result = pipeline::run(&config(false), &input, &output);
    assert!(matches!(result, Err(GridfillError::FileExists { .. })));
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "precious");
}

#[test]
fn overwrite_replaces_existing_output() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, "in.csv", "1,2\n3,4\n");
    let output = write_input(&dir, "out.csv", "precious");

    let mut config = config(false);
    config.output.overwrite = true;
    pipeline::run(&config, &input, &output).unwrap();

    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "1.0,2.0\n3.0,4.0\n"
    );
}

#[test]
fn missing_input_fails_before_processing() {
    let dir = tempdir().unwrap();
    let result = pipeline::run(
        &config(false),
        &dir.path().join("absent.csv"),
        &dir.path().join("out.csv"),
    );
    assert!(matches!(result, Err(GridfillError::NotFound { .. })));
}

#[test]
fn unresolvable_cell_aborts_without_output() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, "in.csv", "nan\n");
    let output = dir.path().join("out.csv");

    let result = pipeline::run(&config(false), &input, &output);
    assert!(matches!(
        result,
        Err(GridfillError::UnresolvableCell { row: 0, col: 0 })
    ));
    assert!(!output.exists());
}

#[test]
fn non_numeric_input_fails() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, "in.csv", "1,2\n3,oops\n");
    let output = dir.path().join("out.csv");

    let result = pipeline::run(&config(false), &input, &output);
    assert!(matches!(result, Err(GridfillError::NonNumeric { .. })));
}

#[test]
fn empty_input_fails() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, "in.csv", "");
    let output = dir.path().join("out.csv");

    let result = pipeline::run(&config(false), &input, &output);
    assert!(matches!(result, Err(GridfillError::EmptyData)));
}

#[test]
fn custom_decimals_apply_end_to_end() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, "in.csv", "nan,1\n2,4\n");
    let output = dir.path().join("out.csv");

    let mut config = config(true);
    config.output.decimals = 2;
    pipeline::run(&config, &input, &output).unwrap();

    // mean of 1, 2, 4 rounded to two places
    let content = std::fs::read_to_string(&output).unwrap();
    assert_eq!(content, "2.33,1.0\n2.0,4.0\n");
}
