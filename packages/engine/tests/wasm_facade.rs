#![cfg(target_arch = "wasm32")]

use sandfall_engine::{solve_json, SandCave};
use wasm_bindgen_test::*;

const CANONICAL: &str = "498,4 -> 498,6 -> 496,6\n503,4 -> 502,4 -> 502,9 -> 494,9\n";

#[wasm_bindgen_test]
fn solve_json_returns_both_parts() {
    let json = solve_json(CANONICAL).unwrap();
    assert_eq!(json, r#"{"part1":24,"part2":93}"#);
}

#[wasm_bindgen_test]
fn bad_input_is_an_error() {
    assert!(solve_json("1,1 -> 2,2").is_err());
    assert!(SandCave::from_input("nope").is_err());
}

#[wasm_bindgen_test]
fn floored_cave_pours_to_the_source() {
    let mut cave = SandCave::from_input_floored(CANONICAL).unwrap();
    assert_eq!(cave.pour_until_source_blocked(), 93);
    assert!(cave.last_report_json().is_some());
}
