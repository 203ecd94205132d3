//! Scenario tests for the schedule parser.

use super::*;
use crate::domain::{Cell, RawRow, Route};
use crate::row;

fn codes(routes: &[Route]) -> Vec<&str> {
    routes.iter().map(|r| r.code.as_str()).collect()
}

/// A sheet laid out the way the transport office publishes it.
fn published_sheet() -> Vec<RawRow> {
    vec![
        row!["DIU Transport Schedule"],
        row![],
        row!["Route No", "Start Time", "Route Name", "Route Details", "Departure from DSC"],
        row![
            "R1",
            0.2916666666666667,
            "Dhanmondi",
            "Dhanmondi - Sobhanbag - DSC",
            0.5416666666666666
        ],
        row!["", 0.3333333333333333, "", "", 0.7083333333333334],
        row!["", "", "", "", 0.7083333333333334],
        row!["R2", "7.00am", "Mirpur", "Mirpur 10 - Savar - DSC", "1:00 pm"],
        row!["", "9:30", "", "", "4.20pm"],
        row![],
        row!["Friday Schedule"],
        row!["Route No", "", "", "Route Details"],
        row!["F1", 8.5, "Dhanmondi", "Dhanmondi - DSC", 13.0],
        row!["", "", "", "", "5:30 to 6:00 PM"],
        row!["R2", "8:00", "Mirpur", "", ""],
    ]
}

#[test]
fn empty_input() {
    let set = parse_schedule(&[]);
    assert!(set.regular.is_empty());
    assert!(set.friday.is_empty());
    assert_eq!(set.metadata.heading, "");
    assert_eq!(set.metadata.last_update, "");
}

#[test]
fn friday_only_scenario() {
    let rows = vec![
        row!["Friday Schedule"],
        row![],
        row!["R1", "08:00", "Main Route", "Via X", 0.75],
        row!["", "09:00", "", "", 0.8],
    ];
    let set = parse_schedule(&rows);

    assert!(set.regular.is_empty());
    assert_eq!(set.friday.len(), 1);

    let r1 = &set.friday[0];
    assert_eq!(r1.code, "R1");
    assert_eq!(r1.name, "Main Route");
    assert_eq!(r1.details, "Via X");
    assert_eq!(r1.display, "R1 — Main Route");
    assert_eq!(r1.to_dsc, vec!["8:00 AM", "9:00 AM"]);
    assert_eq!(r1.from_dsc, vec!["6:00 PM", "7:12 PM"]);
    assert!(r1.is_friday);
}

#[test]
fn published_sheet_regular_partition() {
    let set = parse_schedule(&published_sheet());
    assert_eq!(codes(&set.regular), vec!["R1", "R2"]);

    let r1 = &set.regular[0];
    assert_eq!(r1.name, "Dhanmondi");
    assert_eq!(r1.details, "Dhanmondi - Sobhanbag - DSC");
    assert_eq!(r1.to_dsc, vec!["7:00 AM", "8:00 AM"]);
    // 5:00 PM appears twice in the sheet
    assert_eq!(r1.from_dsc, vec!["1:00 PM", "5:00 PM"]);
    assert!(!r1.is_friday);

    let r2 = &set.regular[1];
    assert_eq!(r2.to_dsc, vec!["7:00 AM", "9:30 AM"]);
    assert_eq!(r2.from_dsc, vec!["1:00 PM", "4:20 PM"]);
}

#[test]
fn published_sheet_friday_partition() {
    let set = parse_schedule(&published_sheet());
    assert_eq!(codes(&set.friday), vec!["F1", "R2"]);

    let f1 = &set.friday[0];
    assert_eq!(f1.to_dsc, vec!["8:30 AM"]);
    assert_eq!(f1.from_dsc, vec!["1:00 PM", "5:30 to 6:00 PM"]);

    // Collected in the Friday section, so flagged even with an R code
    let r2 = &set.friday[1];
    assert!(r2.is_friday);
    assert_eq!(r2.to_dsc, vec!["8:00 AM"]);
    assert!(r2.from_dsc.is_empty());
}

#[test]
fn heading_from_a1() {
    let set = parse_schedule(&published_sheet());
    assert_eq!(set.metadata.heading, "DIU Transport Schedule");
}

#[test]
fn numeric_heading_uses_display_form() {
    let set = parse_schedule(&[row![2026.0]]);
    assert_eq!(set.metadata.heading, "2026");
}

#[test]
fn f_code_before_marker_stays_regular() {
    let rows = vec![row!["F9", "7:00", "Early", "", ""]];
    let set = parse_schedule(&rows);
    assert_eq!(codes(&set.regular), vec!["F9"]);
    assert!(set.friday.is_empty());
    // Badge still follows the code convention
    assert!(set.regular[0].is_friday);
}

#[test]
fn friday_mode_is_sticky_across_headers() {
    let rows = vec![
        row!["Friday Schedule"],
        row!["Route No"],
        row!["R1", "7:00"],
        row!["Route No"],
        row!["R2", "8:00"],
    ];
    let set = parse_schedule(&rows);
    assert!(set.regular.is_empty());
    assert_eq!(codes(&set.friday), vec!["R1", "R2"]);
}

#[test]
fn header_closes_current_route() {
    let rows = vec![
        row!["R1", "7:00"],
        row!["", "", "", "Route Details"],
        row!["", "8:00"],
    ];
    let set = parse_schedule(&rows);
    assert_eq!(set.regular[0].to_dsc, vec!["7:00 AM"]);
}

#[test]
fn friday_marker_closes_current_route() {
    let rows = vec![
        row!["R1", "7:00"],
        row!["Friday Schedule"],
        row!["", "8:00"],
    ];
    let set = parse_schedule(&rows);
    assert_eq!(set.regular[0].to_dsc, vec!["7:00 AM"]);
    assert!(set.friday.is_empty());
}

#[test]
fn continuation_without_open_route_is_dropped() {
    let rows = vec![row!["", "7:00", "", "", "5:00 PM"], row!["R1", "8:00"]];
    let set = parse_schedule(&rows);
    assert_eq!(set.regular.len(), 1);
    assert_eq!(set.regular[0].to_dsc, vec!["8:00 AM"]);
}

#[test]
fn unrecognized_row_keeps_current_route_open() {
    let rows = vec![
        row!["R1", "7:00"],
        row!["* via flyover", "7:15"],
        row!["", "7:30"],
    ];
    let set = parse_schedule(&rows);
    assert_eq!(set.regular.len(), 1);
    // The note row adds nothing but does not close R1
    assert_eq!(set.regular[0].to_dsc, vec!["7:00 AM", "7:30 AM"]);
}

#[test]
fn blank_rows_do_not_close_current_route() {
    let rows = vec![row!["R1", "7:00"], row![], row!["", "", "", "", ""], row!["", "7:30"]];
    let set = parse_schedule(&rows);
    assert_eq!(set.regular[0].to_dsc, vec!["7:00 AM", "7:30 AM"]);
}

#[test]
fn repeated_code_opens_a_second_route() {
    let rows = vec![row!["R1", "7:00"], row!["R1", "8:00"]];
    let set = parse_schedule(&rows);
    assert_eq!(codes(&set.regular), vec!["R1", "R1"]);
}

#[test]
fn rows_shorter_than_five_cells() {
    let rows = vec![row!["R3"], row!["", "6:45"]];
    let set = parse_schedule(&rows);
    let r3 = &set.regular[0];
    assert_eq!(r3.name, "");
    assert_eq!(r3.display, "R3");
    assert_eq!(r3.to_dsc, vec!["6:45 AM"]);
    assert!(r3.from_dsc.is_empty());
}

#[test]
fn extra_columns_are_ignored() {
    let rows = vec![row!["R1", "7:00", "Main", "Via X", "5:00 PM", "driver: Karim", 0.9]];
    let set = parse_schedule(&rows);
    assert_eq!(set.regular[0].to_dsc, vec!["7:00 AM"]);
    assert_eq!(set.regular[0].from_dsc, vec!["5:00 PM"]);
}

#[test]
fn parsing_is_idempotent() {
    let rows = published_sheet();
    assert_eq!(parse_schedule(&rows), parse_schedule(&rows));
}

#[test]
fn parses_json_grid() {
    let json = r#"[
        ["Transport"],
        ["Route No", null, null, "Route Details"],
        ["R7", 0.25, "Uttara", "Uttara - DSC", 0.5],
        [null, 0.2916666666666667, null, null, null]
    ]"#;
    let rows: Vec<RawRow> = serde_json::from_str(json).unwrap();
    let set = parse_schedule(&rows);
    assert_eq!(set.regular[0].to_dsc, vec!["6:00 AM", "7:00 AM"]);
    assert_eq!(set.regular[0].from_dsc, vec!["12:00 PM"]);
    assert_eq!(set.metadata.heading, "Transport");
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn cell() -> impl Strategy<Value = Cell> {
        prop_oneof![
            Just(Cell::Empty),
            (0.0f64..30.0).prop_map(Cell::Number),
            "[RF][0-9]{1,2}".prop_map(Cell::Text),
            Just(Cell::text("Friday Schedule")),
            Just(Cell::text("Route No")),
            "[a-z :.]{0,8}".prop_map(Cell::Text),
        ]
    }

    fn grid() -> impl Strategy<Value = Vec<RawRow>> {
        proptest::collection::vec(
            proptest::collection::vec(cell(), 0..6).prop_map(RawRow::new),
            0..30,
        )
    }

    proptest! {
        /// Parsing any grid succeeds and every route has a code
        #[test]
        fn total_over_any_grid(rows in grid()) {
            let set = parse_schedule(&rows);
            for route in set.regular.iter().chain(set.friday.iter()) {
                prop_assert!(!route.code.is_empty());
            }
        }

        /// A route is in the Friday list iff its opening row came after a marker
        #[test]
        fn partition_follows_marker(rows in grid()) {
            let first_marker = rows
                .iter()
                .position(|r| classify_row(r) == RowKind::FridayMarker)
                .unwrap_or(rows.len());
            let openings_before = rows[..first_marker]
                .iter()
                .filter(|r| matches!(classify_row(r), RowKind::RouteOpening(_)))
                .count();
            let openings_after = rows[first_marker..]
                .iter()
                .filter(|r| matches!(classify_row(r), RowKind::RouteOpening(_)))
                .count();

            let set = parse_schedule(&rows);
            prop_assert_eq!(set.regular.len(), openings_before);
            prop_assert_eq!(set.friday.len(), openings_after);
            prop_assert!(set.friday.iter().all(|r| r.is_friday));
        }

        /// No route keeps a repeated time
        #[test]
        fn times_are_unique(rows in grid()) {
            let set = parse_schedule(&rows);
            for route in set.regular.iter().chain(set.friday.iter()) {
                let mut to = route.to_dsc.clone();
                to.sort();
                to.dedup();
                prop_assert_eq!(to.len(), route.to_dsc.len());

                let mut from = route.from_dsc.clone();
                from.sort();
                from.dedup();
                prop_assert_eq!(from.len(), route.from_dsc.len());
            }
        }
    }
}
