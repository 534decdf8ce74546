use fretforge::assignment::{assign, assign_pressed, Finger, Impossibility};
use fretforge::fingering::Fingering;
use rstest::rstest;

fn fingering(frets: &[i32]) -> Fingering {
    Fingering::from_frets(frets).expect("valid fingering")
}

// --- BARRE SHAPES ---
#[test]
fn test_f_major_barre_on_first_fret() {
    let a = assign(&fingering(&[1, 3, 3, 2, 1, 1])).expect("F major is playable");

    for s in [0, 4, 5] {
        let p = a.get(s).unwrap();
        assert_eq!((p.fret, p.finger), (1, Finger::Index), "string {}", s + 1);
    }
    assert_eq!(a.get(3).unwrap().finger, Finger::Middle);
    assert_eq!(a.get(1).unwrap().finger, Finger::Ring);
    assert_eq!(a.get(2).unwrap().finger, Finger::Pinky);
    assert_eq!(a.summary(), "S1:F1(1) S2:F3(3) S3:F3(4) S4:F2(2) S5:F1(1) S6:F1(1)");
}

#[test]
fn test_a_shape_cluster_above_lower_note_keeps_index_low() {
    // x02220 moved up: index on fret 3, three notes at fret 5.
    let a = assign(&fingering(&[-1, 3, 5, 5, 5, -1])).unwrap();
    assert_eq!(a.get(1).unwrap().finger, Finger::Index);
    assert_eq!(a.get(2).unwrap().finger, Finger::Middle);
    assert_eq!(a.get(3).unwrap().finger, Finger::Ring);
    assert_eq!(a.get(4).unwrap().finger, Finger::Pinky);
}

// --- VERDICTS ---
#[rstest]
#[case(&[3, 4, 5, 6, 5, 5], Impossibility::InsufficientFingers { required: 6 })]
#[case(&[1, 2, 3, 4, 5, -1], Impossibility::InsufficientFingers { required: 5 })]
#[case(&[5, 5, 5, 4, 5, 5], Impossibility::BlockedByBarre { string: 3, fret: 4, barre_fret: 5 })]
#[case(&[7, 7, 7, 7, 6, -1], Impossibility::BlockedByBarre { string: 4, fret: 6, barre_fret: 7 })]
fn test_impossible_shapes(#[case] frets: &[i32], #[case] expected: Impossibility) {
    assert_eq!(assign(&fingering(frets)), Err(expected));
}

#[rstest]
#[case(&[-1, 3, 2, 0, 1, 0], 3)] // C major
#[case(&[0, 2, 2, 1, 0, 0], 3)] // E major
#[case(&[-1, -1, 0, 2, 3, 2], 3)] // D major
#[case(&[3, 5, 5, 4, 3, 3], 6)] // G barre
#[case(&[0, 0, 0, 0, 0, 0], 0)]
fn test_assignment_covers_every_pressed_string(#[case] frets: &[i32], #[case] pressed: usize) {
    let f = fingering(frets);
    let a = assign(&f).expect("playable");
    assert_eq!(a.len(), pressed);
    for (string, fret) in f.pressed() {
        assert_eq!(a.get(string).map(|p| p.fret), Some(fret));
    }
}

#[test]
fn test_barre_fingers_share_a_fret() {
    let shapes: [&[i32]; 4] = [
        &[1, 3, 3, 2, 1, 1],
        &[-1, 1, 3, 3, 3, 1],
        &[3, 5, 5, 4, 3, 3],
        &[-1, 5, 7, 7, 7, 5],
    ];
    for frets in shapes {
        let a = assign(&fingering(frets)).unwrap();
        for (finger, (fret, _)) in a.finger_usage() {
            for (_, p) in a.iter().filter(|(_, p)| p.finger == finger) {
                assert_eq!(p.fret, fret, "{:?} on {:?}", finger, frets);
            }
        }
    }
}

// --- OVERRIDES ---
#[test]
fn test_known_shape_bypasses_heuristic() {
    let rock_g = fingering(&[3, 2, 0, 0, 3, 3]);
    let by_table = assign(&rock_g).unwrap();
    let by_heuristic = assign_pressed(&rock_g.pressed()).unwrap();

    assert_eq!(by_table.get(4).unwrap().finger, Finger::Pinky);
    assert_eq!(by_table.get(5).unwrap().finger, Finger::Ring);
    assert_eq!(by_heuristic.get(4).unwrap().finger, Finger::Ring);
    assert_ne!(by_table, by_heuristic);
}
