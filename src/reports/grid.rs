use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Table};
use fretforge::assignment::FingerAssignment;
use fretforge::fingering::{Fingering, StringState};

/// Chord-chart style grid: one column per string, one row per fret, finger numbers in the cells.
pub fn print_fret_grid(fingering: &Fingering, assignment: &FingerAssignment) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let mut header = vec![Cell::new("Fret").add_attribute(Attribute::Bold)];
    header.extend(fingering.strings().iter().map(|s| {
        let label = match s {
            StringState::Muted => "x".to_string(),
            StringState::Open => "o".to_string(),
            StringState::Fret(_) => " ".to_string(),
        };
        Cell::new(label).set_alignment(CellAlignment::Center)
    }));
    table.set_header(header);

    let frets = assignment.frets();
    let (Some(&low), Some(&high)) = (frets.iter().min(), frets.iter().max()) else {
        println!("{}", table);
        return;
    };

    for fret in low..=high {
        let mut row = vec![Cell::new(fret).set_alignment(CellAlignment::Right)];
        for string in 0..fingering.strings().len() {
            let label = match assignment.get(string) {
                Some(p) if p.fret == fret => p.finger.number().to_string(),
                _ => "|".to_string(),
            };
            row.push(Cell::new(label).set_alignment(CellAlignment::Center));
        }
        table.add_row(row);
    }
    println!("{}", table);
}
