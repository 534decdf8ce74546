use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use fretforge::fingering::Fingering;
use fretforge::scorer::Analysis;
use fretforge::shapes::KnownShape;

pub fn ranking(results: &[(String, Fingering, Analysis)]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Chord").add_attribute(Attribute::Bold),
        Cell::new("Shape"),
        Cell::new("Total").fg(Color::Cyan),
        Cell::new("Fing"),
        Cell::new("Span"),
        Cell::new("Pos"),
        Cell::new("Barre").fg(Color::Red),
        Cell::new("Var"),
        Cell::new("Inv").fg(Color::Red),
        Cell::new("Assignment"),
    ]);

    for i in 2..=8 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (name, fingering, analysis) in results {
        let mut row = vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(fingering.to_string()),
        ];
        match analysis.details() {
            Some(d) => row.extend([
                Cell::new(format!("{:.1}", d.total)).fg(Color::Cyan),
                Cell::new(format!("{:.0}", d.finger_count)),
                Cell::new(format!("{:.0}", d.fret_span)),
                Cell::new(format!("{:.1}", d.position)),
                Cell::new(format!("{:.0}", d.barre_base + d.barre_length)).fg(Color::Red),
                Cell::new(format!("{:.1}", d.stretch_variance)),
                Cell::new(format!("{:.0}", d.fret_inversion)).fg(Color::Red),
                Cell::new(d.assignment.summary()),
            ]),
            None => {
                row.push(Cell::new("IMPOSSIBLE").fg(Color::Red));
                row.extend((0..6).map(|_| Cell::new("-")));
                row.push(Cell::new(&analysis.report));
            }
        }
        table.add_row(row);
    }
    println!("\n{}", table);
}

pub fn shapes(rows: &[(KnownShape, Analysis)]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Known Shape").add_attribute(Attribute::Bold),
        Cell::new("Fingering"),
        Cell::new("Assignment"),
        Cell::new("Score").fg(Color::Cyan),
    ]);
    if let Some(col) = table.column_mut(3) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for (shape, analysis) in rows {
        table.add_row(vec![
            Cell::new(shape.to_string()).add_attribute(Attribute::Bold),
            Cell::new(shape.fingering().to_string()),
            Cell::new(shape.assignment().summary()),
            Cell::new(format!("{:.1}", analysis.score)).fg(Color::Cyan),
        ]);
    }
    println!("\n{}", table);
}
