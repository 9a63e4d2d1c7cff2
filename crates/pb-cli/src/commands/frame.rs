use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use pb_timeline::{PlaybackSpeed, TimelineError, compile_play_playback};

pub fn run(path: &Path, index: usize, at_ms: f64, speed: PlaybackSpeed) -> Result<(), String> {
    let document = super::load_document(path)?;
    let compiled = compile_play_playback(&document, speed);

    let transition = compiled.transition(index).ok_or_else(|| {
        TimelineError::PhaseOutOfRange {
            index,
            transitions: compiled.transitions.len(),
        }
        .to_string()
    })?;
    let frame = transition.frame_at(at_ms);

    println!(
        "  {} -> {} at {:.0}ms of {:.0}ms",
        transition.from_phase_id,
        transition.to_phase_id,
        at_ms.clamp(0.0, transition.total_duration_ms()),
        transition.total_duration_ms()
    );

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Object", "X", "Y"]);
    for (id, point) in &frame.positions {
        table.add_row(vec![
            id.to_string(),
            format!("{:.1}", point.x),
            format!("{:.1}", point.y),
        ]);
    }
    println!("{table}");

    match &frame.ball_owner_object_id {
        Some(owner) => println!("  Ball: {owner}"),
        None => println!("  Ball: nobody"),
    }

    Ok(())
}
