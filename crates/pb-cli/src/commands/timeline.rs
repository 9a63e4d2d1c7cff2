use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use pb_timeline::{PlaybackSpeed, Transition, compile_play_playback};

pub fn run(path: &Path, speed: PlaybackSpeed) -> Result<(), String> {
    let document = super::load_document(path)?;
    let compiled = compile_play_playback(&document, speed);

    if compiled.transitions.is_empty() {
        println!("  Single-phase play: nothing to animate.");
        return Ok(());
    }

    println!(
        "  {} {}",
        "Timeline".bold(),
        format!("({speed} speed)").dimmed()
    );
    println!();

    for transition in &compiled.transitions {
        print_transition(transition);
    }

    println!(
        "  {}, {:.0}ms total",
        super::plural(compiled.transitions.len(), "transition"),
        compiled.total_duration_ms()
    );

    Ok(())
}

fn print_transition(transition: &Transition) {
    println!(
        "  {} {} -> {} {}",
        format!("[{}]", transition.index).bold(),
        transition.from_phase_id,
        transition.to_phase_id,
        format!("{:.0}ms", transition.total_duration_ms()).dimmed()
    );

    if transition.schedule.actions.is_empty() {
        println!("  {}", "(dwell: no actions)".dimmed());
        println!();
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Action", "Type", "Trigger", "Object", "Start", "End"]);

    for action in &transition.schedule.actions {
        let object = action
            .from_object_id
            .as_ref()
            .map_or_else(|| "-".to_string(), ToString::to_string);
        table.add_row(vec![
            action.action_id.to_string(),
            action.kind.to_string(),
            action.trigger.to_string(),
            object,
            format!("{:.0}", action.start_ms),
            format!("{:.0}", action.end_ms),
        ]);
    }
    println!("{table}");

    if let Some(flip) = &transition.ownership_flip {
        println!(
            "  ball: {} -> {} at {:.0}ms",
            flip.from, flip.to, flip.at_ms
        );
    }
    println!();
}
