use pb_core::template;

pub fn run(id: Option<&str>, list: bool) -> Result<(), String> {
    if list {
        for id in template::ids() {
            println!("{id}");
        }
        return Ok(());
    }

    let Some(id) = id else {
        return Err("specify a template id or pass --list".into());
    };
    let document = template::by_id(id).ok_or_else(|| {
        format!(
            "unknown template \"{id}\". Available: {}",
            template::ids().join(", ")
        )
    })?;

    let json = serde_json::to_string_pretty(&document)
        .map_err(|e| format!("JSON serialization error: {e}"))?;
    println!("{json}");

    Ok(())
}
