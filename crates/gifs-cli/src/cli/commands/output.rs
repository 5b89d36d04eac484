//! Result printing shared by the import commands.

use anyhow::Result;
use gifs_core::ResultSlot;

/// One table line per slot, or a JSON array with `--json`.
pub(crate) fn print_slots(slots: &[ResultSlot], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(slots)?);
        return Ok(());
    }
    println!("{:<6} {:<9} {}", "INDEX", "STATUS", "RESULT");
    for (i, slot) in slots.iter().enumerate() {
        println!("{:<6} {:<9} {}", i, status(slot), detail(slot));
    }
    Ok(())
}

fn status(slot: &ResultSlot) -> &'static str {
    if slot.is_imported() {
        "imported"
    } else {
        "failed"
    }
}

fn detail(slot: &ResultSlot) -> String {
    match slot {
        ResultSlot::Imported(media) if !media.page.is_empty() => media.page.clone(),
        ResultSlot::Imported(_) => "-".to_string(),
        ResultSlot::Failed(f) => f.to_string(),
    }
}

/// Err when any slot failed, so the process exits non-zero.
pub(crate) fn ensure_all_imported(slots: &[ResultSlot]) -> Result<()> {
    let failed = slots.iter().filter(|s| !s.is_imported()).count();
    if failed > 0 {
        anyhow::bail!("{} of {} import(s) failed", failed, slots.len());
    }
    Ok(())
}
