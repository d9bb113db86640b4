use text_selection::{lift_selection, Selection};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Selection walkthrough\n");

    // Click at 2:1, then shift-click further down
    let selection = Selection::new(2, 1, 2, 10);
    println!("Shift-click:  {} {} range {}", selection, selection.direction(), selection.range());

    // Shift-click above the anchor: the caret crosses it
    let selection = selection.with_caret_at(1, 1);
    println!("Extend up:    {} {} range {}", selection, selection.direction(), selection.range());

    // Collapse back onto the anchor
    let collapsed = selection.with_caret_at(2, 1);
    println!("Collapse:     {} {} empty={}", collapsed, collapsed.direction(), collapsed.is_empty());

    // Round trip through the plain wire form
    let json = serde_json::to_string(&selection)?;
    println!("\nSerialized:   {}", json);

    let value: serde_json::Value = serde_json::from_str(&json)?;
    let lifted = lift_selection(&value)?;
    println!("Lifted:       {} equal={}", lifted, lifted == selection);

    Ok(())
}
