use jet_core::pairing::WorkUnitInputs;
use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ISO dates are always ten characters wide.
const DATE_WIDTH: usize = 10;

/// Table of paired work units: DATE | L2T_LSTE | L2T_STARS.
pub fn print_inputs_table(units: &[WorkUnitInputs]) {
    let lste: Vec<String> = units
        .iter()
        .map(|u| u.l2t_lste.display().to_string())
        .collect();
    let lste_width = lste
        .iter()
        .map(String::len)
        .max()
        .unwrap_or(0)
        .max("L2T_LSTE".len());

    println!("{:DATE_WIDTH$}  {:lste_width$}  L2T_STARS", "DATE", "L2T_LSTE");
    println!(
        "{}  {}  {}",
        "-".repeat(DATE_WIDTH),
        "-".repeat(lste_width),
        "-".repeat("L2T_STARS".len())
    );
    for (unit, lste) in units.iter().zip(&lste) {
        println!(
            "{:DATE_WIDTH$}  {:lste_width$}  {}",
            unit.date_utc.to_string(),
            lste,
            unit.l2t_stars.display()
        );
    }
}

/// Per-date completion table: DATE | STATUS (done/pending).
pub fn print_status_table<'a>(dates: impl IntoIterator<Item = (&'a str, bool)>) {
    println!("{:DATE_WIDTH$}  STATUS", "DATE");
    println!("{}  {}", "-".repeat(DATE_WIDTH), "-".repeat("STATUS".len()));
    for (date, done) in dates {
        println!(
            "{date:DATE_WIDTH$}  {}",
            if done { "done" } else { "pending" }
        );
    }
}
