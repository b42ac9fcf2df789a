//! Demonstrate option resolution and matching

use range_picker::date::{parse_date, today};
use range_picker::range::resolve;
use range_picker::{DateRangePicker, OptionCatalog, PartialRange, PickerConfig};

fn main() {
    let now = today();
    let catalog = OptionCatalog::default();

    println!("=== Quick Options ({}) ===\n", now);

    for option in &catalog {
        if option.is_custom() {
            println!("  {:<14} (custom range)", option.label);
        } else {
            println!("  {:<14} {}", option.label, resolve(option, now));
        }
    }

    println!("\n=== Matching ===\n");

    let inputs = vec![
        ("today-7", "today"),
        ("today-30", ""),
        ("2024-03-05", "2024-03-10"),
        ("today", "today-3"),
    ];

    for (start, end) in inputs {
        let start_date = parse_date(start, now);
        let end_date = parse_date(end, now);
        match (start_date, end_date) {
            (Ok(start_date), Ok(end_date)) => {
                let mut picker =
                    DateRangePicker::new(&PickerConfig::default(), PartialRange::default(), now);
                let event = picker.confirm_custom(start_date, end_date, now);
                println!("  {:?} .. {:?}", start, end);
                println!("    Range: {}", event.range);
                println!("    Shown: {}", event.display);
            }
            (Err(e), _) | (_, Err(e)) => println!("  Error: {}", e),
        }
        println!();
    }
}
